//! Command-line front end: scans one URL and prints the JSON report.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use keyword_frequency::{Options, ParseMode, Report, Scanner, DEFAULT_CHUNK_SIZE};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "keyword_frequency",
    about = "Count how often a page's meta keywords appear in its visible text",
    version,
    long_about = None
)]
struct Args {
    /// Page to scan (http or https)
    url: String,

    /// Bytes read from the response body per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Buffer the whole body and parse it once instead of chunk by chunk
    #[arg(long)]
    whole_body: bool,

    /// Skip the pre-flight reachability request
    #[arg(long)]
    skip_reachability_check: bool,

    /// Keep keywords that are empty after normalization
    #[arg(long)]
    keep_empty_keywords: bool,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            chunk_size: self.chunk_size,
            parse_mode: if self.whole_body {
                ParseMode::WholeBody
            } else {
                ParseMode::Chunked
            },
            check_reachability: !self.skip_reachability_check,
            keep_empty_keywords: self.keep_empty_keywords,
            timeout: self.timeout.map(Duration::from_secs),
            ..Options::default()
        }
    }
}

fn setup_logging(verbose: bool) {
    let default_directive = if verbose {
        "keyword_frequency=debug"
    } else {
        "keyword_frequency=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    let outcome = Scanner::with_options(args.options()).and_then(|scanner| scanner.scan(&args.url));
    let (report, code) = match outcome {
        Ok(result) => (Report::from_scan(&result), ExitCode::SUCCESS),
        Err(err) => {
            error!(url = %args.url, "{err}");
            (Report::from_error(&err), ExitCode::FAILURE)
        }
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };

    match json {
        Ok(json) => {
            println!("{json}");
            code
        }
        Err(err) => {
            error!("failed to serialize report: {err}");
            ExitCode::FAILURE
        }
    }
}
