//! # keyword-frequency
//!
//! Checks how well a page uses the keywords it declares for SEO.
//!
//! The page is fetched, the keywords listed in its
//! `<meta name="keywords" content="...">` tag are extracted, and every
//! occurrence of those keywords in the page's visible text is counted.
//!
//! ## Quick Start
//!
//! ```no_run
//! use keyword_frequency::scan;
//!
//! let result = scan("https://www.python.org/")?;
//! match result.frequency() {
//!     Some(frequency) => println!("{frequency:?}"),
//!     None => println!("no keywords declared"),
//! }
//! # Ok::<(), keyword_frequency::Error>(())
//! ```
//!
//! ## How text is counted
//!
//! - The body is read in fixed-size chunks (8096 bytes by default) and each
//!   chunk is parsed as its own HTML fragment.
//! - Only text sitting directly inside an element counts, and only if the
//!   element's tag is not on the non-visible denylist (`script`, `div`,
//!   `span`, ...).
//! - Words are split on whitespace, trimmed of ASCII punctuation and
//!   lowercased; keywords are normalized the same way.
//! - No stemming: `kota` does not match `kot`.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Charset detection and streaming chunk decoding.
pub mod encoding;

/// Word tokenization and normalization.
pub mod tokenizer;

/// Non-visible tag denylist and visibility check.
pub mod visibility;

/// `<meta name="keywords">` extraction.
pub mod keywords;

/// Per-scan counting state over HTML fragments.
pub mod counter;

/// URL validation and reachability check.
pub mod url_utils;

/// HTTP fetch and chunked body scan.
pub mod scanner;

// Public API - re-exports
pub use counter::FrequencyCounter;
pub use error::{Error, Result};
pub use options::{Options, ParseMode, DEFAULT_CHUNK_SIZE};
pub use result::{
    FrequencyTable, KeywordFrequency, Report, ScanResult, NOT_FOUND_MESSAGE, NO_KEYWORDS_MESSAGE,
};
pub use scanner::{scan_reader, Scanner};

/// Scans a URL using default options.
///
/// Builds a fresh [`Scanner`] per call; reuse a `Scanner` when scanning many
/// pages.
pub fn scan(url: &str) -> Result<ScanResult> {
    scan_with_options(url, &Options::default())
}

/// Scans a URL with custom options.
///
/// # Example
///
/// ```no_run
/// use keyword_frequency::{scan_with_options, Options, ParseMode};
///
/// let options = Options {
///     parse_mode: ParseMode::WholeBody,
///     ..Options::default()
/// };
/// let result = scan_with_options("https://www.python.org/", &options)?;
/// # Ok::<(), keyword_frequency::Error>(())
/// ```
pub fn scan_with_options(url: &str, options: &Options) -> Result<ScanResult> {
    Scanner::with_options(options.clone())?.scan(url)
}

/// Counts keywords in an HTML document that is already in memory.
///
/// The document is parsed once, as with [`ParseMode::WholeBody`].
///
/// # Example
///
/// ```rust
/// use keyword_frequency::count_html;
///
/// let html = r#"<html><head><meta name="keywords" content="test, tekst"></head>
/// <body><h1>test tekst</h1></body></html>"#;
/// let outcome = count_html(html);
/// assert_eq!(outcome.frequency().and_then(|f| f.get("test")), Some(&1));
/// ```
#[must_use]
pub fn count_html(html: &str) -> KeywordFrequency {
    count_html_with_options(html, &Options::default())
}

/// Counts keywords in an in-memory HTML document with custom options.
///
/// `parse_mode` and `chunk_size` are ignored; the document is parsed once.
#[must_use]
pub fn count_html_with_options(html: &str, options: &Options) -> KeywordFrequency {
    let mut counter = FrequencyCounter::new(options);
    counter.feed(html);
    counter.finish()
}
