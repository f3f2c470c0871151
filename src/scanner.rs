//! Streaming keyword scan over HTTP.
//!
//! [`Scanner`] validates the URL, issues a streaming GET, records the status
//! code, then reads the body in fixed-size chunks and feeds them to a
//! [`FrequencyCounter`]. Scans are blocking and share no state; one
//! `Scanner` can be reused for any number of URLs.

use std::io::{self, Read};
use std::time::Instant;

use encoding_rs::Encoding;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};

use crate::counter::FrequencyCounter;
use crate::encoding::{self, ChunkDecoder};
use crate::error::{Error, Result};
use crate::options::{Options, ParseMode};
use crate::result::{KeywordFrequency, ScanResult};
use crate::url_utils;

/// Blocking keyword scanner.
///
/// # Example
///
/// ```no_run
/// use keyword_frequency::Scanner;
///
/// let scanner = Scanner::new()?;
/// let result = scanner.scan("https://www.python.org/")?;
/// println!("{} -> {result}", result.status_code);
/// # Ok::<(), keyword_frequency::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    client: Client,
    options: Options,
}

impl Scanner {
    /// Scanner with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(Options::default())
    }

    /// Scanner with custom options.
    pub fn with_options(options: Options) -> Result<Self> {
        let user_agent = options
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            options,
        })
    }

    /// Options this scanner was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Count the page's declared meta keywords in its visible text.
    ///
    /// Fails with [`Error::InvalidUrl`] before any request is made when the URL
    /// is rejected, with [`Error::Unreachable`] when the server cannot be
    /// reached, and with [`Error::BodyRead`] when the connection breaks while
    /// the body is streamed. HTTP error statuses are not failures; they are
    /// reported in [`ScanResult::status_code`].
    pub fn scan(&self, url: &str) -> Result<ScanResult> {
        let started = Instant::now();
        let target = url_utils::validate_url(url)?;

        if self.options.check_reachability {
            url_utils::check_reachable(&self.client, &target)?;
        }

        let response = self
            .client
            .get(target.clone())
            .send()
            .map_err(|source| Error::Unreachable {
                url: target.to_string(),
                source,
            })?;

        let status_code = response.status().as_u16();
        let charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(encoding::encoding_from_content_type);
        debug!(url = %target, status = status_code, "response received");

        let outcome = scan_reader(response, charset, &self.options).map_err(|source| {
            warn!(url = %target, error = %source, "body stream failed");
            Error::BodyRead {
                url: target.to_string(),
                source,
            }
        })?;

        info!(
            url = %target,
            status = status_code,
            declared = outcome.is_declared(),
            matched = outcome.frequency().map_or(0, |f| f.len()),
            elapsed = ?started.elapsed(),
            "scan finished"
        );

        Ok(ScanResult {
            outcome,
            status_code,
        })
    }
}

/// Count keywords in an HTML body read from `reader`.
///
/// This is the body half of [`Scanner::scan`]: the body is consumed in
/// `options.chunk_size` pieces and decoded with `charset`, or with the
/// charset declared near the top of the first chunk when `charset` is `None`.
pub fn scan_reader<R: Read>(
    mut reader: R,
    charset: Option<&'static Encoding>,
    options: &Options,
) -> io::Result<KeywordFrequency> {
    let mut buf = vec![0u8; options.effective_chunk_size()];
    let mut counter = FrequencyCounter::new(options);
    let mut decoder = charset.map(ChunkDecoder::new);
    let mut whole_body = String::new();
    let mut chunks = 0usize;

    loop {
        let read = read_chunk(&mut reader, &mut buf)?;
        if read == 0 {
            break;
        }
        let chunk = &buf[..read];
        chunks += 1;

        let decoder =
            decoder.get_or_insert_with(|| ChunkDecoder::new(encoding::detect_encoding(chunk)));
        let text = decoder.decode(chunk, false);
        debug!(chunk = chunks, bytes = read, encoding = decoder.encoding().name(), "body chunk");

        consume(&mut counter, &mut whole_body, options.parse_mode, &text);
    }

    if let Some(mut decoder) = decoder {
        let tail = decoder.decode(&[], true);
        if !tail.is_empty() {
            consume(&mut counter, &mut whole_body, options.parse_mode, &tail);
        }
    }

    if options.parse_mode == ParseMode::WholeBody {
        counter.feed(&whole_body);
    }

    Ok(counter.finish())
}

fn consume(counter: &mut FrequencyCounter<'_>, whole_body: &mut String, mode: ParseMode, text: &str) {
    match mode {
        ParseMode::Chunked => counter.feed(text),
        ParseMode::WholeBody => whole_body.push_str(text),
    }
}

/// Fill `buf` from `reader`, stopping early only at end of stream.
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::FrequencyTable;

    const PAGE: &str = r#"<html><head><meta name="keywords" content="test, tekst"></head><body><h1>test tekst</h1></body></html>"#;

    fn table(pairs: &[(&str, usize)]) -> FrequencyTable {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    /// Reader handing out at most `step` bytes per call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer"))
        }
    }

    #[test]
    fn test_single_chunk_page() {
        let outcome = scan_reader(PAGE.as_bytes(), None, &Options::default()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(outcome.frequency(), Some(&table(&[("test", 1), ("tekst", 1)])));
    }

    #[test]
    fn test_empty_body() {
        let outcome = scan_reader(&b""[..], None, &Options::default()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(outcome, KeywordFrequency::NotDeclared);
    }

    #[test]
    fn test_read_chunk_fills_buffer_across_short_reads() {
        let mut reader = Trickle { data: b"abcdefghij", step: 3 };
        let mut buf = [0u8; 8];

        assert_eq!(read_chunk(&mut reader, &mut buf).ok(), Some(8));
        assert_eq!(&buf, b"abcdefgh");
        assert_eq!(read_chunk(&mut reader, &mut buf).ok(), Some(2));
        assert_eq!(read_chunk(&mut reader, &mut buf).ok(), Some(0));
    }

    #[test]
    fn test_chunking_independent_of_network_reads() {
        let options = Options {
            chunk_size: 64,
            ..Options::default()
        };
        let whole = scan_reader(PAGE.as_bytes(), None, &options).ok();
        let trickled = scan_reader(Trickle { data: PAGE.as_bytes(), step: 5 }, None, &options).ok();
        assert_eq!(whole, trickled);
    }

    #[test]
    fn test_whole_body_mode_survives_tiny_chunks() {
        let options = Options {
            chunk_size: 7,
            parse_mode: ParseMode::WholeBody,
            ..Options::default()
        };
        let outcome = scan_reader(PAGE.as_bytes(), None, &options).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(outcome.frequency(), Some(&table(&[("test", 1), ("tekst", 1)])));
    }

    #[test]
    fn test_declared_charset_is_used() {
        let body = b"<meta name=\"keywords\" content=\"ma\xB3y\"><p>ma\xB3y kot</p>";
        let charset = Encoding::for_label(b"iso-8859-2");
        let outcome = scan_reader(&body[..], charset, &Options::default()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(outcome.frequency(), Some(&table(&[("mały", 1)])));
    }

    #[test]
    fn test_meta_charset_is_sniffed() {
        let body = b"<meta charset=\"iso-8859-2\"><meta name=\"keywords\" content=\"ma\xB3y\"><p>ma\xB3y</p>";
        let outcome = scan_reader(&body[..], None, &Options::default()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(outcome.frequency(), Some(&table(&[("mały", 1)])));
    }

    #[test]
    fn test_read_error_is_fatal() {
        let err = scan_reader(Broken, None, &Options::default()).err();
        assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::ConnectionReset));
    }
}
