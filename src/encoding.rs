//! Character encoding detection and chunk decoding.
//!
//! The charset comes from the `Content-Type` header when the server sends
//! one, otherwise from a `<meta charset>` declaration near the top of the
//! first chunk, falling back to UTF-8. Chunks are then decoded with a single
//! streaming decoder so a multi-byte character split across two chunks is
//! still decoded correctly.

use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::patterns::CONTENT_TYPE_CHARSET;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Detect character encoding from the leading bytes of an HTML document.
///
/// Covers both `<meta charset="...">` and the `http-equiv="Content-Type"`
/// form. Only the first 1024 bytes are examined. Defaults to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_META_RE
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Encoding named by the `charset` parameter of a `Content-Type` header value.
///
/// Returns `None` when the parameter is absent or names an unknown encoding.
#[must_use]
pub fn encoding_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    CONTENT_TYPE_CHARSET
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Streaming decoder turning body chunks into UTF-8 text.
///
/// Bytes of an incomplete character at the end of a chunk are held back and
/// emitted with the next chunk. Invalid sequences become U+FFFD.
pub struct ChunkDecoder {
    decoder: Decoder,
}

impl ChunkDecoder {
    /// Decoder for `encoding`. A byte order mark, if present, overrides it.
    #[must_use]
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            decoder: encoding.new_decoder(),
        }
    }

    /// The encoding in effect (after BOM sniffing, once bytes were seen).
    #[must_use]
    pub fn encoding(&self) -> &'static Encoding {
        self.decoder.encoding()
    }

    /// Decode one chunk. Pass `last = true` exactly once, after the final chunk.
    pub fn decode(&mut self, bytes: &[u8], last: bool) -> String {
        let capacity = self
            .decoder
            .max_utf8_buffer_length(bytes.len())
            .unwrap_or_else(|| bytes.len().saturating_mul(3));
        let mut out = String::with_capacity(capacity);

        let mut consumed = 0;
        loop {
            let (result, read, _had_errors) =
                self.decoder
                    .decode_to_string(&bytes[consumed..], &mut out, last);
            consumed += read;
            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => out.reserve(bytes.len() - consumed + 16),
            }
        }

        out
    }
}
