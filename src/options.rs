//! Configuration options for a keyword scan.
//!
//! The `Options` struct controls how the response body is read and parsed
//! and which tags count as visible.

use std::collections::HashSet;
use std::time::Duration;

use crate::visibility;

/// Chunk size used when reading the response body.
pub const DEFAULT_CHUNK_SIZE: usize = 8096;

/// How the response body is turned into HTML documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Every chunk is parsed as a standalone fragment.
    ///
    /// Elements straddling a chunk boundary are split in two and may be
    /// mis-parsed.
    #[default]
    Chunked,

    /// The whole body is buffered and parsed once.
    WholeBody,
}

/// Configuration options for a scan.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use keyword_frequency::{Options, ParseMode};
///
/// let options = Options {
///     chunk_size: 4096,
///     parse_mode: ParseMode::WholeBody,
///     ..Options::default()
/// };
/// assert!(options.is_visible("h1"));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of bytes read from the body per chunk.
    ///
    /// A value of `0` is treated as `1`.
    ///
    /// Default: `8096`
    pub chunk_size: usize,

    /// Tag names whose direct text is not counted.
    ///
    /// Default: [`visibility::NON_VISIBLE_TAGS`]
    pub non_visible_tags: HashSet<String>,

    /// Chunked or whole-body parsing.
    ///
    /// Default: `ParseMode::Chunked`
    pub parse_mode: ParseMode,

    /// Issue a pre-flight GET to confirm the page is reachable.
    ///
    /// Default: `true`
    pub check_reachability: bool,

    /// Keep keywords that are empty after normalization.
    ///
    /// `"a, b"` splits into `a`, an empty fragment, and `b`. When false the
    /// empty fragment is dropped.
    ///
    /// Default: `false`
    pub keep_empty_keywords: bool,

    /// Overall request timeout. `None` uses the HTTP client default.
    ///
    /// Default: `None`
    pub timeout: Option<Duration>,

    /// `User-Agent` header sent with requests.
    ///
    /// Default: `None` (crate name and version)
    pub user_agent: Option<String>,
}

impl Options {
    /// Returns `true` when text directly inside `tag_name` counts as visible
    /// under this configuration.
    #[must_use]
    pub fn is_visible(&self, tag_name: &str) -> bool {
        !self.non_visible_tags.contains(tag_name)
    }

    pub(crate) fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            non_visible_tags: visibility::default_non_visible_tags(),
            parse_mode: ParseMode::Chunked,
            check_reachability: true,
            keep_empty_keywords: false,
            timeout: None,
            user_agent: None,
        }
    }
}
