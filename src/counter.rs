//! Keyword counting over HTML fragments.
//!
//! A [`FrequencyCounter`] holds the state of one scan: the current keyword
//! list and a raw count of every visible word. Fragments are fed one at a
//! time (one per body chunk, or the whole body at once); counts are only
//! narrowed down to the declared keywords in [`FrequencyCounter::finish`],
//! because the meta tag can arrive after visible text.
//!
//! Within a fragment every element is visited once, in document order:
//! - an element with a `<meta>` somewhere below it is handed to the keyword
//!   extractor, and a non-empty result replaces the keyword list;
//! - otherwise, if its tag is visible, its direct text is tokenized and
//!   counted.
//!
//! Each element is detached from the tree right after it is processed.

use std::collections::HashMap;

use tracing::debug;

use crate::dom;
use crate::keywords;
use crate::options::Options;
use crate::result::{FrequencyTable, KeywordFrequency};
use crate::tokenizer;

/// Per-scan keyword and word-count state.
#[derive(Debug)]
pub struct FrequencyCounter<'a> {
    options: &'a Options,
    keywords: Vec<String>,
    raw_counts: HashMap<String, usize>,
    fragments: usize,
}

impl<'a> FrequencyCounter<'a> {
    #[must_use]
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            keywords: Vec::new(),
            raw_counts: HashMap::new(),
            fragments: 0,
        }
    }

    /// Parse `html` as a standalone document and fold it into the counts.
    pub fn feed(&mut self, html: &str) {
        let doc = dom::parse(html);
        self.fragments += 1;

        for element in dom::elements(&doc) {
            if dom::has_descendant(&element, "meta") {
                let declared = keywords::extract_with(&element, self.options.keep_empty_keywords);
                if !declared.is_empty() {
                    debug!(
                        fragment = self.fragments,
                        count = declared.len(),
                        "meta keywords found"
                    );
                    self.keywords = declared;
                }
            } else if dom::tag_name(&element).is_some_and(|tag| self.options.is_visible(&tag)) {
                let text = dom::direct_text(&element);
                for word in tokenizer::tokenize(&text, None) {
                    *self.raw_counts.entry(word).or_insert(0) += 1;
                }
            }
            dom::excise(&element);
        }
    }

    /// The keyword list as it currently stands.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Counts of every visible word seen so far, declared or not.
    #[must_use]
    pub fn raw_counts(&self) -> &HashMap<String, usize> {
        &self.raw_counts
    }

    /// Number of fragments fed so far.
    #[must_use]
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    /// Restrict the raw counts to the declared keywords.
    #[must_use]
    pub fn finish(self) -> KeywordFrequency {
        if self.keywords.is_empty() {
            return KeywordFrequency::NotDeclared;
        }

        let frequency: FrequencyTable = self
            .raw_counts
            .into_iter()
            .filter(|(word, _)| self.keywords.contains(word))
            .collect();

        KeywordFrequency::Declared {
            keywords: self.keywords,
            frequency,
        }
    }
}
