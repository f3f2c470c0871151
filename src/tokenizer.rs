//! Word tokenization for visible text.
//!
//! Text is split on whitespace; each token is trimmed of leading/trailing
//! ASCII punctuation and lowercased. Tokens that are entirely punctuation
//! survive as empty strings, so the output always has one entry per
//! whitespace-separated token.

/// Normalizes a single token: strips surrounding ASCII punctuation, lowercases.
///
/// Inner punctuation is kept, so `"Hello-WoRld!"` becomes `"hello-world"`.
#[inline]
#[must_use]
pub fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}

/// Splits `text` into normalized word tokens.
///
/// When `keywords` is given and non-empty, only tokens that exactly match one
/// of the keywords are returned. Order and multiplicity are preserved in both
/// cases.
///
/// # Example
///
/// ```rust
/// use keyword_frequency::tokenizer::tokenize;
///
/// assert_eq!(tokenize("Ala ma kota.", None), vec!["ala", "ma", "kota"]);
///
/// let keywords = vec!["kot".to_string()];
/// assert!(tokenize("Ala ma kota.", Some(&keywords)).is_empty());
/// ```
#[must_use]
pub fn tokenize(text: &str, keywords: Option<&[String]>) -> Vec<String> {
    let words = text.split_whitespace().map(normalize);

    match keywords {
        Some(keywords) if !keywords.is_empty() => words
            .filter(|word| keywords.iter().any(|k| k == word))
            .collect(),
        _ => words.collect(),
    }
}
