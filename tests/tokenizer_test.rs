use keyword_frequency::tokenizer::{normalize, tokenize};

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[test]
fn tokenize_without_filter_returns_every_normalized_token() {
    assert_eq!(tokenize("Ala ma kota.", None), owned(&["ala", "ma", "kota"]));
}

#[test]
fn tokenize_filters_by_keywords_in_text_order() {
    let cases: [(&str, &[&str], &[&str]); 6] = [
        ("Ala ma kota.", &["kot"], &[]),
        (
            "Ala   {}   kot,  345, 34534, rere, 67. 20-20",
            &["kot", "ala", "rere", "45543"],
            &["ala", "kot", "rere"],
        ),
        (
            "1234,  34, 34;34;3 Hello-WoRld",
            &["hello-world", "1234", "34"],
            &["1234", "34", "hello-world"],
        ),
        ("python-proggraming", &["python"], &[]),
        ("empty 23 key word list", &[], &["empty", "23", "key", "word", "list"]),
        (
            "not empty 23 key word list",
            &["Empty", "23y", "kEy", "wOrd", "liSt"],
            &[],
        ),
    ];

    for (text, keywords, expected) in cases {
        let keywords = owned(keywords);
        assert_eq!(tokenize(text, Some(&keywords)), owned(expected), "text: {text:?}");
    }
}

#[test]
fn filtered_output_is_subsequence_of_unfiltered_output() {
    let text = "SEO seo, tools; Tools! seo-tools (seo)";
    let keywords = owned(&["seo", "tools"]);

    let all = tokenize(text, None);
    let filtered = tokenize(text, Some(&keywords));

    let expected: Vec<String> = all.into_iter().filter(|w| keywords.contains(w)).collect();
    assert_eq!(filtered, expected);
    assert_eq!(filtered, owned(&["seo", "seo", "tools", "tools", "seo"]));
}

#[test]
fn tokenize_handles_unicode_whitespace_and_case() {
    assert_eq!(
        tokenize("Zażółć\u{00A0}GĘŚLĄ\njaźń", None),
        owned(&["zażółć", "gęślą", "jaźń"])
    );
}

#[test]
fn normalize_matches_keyword_normalization() {
    assert_eq!(normalize("(Hosting)"), "hosting");
    assert_eq!(normalize("...www..."), "www");
    assert_eq!(normalize("!!!"), "");
}
