//! Performance benchmarks for keyword-frequency.
//!
//! Run with: `cargo bench`
//!
//! Covers in-memory counting of a small page and chunked scanning of
//! synthetic bodies of increasing size in both parse modes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keyword_frequency::{count_html, scan_reader, tokenizer, Options, ParseMode};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Cheap Hosting</title>
    <meta name="keywords" content="hosting, ssl, domains, email">
    <meta name="description" content="Hosting plans with free SSL.">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/pricing">Pricing</a>
    </nav>
    <article>
        <h1>Hosting with free SSL</h1>
        <p>Every hosting plan ships with an SSL certificate and unlimited email
        accounts. Domains can be registered or transferred in minutes.</p>
        <p>Our hosting runs on fast disks; SSL renewals are automatic.</p>
        <h2>Domains</h2>
        <p>Pick from hundreds of domains. Email forwarding is included.</p>
    </article>
    <footer>
        <p>Copyright 2026</p>
    </footer>
</body>
</html>
"#;

fn synthetic_page(paragraphs: usize) -> String {
    let mut html = String::from(
        r#"<html><head><meta name="keywords" content="seo, tools, audit"></head><body>"#,
    );
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<h2>Section {i}</h2><p>An seo audit with the right tools finds broken links, slow pages and missing tags.</p>\n"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_count_html(c: &mut Criterion) {
    c.bench_function("count_html_sample", |b| {
        b.iter(|| count_html(black_box(SAMPLE_HTML)));
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let text = "An SEO audit, with the right tools, finds broken links; slow pages and missing tags! ".repeat(50);
    let keywords = vec!["seo".to_string(), "tools".to_string(), "audit".to_string()];

    c.bench_function("tokenize_unfiltered", |b| {
        b.iter(|| tokenizer::tokenize(black_box(&text), None));
    });
    c.bench_function("tokenize_filtered", |b| {
        b.iter(|| tokenizer::tokenize(black_box(&text), Some(&keywords)));
    });
}

fn bench_scan_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_reader");

    for paragraphs in [10, 100, 1_000] {
        let html = synthetic_page(paragraphs);
        let size_kb = html.len() / 1024;
        group.throughput(Throughput::Bytes(html.len() as u64));

        for (label, parse_mode) in [("chunked", ParseMode::Chunked), ("whole_body", ParseMode::WholeBody)] {
            let options = Options {
                parse_mode,
                ..Options::default()
            };
            group.bench_with_input(
                BenchmarkId::new(label, format!("{paragraphs} paragraphs ({size_kb}KB)")),
                &html,
                |b, html| {
                    b.iter(|| scan_reader(black_box(html.as_bytes()), None, &options));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_count_html, bench_tokenize, bench_scan_reader);
criterion_main!(benches);
