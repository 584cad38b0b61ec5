//! Criterion benchmarks for decompound.
//!
//! Covers the German analyzer pipeline end to end as well as its two
//! expensive stages in isolation:
//! - Hyphenation and compound decomposition
//! - Compound-aware stemming

use std::hint::black_box;
use std::path::PathBuf;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use decompound::analysis::analyzer::{Analyzer, GermanAnalyzer, GermanAnalyzerConfig};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn analyzer() -> GermanAnalyzer {
    let config = GermanAnalyzerConfig::from_file(fixture("german.json")).unwrap();
    GermanAnalyzer::from_config(&config).unwrap()
}

/// Generate German-looking test documents.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "Die",
        "Dampfschifffahrtskapitänsmützen",
        "Kapitänsmütze",
        "Haustür",
        "Haustüren",
        "Kinderbuch",
        "Kindergarten",
        "und",
        "der",
        "Garten",
        "Schiff",
        "Tel.",
        "0711",
        "12",
        "34",
        "56",
        "<b>Haus</b>",
        "Fahrten",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 20 + (i % 40);
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len();
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

/// Benchmark the full analyzer.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("german_analysis");

    let analyzer = analyzer();
    let texts = generate_test_documents(500);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&texts[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let count = analyzer.analyze(black_box(text)).unwrap().count();
                black_box(count);
            }
        })
    });

    group.finish();
}

/// Benchmark decomposition and stemming of single words.
fn bench_compounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("compounds");

    let analyzer = analyzer();
    let decomposer = analyzer.decomposer();
    let stemmer = analyzer.stemmer();
    let words = [
        "dampfschifffahrtskapitänsmützen",
        "kapitänsmützen",
        "haustüren",
        "kindergartenkind",
        "garten",
    ];

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("decompose", |b| {
        b.iter(|| {
            for word in &words {
                black_box(decomposer.decompose(black_box(word)));
            }
        })
    });

    group.bench_function("compound_stem", |b| {
        b.iter(|| {
            for word in &words {
                black_box(stemmer.stem_word(black_box(word)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_compounds);

criterion_main!(benches);
