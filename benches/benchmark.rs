use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plagiarism_checker::{CheckOptions, PlagiarismChecker};

const WORDS: &[&str] = &[
    "the", "memory", "safety", "without", "garbage", "collection", "is", "a", "core", "goal", "of",
    "ownership", "borrowing", "lifetimes", "and", "traits", "make", "abstractions", "cheap", "compile",
];

/// deterministic pseudo text, xorshift over a small vocabulary
fn generate_text(seed: u32, words: usize) -> String {
    let mut x = seed;
    let mut text = String::with_capacity(words * 8);
    for i in 0..words {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        text.push_str(WORDS[x as usize % WORDS.len()]);
        text.push_str(if i % 12 == 11 { ". " } else { " " });
    }
    text
}

fn checker_benchmark(c: &mut Criterion) {
    let checker = PlagiarismChecker::new();
    let text1 = generate_text(0x1234_5678, 2_000);
    let text2 = generate_text(0x8765_4321, 2_000);
    let options = CheckOptions::default();

    c.bench_function("check_plagiarism_average", |b| {
        b.iter(|| checker.check_plagiarism(black_box(&text1), black_box(&text2), &options))
    });

    c.bench_function("get_detailed_results", |b| {
        b.iter(|| checker.get_detailed_results(black_box(&text1), black_box(&text2)))
    });

    let pairs: Vec<(String, String)> = (0..64)
        .map(|i| (generate_text(i + 1, 500), generate_text(i + 1000, 500)))
        .collect();
    c.bench_function("check_pairs_64", |b| {
        b.iter(|| checker.check_pairs(black_box(&pairs), &options))
    });
}

criterion_group!(benches, checker_benchmark);
criterion_main!(benches);
