//! Benchmarks for the question list snapshot codec.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use survey_tui::survey::{snapshot, Question};

fn sample_questions() -> Vec<Question> {
    (0..100)
        .map(|i| {
            if i % 2 == 0 {
                Question::single_select(format!("Question number {}?", i))
            } else {
                Question::multi_select(
                    format!("Pick any for question {}", i),
                    (0..4).map(|o| format!("Option {}", o)).collect(),
                )
            }
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let questions = sample_questions();
    c.bench_function("snapshot_encode_100", |b| {
        b.iter(|| snapshot::encode(black_box(&questions)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let text = snapshot::encode(&sample_questions()).unwrap();
    c.bench_function("snapshot_decode_100", |b| {
        b.iter(|| snapshot::decode(black_box(&text)))
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
