use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use freq::cs::hashing::open_addressing::Table;
use freq::WordCounter;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(2..10);
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_insert");
    for size in [1_000, 10_000, 100_000] {
        let words = random_words(size, 7);
        group.throughput(Throughput::Elements(size as u64));
        for alpha in [0.5, 0.75] {
            group.bench_with_input(
                BenchmarkId::new(format!("alpha_{}", alpha), size),
                &words,
                |b, words| {
                    b.iter(|| {
                        let mut table = Table::create(0, alpha);
                        for (i, word) in words.iter().enumerate() {
                            table.insert_or_update(word, i as u64);
                        }
                        black_box(table.len())
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_lookup");
    let words = random_words(10_000, 11);
    let misses = random_words(10_000, 13);
    let mut table = Table::create(0, 0.5);
    for word in &words {
        table.insert_or_update(word, 1);
    }

    group.bench_function("hit", |b| {
        b.iter(|| {
            words
                .iter()
                .filter_map(|word| table.lookup(black_box(word)))
                .sum::<u64>()
        })
    });
    group.bench_function("mostly_miss", |b| {
        b.iter(|| {
            misses
                .iter()
                .filter(|word| table.lookup(black_box(word)).is_none())
                .count()
        })
    });
    group.finish();
}

fn bench_count_text(c: &mut Criterion) {
    let vocabulary = random_words(2_000, 17);
    let mut rng = StdRng::seed_from_u64(19);
    let mut text = String::new();
    for line in 0..5_000 {
        for _ in 0..12 {
            text.push_str(&vocabulary[rng.gen_range(0..vocabulary.len())]);
            text.push_str(if line % 3 == 0 { ", " } else { " " });
        }
        text.push('\n');
    }

    let mut group = c.benchmark_group("word_counter");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("count_reader", |b| {
        b.iter(|| {
            let mut counter = WordCounter::new();
            counter.count_reader(black_box(text.as_bytes())).unwrap();
            counter.len()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup, bench_count_text);
criterion_main!(benches);
