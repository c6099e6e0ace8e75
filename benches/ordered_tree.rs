use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tourbook::{BySurname, OrderedTree, Tourist};

fn tourists(len: u32, rng: &mut ChaCha20Rng) -> Vec<Tourist> {
    let mut res: Vec<_> = (1..=len)
        .map(|i| Tourist {
            surname: format!("Tourist{:06}", i),
            passport_code: i,
            days: i % 30,
        })
        .collect();
    res.shuffle(rng);
    res
}

fn bench_ordered_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_tree");

    let mut rng = ChaCha20Rng::from_seed([
        0x1B, 0x73, 0x4E, 0x90, 0x2D, 0xC5, 0x08, 0xFA, 0x61, 0x3E, 0xB7, 0x52,
        0x9C, 0x04, 0xD8, 0x27, 0x6A, 0xF1, 0x35, 0x8E, 0x4B, 0xC0, 0x17, 0xA9,
        0x5D, 0x22, 0xE6, 0x7F, 0x93, 0x0C, 0xB1, 0x48,
    ]);

    for len in [1_000_u32, 10_000] {
        let shuffled = tourists(len, &mut rng);
        let mut sorted = shuffled.clone();
        sorted.sort_by(|a, b| a.surname.cmp(&b.surname));

        group.bench_with_input(BenchmarkId::new("insert_random", len), &shuffled, |b, input| {
            b.iter(|| {
                let mut tree = OrderedTree::new(BySurname);
                tree.extend(input.iter().cloned());
                black_box(tree.len())
            })
        });

        // Sorted input builds a single chain: the quadratic worst case.
        if len <= 1_000 {
            group.bench_with_input(BenchmarkId::new("insert_sorted", len), &sorted, |b, input| {
                b.iter(|| {
                    let mut tree = OrderedTree::new(BySurname);
                    tree.extend(input.iter().cloned());
                    black_box(tree.len())
                })
            });
        }

        let mut tree = OrderedTree::new(BySurname);
        tree.extend(shuffled.iter().cloned());
        group.bench_with_input(BenchmarkId::new("average", len), &tree, |b, tree| {
            b.iter(|| black_box(tree.average(Tourist::days_f64)))
        });

        group.bench_with_input(BenchmarkId::new("drain", len), &shuffled, |b, input| {
            b.iter_batched(
                || {
                    let mut tree = OrderedTree::new(BySurname);
                    tree.extend(input.iter().cloned());
                    tree
                },
                |mut tree| black_box(tree.drain_and_clear()),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ordered_tree);
criterion_main!(benches);
