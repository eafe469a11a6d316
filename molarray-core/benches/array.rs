use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use molarray_core::LinkedArray;

fn pseudo_random(len: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        out.push((state >> 33) as u32 % 4);
    }
    out
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for &n in &[1_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut arr = LinkedArray::new();
                for i in 0..n {
                    arr.append(black_box(i));
                }
                arr
            })
        });
    }

    group.finish();
}

fn bench_subsequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("subsequence_index");

    let hay: LinkedArray<u32> = pseudo_random(100_000).into();
    // 0..4 never produces 9, so the whole haystack is scanned
    let pattern: LinkedArray<u32> = vec![0, 1, 2, 3, 9].into();
    group.bench_function("100k_miss", |b| {
        b.iter(|| black_box(&hay).subsequence_index(black_box(&pattern)).is_err())
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_sort");

    let values = pseudo_random(2_000);
    group.bench_function("2k", |b| {
        b.iter(|| {
            let mut arr = LinkedArray::from_slice(&values);
            arr.sort(false);
            arr
        })
    });

    group.finish();
}

fn bench_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice");

    let arr: LinkedArray<u32> = pseudo_random(100_000).into();
    group.bench_function("reverse_100k", |b| {
        b.iter(|| black_box(&arr).slice(0, -1, -1))
    });

    group.finish();
}

criterion_group!(benches, bench_append, bench_subsequence, bench_sort, bench_slice);
criterion_main!(benches);
