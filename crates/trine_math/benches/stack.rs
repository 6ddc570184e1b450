use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trine_math::{ApplyToVector, Matrix44, Stack, Vector3};

fn build_stack(n: usize) -> Stack<f32, 3> {
    (0..n)
        .map(|i| {
            let f = i as f32;
            Vector3::new(f, f * 0.5 + 1.0, -f)
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_normalize");
    for &n in &[16usize, 1_024, 65_536] {
        let stack = build_stack(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &stack, |b, stack| {
            b.iter(|| black_box(stack.normalized()))
        });
    }
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_transform");
    let m = Matrix44::multiply(
        Matrix44::from_translation(Vector3::new(1.0, 2.0, 3.0)),
        Matrix44::from_y_rotation(0.5),
    );
    for &n in &[16usize, 1_024, 65_536] {
        let stack = build_stack(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &stack, |b, stack| {
            b.iter(|| black_box(m.apply_to_vectors(stack)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_transform);
criterion_main!(benches);
