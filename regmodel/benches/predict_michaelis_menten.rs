use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nalgebra::DVector;
use regmodel::{MichaelisMenten, RegressionModel, Result};
use std::{hint::black_box, time::Duration};

// substrate concentrations 0..50 with K = 10, V = 1
fn predict_michaelis_menten(size: usize) -> Result<DVector<f64>> {
    let xs = DVector::from_fn(size, |i, _| 50. * i as f64 / size as f64);
    MichaelisMenten.predict(&xs, &[1., 10.])
}

fn grad_michaelis_menten(size: usize) -> Result<f64> {
    let mut sum = 0.;
    for i in 0..size {
        let x = 50. * i as f64 / size as f64;
        let (_, grad) = MichaelisMenten.evaluate_model_grad(x, &[1., 10.])?;
        sum += grad[1];
    }
    Ok(sum)
}

fn benchmark_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("Michaelis-Menten predict");
    group.sample_size(10).warm_up_time(Duration::from_secs(1));
    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("Points", size), &size, |b, &s| {
            b.iter(|| predict_michaelis_menten(black_box(s)));
        });
    }
    group.finish();
}

fn benchmark_grad(c: &mut Criterion) {
    let mut group = c.benchmark_group("Michaelis-Menten parameter gradient");
    group.sample_size(10).warm_up_time(Duration::from_secs(1));
    for size in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("Points", size), &size, |b, &s| {
            b.iter(|| grad_michaelis_menten(black_box(s)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_predict, benchmark_grad);
criterion_main!(benches);
