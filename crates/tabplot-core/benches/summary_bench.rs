use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabplot_core::{summarize, Table, Value};

fn gen_table(rows: usize, groups: usize) -> Table {
    let mut t = Table::new(vec!["Platform".to_string(), "Likes".to_string()]);
    for i in 0..rows {
        let key = format!("G{}", i % groups);
        // simple waveform with drift
        let v = (i as f64 * 0.37).sin() * 250.0 + 500.0 + i as f64 * 0.001;
        t.push_row(vec![Value::Text(key), Value::Number(v)]).unwrap();
    }
    t
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for &n in &[10_000usize, 100_000usize] {
        for &g in &[4usize, 32usize] {
            let table = gen_table(n, g);
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_g{g}")),
                &table,
                |b, t| {
                    b.iter(|| {
                        let _ = black_box(summarize(t, "Platform", "Likes").unwrap());
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_summarize);
criterion_main!(benches);
