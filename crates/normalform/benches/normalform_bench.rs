use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use normalform::{
    logic::transform::{naive_cnf::naive_cnf, tseytin_cnf::tseytin_cnf},
    parse_prop_formula,
};

const SMALL: &str = "(a -> b) & (b -> c) -> (a -> c)";
const MEDIUM: &str = "((a & b) v (c & d) v (e & f)) <-> -(g -> (h & -i)) & (j v k)";
const LARGE: &str = "((p1 & q1) v (p2 & q2) v (p3 & q3) v (p4 & q4)) -> \
((r1 <-> s1) & (r2 <-> s2) & -(r3 <-> -s3)) & ((x1 -> y1) v (x2 -> y2) v (x3 -> -y3))";

pub fn prop_parser(c: &mut Criterion) {
    let mut g = c.benchmark_group("Prop Parser");
    for (name, f) in [("small", SMALL), ("medium", MEDIUM), ("large", LARGE)] {
        g.bench_with_input(BenchmarkId::new("Prop Parser", name), &f, |b, &f| {
            b.iter(|| {
                let n = parse_prop_formula(f).unwrap();
                black_box(n)
            })
        });
    }
    g.finish();
}

pub fn b_naive_cnf(c: &mut Criterion) {
    let mut g = c.benchmark_group("Naive CNF");
    for (name, f) in [("small", SMALL), ("medium", MEDIUM), ("large", LARGE)] {
        let n = parse_prop_formula(f).unwrap();
        g.bench_with_input(BenchmarkId::new("Naive CNF", name), &n, |b, n| {
            b.iter(|| {
                let cs = naive_cnf(n);
                black_box(cs)
            })
        });
    }
    g.finish();
}

pub fn b_tseytin_cnf(c: &mut Criterion) {
    let mut g = c.benchmark_group("Tseytin CNF");
    for (name, f) in [("small", SMALL), ("medium", MEDIUM), ("large", LARGE)] {
        let n = parse_prop_formula(f).unwrap();
        g.bench_with_input(BenchmarkId::new("Tseytin CNF", name), &n, |b, n| {
            b.iter(|| {
                let cs = tseytin_cnf(n);
                black_box(cs)
            })
        });
    }
    g.finish();
}

criterion_group!(benches, prop_parser, b_naive_cnf, b_tseytin_cnf);
criterion_main!(benches);
