use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use handler_chain::chain::{BoxedHandler, ChainBuilder, FnHandler};
use handler_chain::handlers::{EvenHandler, LowerCaseHandler, OddHandler, UpperCaseHandler};

fn parity_chain() -> BoxedHandler<i64> {
    ChainBuilder::new()
        .add(EvenHandler::new())
        .add(OddHandler::new())
        .build()
        .expect("two handlers")
}

/// `depth` rejecting links in front of a catch-all
fn deep_chain(depth: usize) -> BoxedHandler<i64> {
    let builder = (0..depth).fold(ChainBuilder::new(), |builder, i| {
        builder.add(FnHandler::new(format!("reject-{i}"), |_: &i64| false))
    });
    builder
        .add(FnHandler::new("accept", |_: &i64| true))
        .build()
        .expect("at least one handler")
}

fn bench_parity(c: &mut Criterion) {
    let chain = parity_chain();
    let mut n = 0_i64;
    c.bench_function("parity_chain_handle", |b| {
        b.iter(|| {
            n = n.wrapping_add(1);
            black_box(chain.handle(black_box(&n)))
        });
    });
}

fn bench_case(c: &mut Criterion) {
    let chain: BoxedHandler<str> = ChainBuilder::new()
        .add(UpperCaseHandler::new())
        .add(LowerCaseHandler::new())
        .build()
        .expect("two handlers");

    let mut group = c.benchmark_group("case_chain_handle");
    for input in ["HELLO", "world", "MixedCase"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, s| {
            b.iter(|| black_box(chain.handle(black_box(s))));
        });
    }
    group.finish();
}

fn bench_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_depth");
    for depth in [1_usize, 8, 64] {
        let chain = deep_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(chain.handle(black_box(&7))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parity, bench_case, bench_depth);
criterion_main!(benches);
