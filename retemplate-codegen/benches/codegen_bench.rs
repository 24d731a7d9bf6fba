use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use retemplate_codegen::Generator;
use retemplate_dom::{h, object, text, Props, RenderNode, Value};

fn build_rows(count: usize) -> RenderNode {
    let mut children = Vec::with_capacity(count);
    for i in 0..count {
        let class = if i % 2 == 0 { "row even" } else { "row odd" };
        children.push(h(
            "tr",
            Props::new()
                .set("class", class)
                .set("onClick", Value::function("() => $setup.select(row)"))
                .set("meta", object([("index", i as f64)])),
            vec![h("td", (), vec![text(format!("cell {i}"))])],
        ));
    }
    h("table", Props::new().set("class", "grid"), children)
}

fn bench_generate_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_rows");
    group.sample_size(20);
    let generator = Generator::new();
    for &count in &[50usize, 200usize, 1000usize] {
        let tree = build_rows(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &tree, |b, t| {
            b.iter(|| {
                let _ = pollster::block_on(generator.generate(t)).expect("generate");
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().without_plots();
    targets = bench_generate_rows
}
criterion_main!(benches);
