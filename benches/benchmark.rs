use criterion::{Criterion, black_box, criterion_group, criterion_main};
use order_pricing::orders::Order;

fn bench_order(c: &mut Criterion) {
    let order = Order::new(Some(1), "itemA", 10000, 1000);

    c.bench_function("calculate price", |b| {
        b.iter(|| black_box(&order).calculate_price())
    });

    c.bench_function("render order", |b| {
        b.iter(|| black_box(&order).to_string())
    });
}
criterion_group!(benches, bench_order);
criterion_main!(benches);
