use std::hint::black_box;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use domain::{DomainEvent, EventDispatcher, EventHandler, EventKind, Money, Product};

struct CountingHandler(AtomicU64);

impl EventHandler for CountingHandler {
    fn handle(&self, _event: &DomainEvent) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

fn make_event() -> DomainEvent {
    Product::new("bench-1", "Benchmark Widget", Money::from_cents(1000))
        .unwrap()
        .created_event("benchmark product")
}

fn bench_notify(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatcher/notify");
    let event = make_event();

    for handler_count in [1usize, 10, 100] {
        let mut dispatcher = EventDispatcher::new();
        for _ in 0..handler_count {
            dispatcher.register(
                EventKind::ProductCreated,
                Arc::new(CountingHandler(AtomicU64::new(0))),
            );
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(handler_count),
            &dispatcher,
            |b, dispatcher| b.iter(|| dispatcher.notify(black_box(&event))),
        );
    }

    group.finish();
}

fn bench_notify_unregistered(c: &mut Criterion) {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        EventKind::CustomerCreated,
        Arc::new(CountingHandler(AtomicU64::new(0))),
    );
    let event = make_event();

    c.bench_function("dispatcher/notify_no_handlers", |b| {
        b.iter(|| dispatcher.notify(black_box(&event)));
    });
}

fn bench_register_unregister(c: &mut Criterion) {
    c.bench_function("dispatcher/register_unregister", |b| {
        b.iter(|| {
            let mut dispatcher = EventDispatcher::new();
            let handler: Arc<dyn EventHandler> = Arc::new(CountingHandler(AtomicU64::new(0)));
            dispatcher.register(EventKind::ProductCreated, handler.clone());
            dispatcher.unregister(EventKind::ProductCreated.as_str(), &handler);
            black_box(dispatcher);
        });
    });
}

criterion_group!(
    benches,
    bench_notify,
    bench_notify_unregistered,
    bench_register_unregister
);
criterion_main!(benches);
