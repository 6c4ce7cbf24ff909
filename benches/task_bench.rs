//! Benchmark for Task: sequential chains and the `ap`/`concat` combinators.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kleisli::effect::{MicrotaskQueue, Task};
use std::cell::Cell;
use std::hint::black_box;
use std::rc::Rc;

fn run_to_value(task: &Task<String, u64>) -> u64 {
    let result = Rc::new(Cell::new(0));
    let sink = Rc::clone(&result);
    task.run(|_| {}, move |value| sink.set(value));
    result.get()
}

fn benchmark_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("task_chain");

    for length in [10, 100] {
        group.bench_with_input(BenchmarkId::new("flat_map", length), &length, |bencher, &length| {
            let mut task = Task::<String, u64>::resolve(0);
            for step in 0..length {
                task = task.flat_map(move |x| Task::resolve(x + step));
            }
            bencher.iter(|| black_box(run_to_value(&task)));
        });
    }

    group.finish();
}

fn benchmark_combinators(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("task_combinators");
    let queue = MicrotaskQueue::new();

    group.bench_function("ap", |bencher| {
        let joined = Task::<String, u64>::resolve(2)
            .map(|x| move |y: u64| x * y)
            .with_scheduler(queue.clone())
            .ap(Task::resolve(21));
        bencher.iter(|| {
            let value = run_to_value(&joined);
            queue.run_pending();
            black_box(value)
        });
    });

    group.bench_function("concat", |bencher| {
        let race = Task::<String, u64>::empty()
            .with_scheduler(queue.clone())
            .concat(Task::resolve(7));
        bencher.iter(|| {
            let value = run_to_value(&race);
            queue.run_pending();
            black_box(value)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_chain, benchmark_combinators);
criterion_main!(benches);
