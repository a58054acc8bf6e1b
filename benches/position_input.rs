// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_compare::domain::comparison::{ContainerBounds, StepDirection};
use iced_compare::ui::comparison::position::{Message, State};
use std::hint::black_box;

fn drag_session_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_input");
    let bounds = ContainerBounds::new(0.0, 800.0);

    // One press, a sweep of 800 moves across the container, one release.
    group.bench_function("drag_sweep", |b| {
        b.iter(|| {
            let mut state = State::default();
            state.handle(Message::PointerPressed);
            for x in 0..800u16 {
                state.handle(Message::PointerMoved {
                    x: black_box(f32::from(x)),
                    bounds,
                });
            }
            black_box(state.handle(Message::PointerReleased))
        });
    });

    group.bench_function("keyboard_steps", |b| {
        b.iter(|| {
            let mut state = State::default();
            for _ in 0..100 {
                state.handle(Message::KeyPressed(black_box(StepDirection::Right)));
            }
            black_box(state.current_position())
        });
    });

    group.finish();
}

criterion_group!(benches, drag_session_benchmark);
criterion_main!(benches);
