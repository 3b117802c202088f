use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use static_fsm::{State, fsm};

#[derive(Debug, Default)]
pub struct Idle;
#[derive(Debug, Default)]
pub struct Running;

pub struct Ping;
pub struct Pong;

#[fsm(initial = Idle, machine = MacroFsm)]
#[transition(from = Idle, event = Ping, to = Running, action = on_ping)]
#[transition(from = Running, event = Pong, to = Idle, action = on_pong)]
#[derive(Debug, Default)]
pub struct Context {
    pub counter: usize,
}

impl State<Context> for Idle {}
impl State<Context> for Running {}

fn on_ping(_event: &Ping, context: &mut Context) {
    context.counter = context.counter.wrapping_add(1);
}

fn on_pong(_event: &Pong, context: &mut Context) {
    context.counter = context.counter.wrapping_add(1);
}

// Hand-written equivalent: a plain enum and a match.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManualState {
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy)]
enum ManualEvent {
    Ping,
    Pong,
}

struct ManualFsm {
    state: ManualState,
    context: Context,
}

impl ManualFsm {
    fn process(&mut self, event: ManualEvent) -> bool {
        self.state = match (self.state, event) {
            (ManualState::Idle, ManualEvent::Ping) => ManualState::Running,
            (ManualState::Running, ManualEvent::Pong) => ManualState::Idle,
            _ => return false,
        };
        self.context.counter = self.context.counter.wrapping_add(1);
        true
    }
}

// --- Benchmarks ---

fn bench_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("fsm_transitions");

    group.bench_function("macro_ping_pong", |b| {
        let mut fsm = MacroFsm::new(Context::default());
        b.iter(|| {
            let _ = black_box(fsm.process(black_box(Ping)));
            let _ = black_box(fsm.process(black_box(Pong)));
        });
    });

    group.bench_function("manual_ping_pong", |b| {
        let mut fsm = ManualFsm {
            state: ManualState::Idle,
            context: Context::default(),
        };
        b.iter(|| {
            let _ = black_box(fsm.process(black_box(ManualEvent::Ping)));
            let _ = black_box(fsm.process(black_box(ManualEvent::Pong)));
        });
    });

    group.finish();

    let mut group = c.benchmark_group("fsm_refusals");
    group.throughput(criterion::Throughput::Elements(1));

    group.bench_function("macro_refused", |b| {
        let mut fsm = MacroFsm::new(Context::default());
        b.iter(|| black_box(fsm.process(black_box(Pong))));
    });

    group.bench_function("manual_refused", |b| {
        let mut fsm = ManualFsm {
            state: ManualState::Idle,
            context: Context::default(),
        };
        b.iter(|| black_box(fsm.process(black_box(ManualEvent::Pong))));
    });

    group.finish();
}

criterion_group!(benches, bench_transitions);
criterion_main!(benches);
