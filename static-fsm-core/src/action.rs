//! Transition actions.

use crate::form::{Absent, LongForm, ShortForm};

/// Side effect of an ordinary transition from `S` to `T` on event `E`.
///
/// Runs after the source's exit hook and before the target is committed.
/// The long form sees the outgoing source instance and the freshly
/// constructed target instance; `()` does nothing.
pub trait Action<E, C, S, T, M> {
    /// Runs the action.
    fn run(&self, event: &E, ctx: &mut C, source: &mut S, target: &mut T);
}

impl<E, C, S, T, F> Action<E, C, S, T, LongForm> for F
where
    F: Fn(&E, &mut C, &mut S, &mut T),
{
    fn run(&self, event: &E, ctx: &mut C, source: &mut S, target: &mut T) {
        self(event, ctx, source, target)
    }
}

impl<E, C, S, T, F> Action<E, C, S, T, ShortForm> for F
where
    F: Fn(&E, &mut C),
{
    fn run(&self, event: &E, ctx: &mut C, _source: &mut S, _target: &mut T) {
        self(event, ctx)
    }
}

impl<E, C, S, T> Action<E, C, S, T, Absent> for () {
    fn run(&self, _event: &E, _ctx: &mut C, _source: &mut S, _target: &mut T) {}
}

/// Side effect of an internal transition of state `S` on event `E`.
///
/// The state instance is both source and target, so the long form receives
/// it once.
pub trait InternalAction<E, C, S, M> {
    /// Runs the action.
    fn run(&self, event: &E, ctx: &mut C, state: &mut S);
}

impl<E, C, S, F> InternalAction<E, C, S, LongForm> for F
where
    F: Fn(&E, &mut C, &mut S),
{
    fn run(&self, event: &E, ctx: &mut C, state: &mut S) {
        self(event, ctx, state)
    }
}

impl<E, C, S, F> InternalAction<E, C, S, ShortForm> for F
where
    F: Fn(&E, &mut C),
{
    fn run(&self, event: &E, ctx: &mut C, _state: &mut S) {
        self(event, ctx)
    }
}

impl<E, C, S> InternalAction<E, C, S, Absent> for () {
    fn run(&self, _event: &E, _ctx: &mut C, _state: &mut S) {}
}

#[cfg(test)]
mod tests {
    use crate::invoke;

    struct Tick(u32);

    #[derive(Default)]
    struct Clock {
        elapsed: u32,
    }

    #[derive(Default)]
    struct Running {
        ticks: u32,
    }

    #[derive(Default)]
    struct Stopped {
        carried: u32,
    }

    fn advance(tick: &Tick, clock: &mut Clock) {
        clock.elapsed += tick.0;
    }

    fn hand_over(tick: &Tick, clock: &mut Clock, running: &mut Running, stopped: &mut Stopped) {
        clock.elapsed += tick.0;
        stopped.carried = running.ticks;
    }

    fn count(_tick: &Tick, _clock: &mut Clock, running: &mut Running) {
        running.ticks += 1;
    }

    #[test]
    fn short_form_action_touches_context_only() {
        let mut clock = Clock::default();
        let mut running = Running { ticks: 4 };
        let mut stopped = Stopped::default();

        invoke::action(&advance, &Tick(3), &mut clock, &mut running, &mut stopped);

        assert_eq!(clock.elapsed, 3);
        assert_eq!(running.ticks, 4);
        assert_eq!(stopped.carried, 0);
    }

    #[test]
    fn long_form_action_sees_both_instances() {
        let mut clock = Clock::default();
        let mut running = Running { ticks: 4 };
        let mut stopped = Stopped::default();

        invoke::action(&hand_over, &Tick(1), &mut clock, &mut running, &mut stopped);

        assert_eq!(clock.elapsed, 1);
        assert_eq!(stopped.carried, 4);
    }

    #[test]
    fn absent_action_is_noop() {
        let mut clock = Clock::default();
        let mut running = Running::default();
        let mut stopped = Stopped::default();

        invoke::action(&(), &Tick(9), &mut clock, &mut running, &mut stopped);

        assert_eq!(clock.elapsed, 0);
    }

    #[test]
    fn internal_forms() {
        let mut clock = Clock::default();
        let mut running = Running::default();

        invoke::internal_action(&count, &Tick(0), &mut clock, &mut running);
        invoke::internal_action(&advance, &Tick(2), &mut clock, &mut running);
        invoke::internal_action(&(), &Tick(2), &mut clock, &mut running);

        assert_eq!(running.ticks, 1);
        assert_eq!(clock.elapsed, 2);
    }
}
