//! Uniform call sites for guards, actions and hooks.
//!
//! The engine and the generated routing code never call a guard or an
//! action directly. Going through these functions lets the compiler infer
//! the call-shape marker once per transition.

use crate::action::{Action, InternalAction};
use crate::guard::Guard;
use crate::state::{FsmContext, State};

/// Evaluates `guard` in whichever form it implements.
pub fn guard<E, C, S, M, G>(guard: &G, event: &E, ctx: &C, source: &S) -> bool
where
    G: Guard<E, C, S, M>,
{
    guard.check(event, ctx, source)
}

/// Runs an ordinary transition action in whichever form it implements.
pub fn action<E, C, S, T, M, A>(
    action: &A,
    event: &E,
    ctx: &mut C,
    source: &mut S,
    target: &mut T,
) where
    A: Action<E, C, S, T, M>,
{
    action.run(event, ctx, source, target)
}

/// Runs an internal transition action in whichever form it implements.
pub fn internal_action<E, C, S, M, A>(action: &A, event: &E, ctx: &mut C, state: &mut S)
where
    A: InternalAction<E, C, S, M>,
{
    action.run(event, ctx, state)
}

/// Fires the entry hook of `state`, event-aware when an event is at hand.
pub fn enter<C, S>(state: &mut S, event: Option<&C::Event>, ctx: &mut C)
where
    C: FsmContext,
    S: State<C>,
{
    match event {
        Some(event) => state.on_entry_with(event, ctx),
        None => state.on_entry(ctx),
    }
}

/// Fires the exit hook of `state`, event-aware when an event is at hand.
pub fn exit<C, S>(state: &mut S, event: Option<&C::Event>, ctx: &mut C)
where
    C: FsmContext,
    S: State<C>,
{
    match event {
        Some(event) => state.on_exit_with(event, ctx),
        None => state.on_exit(ctx),
    }
}
