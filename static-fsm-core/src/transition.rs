//! Transition descriptors and the protocol that fires them.

use std::marker::PhantomData;
use std::mem;

use crate::action::{Action, InternalAction};
use crate::guard::Guard;
use crate::invoke;
use crate::outcome::Refusal;
use crate::state::{FsmContext, Member, State};

/// An ordinary transition: source `S`, event `E`, target `T`, action `A`
/// and guard `G`.
///
/// Source and target are distinct types; the `#[fsm]` macro rejects a
/// declaration where they are equal.
pub struct Transition<S, E, T, A = (), G = ()> {
    action: A,
    guard: G,
    _route: PhantomData<fn(S, E) -> T>,
}

impl<S, E, T, A, G> Transition<S, E, T, A, G> {
    /// Describes a transition with the given action and guard. Pass `()`
    /// for either to get the default (no-op action, passing guard).
    pub const fn new(action: A, guard: G) -> Self {
        Self {
            action,
            guard,
            _route: PhantomData,
        }
    }

    /// Runs the transition against `current`.
    ///
    /// 1. The guard is evaluated against the source instance. If it returns
    ///    `false` nothing else happens.
    /// 2. The source's exit hook runs.
    /// 3. `current` is replaced by the placeholder.
    /// 4. A default target instance is built and the action runs with both
    ///    instances.
    /// 5. The target is committed to `current` and its entry hook runs.
    ///
    /// Refuses with [`Refusal::NoTransition`] when `current` does not hold
    /// `S`.
    pub fn fire<C, U, AM, GM>(
        &self,
        current: &mut U,
        ctx: &mut C,
        event: &C::Event,
        payload: &E,
    ) -> Result<(), Refusal>
    where
        C: FsmContext,
        S: State<C>,
        T: State<C>,
        U: Member<S> + Member<T>,
        A: Action<E, C, S, T, AM>,
        G: Guard<E, C, S, GM>,
    {
        let Some(source) = Member::<S>::get_mut(current) else {
            return Err(Refusal::NoTransition);
        };
        if !invoke::guard(&self.guard, payload, &*ctx, &*source) {
            return Err(Refusal::GuardRejected);
        }
        invoke::exit(source, Some(event), ctx);

        let mut source = match Member::<S>::take(mem::replace(current, U::placeholder())) {
            Ok(source) => source,
            Err(untouched) => {
                *current = untouched;
                return Err(Refusal::NoTransition);
            }
        };
        let mut target = T::default();
        invoke::action(&self.action, payload, ctx, &mut source, &mut target);

        *current = Member::<T>::wrap(target);
        if let Some(target) = Member::<T>::get_mut(current) {
            invoke::enter(target, Some(event), ctx);
        }
        Ok(())
    }
}

/// An internal transition of state `S` on event `E`, with action `A` and
/// guard `G`. It never replaces the state and never runs hooks.
pub struct Internal<S, E, A = (), G = ()> {
    action: A,
    guard: G,
    _route: PhantomData<fn(S, E)>,
}

impl<S, E, A, G> Internal<S, E, A, G> {
    /// Describes an internal transition with the given action and guard.
    pub const fn new(action: A, guard: G) -> Self {
        Self {
            action,
            guard,
            _route: PhantomData,
        }
    }

    /// Runs the internal transition against the instance of `S` held by
    /// `current`.
    pub fn fire<C, U, AM, GM>(
        &self,
        current: &mut U,
        ctx: &mut C,
        payload: &E,
    ) -> Result<(), Refusal>
    where
        U: Member<S>,
        A: InternalAction<E, C, S, AM>,
        G: Guard<E, C, S, GM>,
    {
        let Some(state) = Member::<S>::get_mut(current) else {
            return Err(Refusal::NoTransition);
        };
        if !invoke::guard(&self.guard, payload, &*ctx, &*state) {
            return Err(Refusal::GuardRejected);
        }
        invoke::internal_action(&self.action, payload, ctx, state);
        Ok(())
    }
}
