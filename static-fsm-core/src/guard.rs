//! Guard predicates and their combinators.
//!
//! A guard gates a transition. It reads the event payload, the machine
//! context and the source state instance, and must not mutate anything.

use crate::form::{Absent, LongForm, ShortForm};

/// A predicate deciding whether a transition on event `E` out of state `S`
/// may proceed for context `C`.
///
/// Implemented for:
/// - `Fn(&E, &C, &S) -> bool` ([`LongForm`]),
/// - `Fn(&E, &C) -> bool` ([`ShortForm`]),
/// - `()` ([`Absent`]), which always passes,
/// - the combinators [`And`], [`Or`] and [`Not`].
pub trait Guard<E, C, S, M> {
    /// Evaluates the guard.
    fn check(&self, event: &E, ctx: &C, source: &S) -> bool;
}

impl<E, C, S, F> Guard<E, C, S, LongForm> for F
where
    F: Fn(&E, &C, &S) -> bool,
{
    fn check(&self, event: &E, ctx: &C, source: &S) -> bool {
        self(event, ctx, source)
    }
}

impl<E, C, S, F> Guard<E, C, S, ShortForm> for F
where
    F: Fn(&E, &C) -> bool,
{
    fn check(&self, event: &E, ctx: &C, _source: &S) -> bool {
        self(event, ctx)
    }
}

impl<E, C, S> Guard<E, C, S, Absent> for () {
    fn check(&self, _event: &E, _ctx: &C, _source: &S) -> bool {
        true
    }
}

/// Conjunction of a tuple of guards, evaluated left to right and stopping
/// at the first `false`.
///
/// The empty conjunction `And(())` evaluates to `false`.
#[derive(Debug, Clone, Copy)]
pub struct And<G>(pub G);

/// Disjunction of a tuple of guards, evaluated left to right and stopping
/// at the first `true`.
///
/// The empty disjunction `Or(())` evaluates to `true`.
#[derive(Debug, Clone, Copy)]
pub struct Or<G>(pub G);

/// Negation of a single guard. `Not(())` evaluates to `false`.
#[derive(Debug, Clone, Copy)]
pub struct Not<G>(pub G);

/// Builds an [`And`] over a tuple of guards.
pub fn and<G>(guards: G) -> And<G> {
    And(guards)
}

/// Builds an [`Or`] over a tuple of guards.
pub fn or<G>(guards: G) -> Or<G> {
    Or(guards)
}

/// Builds a [`Not`] around a guard.
pub fn not<G>(guard: G) -> Not<G> {
    Not(guard)
}

impl<E, C, S> Guard<E, C, S, Absent> for And<()> {
    fn check(&self, _event: &E, _ctx: &C, _source: &S) -> bool {
        false
    }
}

impl<E, C, S> Guard<E, C, S, Absent> for Or<()> {
    fn check(&self, _event: &E, _ctx: &C, _source: &S) -> bool {
        true
    }
}

impl<E, C, S, G, M> Guard<E, C, S, (M,)> for Not<G>
where
    G: Guard<E, C, S, M>,
{
    fn check(&self, event: &E, ctx: &C, source: &S) -> bool {
        !self.0.check(event, ctx, source)
    }
}

macro_rules! impl_composite_guards {
    ($(($G:ident, $M:ident, $idx:tt)),+) => {
        impl<E, C, S, $($G, $M),+> Guard<E, C, S, ($($M,)+)> for And<($($G,)+)>
        where
            $($G: Guard<E, C, S, $M>),+
        {
            fn check(&self, event: &E, ctx: &C, source: &S) -> bool {
                $(self.0.$idx.check(event, ctx, source))&&+
            }
        }

        impl<E, C, S, $($G, $M),+> Guard<E, C, S, ($($M,)+)> for Or<($($G,)+)>
        where
            $($G: Guard<E, C, S, $M>),+
        {
            fn check(&self, event: &E, ctx: &C, source: &S) -> bool {
                $(self.0.$idx.check(event, ctx, source))||+
            }
        }
    };
}

impl_composite_guards!((G0, M0, 0));
impl_composite_guards!((G0, M0, 0), (G1, M1, 1));
impl_composite_guards!((G0, M0, 0), (G1, M1, 1), (G2, M2, 2));
impl_composite_guards!((G0, M0, 0), (G1, M1, 1), (G2, M2, 2), (G3, M3, 3));
impl_composite_guards!(
    (G0, M0, 0),
    (G1, M1, 1),
    (G2, M2, 2),
    (G3, M3, 3),
    (G4, M4, 4)
);
impl_composite_guards!(
    (G0, M0, 0),
    (G1, M1, 1),
    (G2, M2, 2),
    (G3, M3, 3),
    (G4, M4, 4),
    (G5, M5, 5)
);
impl_composite_guards!(
    (G0, M0, 0),
    (G1, M1, 1),
    (G2, M2, 2),
    (G3, M3, 3),
    (G4, M4, 4),
    (G5, M5, 5),
    (G6, M6, 6)
);
impl_composite_guards!(
    (G0, M0, 0),
    (G1, M1, 1),
    (G2, M2, 2),
    (G3, M3, 3),
    (G4, M4, 4),
    (G5, M5, 5),
    (G6, M6, 6),
    (G7, M7, 7)
);
