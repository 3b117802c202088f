//! The machine engine interface implemented by `#[fsm]` machines.

use crate::outcome::{Outcome, Refusal, Refused};
use crate::state::{EventUnion, FsmContext, Member, StateUnion};
use crate::trace;

/// The event union accepted by machine `M`.
pub type EventOf<M> = <<M as Machine>::Context as FsmContext>::Event;

/// A running state machine: one current state plus its context.
///
/// The macro implements the required methods; `route` is the generated
/// `(state, event)` match that fires the matching [`Transition`] or
/// [`Internal`], ordinary transitions taking precedence.
///
/// [`Transition`]: crate::Transition
/// [`Internal`]: crate::Internal
pub trait Machine: Sized {
    /// The user struct the machine was declared on.
    type Context: FsmContext;

    /// The generated state union.
    type States: StateUnion;

    /// Name used in logs and refusals.
    const NAME: &'static str;

    /// The current state.
    fn current(&self) -> &Self::States;

    /// Shared access to the context.
    fn context(&self) -> &Self::Context;

    /// Exclusive access to the context.
    fn context_mut(&mut self) -> &mut Self::Context;

    /// Fires whichever transition matches the current state and `event`.
    fn route(&mut self, event: &EventOf<Self>) -> Result<(), Refusal>;

    /// Submits an event, reporting why it was refused if it was.
    fn try_process<E>(&mut self, event: E) -> Result<(), Refused>
    where
        E: Into<EventOf<Self>>,
    {
        let event = event.into();
        let from = self.current().name();
        let result = self.route(&event);
        trace::outcome(Self::NAME, from, event.name(), self.current().name(), result)
    }

    /// Submits an event.
    fn process<E>(&mut self, event: E) -> Outcome
    where
        E: Into<EventOf<Self>>,
    {
        self.try_process(event).into()
    }

    /// Whether the machine currently is in state `S`.
    ///
    /// Only compiles for states of the machine's universe.
    fn is_in_state<S>(&self) -> bool
    where
        Self::States: Member<S>,
    {
        Member::<S>::get(self.current()).is_some()
    }

    /// Name of the current state.
    fn state_name(&self) -> &'static str {
        self.current().name()
    }
}
