//! State capability model and the tagged unions generated around it.

/// The context a machine carries: the fields of the struct annotated with
/// `#[fsm]`.
///
/// Implemented by the macro. `Event` is the generated event union, which is
/// what event-aware hooks receive.
pub trait FsmContext: Sized {
    /// Union of every event type the machine accepts.
    type Event: EventUnion;
}

/// Marks a type as a state of machines over context `C`.
///
/// A state is default-constructed every time the machine enters it. All
/// hooks are optional. During a transition the engine calls the
/// event-aware form, whose default forwards to the event-less form, whose
/// default does nothing, so at most one user-defined body runs per hook.
/// Construction and destruction of a machine carry no event and call the
/// event-less form directly.
///
/// ```rust
/// use static_fsm_core::{FsmContext, State};
/// # use static_fsm_core::EventUnion;
/// # struct Lamp { switched: u32 }
/// # struct LampEvent;
/// # impl EventUnion for LampEvent { fn name(&self) -> &'static str { "LampEvent" } }
/// # impl FsmContext for Lamp { type Event = LampEvent; }
///
/// #[derive(Default)]
/// struct On;
///
/// impl State<Lamp> for On {
///     fn on_entry(&mut self, lamp: &mut Lamp) {
///         lamp.switched += 1;
///     }
/// }
/// ```
pub trait State<C: FsmContext>: Default {
    /// Event-less entry hook.
    fn on_entry(&mut self, _ctx: &mut C) {}

    /// Event-aware entry hook, run when a transition commits this state.
    fn on_entry_with(&mut self, _event: &C::Event, ctx: &mut C) {
        self.on_entry(ctx)
    }

    /// Event-less exit hook.
    fn on_exit(&mut self, _ctx: &mut C) {}

    /// Event-aware exit hook, run when a transition leaves this state.
    fn on_exit_with(&mut self, _event: &C::Event, ctx: &mut C) {
        self.on_exit(ctx)
    }
}

/// The synthetic state that occupies the machine between the exit hook of
/// the source and the commit of the target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placeholder;

/// Tagged union over a machine's state universe.
///
/// Generated as an enum with one variant per declared state plus a
/// `Placeholder` variant.
pub trait StateUnion: Sized {
    /// The union value holding [`Placeholder`].
    fn placeholder() -> Self;

    /// Name of the state currently held.
    fn name(&self) -> &'static str;

    /// Whether the union holds [`Placeholder`].
    fn is_placeholder(&self) -> bool;
}

/// Membership of state `S` in a [`StateUnion`].
///
/// Only implemented for declared states, so a bound on `Member<S>` rejects
/// foreign states at compile time.
pub trait Member<S>: StateUnion {
    /// Wraps a state instance into the union.
    fn wrap(state: S) -> Self;

    /// The held instance if the union holds `S`.
    fn get(&self) -> Option<&S>;

    /// The held instance if the union holds `S`.
    fn get_mut(&mut self) -> Option<&mut S>;

    /// Unwraps the union, handing it back unchanged when it holds another
    /// state.
    fn take(self) -> Result<S, Self>;
}

/// Union over a machine's event universe.
pub trait EventUnion {
    /// Name of the event type held.
    fn name(&self) -> &'static str;
}
