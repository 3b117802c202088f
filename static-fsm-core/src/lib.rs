//! Core runtime types for static-fsm.
//!
//! Everything the code generated by `#[fsm]` relies on lives here: the
//! state capability model, the transition descriptors and the protocol that
//! fires them, guard/action adapters and combinators, and outcomes.

mod action;
mod form;
mod guard;
pub mod invoke;
mod machine;
mod outcome;
mod state;
#[doc(hidden)]
pub mod trace;
mod transition;

pub use action::{Action, InternalAction};
pub use form::{Absent, LongForm, ShortForm};
pub use guard::{And, Guard, Not, Or, and, not, or};
pub use machine::{EventOf, Machine};
pub use outcome::{Outcome, Refusal, Refused};
pub use state::{EventUnion, FsmContext, Member, Placeholder, State, StateUnion};
pub use transition::{Internal, Transition};
