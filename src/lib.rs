//! # static-fsm
//!
//! Finite state machines whose transition table is checked when the
//! declaring crate compiles. States are types, events are types, and a
//! transition is a row in a table of attributes. A malformed table, an event
//! the machine cannot receive, or a query for a state it does not have is a
//! compile error.
//!
//! ## Example
//!
//! ```rust
//! use static_fsm::{State, fsm};
//!
//! #[derive(Default)]
//! pub struct Locked;
//! #[derive(Default)]
//! pub struct Unlocked;
//!
//! pub struct Coin;
//! pub struct Push;
//!
//! #[fsm(initial = Locked)]
//! #[transition(from = Locked, event = Coin, to = Unlocked, action = count)]
//! #[transition(from = Unlocked, event = Push, to = Locked)]
//! #[state(name = Locked, internal(event = Push, action = alarm))]
//! #[derive(Default)]
//! pub struct Turnstile {
//!     coins: u32,
//!     alarms: u32,
//! }
//!
//! impl State<Turnstile> for Locked {}
//! impl State<Turnstile> for Unlocked {}
//!
//! fn count(_coin: &Coin, turnstile: &mut Turnstile) {
//!     turnstile.coins += 1;
//! }
//!
//! fn alarm(_push: &Push, turnstile: &mut Turnstile) {
//!     turnstile.alarms += 1;
//! }
//!
//! let mut gate = TurnstileMachine::new(Turnstile::default());
//!
//! assert!(gate.process(Push).is_done()); // internal: still locked
//! assert!(gate.is_in_state::<Locked>());
//! assert!(gate.process(Coin).is_done());
//! assert!(gate.is_in_state::<Unlocked>());
//! assert!(gate.process(Coin).is_refused());
//! assert_eq!(gate.context().coins, 1);
//! assert_eq!(gate.context().alarms, 1);
//! ```
//!
//! ## Guards and actions
//!
//! Guards and actions are plain functions, or closures with annotated
//! parameters, in one of two forms picked by the compiler from the signature:
//!
//! | | long form | short form |
//! |---|---|---|
//! | guard | `Fn(&E, &C, &S) -> bool` | `Fn(&E, &C) -> bool` |
//! | action | `Fn(&E, &mut C, &mut S, &mut T)` | `Fn(&E, &mut C)` |
//! | internal action | `Fn(&E, &mut C, &mut S)` | `Fn(&E, &mut C)` |
//!
//! Guards compose with [`and`], [`or`] and [`not`]. The empty `and(())` is
//! `false` and the empty `or(())` is `true`.
//!
//! ## Rejected at compile time
//!
//! A table without transitions:
//!
//! ```compile_fail
//! use static_fsm::{State, fsm};
//! #[derive(Default)]
//! struct Idle;
//!
//! #[fsm(initial = Idle)]
//! struct Empty;
//!
//! impl State<Empty> for Idle {}
//! ```
//!
//! A transition back into its own source (declare an internal transition
//! instead):
//!
//! ```compile_fail
//! use static_fsm::{State, fsm};
//! #[derive(Default)]
//! struct Idle;
//! #[derive(Default)]
//! struct Busy;
//! struct Tick;
//! struct Go;
//!
//! #[fsm(initial = Idle)]
//! #[transition(from = Idle, event = Go, to = Busy)]
//! #[transition(from = Busy, event = Tick, to = Busy)]
//! struct Worker;
//!
//! impl State<Worker> for Idle {}
//! impl State<Worker> for Busy {}
//! ```
//!
//! Two transitions for the same source and event:
//!
//! ```compile_fail
//! use static_fsm::{State, fsm};
//! #[derive(Default)]
//! struct Idle;
//! #[derive(Default)]
//! struct Busy;
//! #[derive(Default)]
//! struct Done;
//! struct Go;
//!
//! #[fsm(initial = Idle)]
//! #[transition(from = Idle, event = Go, to = Busy)]
//! #[transition(from = Idle, event = Go, to = Done)]
//! struct Worker;
//!
//! impl State<Worker> for Idle {}
//! impl State<Worker> for Busy {}
//! impl State<Worker> for Done {}
//! ```
//!
//! Two internal transitions on the same event within one state:
//!
//! ```compile_fail
//! use static_fsm::{State, fsm};
//! #[derive(Default)]
//! struct Idle;
//! #[derive(Default)]
//! struct Busy;
//! struct Go;
//! struct Tick;
//!
//! #[fsm(initial = Idle)]
//! #[transition(from = Idle, event = Go, to = Busy)]
//! #[state(name = Busy, internal(event = Tick), internal(event = Tick))]
//! struct Worker;
//!
//! impl State<Worker> for Idle {}
//! impl State<Worker> for Busy {}
//! ```
//!
//! An initial state that no transition mentions:
//!
//! ```compile_fail
//! use static_fsm::{State, fsm};
//! #[derive(Default)]
//! struct Idle;
//! #[derive(Default)]
//! struct Busy;
//! #[derive(Default)]
//! struct Off;
//! struct Go;
//!
//! #[fsm(initial = Off)]
//! #[transition(from = Idle, event = Go, to = Busy)]
//! struct Worker;
//!
//! impl State<Worker> for Idle {}
//! impl State<Worker> for Busy {}
//! impl State<Worker> for Off {}
//! ```
//!
//! Submitting an event the machine never reacts to:
//!
//! ```compile_fail
//! use static_fsm::{State, fsm};
//! #[derive(Default)]
//! struct Idle;
//! #[derive(Default)]
//! struct Busy;
//! struct Go;
//! struct Stray;
//!
//! #[fsm(initial = Idle)]
//! #[transition(from = Idle, event = Go, to = Busy)]
//! struct Worker;
//!
//! impl State<Worker> for Idle {}
//! impl State<Worker> for Busy {}
//!
//! let mut worker = WorkerMachine::new(Worker);
//! let _ = worker.process(Stray);
//! ```
//!
//! Asking about a state the machine does not have:
//!
//! ```compile_fail
//! use static_fsm::{State, fsm};
//! #[derive(Default)]
//! struct Idle;
//! #[derive(Default)]
//! struct Busy;
//! struct Elsewhere;
//! struct Go;
//!
//! #[fsm(initial = Idle)]
//! #[transition(from = Idle, event = Go, to = Busy)]
//! struct Worker;
//!
//! impl State<Worker> for Idle {}
//! impl State<Worker> for Busy {}
//!
//! let worker = WorkerMachine::new(Worker);
//! worker.is_in_state::<Elsewhere>();
//! ```
//!
//! The transition placeholder is not a state either:
//!
//! ```compile_fail
//! use static_fsm::{Placeholder, State, fsm};
//! #[derive(Default)]
//! struct Idle;
//! #[derive(Default)]
//! struct Busy;
//! struct Go;
//!
//! #[fsm(initial = Idle)]
//! #[transition(from = Idle, event = Go, to = Busy)]
//! struct Worker;
//!
//! impl State<Worker> for Idle {}
//! impl State<Worker> for Busy {}
//!
//! let worker = WorkerMachine::new(Worker);
//! worker.is_in_state::<Placeholder>();
//! ```

extern crate self as static_fsm;

#[doc(inline)]
pub use static_fsm_core::*;
#[doc(inline)]
pub use static_fsm_macros::fsm;
