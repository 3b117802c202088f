//! Attribute parsing for the FSM macro.

use darling::FromMeta;
use syn::{Expr, Path};

/// Arguments for the `#[fsm]` attribute.
#[derive(FromMeta)]
pub struct FsmArgs {
    /// Initial state (required).
    pub initial: Path,

    /// Name of the generated machine type (default: `<Struct>Machine`).
    #[darling(default)]
    pub machine: Option<Path>,

    /// Machine name used in logs and refusals (default: the struct name).
    #[darling(default)]
    pub name: Option<String>,
}

/// Arguments for `#[transition(from = A, event = Go, to = B, action = .., guard = ..)]`.
#[derive(Clone, FromMeta)]
pub struct TransitionAttr {
    /// Source state.
    pub from: Path,
    /// Event that triggers the transition.
    pub event: Path,
    /// Target state.
    pub to: Path,
    /// Optional action expression.
    #[darling(default)]
    pub action: Option<Expr>,
    /// Optional guard expression.
    #[darling(default)]
    pub guard: Option<Expr>,
}

/// Arguments for `#[state(name = A, internal(event = Tick, action = ..), ..)]`.
#[derive(Clone, FromMeta)]
pub struct StateAttr {
    /// The state the attribute describes.
    pub name: Path,
    /// Internal transitions owned by the state.
    #[darling(multiple)]
    pub internal: Vec<InternalAttr>,
}

/// One `internal(..)` entry of a `#[state]` attribute.
#[derive(Clone, FromMeta)]
pub struct InternalAttr {
    /// Event handled without leaving the state.
    pub event: Path,
    /// Optional action expression.
    #[darling(default)]
    pub action: Option<Expr>,
    /// Optional guard expression.
    #[darling(default)]
    pub guard: Option<Expr>,
}
