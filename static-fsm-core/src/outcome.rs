//! Results of submitting an event.

use std::fmt;

/// What happened to a submitted event.
///
/// `Refused` is not a failure: no transition applied and the machine is
/// exactly as it was before the call.
#[must_use = "a refused event leaves the machine untouched"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// No transition applied.
    Refused,
    /// A transition or internal transition ran to completion.
    Done,
}

impl Outcome {
    /// Whether a transition ran.
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Whether the event was refused.
    pub fn is_refused(self) -> bool {
        matches!(self, Self::Refused)
    }
}

impl From<Result<(), Refused>> for Outcome {
    fn from(result: Result<(), Refused>) -> Self {
        match result {
            Ok(()) => Self::Done,
            Err(_) => Self::Refused,
        }
    }
}

/// Why an event was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refusal {
    /// Neither an ordinary nor an internal transition matches the current
    /// state and the event.
    NoTransition,
    /// A matching transition exists but its guard returned `false`.
    GuardRejected,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransition => f.write_str("no transition"),
            Self::GuardRejected => f.write_str("guard rejected"),
        }
    }
}

/// A refused event, as reported by `try_process`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{machine}: event `{event}` refused in state `{state}` ({reason})")]
pub struct Refused {
    /// Machine name.
    pub machine: &'static str,
    /// State the machine was (and still is) in.
    pub state: &'static str,
    /// Event type name.
    pub event: &'static str,
    /// Why no transition applied.
    pub reason: Refusal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_result() {
        let refused = Refused {
            machine: "Turnstile",
            state: "Locked",
            event: "Push",
            reason: Refusal::NoTransition,
        };

        assert_eq!(Outcome::from(Ok(())), Outcome::Done);
        assert_eq!(Outcome::from(Err(refused)), Outcome::Refused);
        assert!(Outcome::Done.is_done());
        assert!(Outcome::Refused.is_refused());
    }

    #[test]
    fn refused_display() {
        let refused = Refused {
            machine: "Turnstile",
            state: "Unlocked",
            event: "Coin",
            reason: Refusal::GuardRejected,
        };

        assert_eq!(
            refused.to_string(),
            "Turnstile: event `Coin` refused in state `Unlocked` (guard rejected)"
        );
    }
}
