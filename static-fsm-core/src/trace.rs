//! Structured dispatch logging.
//!
//! The generated machines report through these functions so that every
//! machine emits the same fields: `machine`, `state` (or `from`/`to`),
//! `event` and, for refusals, `reason`.

use tracing::{debug, trace};

use crate::outcome::{Refusal, Refused};

/// Reports a freshly constructed machine.
pub fn started(machine: &'static str, state: &'static str) {
    debug!(machine, state, "state machine started");
}

/// Reports a machine being dropped.
pub fn stopped(machine: &'static str, state: &'static str) {
    debug!(machine, state, "state machine stopped");
}

/// Reports the result of routing one event and converts a refusal into the
/// public error type.
pub fn outcome(
    machine: &'static str,
    from: &'static str,
    event: &'static str,
    to: &'static str,
    result: Result<(), Refusal>,
) -> Result<(), Refused> {
    match result {
        Ok(()) => {
            debug!(machine, from, event, to, "event processed");
            Ok(())
        }
        Err(reason) => {
            trace!(machine, state = from, event, %reason, "event refused");
            Err(Refused {
                machine,
                state: from,
                event,
                reason,
            })
        }
    }
}
