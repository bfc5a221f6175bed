//! Port traits: the hexagonal boundary between the controller core and the
//! outside world.
//!
//! ```text
//!   InputPort ──▶ ElevatorService ──▶ ActuatorPort
//!                       │
//!                       ├──▶ FaultSink   (maintenance / firefighters)
//!                       └──▶ EventSink   (logging / telemetry)
//! ```
//!
//! None of these have a return value or retry contract: the core treats
//! every outbound call as fire-and-forget.

use crate::error::Fault;
use crate::events::{Direction, Event};

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: sensors / buttons → domain)
// ───────────────────────────────────────────────────────────────

/// Source of external events: call buttons, floor sensors, the fault line.
///
/// Polling rate and debouncing are the adapter's responsibility.
pub trait InputPort {
    /// Next pending event, or `None` when the source is exhausted.
    fn next_event(&mut self) -> Option<Event>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → motor / brake)
// ───────────────────────────────────────────────────────────────

pub trait ActuatorPort {
    /// Apply the commanded direction to the physical motor and brake.
    fn drive(&mut self, direction: Direction);
}

// ───────────────────────────────────────────────────────────────
// Fault sink (driven adapter: domain → people)
// ───────────────────────────────────────────────────────────────

/// Best-effort notification hooks invoked on the way into `Panic`.
pub trait FaultSink {
    /// A position inconsistency was detected.
    fn notify_maintenance(&mut self, fault: &Fault);

    /// The fault line was asserted.
    fn notify_firefighters(&mut self, fault: &Fault);
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
