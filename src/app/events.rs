//! Outbound application events.
//!
//! The [`ElevatorService`](super::service::ElevatorService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  For one handled
//! event the order is: `FaultRaised`, then the Elevator's `StateChanged`,
//! then the Motor's.

use serde::Serialize;

use crate::error::Fault;
use crate::events::{Direction, Floor, Machine};
use crate::fsm::elevator::ElevatorState;
use crate::fsm::motor::MotorState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AppEvent {
    /// The service has started (carries the bootstrap status).
    Started(CabinStatus),

    /// A machine switched variant.  Re-entry into the same variant is not
    /// reported.
    StateChanged {
        machine: Machine,
        from: &'static str,
        to: &'static str,
    },

    /// A fault notification was sent on the way into `Panic`.
    FaultRaised(Fault),
}

/// A point-in-time snapshot of both machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CabinStatus {
    pub elevator: ElevatorState,
    pub motor: MotorState,
    pub current_floor: Floor,
    pub destination_floor: Floor,
    pub direction: Direction,
}
