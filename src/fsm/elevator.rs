//! Elevator controller: cabin-level call handling, floor tracking and
//! fault detection.
//!
//! ```text
//!  IDLE ──[Call f != current]──▶ MOVING ──[FloorSensor == destination]──▶ IDLE
//!                                  │
//!                     [FloorSensor != predicted]
//!                                  ▼
//!  Any state ──────[Alarm]──────▶ PANIC   (terminal)
//! ```
//!
//! Entry actions: `Idle` and `Panic` stop the motor, `Moving` has none.  The
//! directive that starts the motor is the *transition action* out of `Idle`.

use log::debug;
use serde::Serialize;

use super::context::CabinContext;
use super::{Effect, Reaction};
use crate::error::Fault;
use crate::events::{Directive, Direction, Event, Floor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElevatorState {
    Idle,
    Moving,
    Panic,
}

impl ElevatorState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Moving => "Moving",
            Self::Panic => "Panic",
        }
    }
}

/// Entry action for `state`.
pub fn entry(state: ElevatorState) -> Option<Effect> {
    match state {
        ElevatorState::Idle | ElevatorState::Panic => Some(Effect::PostToMotor(Directive::Stop)),
        ElevatorState::Moving => None,
    }
}

/// Step function: how `state` reacts to `event`.
///
/// `motor` is the motor's currently commanded direction, used for the
/// predicted-floor check while moving.  Unhandled combinations are no-ops.
pub fn react(
    state: ElevatorState,
    cabin: &mut CabinContext,
    event: Event,
    motor: Direction,
) -> Reaction<ElevatorState> {
    match (state, event) {
        (_, Event::Alarm) => Reaction::Transit {
            to: ElevatorState::Panic,
            action: Some(Effect::NotifyFirefighters(Fault::Alarm {
                floor: cabin.current_floor,
            })),
        },
        (ElevatorState::Idle, Event::Call { floor }) => idle_call(cabin, floor),
        (ElevatorState::Moving, Event::FloorSensor { floor }) => {
            moving_floor_sensor(cabin, floor, motor)
        }
        (state, event) => {
            debug!("{}: ignoring {}", state.name(), event);
            Reaction::Stay
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE
// ═══════════════════════════════════════════════════════════════════════════

fn idle_call(cabin: &mut CabinContext, floor: Floor) -> Reaction<ElevatorState> {
    cabin.destination_floor = floor;

    let directive = match floor.cmp(&cabin.current_floor) {
        core::cmp::Ordering::Equal => return Reaction::Stay,
        core::cmp::Ordering::Greater => Directive::Up,
        core::cmp::Ordering::Less => Directive::Down,
    };

    Reaction::Transit {
        to: ElevatorState::Moving,
        action: Some(Effect::PostToMotor(directive)),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  MOVING
// ═══════════════════════════════════════════════════════════════════════════

fn moving_floor_sensor(
    cabin: &mut CabinContext,
    floor: Floor,
    motor: Direction,
) -> Reaction<ElevatorState> {
    let expected = cabin.predicted_floor(motor);
    if expected != Some(floor) {
        return Reaction::Transit {
            to: ElevatorState::Panic,
            action: Some(Effect::NotifyMaintenance(Fault::PositionMismatch {
                last: cabin.current_floor,
                expected,
                reported: floor,
            })),
        };
    }

    cabin.current_floor = floor;
    if floor == cabin.destination_floor {
        return Reaction::Transit {
            to: ElevatorState::Idle,
            action: None,
        };
    }

    Reaction::Stay
}
