//! Per-machine mutable context threaded through the step functions.
//!
//! Each machine owns exactly one context and is the only writer to it.
//! Cross-machine information flows through events, with one read-only
//! exception: the Elevator reads the motor's commanded direction to predict
//! the next floor.

use serde::Serialize;

use crate::config::ElevatorConfig;
use crate::events::{Direction, Floor};

// ---------------------------------------------------------------------------
// Cabin (Elevator controller)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CabinContext {
    /// Last floor confirmed by a sensor reading.  Written only on `FloorSensor`.
    pub current_floor: Floor,
    /// Floor requested by the most recent accepted call.  Written only on `Call`.
    pub destination_floor: Floor,
}

impl CabinContext {
    pub fn new(config: &ElevatorConfig) -> Self {
        Self::parked_at(config.ground_floor)
    }

    /// Cabin at rest on `floor` with no pending destination.
    pub const fn parked_at(floor: Floor) -> Self {
        Self {
            current_floor: floor,
            destination_floor: floor,
        }
    }

    /// The floor the next sensor reading should report when moving in
    /// `direction`.  `None` on integer overflow.
    pub fn predicted_floor(&self, direction: Direction) -> Option<Floor> {
        self.current_floor.checked_add(direction.step())
    }
}

// ---------------------------------------------------------------------------
// Motor (Motor controller)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MotorContext {
    /// Commanded actuator direction.  Set only by motor entry actions.
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cabin_starts_at_ground_floor() {
        let config = ElevatorConfig {
            ground_floor: 4,
            ..ElevatorConfig::default()
        };
        let cabin = CabinContext::new(&config);
        assert_eq!(cabin.current_floor, 4);
        assert_eq!(cabin.destination_floor, 4);
    }

    #[test]
    fn prediction_follows_direction() {
        let cabin = CabinContext::parked_at(2);
        assert_eq!(cabin.predicted_floor(Direction::Up), Some(3));
        assert_eq!(cabin.predicted_floor(Direction::Down), Some(1));
        assert_eq!(cabin.predicted_floor(Direction::Stopped), Some(2));
    }

    #[test]
    fn prediction_overflow_is_none() {
        let cabin = CabinContext::parked_at(Floor::MAX);
        assert_eq!(cabin.predicted_floor(Direction::Up), None);
    }

    #[test]
    fn motor_boots_stopped() {
        assert_eq!(MotorContext::default().direction, Direction::Stopped);
    }
}
