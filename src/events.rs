//! Event vocabulary shared by both state machines.
//!
//! Events are produced by:
//! - The outside world (call buttons, floor sensors, the fault line)
//! - The Elevator controller itself (motor directives)
//!
//! Every event is a small `Copy` value that lives only for the duration of
//! the [`Fabric::post`](crate::fsm::Fabric::post) call that delivers it.
//!
//! ```text
//! ┌─────────────┐  Call / FloorSensor / Alarm  ┌──────────┐  MotorUp/Down/Stop  ┌───────┐
//! │ Input port  │─────────────────────────────▶│ Elevator │────────────────────▶│ Motor │
//! └─────────────┘                              └──────────┘                     └───────┘
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

/// Floor number.  Signed so that basements below the ground floor work.
pub type Floor = i32;

/// Everything that can be posted into the dispatch fabric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    // ── External inputs ───────────────────────────────────
    /// Cabin requested at `floor`.
    Call { floor: Floor },
    /// Cabin physically detected at `floor`.
    FloorSensor { floor: Floor },
    /// Fault line asserted.
    Alarm,

    // ── Motor directives ──────────────────────────────────
    MotorUp,
    MotorDown,
    MotorStop,
}

impl Event {
    /// The directive carried by this event, if it is one.
    pub fn directive(self) -> Option<Directive> {
        match self {
            Self::MotorUp => Some(Directive::Up),
            Self::MotorDown => Some(Directive::Down),
            Self::MotorStop => Some(Directive::Stop),
            Self::Call { .. } | Self::FloorSensor { .. } | Self::Alarm => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call { floor } => write!(f, "Call({floor})"),
            Self::FloorSensor { floor } => write!(f, "FloorSensor({floor})"),
            Self::Alarm => write!(f, "Alarm"),
            Self::MotorUp => write!(f, "MotorUp"),
            Self::MotorDown => write!(f, "MotorDown"),
            Self::MotorStop => write!(f, "MotorStop"),
        }
    }
}

/// A command from the Elevator controller to the Motor controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    Up,
    Down,
    Stop,
}

impl From<Directive> for Event {
    fn from(d: Directive) -> Self {
        match d {
            Directive::Up => Self::MotorUp,
            Directive::Down => Self::MotorDown,
            Directive::Stop => Self::MotorStop,
        }
    }
}

/// Commanded actuator direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Stopped,
    Up,
    Down,
}

impl Direction {
    /// Signed floor step for this direction: `0`, `+1` or `-1`.
    pub const fn step(self) -> Floor {
        match self {
            Self::Stopped => 0,
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// Target machine for a posted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Machine {
    Elevator,
    Motor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_map_to_motor_events() {
        assert_eq!(Event::from(Directive::Up), Event::MotorUp);
        assert_eq!(Event::from(Directive::Down), Event::MotorDown);
        assert_eq!(Event::from(Directive::Stop), Event::MotorStop);
    }

    #[test]
    fn only_motor_events_carry_directives() {
        assert_eq!(Event::MotorUp.directive(), Some(Directive::Up));
        assert_eq!(Event::Alarm.directive(), None);
        assert_eq!(Event::Call { floor: 2 }.directive(), None);
        assert_eq!(Event::FloorSensor { floor: 2 }.directive(), None);
    }

    #[test]
    fn direction_steps() {
        assert_eq!(Direction::Stopped.step(), 0);
        assert_eq!(Direction::Up.step(), 1);
        assert_eq!(Direction::Down.step(), -1);
        assert_eq!(Direction::default(), Direction::Stopped);
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Event::Call { floor: -1 }.to_string(), "Call(-1)");
        assert_eq!(Event::MotorStop.to_string(), "MotorStop");
    }
}
