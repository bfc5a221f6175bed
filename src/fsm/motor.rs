//! Motor controller: actuator direction.
//!
//! Every directive is an unconditional transition.  The motor performs no
//! validation of its own (it knows nothing about floors); consistency is
//! checked upstream by the Elevator's predicted-floor test.

use log::debug;
use serde::Serialize;

use super::Reaction;
use super::context::MotorContext;
use crate::events::{Directive, Direction, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MotorState {
    Stopped,
    Up,
    Down,
}

impl MotorState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }

    /// The direction this variant commands.
    pub const fn direction(self) -> Direction {
        match self {
            Self::Stopped => Direction::Stopped,
            Self::Up => Direction::Up,
            Self::Down => Direction::Down,
        }
    }
}

impl From<Directive> for MotorState {
    fn from(d: Directive) -> Self {
        match d {
            Directive::Up => Self::Up,
            Directive::Down => Self::Down,
            Directive::Stop => Self::Stopped,
        }
    }
}

/// Entry action: project the variant onto `ctx.direction`.
pub fn enter(state: MotorState, ctx: &mut MotorContext) {
    ctx.direction = state.direction();
}

/// Step function.  Directives always transition; anything else is a no-op.
pub fn react(state: MotorState, _ctx: &mut MotorContext, event: Event) -> Reaction<MotorState> {
    match event.directive() {
        Some(directive) => Reaction::Transit {
            to: directive.into(),
            action: None,
        },
        None => {
            debug!("Motor {}: ignoring {}", state.name(), event);
            Reaction::Stay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_transition_unconditionally() {
        let mut ctx = MotorContext::default();
        for state in [MotorState::Stopped, MotorState::Up, MotorState::Down] {
            for (event, to) in [
                (Event::MotorUp, MotorState::Up),
                (Event::MotorDown, MotorState::Down),
                (Event::MotorStop, MotorState::Stopped),
            ] {
                assert_eq!(
                    react(state, &mut ctx, event),
                    Reaction::Transit { to, action: None }
                );
            }
        }
    }

    #[test]
    fn cabin_events_are_ignored() {
        let mut ctx = MotorContext::default();
        for event in [
            Event::Alarm,
            Event::Call { floor: 1 },
            Event::FloorSensor { floor: 1 },
        ] {
            assert_eq!(react(MotorState::Up, &mut ctx, event), Reaction::Stay);
        }
    }

    #[test]
    fn entry_sets_direction() {
        let mut ctx = MotorContext::default();
        enter(MotorState::Up, &mut ctx);
        assert_eq!(ctx.direction, Direction::Up);
        assert_eq!(ctx.direction.step(), 1);
        enter(MotorState::Down, &mut ctx);
        assert_eq!(ctx.direction.step(), -1);
        enter(MotorState::Stopped, &mut ctx);
        assert_eq!(ctx.direction.step(), 0);
    }
}
