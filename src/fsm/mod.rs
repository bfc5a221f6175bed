//! Event dispatch fabric for the Elevator and Motor machines.
//!
//! Each machine is a plain enum of state variants plus a step function
//! selected by pattern match:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  Fabric                                                            │
//! │  ┌──────────┬───────────────┬───────────────────────────────────┐  │
//! │  │ Machine  │ active        │ step                              │  │
//! │  ├──────────┼───────────────┼───────────────────────────────────┤  │
//! │  │ Elevator │ ElevatorState │ elevator::react(.., CabinContext) │  │
//! │  │ Motor    │ MotorState    │ motor::react(.., MotorContext)    │  │
//! │  └──────────┴───────────────┴───────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `post` runs the target's step function.  If it returns a transit, the
//! fabric commits the new variant, runs the transition action, then the new
//! variant's entry action.  An [`Effect::PostToMotor`] is delivered by a
//! nested `post` before the next effect runs, so dispatch follows ordinary
//! call-stack order and everything triggered by one external event has
//! completed when `post` returns.
//!
//! # Concurrency
//!
//! The fabric is single-threaded and non-reentrant.  `post` takes
//! `&mut self`, so concurrent posts from several threads must be serialised
//! by the caller (one event loop, or one interrupt priority level).

pub mod context;
pub mod elevator;
pub mod motor;

use log::{info, warn};

use crate::app::ports::FaultSink;
use crate::config::ElevatorConfig;
use crate::error::Fault;
use crate::events::{Directive, Direction, Event, Machine};
use context::{CabinContext, MotorContext};
use elevator::ElevatorState;
use motor::MotorState;

// ---------------------------------------------------------------------------
// Reactions and effects
// ---------------------------------------------------------------------------

/// Side effect requested by a step function, interpreted by the fabric
/// after the state change has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver a directive to the Motor machine.
    PostToMotor(Directive),
    NotifyMaintenance(Fault),
    NotifyFirefighters(Fault),
}

/// Outcome of one step function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction<S> {
    /// Remain in the current variant.  Also the default for unhandled events.
    Stay,
    /// Switch to `to`, running `action` before `to`'s entry action.
    Transit { to: S, action: Option<Effect> },
}

// ---------------------------------------------------------------------------
// Fabric
// ---------------------------------------------------------------------------

/// Owns both machines' active variants and contexts.
#[derive(Debug, Clone)]
pub struct Fabric {
    elevator: ElevatorState,
    cabin: CabinContext,
    motor: MotorState,
    motor_ctx: MotorContext,
    /// Committed transitions across both machines (wraps at u64::MAX).
    transitions: u64,
}

impl Fabric {
    /// Bootstrap both machines: Elevator in `Idle`, Motor in `Stopped`.
    /// No entry action runs for the bootstrap variants.
    pub fn new(config: &ElevatorConfig) -> Self {
        info!(
            "Fabric starting: Elevator {} at floor {}, Motor {}",
            ElevatorState::Idle.name(),
            config.ground_floor,
            MotorState::Stopped.name()
        );
        Self {
            elevator: ElevatorState::Idle,
            cabin: CabinContext::new(config),
            motor: MotorState::Stopped,
            motor_ctx: MotorContext::default(),
            transitions: 0,
        }
    }

    /// Deliver `event` to `target`'s active variant and run the resulting
    /// reaction chain to completion.
    pub fn post(&mut self, event: Event, target: Machine, faults: &mut impl FaultSink) {
        match target {
            Machine::Elevator => {
                let reaction = elevator::react(
                    self.elevator,
                    &mut self.cabin,
                    event,
                    self.motor_ctx.direction,
                );
                if let Reaction::Transit { to, action } = reaction {
                    self.transit_elevator(to, action, faults);
                }
            }
            Machine::Motor => {
                let reaction = motor::react(self.motor, &mut self.motor_ctx, event);
                if let Reaction::Transit { to, action } = reaction {
                    self.transit_motor(to, action, faults);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn elevator_state(&self) -> ElevatorState {
        self.elevator
    }

    pub fn motor_state(&self) -> MotorState {
        self.motor
    }

    pub fn cabin(&self) -> &CabinContext {
        &self.cabin
    }

    /// Commanded motor direction: the value an actuator driver should apply.
    pub fn motor_direction(&self) -> Direction {
        self.motor_ctx.direction
    }

    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transit_elevator(
        &mut self,
        to: ElevatorState,
        action: Option<Effect>,
        faults: &mut impl FaultSink,
    ) {
        info!("Elevator transition: {} -> {}", self.elevator.name(), to.name());
        self.elevator = to;
        self.transitions = self.transitions.wrapping_add(1);

        if let Some(effect) = action {
            self.run_effect(effect, faults);
        }
        if let Some(effect) = elevator::entry(to) {
            self.run_effect(effect, faults);
        }
    }

    fn transit_motor(&mut self, to: MotorState, action: Option<Effect>, faults: &mut impl FaultSink) {
        info!("Motor transition: {} -> {}", self.motor.name(), to.name());
        self.motor = to;
        self.transitions = self.transitions.wrapping_add(1);

        if let Some(effect) = action {
            self.run_effect(effect, faults);
        }
        motor::enter(to, &mut self.motor_ctx);
    }

    fn run_effect(&mut self, effect: Effect, faults: &mut impl FaultSink) {
        match effect {
            Effect::PostToMotor(directive) => self.post(directive.into(), Machine::Motor, faults),
            Effect::NotifyMaintenance(fault) => {
                warn!("Notifying maintenance: {}", fault);
                faults.notify_maintenance(&fault);
            }
            Effect::NotifyFirefighters(fault) => {
                warn!("Notifying firefighters: {}", fault);
                faults.notify_firefighters(&fault);
            }
        }
    }
}
