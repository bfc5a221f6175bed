//! Application service: the shell around the dispatch fabric.
//!
//! [`ElevatorService`] owns the [`Fabric`] and plays the role of the
//! external driver: it feeds input events in, forwards fault notifications,
//! reports state changes, and applies the motor's commanded direction to the
//! actuator.  The fabric itself never touches hardware.
//!
//! ```text
//!  InputPort ──▶ ┌───────────────────────┐ ──▶ EventSink
//!                │   ElevatorService     │
//! ActuatorPort ◀─│   Fabric (Elev+Motor) │ ──▶ FaultSink
//!                └───────────────────────┘
//! ```

use heapless::Vec;
use log::{info, warn};

use crate::config::ElevatorConfig;
use crate::error::Fault;
use crate::events::{Direction, Event, Machine};
use crate::fsm::Fabric;

use super::events::{AppEvent, CabinStatus};
use super::ports::{ActuatorPort, EventSink, FaultSink, InputPort};

/// Faults one external event can raise.  One post causes at most one
/// Elevator transition, and each transition into `Panic` pages once.
const MAX_FAULTS_PER_EVENT: usize = 1;

// ───────────────────────────────────────────────────────────────
// Fault tap
// ───────────────────────────────────────────────────────────────

/// Forwards to the real sink and remembers what went through.
struct FaultTap<'a, F: FaultSink> {
    inner: &'a mut F,
    raised: Vec<Fault, MAX_FAULTS_PER_EVENT>,
}

impl<'a, F: FaultSink> FaultTap<'a, F> {
    fn new(inner: &'a mut F) -> Self {
        Self {
            inner,
            raised: Vec::new(),
        }
    }

    fn record(&mut self, fault: &Fault) {
        if self.raised.push(*fault).is_err() {
            warn!("Fault report dropped from event stream: {}", fault);
        }
    }
}

impl<F: FaultSink> FaultSink for FaultTap<'_, F> {
    fn notify_maintenance(&mut self, fault: &Fault) {
        self.inner.notify_maintenance(fault);
        self.record(fault);
    }

    fn notify_firefighters(&mut self, fault: &Fault) {
        self.inner.notify_firefighters(fault);
        self.record(fault);
    }
}

// ───────────────────────────────────────────────────────────────
// ElevatorService
// ───────────────────────────────────────────────────────────────

pub struct ElevatorService {
    fabric: Fabric,
    config: ElevatorConfig,
    /// Last direction handed to the actuator; `None` before `start`.
    driven: Option<Direction>,
    events_handled: u64,
}

impl ElevatorService {
    pub fn new(config: ElevatorConfig) -> Self {
        Self {
            fabric: Fabric::new(&config),
            config,
            driven: None,
            events_handled: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Put the actuator into the bootstrap direction and announce the service.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        self.apply_actuator(hw);
        let status = self.status();
        sink.emit(&AppEvent::Started(status));
        info!(
            "[{}] started: Elevator {}, Motor {}, floor {}",
            self.config.label,
            status.elevator.name(),
            status.motor.name(),
            status.current_floor
        );
    }

    // ── Event handling ────────────────────────────────────────

    /// Post one external event to the Elevator and publish its consequences.
    ///
    /// Emits `FaultRaised` first, then the Elevator's `StateChanged`, then
    /// the Motor's.
    ///
    /// `io` satisfies **both** [`ActuatorPort`] and [`FaultSink`], the two
    /// hardware-facing outputs.
    pub fn handle(
        &mut self,
        event: Event,
        io: &mut (impl ActuatorPort + FaultSink),
        sink: &mut impl EventSink,
    ) {
        self.events_handled += 1;
        let prev_elevator = self.fabric.elevator_state();
        let prev_motor = self.fabric.motor_state();

        let mut tap = FaultTap::new(io);
        self.fabric.post(event, Machine::Elevator, &mut tap);
        let FaultTap { raised, .. } = tap;

        // Pages go out inside the post, before the motor's stop entry runs.
        for fault in raised {
            sink.emit(&AppEvent::FaultRaised(fault));
        }
        let elevator = self.fabric.elevator_state();
        if elevator != prev_elevator {
            sink.emit(&AppEvent::StateChanged {
                machine: Machine::Elevator,
                from: prev_elevator.name(),
                to: elevator.name(),
            });
        }
        let motor = self.fabric.motor_state();
        if motor != prev_motor {
            sink.emit(&AppEvent::StateChanged {
                machine: Machine::Motor,
                from: prev_motor.name(),
                to: motor.name(),
            });
        }

        self.apply_actuator(io);
    }

    /// Drain `input`, handling every event in order.  Returns how many were
    /// handled.
    pub fn run(
        &mut self,
        input: &mut impl InputPort,
        io: &mut (impl ActuatorPort + FaultSink),
        sink: &mut impl EventSink,
    ) -> usize {
        let mut handled = 0;
        while let Some(event) = input.next_event() {
            self.handle(event, io, sink);
            handled += 1;
        }
        info!("[{}] input exhausted after {} events", self.config.label, handled);
        handled
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn status(&self) -> CabinStatus {
        let cabin = self.fabric.cabin();
        CabinStatus {
            elevator: self.fabric.elevator_state(),
            motor: self.fabric.motor_state(),
            current_floor: cabin.current_floor,
            destination_floor: cabin.destination_floor,
            direction: self.fabric.motor_direction(),
        }
    }

    pub fn fabric(&self) -> &Fabric {
        &self.fabric
    }

    pub fn config(&self) -> &ElevatorConfig {
        &self.config
    }

    /// Total external events handled since construction.
    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_actuator(&mut self, hw: &mut impl ActuatorPort) {
        let direction = self.fabric.motor_direction();
        if self.driven != Some(direction) {
            hw.drive(direction);
            self.driven = Some(direction);
        }
    }
}
