//! Property tests for the controller core through its public API.

use liftcore::app::ports::FaultSink;
use liftcore::config::ElevatorConfig;
use liftcore::error::Fault;
use liftcore::events::{Event, Machine};
use liftcore::fsm::Fabric;
use liftcore::fsm::elevator::ElevatorState;
use liftcore::fsm::motor::MotorState;
use proptest::prelude::*;

#[derive(Default)]
struct Pages {
    maintenance: usize,
    firefighters: usize,
}

impl FaultSink for Pages {
    fn notify_maintenance(&mut self, _fault: &Fault) {
        self.maintenance += 1;
    }
    fn notify_firefighters(&mut self, _fault: &Fault) {
        self.firefighters += 1;
    }
}

fn fabric_at(ground_floor: i32) -> Fabric {
    Fabric::new(&ElevatorConfig {
        ground_floor,
        ..ElevatorConfig::default()
    })
}

proptest! {
    /// A well-behaved sensor never trips the fault check: after a call and
    /// one reading per floor, the cabin is parked at the destination.
    #[test]
    fn honest_sensor_reaches_destination(start in -20i32..20, destination in -20i32..20) {
        let mut fabric = fabric_at(start);
        let mut pages = Pages::default();
        fabric.post(Event::Call { floor: destination }, Machine::Elevator, &mut pages);

        let step = fabric.motor_direction().step();
        let mut floor = start;
        while floor != destination {
            floor += step;
            fabric.post(Event::FloorSensor { floor }, Machine::Elevator, &mut pages);
        }

        prop_assert_eq!(fabric.elevator_state(), ElevatorState::Idle);
        prop_assert_eq!(fabric.motor_state(), MotorState::Stopped);
        prop_assert_eq!(fabric.cabin().current_floor, destination);
        prop_assert_eq!(pages.maintenance, 0);
    }

    /// Any reading other than the predicted floor while moving is a fault.
    #[test]
    fn wrong_reading_always_panics(destination in 1i32..20, reading in -20i32..20) {
        prop_assume!(reading != 1);
        let mut fabric = fabric_at(0);
        let mut pages = Pages::default();
        fabric.post(Event::Call { floor: destination }, Machine::Elevator, &mut pages);
        fabric.post(Event::FloorSensor { floor: reading }, Machine::Elevator, &mut pages);

        prop_assert_eq!(fabric.elevator_state(), ElevatorState::Panic);
        prop_assert_eq!(fabric.motor_state(), MotorState::Stopped);
        prop_assert_eq!(fabric.cabin().current_floor, 0);
        prop_assert_eq!(pages.maintenance, 1);
    }

    /// Every alarm pages firefighters exactly once, whatever came before.
    #[test]
    fn every_alarm_pages_firefighters(
        floors in proptest::collection::vec(-5i32..5, 0..20),
        alarms in 1usize..4,
    ) {
        let mut fabric = fabric_at(0);
        let mut pages = Pages::default();
        for floor in floors {
            fabric.post(Event::Call { floor }, Machine::Elevator, &mut pages);
            fabric.post(Event::FloorSensor { floor }, Machine::Elevator, &mut pages);
        }
        let before = pages.firefighters;
        for _ in 0..alarms {
            fabric.post(Event::Alarm, Machine::Elevator, &mut pages);
        }
        prop_assert_eq!(pages.firefighters - before, alarms);
        prop_assert_eq!(fabric.elevator_state(), ElevatorState::Panic);
        prop_assert_eq!(fabric.motor_state(), MotorState::Stopped);
    }
}
