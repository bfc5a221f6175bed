//! Fuzz target: `Fabric::post`
//!
//! Decodes arbitrary bytes into a sequence of posts against both machines
//! and checks the controller invariants after every one.
//!
//! Invariants checked:
//! - No panics under any event sequence, including floors near `i32` limits
//! - Motor direction always equals the projection of the motor variant
//! - Once in `Panic`, the Elevator stays there and the motor stays stopped
//!   unless a directive is posted to the Motor directly; an `Alarm`
//!   re-entering `Panic` stops it again
//!
//! cargo fuzz run fuzz_event_sequence

#![no_main]

use libfuzzer_sys::fuzz_target;
use liftcore::app::ports::FaultSink;
use liftcore::config::ElevatorConfig;
use liftcore::error::Fault;
use liftcore::events::{Event, Machine};
use liftcore::fsm::Fabric;
use liftcore::fsm::elevator::ElevatorState;
use liftcore::fsm::motor::MotorState;

struct Discard;

impl FaultSink for Discard {
    fn notify_maintenance(&mut self, _fault: &Fault) {}
    fn notify_firefighters(&mut self, _fault: &Fault) {}
}

fn decode(op: u8, arg: [u8; 4]) -> (Event, Machine) {
    let floor = i32::from_le_bytes(arg);
    let target = if op & 0x80 == 0 { Machine::Elevator } else { Machine::Motor };
    let event = match op % 6 {
        0 => Event::Call { floor },
        1 => Event::FloorSensor { floor },
        2 => Event::Alarm,
        3 => Event::MotorUp,
        4 => Event::MotorDown,
        _ => Event::MotorStop,
    };
    (event, target)
}

fuzz_target!(|data: &[u8]| {
    let Some((&seed, rest)) = data.split_first() else {
        return;
    };

    let mut fabric = Fabric::new(&ElevatorConfig {
        ground_floor: i32::from(seed as i8),
        ..ElevatorConfig::default()
    });

    // Set while a directive posted to the Motor directly may have left it
    // running.  Every entry into Panic, re-entry included, stops it again.
    let mut direct_motor_post = false;

    for chunk in rest.chunks_exact(5) {
        let was_panic = fabric.elevator_state() == ElevatorState::Panic;
        let (event, target) = decode(chunk[0], [chunk[1], chunk[2], chunk[3], chunk[4]]);
        fabric.post(event, target, &mut Discard);

        assert_eq!(fabric.motor_direction(), fabric.motor_state().direction());

        let in_panic = fabric.elevator_state() == ElevatorState::Panic;
        if target == Machine::Motor && event.directive().is_some() {
            direct_motor_post = event != Event::MotorStop;
        } else if target == Machine::Elevator
            && in_panic
            && (!was_panic || event == Event::Alarm)
        {
            direct_motor_post = false;
        }

        if was_panic {
            assert_eq!(fabric.elevator_state(), ElevatorState::Panic);
            if !direct_motor_post {
                assert_eq!(fabric.motor_state(), MotorState::Stopped);
            }
        }
    }
});
