//! liftsim: host simulator for the elevator controller core.
//!
//! ```text
//!  stdin script ──▶ ScriptInput ──▶ ElevatorService ──▶ SimMotor
//!                                        │
//!                                        ├──▶ LogFaultSink
//!                                        └──▶ LogEventSink
//! ```
//!
//! Usage: `liftsim [config.json] < script.txt`.  Logging is controlled by
//! `RUST_LOG` (default `info`).  The final cabin status is printed to stdout
//! as JSON.

use std::io;

use anyhow::{Context, Result};
use log::info;

use liftcore::adapters::log_sink::{LogEventSink, LogFaultSink};
use liftcore::adapters::script::ScriptInput;
use liftcore::app::ports::{ActuatorPort, FaultSink};
use liftcore::app::service::ElevatorService;
use liftcore::config::ElevatorConfig;
use liftcore::error::Fault;
use liftcore::events::Direction;

// ── Simulated motor ───────────────────────────────────────────
//
// Stands in for the motor/brake driver: records what it was told and
// forwards fault pages to the log sink.

struct SimMotor {
    direction: Direction,
    commands: u32,
    faults: LogFaultSink,
}

impl ActuatorPort for SimMotor {
    fn drive(&mut self, direction: Direction) {
        info!("MOTOR | drive {:?}", direction);
        self.direction = direction;
        self.commands += 1;
    }
}

impl FaultSink for SimMotor {
    fn notify_maintenance(&mut self, fault: &Fault) {
        self.faults.notify_maintenance(fault);
    }

    fn notify_firefighters(&mut self, fault: &Fault) {
        self.faults.notify_firefighters(fault);
    }
}

fn load_config(path: Option<String>) -> Result<ElevatorConfig> {
    let Some(path) = path else {
        return Ok(ElevatorConfig::default());
    };
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
    ElevatorConfig::from_json(&text).with_context(|| format!("loading config {path}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("liftsim v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(std::env::args().nth(1))?;
    let mut service = ElevatorService::new(config);
    let mut motor = SimMotor {
        direction: Direction::Stopped,
        commands: 0,
        faults: LogFaultSink::new(),
    };
    let mut sink = LogEventSink::new();

    service.start(&mut motor, &mut sink);

    let stdin = io::stdin();
    let mut input = ScriptInput::new(stdin.lock());
    let handled = service.run(&mut input, &mut motor, &mut sink);

    info!(
        "{} events over {} lines, {} motor commands, final direction {:?}, pages: {} maintenance / {} firefighters",
        handled,
        input.line_no(),
        motor.commands,
        motor.direction,
        motor.faults.maintenance_calls(),
        motor.faults.firefighter_calls()
    );

    let status = serde_json::to_string_pretty(&service.status())
        .context("serialising final status")?;
    println!("{status}");
    Ok(())
}
