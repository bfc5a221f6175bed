//! Log-based sink adapters.
//!
//! [`LogEventSink`] writes structured application events through the `log`
//! facade.  [`LogFaultSink`] stands in for the paging hooks: it logs the
//! notification and keeps a count, which is all the host simulator needs.

use log::{error, info};

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, FaultSink};
use crate::error::Fault;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(s) => {
                info!(
                    "START | elevator={:?} motor={:?} | floor={} dest={}",
                    s.elevator, s.motor, s.current_floor, s.destination_floor
                );
            }
            AppEvent::StateChanged { machine, from, to } => {
                info!("STATE | {:?}: {} -> {}", machine, from, to);
            }
            AppEvent::FaultRaised(fault) => {
                info!("FAULT | {}", fault);
            }
        }
    }
}

/// Paging hooks that only log.
#[derive(Debug, Default)]
pub struct LogFaultSink {
    maintenance_calls: u32,
    firefighter_calls: u32,
}

impl LogFaultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn maintenance_calls(&self) -> u32 {
        self.maintenance_calls
    }

    pub fn firefighter_calls(&self) -> u32 {
        self.firefighter_calls
    }
}

impl FaultSink for LogFaultSink {
    fn notify_maintenance(&mut self, fault: &Fault) {
        self.maintenance_calls = self.maintenance_calls.saturating_add(1);
        error!("MAINTENANCE | {}", fault);
    }

    fn notify_firefighters(&mut self, fault: &Fault) {
        self.firefighter_calls = self.firefighter_calls.saturating_add(1);
        error!("FIREFIGHTERS | {}", fault);
    }
}
