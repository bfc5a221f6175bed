//! Application shell: orchestration around the controller core, zero I/O.
//!
//! All interaction with sensors, the motor driver and the people who get
//! paged on a fault happens through the **port traits** in [`ports`], so the
//! whole service is testable with mock adapters.

pub mod events;
pub mod ports;
pub mod service;
