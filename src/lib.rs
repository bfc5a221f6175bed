//! Elevator controller core.
//!
//! Two cooperating event-driven state machines, an Elevator controller and
//! a Motor controller, connected by a synchronous dispatch fabric.  Exposes
//! the pure-logic modules for integration testing and for embedding behind
//! real sensor and motor drivers.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod fsm;
