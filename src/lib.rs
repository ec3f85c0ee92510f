//! Core library for the `petclinic-load` CLI.
//!
//! Simulated users repeatedly create an owner and then a pet for that owner
//! against a pet clinic web application. Every request is published on an
//! [`events::EventBus`]; the [`metrics::MetricsCollector`] listener turns the
//! stream into an error-rate report when the test stops.
pub mod args;
pub mod config;
pub mod data;
mod entry;
pub mod error;
pub mod events;
pub mod http;
pub mod metrics;
pub mod runner;
pub mod scenario;
pub mod shutdown;
mod system;

pub use entry::run;
