//! Request lifecycle events and the listener registry that fans them out.
mod bus;
mod types;


pub use bus::{EventBus, EventListener};
pub use types::{RequestEvent, RequestOutcome};
