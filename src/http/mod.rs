//! HTTP transport used by the scenario steps.
mod client;
mod transport;


pub use client::{ClientSettings, ReqwestTransport, build_transport};
pub use transport::{HttpReply, HttpTransport};
