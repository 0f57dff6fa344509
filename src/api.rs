//! Mail relay API
//!
//! The practice receives form submissions through a remote mail-relay
//! endpoint. The relay's response body is opaque to us (the deployed
//! endpoint only accepts fire-and-forget posts), so the client reports
//! transport success or failure and nothing more.

pub mod model;
mod relay;

pub use model::InquiryPayload;
pub use relay::{RelayClient, SubmitOutcome};
