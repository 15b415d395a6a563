//! Gateway: HTTP server for the messaging webhook.
//!
//! Single port serves a health check and the Twilio inbound-message webhook; each webhook call
//! runs one bot turn and answers with exactly one TwiML message.

mod server;

pub use server::{build_bot, router, run_gateway, GatewayState};
