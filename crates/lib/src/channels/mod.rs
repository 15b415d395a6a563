//! Messaging channels (Twilio WhatsApp).
//!
//! Inbound webhook payloads are normalized into `InboundMessage` for the bot; replies are
//! rendered back into the provider's response format.

mod inbound;
mod twilio;

pub use inbound::{InboundMessage, SenderId};
pub use twilio::{render_twiml, TwilioInbound, TWIML_CONTENT_TYPE};
