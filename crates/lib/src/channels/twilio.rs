//! Twilio WhatsApp webhook: form-encoded inbound payload and TwiML reply.

use crate::channels::inbound::InboundMessage;
use serde::Deserialize;

pub const TWIML_CONTENT_TYPE: &str = "application/xml";

/// Fields of Twilio's inbound message POST that the bot reads. Twilio sends many more; they are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TwilioInbound {
    /// Message text.
    #[serde(rename = "Body", default)]
    pub body: String,
    /// Sender, e.g. `whatsapp:+15551234567`.
    #[serde(rename = "From", default)]
    pub from: String,
}

impl TwilioInbound {
    pub fn into_inbound(self) -> InboundMessage {
        InboundMessage::new(&self.from, self.body)
    }
}

/// Render a TwiML messaging response with exactly one `<Message>`.
pub fn render_twiml(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        htmlescape::encode_minimal(text)
    )
}
