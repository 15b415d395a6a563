//! Inbound message from a channel: delivered to the bot for one menu turn.

use std::fmt;

/// Normalized sender phone number: digits only, no transport tag or leading `+`.
/// Sole key for session state and directory lookups.
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct SenderId(String);

impl SenderId {
    /// Normalize a raw provider identifier, e.g. `whatsapp:+15551234567` -> `15551234567`.
    pub fn normalize(raw: &str) -> Self {
        let s = raw.trim();
        let s = match s.split_once(':') {
            Some((_tag, rest)) => rest,
            None => s,
        };
        let s = s.trim().trim_start_matches('+');
        Self(s.chars().filter(|c| !c.is_whitespace()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A message from a channel to be answered with exactly one reply.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub sender: SenderId,
    pub body: String,
}

impl InboundMessage {
    pub fn new(raw_sender: &str, body: impl Into<String>) -> Self {
        Self {
            sender: SenderId::normalize(raw_sender),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_transport_tag_and_plus() {
        assert_eq!(SenderId::normalize("whatsapp:+15551234567").as_str(), "15551234567");
        assert_eq!(SenderId::normalize("+447700900123").as_str(), "447700900123");
        assert_eq!(SenderId::normalize(" 919876543210 ").as_str(), "919876543210");
    }

    #[test]
    fn same_user_same_key() {
        assert_eq!(
            SenderId::normalize("whatsapp:+15551234567"),
            SenderId::normalize("15551234567")
        );
    }

    #[test]
    fn empty_sender() {
        assert!(SenderId::normalize("").is_empty());
        assert!(SenderId::normalize("whatsapp:").is_empty());
    }
}
