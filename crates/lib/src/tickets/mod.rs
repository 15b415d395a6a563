//! Ticket sink: where user-reported issues end up (a Trello board).
//!
//! Tickets are not stored locally; they are built from the sender's property and message,
//! submitted once, and the outcome is turned into the reply text.

mod trello;

pub use trello::TrelloSink;

use async_trait::async_trait;

/// Title fallback when the directory has no property name for the sender.
pub const UNKNOWN_PROPERTY: &str = "Unknown Property";

pub const TICKET_CREATED_REPLY: &str =
    "✅ Your ticket has been successfully created. Our support team will reach out to you soon.";

/// Identifier of the created card.
pub type CardId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub title: String,
    pub description: String,
    /// Label ids to attach.
    pub labels: Vec<String>,
    /// True when filed from the escalation flow, false for general inquiries.
    pub escalation: bool,
}

/// Labels attached to every ticket, plus an optional one for escalations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketLabels {
    pub priority: String,
    pub escalation: Option<String>,
}

impl TicketLabels {
    fn for_ticket(&self, escalation: bool) -> Vec<String> {
        let mut labels = vec![self.priority.clone()];
        if escalation {
            if let Some(ref l) = self.escalation {
                labels.push(l.clone());
            }
        }
        labels
    }
}

impl Ticket {
    pub fn new(
        property_name: Option<&str>,
        description: impl Into<String>,
        labels: &TicketLabels,
        escalation: bool,
    ) -> Self {
        let property = property_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_PROPERTY);
        Self {
            title: format!("Support Ticket for {}", property),
            description: description.into(),
            labels: labels.for_ticket(escalation),
            escalation,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{status} {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("{0} not configured")]
    NotConfigured(&'static str),
    #[error("list '{0}' not found on board")]
    ListNotFound(String),
}

/// External ticketing API.
#[async_trait]
pub trait TicketSink: Send + Sync {
    async fn create(&self, ticket: &Ticket) -> Result<CardId, TicketError>;
}

/// Build and submit a ticket; returns the user-facing outcome. Never fails.
pub async fn file_ticket(
    sink: &dyn TicketSink,
    labels: &TicketLabels,
    property_name: Option<&str>,
    description: &str,
    escalation: bool,
) -> String {
    let ticket = Ticket::new(property_name, description, labels, escalation);
    match sink.create(&ticket).await {
        Ok(id) => {
            log::info!(
                "ticket created: {} ({}, escalation={})",
                id,
                ticket.title,
                ticket.escalation
            );
            TICKET_CREATED_REPLY.to_string()
        }
        Err(e) => {
            log::warn!("ticket creation failed for '{}': {}", ticket.title, e);
            format!("⚠️ Failed to create ticket: {}", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording {
        tickets: Mutex<Vec<Ticket>>,
        fail: bool,
    }

    #[async_trait]
    impl TicketSink for Recording {
        async fn create(&self, ticket: &Ticket) -> Result<CardId, TicketError> {
            self.tickets.lock().unwrap().push(ticket.clone());
            if self.fail {
                Err(TicketError::NotConfigured("trello api key"))
            } else {
                Ok("card-1".to_string())
            }
        }
    }

    fn labels() -> TicketLabels {
        TicketLabels {
            priority: "p0".to_string(),
            escalation: Some("esc".to_string()),
        }
    }

    #[test]
    fn title_uses_property_or_fallback() {
        let t = Ticket::new(Some("Seaside Inn"), "d", &labels(), false);
        assert_eq!(t.title, "Support Ticket for Seaside Inn");
        let t = Ticket::new(None, "d", &labels(), false);
        assert_eq!(t.title, "Support Ticket for Unknown Property");
        let t = Ticket::new(Some("  "), "d", &labels(), false);
        assert_eq!(t.title, "Support Ticket for Unknown Property");
    }

    #[test]
    fn escalation_label_only_on_escalations() {
        assert_eq!(Ticket::new(None, "d", &labels(), false).labels, vec!["p0"]);
        assert_eq!(
            Ticket::new(None, "d", &labels(), true).labels,
            vec!["p0", "esc"]
        );
        let plain = TicketLabels {
            priority: "p0".to_string(),
            escalation: None,
        };
        assert_eq!(Ticket::new(None, "d", &plain, true).labels, vec!["p0"]);
    }

    #[tokio::test]
    async fn file_ticket_maps_outcome() {
        let ok = Recording {
            tickets: Mutex::new(Vec::new()),
            fail: false,
        };
        let reply = file_ticket(&ok, &labels(), Some("Seaside Inn"), "broken AC", true).await;
        assert_eq!(reply, TICKET_CREATED_REPLY);
        let sent = ok.tickets.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].description, "broken AC");
        assert!(sent[0].escalation);
        drop(sent);

        let failing = Recording {
            tickets: Mutex::new(Vec::new()),
            fail: true,
        };
        let reply = file_ticket(&failing, &labels(), None, "x", false).await;
        assert_eq!(
            reply,
            "⚠️ Failed to create ticket: trello api key not configured"
        );
    }
}
