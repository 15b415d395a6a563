//! One bot turn: gate the message, advance the sender's menu, file a ticket when the flow ends.
//!
//! Check order is fixed and each check short-circuits: empty body, authorization, greeting,
//! then state dispatch. Every path produces exactly one reply; no failure escapes.

use crate::channels::InboundMessage;
use crate::directory::{DirectoryEntry, UserDirectory};
use crate::menu::{self, Action, Input, INVALID_MESSAGE_REPLY, NOT_REGISTERED_REPLY};
use crate::session::{SenderLocks, SessionStore};
use crate::tickets::{self, TicketLabels, TicketSink};
use std::sync::Arc;

pub struct SupportBot {
    directory: Arc<dyn UserDirectory>,
    sink: Arc<dyn TicketSink>,
    sessions: Arc<dyn SessionStore>,
    locks: SenderLocks,
    labels: TicketLabels,
}

impl SupportBot {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        sink: Arc<dyn TicketSink>,
        sessions: Arc<dyn SessionStore>,
        labels: TicketLabels,
    ) -> Self {
        Self {
            directory,
            sink,
            sessions,
            locks: SenderLocks::new(),
            labels,
        }
    }

    /// Answer one inbound message.
    pub async fn handle(&self, msg: &InboundMessage) -> String {
        let input = Input::parse(&msg.body);
        log::debug!("inbound from {}: '{}'", msg.sender, input.token);
        if input.is_empty() {
            return INVALID_MESSAGE_REPLY.to_string();
        }

        let Some(entry) = self.authorize(msg).await else {
            return NOT_REGISTERED_REPLY.to_string();
        };

        let _guard = self.locks.acquire(&msg.sender).await;
        let state = self.sessions.get(&msg.sender).await;
        let step = menu::step(state, &input);
        let reply = match step.action {
            Action::Reply(text) => text,
            Action::FileTicket {
                description,
                escalation,
            } => {
                tickets::file_ticket(
                    self.sink.as_ref(),
                    &self.labels,
                    entry.property_name.as_deref(),
                    &description,
                    escalation,
                )
                .await
            }
        };
        if step.next != state {
            log::debug!("{}: {} -> {}", msg.sender, state, step.next);
        }
        self.sessions.set(&msg.sender, step.next).await;
        reply
    }

    /// Directory entry for a registered sender. Lookup failures count as not registered.
    async fn authorize(&self, msg: &InboundMessage) -> Option<DirectoryEntry> {
        if msg.sender.is_empty() {
            log::debug!("inbound message without sender");
            return None;
        }
        match self.directory.lookup(&msg.sender).await {
            Ok(Some(entry)) => {
                log::info!("user {} authorized", msg.sender);
                Some(entry)
            }
            Ok(None) => {
                log::info!("user {} not found in directory", msg.sender);
                None
            }
            Err(e) => {
                log::warn!("directory lookup for {} failed: {}", msg.sender, e);
                None
            }
        }
    }
}
