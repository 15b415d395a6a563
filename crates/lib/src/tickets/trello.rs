//! Trello REST client for card creation (https://api.trello.com/1 by default).

use super::{CardId, Ticket, TicketError, TicketSink};
use crate::config::{self, Config};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::OnceCell;

#[derive(Debug, Deserialize)]
struct TrelloCard {
    id: String,
}

#[derive(Debug, Deserialize)]
struct TrelloList {
    id: String,
    name: String,
}

/// Creates one card per ticket in the configured list.
pub struct TrelloSink {
    client: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
    token: Option<String>,
    board_id: Option<String>,
    list_name: String,
    /// Configured list id, or the one looked up by name on first use.
    list_id: OnceCell<String>,
}

impl TrelloSink {
    pub fn from_config(config: &Config) -> Result<Self> {
        let resolved = config::resolve_ticket_sink(config);
        let t = &config.ticket_sink;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(t.timeout_secs))
            .build()
            .context("building trello http client")?;
        if resolved.api_key.is_none() || resolved.token.is_none() {
            log::warn!("trello api key or token not configured; ticket creation will fail");
        }
        Ok(Self {
            client,
            api_base: t.api_base.trim_end_matches('/').to_string(),
            api_key: resolved.api_key,
            token: resolved.token,
            board_id: resolved.board_id,
            list_name: t.list_name.clone(),
            list_id: OnceCell::new_with(resolved.list_id),
        })
    }

    fn credentials(&self) -> Result<(&str, &str), TicketError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(TicketError::NotConfigured("trello api key"))?;
        let token = self
            .token
            .as_deref()
            .ok_or(TicketError::NotConfigured("trello token"))?;
        Ok((key, token))
    }

    async fn list_id(&self) -> Result<&str, TicketError> {
        let id = self
            .list_id
            .get_or_try_init(|| self.find_list_by_name())
            .await?;
        Ok(id.as_str())
    }

    /// GET /boards/{id}/lists — find the target list by name (case-insensitive).
    async fn find_list_by_name(&self) -> Result<String, TicketError> {
        let (key, token) = self.credentials()?;
        let board_id = self
            .board_id
            .as_deref()
            .ok_or(TicketError::NotConfigured("trello list id or board id"))?;
        let url = format!("{}/boards/{}/lists", self.api_base, board_id);
        let res = self
            .client
            .get(&url)
            .query(&[("key", key), ("token", token)])
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(TicketError::Api { status, body });
        }
        let lists: Vec<TrelloList> = res.json().await?;
        let found = lists
            .into_iter()
            .find(|l| l.name.eq_ignore_ascii_case(self.list_name.trim()))
            .ok_or_else(|| TicketError::ListNotFound(self.list_name.clone()))?;
        log::info!("trello: resolved list '{}' to {}", self.list_name, found.id);
        Ok(found.id)
    }
}

#[async_trait]
impl TicketSink for TrelloSink {
    /// POST /cards — create a card with name, desc and labels.
    async fn create(&self, ticket: &Ticket) -> Result<CardId, TicketError> {
        let (key, token) = self.credentials()?;
        let list_id = self.list_id().await?;
        let url = format!("{}/cards", self.api_base);
        let labels = ticket.labels.join(",");
        let res = self
            .client
            .post(&url)
            .query(&[
                ("key", key),
                ("token", token),
                ("idList", list_id),
                ("name", ticket.title.as_str()),
                ("desc", ticket.description.as_str()),
                ("idLabels", labels.as_str()),
            ])
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(TicketError::Api { status, body });
        }
        let card: TrelloCard = res.json().await?;
        Ok(card.id)
    }
}
