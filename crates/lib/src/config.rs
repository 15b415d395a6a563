//! Configuration types and loading.
//!
//! Config is loaded from a JSON file (e.g. `~/.ticketbot/config.json`) and environment.
//! Environment variables win over the file for database and ticketing credentials.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Gateway server settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// User directory settings (Postgres connection or a static user list).
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Ticket sink settings (Trello).
    #[serde(default)]
    pub ticket_sink: TicketSinkConfig,
}

/// Gateway bind, port, and webhook route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    /// Port for HTTP (default 5001).
    #[serde(default = "default_gateway_port")]
    pub port: u16,

    /// Bind address (default "0.0.0.0"; Twilio must be able to reach the webhook).
    #[serde(default = "default_gateway_bind")]
    pub bind: String,

    /// Route that receives Twilio's inbound message POSTs (default "/whatsapp").
    #[serde(default = "default_webhook_path")]
    pub webhook_path: String,
}

fn default_gateway_port() -> u16 {
    5001
}

fn default_gateway_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_webhook_path() -> String {
    "/whatsapp".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_gateway_port(),
            bind: default_gateway_bind(),
            webhook_path: default_webhook_path(),
        }
    }
}

/// User directory: Postgres connection parameters, or a static list when no host is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryConfig {
    /// Database host. Overridden by DB_HOST env.
    pub host: Option<String>,
    /// Database port (default 5432). Overridden by DB_PORT env.
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// Overridden by DB_USER env.
    pub user: Option<String>,
    /// Overridden by DB_PASSWORD env.
    pub password: Option<String>,
    /// Database name. Overridden by DB_NAME env.
    pub database: Option<String>,
    /// Upper bound for a single lookup, in seconds (default 5).
    #[serde(default = "default_directory_timeout")]
    pub timeout_secs: u64,
    /// Registered users, used only when no database host is configured.
    #[serde(default)]
    pub users: Vec<StaticUser>,
}

/// One registered number in the static directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticUser {
    /// Phone number as digits, or in any form `SenderId::normalize` accepts.
    pub phone: String,
    #[serde(default)]
    pub property_name: Option<String>,
}

fn default_db_port() -> u16 {
    5432
}

fn default_directory_timeout() -> u64 {
    5
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: default_db_port(),
            user: None,
            password: None,
            database: None,
            timeout_secs: default_directory_timeout(),
            users: Vec::new(),
        }
    }
}

/// Trello card creation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSinkConfig {
    /// Overridden by TRELLO_API_KEY env.
    pub api_key: Option<String>,
    /// Overridden by TRELLO_TOKEN env.
    pub token: Option<String>,
    /// Overridden by BOARD_ID env.
    pub board_id: Option<String>,
    /// Target list for new cards. Overridden by LIST_ID env. When unset, resolved from board_id + list_name.
    pub list_id: Option<String>,
    /// List name to look up on the board when list_id is unset (default "To Do").
    #[serde(default = "default_list_name")]
    pub list_name: String,
    /// Priority label attached to every card.
    #[serde(default = "default_label_id")]
    pub label_id: String,
    /// Extra label attached only to escalation tickets.
    #[serde(default)]
    pub escalation_label_id: Option<String>,
    /// Trello REST base URL (default "https://api.trello.com/1").
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Upper bound for one Trello request, in seconds (default 10).
    #[serde(default = "default_sink_timeout")]
    pub timeout_secs: u64,
}

fn default_list_name() -> String {
    "To Do".to_string()
}

fn default_label_id() -> String {
    "67ddbefcd6ea43e469645540".to_string()
}

fn default_api_base() -> String {
    "https://api.trello.com/1".to_string()
}

fn default_sink_timeout() -> u64 {
    10
}

impl Default for TicketSinkConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            token: None,
            board_id: None,
            list_id: None,
            list_name: default_list_name(),
            label_id: default_label_id(),
            escalation_label_id: None,
            api_base: default_api_base(),
            timeout_secs: default_sink_timeout(),
        }
    }
}

/// Non-blank env var, trimmed.
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|s| {
        let t = s.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    })
}

/// Env var `name` overrides the config value; blank values count as unset.
fn resolve(name: &str, configured: Option<&String>) -> Option<String> {
    env_value(name).or_else(|| {
        configured
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    })
}

/// Effective Postgres connection parameters after env overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDatabase {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

/// Resolve the database connection: None when no host is configured (static directory is used).
pub fn resolve_database(config: &Config) -> Option<ResolvedDatabase> {
    let d = &config.directory;
    let host = resolve("DB_HOST", d.host.as_ref())?;
    let port = match env_value("DB_PORT") {
        Some(p) => match p.parse() {
            Ok(port) => port,
            Err(_) => {
                log::warn!("ignoring invalid DB_PORT value: {}", p);
                d.port
            }
        },
        None => d.port,
    };
    Some(ResolvedDatabase {
        host,
        port,
        user: resolve("DB_USER", d.user.as_ref()),
        password: resolve("DB_PASSWORD", d.password.as_ref()),
        database: resolve("DB_NAME", d.database.as_ref()),
    })
}

/// Effective Trello credentials and targets after env overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTicketSink {
    pub api_key: Option<String>,
    pub token: Option<String>,
    pub board_id: Option<String>,
    pub list_id: Option<String>,
}

/// Resolve Trello key, token, board and list: env TRELLO_API_KEY, TRELLO_TOKEN, BOARD_ID, LIST_ID override config.
pub fn resolve_ticket_sink(config: &Config) -> ResolvedTicketSink {
    let t = &config.ticket_sink;
    ResolvedTicketSink {
        api_key: resolve("TRELLO_API_KEY", t.api_key.as_ref()),
        token: resolve("TRELLO_TOKEN", t.token.as_ref()),
        board_id: resolve("BOARD_ID", t.board_id.as_ref()),
        list_id: resolve("LIST_ID", t.list_id.as_ref()),
    }
}

/// Resolve config path from env or default.
pub fn default_config_path() -> PathBuf {
    std::env::var("TICKETBOT_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(".ticketbot").join("config.json"))
                .unwrap_or_else(|| PathBuf::from("config.json"))
        })
}

/// Load config from the given path, TICKETBOT_CONFIG_PATH, or the default. Missing file => default config.
/// Returns the config and the path that was used.
pub fn load_config(path: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    let path = path.unwrap_or_else(default_config_path);
    let config = if !path.exists() {
        log::debug!("config file not found, using defaults: {}", path.display());
        Config::default()
    } else {
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        serde_json::from_str(&s)
            .with_context(|| format!("parsing config from {}", path.display()))?
    };
    Ok((config, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gateway_port_and_bind() {
        let g = GatewayConfig::default();
        assert_eq!(g.port, 5001);
        assert_eq!(g.bind, "0.0.0.0");
        assert_eq!(g.webhook_path, "/whatsapp");
    }

    #[test]
    fn empty_json_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.directory.port, 5432);
        assert_eq!(config.directory.timeout_secs, 5);
        assert_eq!(config.ticket_sink.list_name, "To Do");
        assert_eq!(config.ticket_sink.label_id, "67ddbefcd6ea43e469645540");
        assert_eq!(config.ticket_sink.api_base, "https://api.trello.com/1");
    }

    #[test]
    fn parses_camel_case_sections() {
        let json = r#"{
            "gateway": { "port": 8080, "webhookPath": "/hook" },
            "directory": { "users": [ { "phone": "15551234567", "propertyName": "Seaside Inn" } ] },
            "ticketSink": { "escalationLabelId": "esc", "timeoutSecs": 3 }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.gateway.bind, "0.0.0.0");
        assert_eq!(config.gateway.webhook_path, "/hook");
        assert_eq!(config.directory.users.len(), 1);
        assert_eq!(
            config.directory.users[0].property_name.as_deref(),
            Some("Seaside Inn")
        );
        assert_eq!(config.ticket_sink.escalation_label_id.as_deref(), Some("esc"));
        assert_eq!(config.ticket_sink.timeout_secs, 3);
    }

    #[test]
    fn blank_configured_value_is_unset() {
        let blank = "  ".to_string();
        assert_eq!(resolve("TICKETBOT_TEST_UNSET_VAR", Some(&blank)), None);
        let set = " abc ".to_string();
        assert_eq!(
            resolve("TICKETBOT_TEST_UNSET_VAR", Some(&set)).as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn load_config_missing_file_is_default() {
        let path = std::env::temp_dir().join("ticketbot-no-such-dir/config.json");
        let (config, used) = load_config(Some(path.clone())).unwrap();
        assert_eq!(used, path);
        assert_eq!(config.gateway.port, 5001);
    }
}
