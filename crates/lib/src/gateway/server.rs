//! Gateway HTTP server (health + webhook).

use crate::bot::SupportBot;
use crate::channels::{render_twiml, TwilioInbound, TWIML_CONTENT_TYPE};
use crate::config::{self, Config};
use crate::directory::{PostgresDirectory, StaticDirectory, UserDirectory};
use crate::menu::INVALID_MESSAGE_REPLY;
use crate::session::MemorySessionStore;
use crate::tickets::{TicketLabels, TrelloSink};
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::FormRejection, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Shared state for the gateway handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub config: Arc<Config>,
    pub bot: Arc<SupportBot>,
}

/// Wire the bot from config: Postgres directory when a database host is set, else the static user list.
pub fn build_bot(config: &Config) -> Result<SupportBot> {
    let directory: Arc<dyn UserDirectory> = match config::resolve_database(config) {
        Some(db) => Arc::new(PostgresDirectory::connect_lazy(
            &db,
            config.directory.timeout_secs,
        )),
        None => {
            let dir = StaticDirectory::from_users(&config.directory.users);
            log::info!("user directory: static list with {} users", dir.len());
            Arc::new(dir)
        }
    };
    let sink = TrelloSink::from_config(config)?;
    let labels = TicketLabels {
        priority: config.ticket_sink.label_id.clone(),
        escalation: config.ticket_sink.escalation_label_id.clone(),
    };
    Ok(SupportBot::new(
        directory,
        Arc::new(sink),
        Arc::new(MemorySessionStore::new()),
        labels,
    ))
}

/// Routes: `GET /` health and `POST {webhookPath}` Twilio webhook.
pub fn router(state: GatewayState) -> Router {
    let webhook_path = normalize_path(&state.config.gateway.webhook_path);
    Router::new()
        .route("/", get(health_http))
        .route(&webhook_path, post(twilio_webhook))
        .with_state(state)
}

fn normalize_path(path: &str) -> String {
    let p = path.trim();
    if p.starts_with('/') {
        p.to_string()
    } else {
        format!("/{}", p)
    }
}

/// Run the gateway until SIGINT/SIGTERM.
pub async fn run_gateway(config: Config) -> Result<()> {
    let bot = build_bot(&config)?;
    let bind = config.gateway.bind.trim().to_string();
    let bind_addr = format!("{}:{}", bind, config.gateway.port);
    let state = GatewayState {
        config: Arc::new(config),
        bot: Arc::new(bot),
    };
    log::info!(
        "webhook route: POST {}",
        normalize_path(&state.config.gateway.webhook_path)
    );
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding to {}", bind_addr))?;
    log::info!("gateway listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("gateway server exited")?;
    log::info!("gateway stopped");
    Ok(())
}

/// Future that completes when the process should shut down (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                log::warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::info!("shutdown signal received, draining connections");
}

/// POST webhook — Twilio form (`Body`, `From`); replies with one TwiML message.
async fn twilio_webhook(
    State(state): State<GatewayState>,
    form: Result<Form<TwilioInbound>, FormRejection>,
) -> impl IntoResponse {
    let reply = match form {
        Ok(Form(form)) => {
            let msg = form.into_inbound();
            let reply = state.bot.handle(&msg).await;
            log::debug!("reply to {}: {}", msg.sender, reply);
            reply
        }
        Err(e) => {
            log::warn!("unreadable webhook payload: {}", e);
            INVALID_MESSAGE_REPLY.to_string()
        }
    };
    (
        [(header::CONTENT_TYPE, TWIML_CONTENT_TYPE)],
        render_twiml(&reply),
    )
}

/// GET / returns a simple health JSON.
async fn health_http(State(state): State<GatewayState>) -> Json<serde_json::Value> {
    Json(json!({
        "runtime": "running",
        "port": state.config.gateway.port,
    }))
}
