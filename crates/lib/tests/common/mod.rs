//! Stub Trello API for integration tests: records card requests, serves one board's lists.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    listener.local_addr().expect("local_addr").port()
}

#[derive(Clone, Default)]
pub struct TrelloStub {
    /// Query params of every POST /cards.
    pub cards: Arc<Mutex<Vec<HashMap<String, String>>>>,
    pub list_lookups: Arc<Mutex<usize>>,
    /// When set, POST /cards answers 401 with this body.
    pub reject_with: Option<String>,
}

impl TrelloStub {
    pub fn rejecting(body: &str) -> Self {
        Self {
            reject_with: Some(body.to_string()),
            ..Self::default()
        }
    }

    /// Serve on a free port; returns the api base URL (e.g. http://127.0.0.1:1234/1).
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/1/cards", post(create_card))
            .route("/1/boards/:board_id/lists", get(board_lists))
            .with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{}/1", addr)
    }

    pub fn cards(&self) -> Vec<HashMap<String, String>> {
        self.cards.lock().unwrap().clone()
    }
}

async fn create_card(
    State(stub): State<TrelloStub>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    stub.cards.lock().unwrap().push(params);
    match stub.reject_with {
        Some(ref body) => (StatusCode::UNAUTHORIZED, body.clone()),
        None => {
            let n = stub.cards.lock().unwrap().len();
            (StatusCode::OK, json!({ "id": format!("card-{}", n) }).to_string())
        }
    }
}

async fn board_lists(
    State(stub): State<TrelloStub>,
    Path(board_id): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    *stub.list_lookups.lock().unwrap() += 1;
    if board_id != "board-1" {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "board not found" })));
    }
    (
        StatusCode::OK,
        Json(json!([
            { "id": "list-backlog", "name": "Backlog" },
            { "id": "list-todo", "name": "To Do" },
        ])),
    )
}
