use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::session::Page;
use crate::state::AppState;
use crate::view::{self, DashboardView};

static DASHBOARD_HTML: &str = include_str!("../web/dashboard.html");

// GET /
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

// GET /api/dashboard
//
// Re-derives the active view from the store snapshot and the session state.
// Search and status filter arrive as query parameters because they belong to
// the render, not to the session.
pub async fn render_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>, AppError> {
    let (page, conversation_id) = {
        let session = state.session.lock().unwrap();
        (session.page(), session.conversation_id().map(str::to_string))
    };

    let rendered = match page {
        Page::Home => {
            let snapshot = state.store.fetch_all().await?;
            let session = state.session.lock().unwrap();
            view::render_home(
                &snapshot,
                &session,
                query.search.as_deref().unwrap_or(""),
                query.status.as_deref(),
            )
        }
        Page::AddCustomer => view::render_add_customer(),
        Page::ShowConversation => {
            let id = conversation_id
                .ok_or_else(|| AppError::NotFound("no customer selected".to_string()))?;
            let turns = state.store.fetch_conversation(&id).await?;
            view::render_conversation(&id, &turns)
        }
    };

    Ok(Json(rendered))
}

// POST /api/session/select
#[derive(Deserialize)]
pub struct SelectRequest {
    pub identity_card_number: String,
    pub selected: bool,
}

pub async fn toggle_selection(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SelectRequest>,
) -> Json<serde_json::Value> {
    let mut session = state.session.lock().unwrap();
    session.toggle_selection(&body.identity_card_number, body.selected);
    Json(serde_json::json!({ "ok": true, "selected_count": session.selected_count() }))
}

// POST /api/session/add-customer
pub async fn open_add_customer(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    state.session.lock().unwrap().open_add_customer();
    Json(serde_json::json!({ "ok": true }))
}

// POST /api/session/back
pub async fn back_home(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    state.session.lock().unwrap().back_home();
    Json(serde_json::json!({ "ok": true }))
}

// POST /api/session/conversation
//
// Refused unless exactly one row is checked; the page stays on Home and the
// warning goes back to the client as the error body.
pub async fn open_conversation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = {
        let mut session = state.session.lock().unwrap();
        session.open_conversation()?
    };

    tracing::info!(id = %id, "opening conversation view");
    Ok(Json(serde_json::json!({ "ok": true, "identity_card_number": id })))
}
