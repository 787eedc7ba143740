use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use frontdesk::config::AppConfig;
use frontdesk::db;
use frontdesk::handlers;
use frontdesk::session::SessionState;
use frontdesk::state::AppState;
use frontdesk::store::SqliteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    let store = SqliteStore::new(Arc::new(Mutex::new(conn)));

    let state = Arc::new(AppState {
        store: Box::new(store),
        session: Mutex::new(SessionState::new()),
    });

    let app = Router::new()
        .route("/", get(handlers::dashboard::dashboard_page))
        .route("/health", get(handlers::health::health))
        .route("/api/dashboard", get(handlers::dashboard::render_dashboard))
        .route(
            "/api/session/select",
            post(handlers::dashboard::toggle_selection),
        )
        .route(
            "/api/session/add-customer",
            post(handlers::dashboard::open_add_customer),
        )
        .route("/api/session/back", post(handlers::dashboard::back_home))
        .route(
            "/api/session/conversation",
            post(handlers::dashboard::open_conversation),
        )
        .route("/api/customers", post(handlers::customers::add_customer))
        .route(
            "/api/customers/approve",
            post(handlers::customers::approve_selected),
        )
        .route(
            "/api/customers/decline",
            post(handlers::customers::decline_selected),
        )
        .route(
            "/api/customers/remove",
            post(handlers::customers::remove_selected),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
