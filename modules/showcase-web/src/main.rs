use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tokio::sync::OnceCell;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio_client::ContentClient;
use showcase_common::Config;
use showcase_views::{AdminView, ContentStore};

mod pages;
mod templates;

// --- App State ---

pub struct AppState {
    store: Arc<dyn ContentStore>,
    /// Shared by every admin request for the life of the process.
    admin: AdminView,
    admin_loaded: OnceCell<()>,
}

impl AppState {
    fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            admin: AdminView::new(store.clone()),
            store,
            admin_loaded: OnceCell::new(),
        }
    }
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("showcase=info".parse()?))
        .init();

    let config = Config::from_env()?;
    config.log_summary();

    let client = ContentClient::new(&config.backend_url)?;
    let state = Arc::new(AppState::new(Arc::new(client)));

    let app = build_router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Showcase web server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::public_page))
        .route("/admin", get(pages::admin_page))
        .route("/admin/reload", post(pages::admin_reload))
        .route("/admin/profile", post(pages::profile_submit))
        .route("/admin/projects", post(pages::project_submit))
        .route("/admin/projects/{id}/delete", post(pages::project_delete))
        .with_state(state)
        // Drafts and content change under the page; never serve a cached copy.
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
