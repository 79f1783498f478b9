use axum::{
    Json, Router,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::theme::{Theme, css};
use crate::ui::render_page;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let timeout_duration = Duration::from_secs(state.config.server.request_timeout_secs);

    let mut app = Router::new()
        .route("/", get(index))
        .route("/theme.css", get(theme_css))
        .route("/healthz", get(healthz));

    if let Some(dir) = &state.config.server.static_dir {
        info!(name: "server.static", dir = %dir.display(), "Serving static files");
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    app.layer(axum::middleware::from_fn(
        move |req: Request, next: Next| async move {
            match tokio::time::timeout(timeout_duration, next.run(req)).await {
                Ok(res) => res,
                Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
            }
        },
    ))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Start the Axum server with the provided configuration and theme.
pub async fn start_server(config: Arc<AppConfig>, theme: Arc<Theme>) -> anyhow::Result<()> {
    let state = AppState {
        config: Arc::clone(&config),
        theme,
    };
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        layout = %config.page.layout,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - The rendered page.
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.theme, &state.config.page))
}

/// GET /theme.css - Stylesheet for the active theme.
async fn theme_css(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        css::stylesheet(&state.theme),
    )
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    theme: String,
    layout: &'static str,
}

/// GET /healthz - Liveness and active settings.
async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        theme: state.theme.name.clone(),
        layout: state.config.page.layout.as_str(),
    })
}
