// Axum server module
//
// Purpose: serve the help center, integrations directory, integration docs
// and API reference pages from templates + static data loaded at startup.

use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::error::DocsError;
use crate::registry::Registry;
use crate::render::Renderer;
use crate::settings::Settings;
use crate::subdomains::get_subdomain;
use crate::web::handlers::{docs, pages};

// ============================================================================
// Application State
// ============================================================================

/// Everything a request needs. All of it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub registry: Arc<Registry>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        tracing::info!("Loading templates from {}...", settings.templates_dir.display());
        let renderer = Renderer::load(&settings.templates_dir)?;

        tracing::info!("Loading integration registry from {}...", settings.integrations_path.display());
        let registry = Registry::load(&settings)?;

        Ok(Self::from_parts(settings, registry, renderer))
    }

    pub fn from_parts(settings: Settings, registry: Registry, renderer: Renderer) -> Self {
        Self {
            settings: Arc::new(settings),
            registry: Arc::new(registry),
            renderer: Arc::new(renderer),
        }
    }

    /// Realm subdomain the request was made on
    pub fn subdomain(&self, headers: &HeaderMap) -> String {
        let host = headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("");
        get_subdomain(host, &self.settings)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // API documentation
        .route("/api/", get(pages::api_page))
        .route("/api/endpoints/", get(docs::api_endpoint_docs))

        // Help center
        .route("/help", get(pages::help_index))
        .route("/help/", get(pages::help_index))
        .route("/help/*article", get(pages::help_article))

        // Integrations
        .route("/integrations/", get(pages::integrations_page))
        .route("/integrations/doc-html", get(docs::integration_doc))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Docs(DocsError),
}

impl From<DocsError> for AppError {
    fn from(err: DocsError) -> Self {
        AppError::Docs(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Docs(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        tracing::error!("Request failed: {}", message);

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
