// Page handlers for full HTML pages rendered through tera

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tera::Context;

use crate::api_server::{AppError, AppState};
use crate::context::{add_api_uri_context, add_integrations_context};
use crate::help::{add_help_context, resolve_article, HELP_PAGE_TEMPLATE};

pub const API_PAGE_TEMPLATE: &str = "zerver/api.html";
pub const INTEGRATIONS_PAGE_TEMPLATE: &str = "zerver/integrations/index.html";

/// Context every page starts from: the API URL values for this realm
fn api_uri_context(state: &AppState, headers: &HeaderMap) -> Context {
    let subdomain = state.subdomain(headers);
    tracing::debug!("Building page context for subdomain {:?}", subdomain);

    let mut context = Context::new();
    add_api_uri_context(&mut context, &state.settings, &subdomain);
    context
}

// ============================================================================
// API Page
// ============================================================================

pub async fn api_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let context = api_uri_context(&state, &headers);
    Ok(Html(state.renderer.render(API_PAGE_TEMPLATE, &context)?))
}

// ============================================================================
// Help Center
// ============================================================================

pub async fn help_index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    help_page(&state, &headers, "")
}

pub async fn help_article(
    State(state): State<AppState>,
    Path(article): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    help_page(&state, &headers, &article)
}

fn help_page(state: &AppState, headers: &HeaderMap, article: &str) -> Result<Response, AppError> {
    let resolution = resolve_article(&state.renderer, article);

    let mut context = api_uri_context(state, headers);
    add_help_context(&mut context, &state.renderer, &resolution)?;
    let body = state.renderer.render(HELP_PAGE_TEMPLATE, &context)?;

    let status = if resolution.not_found {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    Ok((status, Html(body)).into_response())
}

// ============================================================================
// Integrations Directory
// ============================================================================

pub async fn integrations_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let mut context = api_uri_context(&state, &headers);
    add_integrations_context(&mut context, &state.registry);
    Ok(Html(state.renderer.render(INTEGRATIONS_PAGE_TEMPLATE, &context)?))
}
