// Documentation handlers: integration doc fragments and the API reference

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tera::Context;

use crate::api_server::{AppError, AppState};
use crate::catalog::{add_api_endpoints_context, parse_api_calls, prepare_api_calls, API_ENDPOINTS_TEMPLATE};
use crate::context::{add_api_uri_context, add_integrations_context};
use crate::error::DocsError;

#[derive(Debug, Deserialize)]
pub struct IntegrationDocQuery {
    pub integration_name: Option<String>,
}

/// Rendered markdown docs for one integration, returned as a bare HTML
/// fragment for the directory page to load in place.
pub async fn integration_doc(
    State(state): State<AppState>,
    Query(params): Query<IntegrationDocQuery>,
) -> Result<Response, AppError> {
    let integration = match params
        .integration_name
        .as_deref()
        .and_then(|name| state.registry.integration(name))
    {
        Some(integration) => integration,
        None => {
            tracing::warn!("Unknown integration requested: {:?}", params.integration_name);
            return Ok(StatusCode::NOT_FOUND.into_response());
        }
    };

    let mut context = Context::new();
    if let Some(doc_context) = &integration.doc_context {
        for (key, value) in doc_context {
            context.insert(key.as_str(), value);
        }
    }
    add_integrations_context(&mut context, &state.registry);

    let html = state.renderer.render_markdown_path(&integration.doc, &context)?;
    Ok(Html(html).into_response())
}

/// API reference built from the example-call catalog
pub async fn api_endpoint_docs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let subdomain = state.subdomain(&headers);
    let mut uri_context = Context::new();
    add_api_uri_context(&mut uri_context, &state.settings, &subdomain);
    let external_api_uri = uri_context
        .get("external_api_uri_subdomain")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let path = &state.settings.api_content_path;
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DocsError::Io {
            path: path.clone(),
            source,
        })?;
    let mut calls = parse_api_calls(&raw, path)?;
    let langs = prepare_api_calls(&mut calls, &external_api_uri);
    tracing::debug!("Prepared {} API calls in {} languages", calls.len(), langs.len());

    let mut context = Context::new();
    add_api_endpoints_context(&mut context, &calls, &langs);
    Ok(Html(state.renderer.render(API_ENDPOINTS_TEMPLATE, &context)?))
}
