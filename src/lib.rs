//! Zulip documentation pages
//!
//! Server-rendered help center, integrations directory, integration docs
//! and API endpoint reference.
//!
//! - `settings`: deployment configuration from the environment
//! - `subdomains`: realm subdomain from the request host
//! - `registry`: categories, integrations and Hubot lozenges
//! - `render`: tera templates + markdown conversion
//! - `context`: shared context builders for the pages
//! - `help`: help article resolution
//! - `catalog`: example API call catalog for the endpoint reference
//! - `api_server` / `web`: axum router and handlers (feature `api`)

pub mod catalog;
pub mod context;
pub mod error;
pub mod help;
pub mod registry;
pub mod render;
pub mod settings;
pub mod subdomains;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use error::{DocsError, Result};
pub use registry::{DocContext, HubotLozenge, Integration, IntegrationKind, Registry};
pub use render::Renderer;
pub use settings::Settings;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
