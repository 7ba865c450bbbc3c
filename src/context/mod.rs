//! Context builders shared by the documentation pages
//!
//! Both helpers write into a request-scoped `tera::Context`. Order matters:
//! `add_integrations_context` reads the `html_settings_links` flag that
//! `add_api_uri_context` sets.

pub mod api_uri;
pub mod integrations;

pub use api_uri::{add_api_uri_context, PLACEHOLDER_SUBDOMAIN};
pub use integrations::add_integrations_context;
