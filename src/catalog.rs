//! API Endpoint Catalog
//!
//! The endpoint reference page is built from a JSON array of example calls:
//!
//! ```json
//! [{
//!   "endpoint": "messages",
//!   "example_request": {"curl": "curl https://api.zulip.com/v1/messages ...", "python": "..."},
//!   "example_response": "{\"result\": \"success\", \"msg\": \"\"}"
//! }]
//! ```
//!
//! Every request rewrites the calls for the realm being viewed: endpoints
//! and curl examples point at the realm's API, and one-line responses are
//! spread over several lines before being rendered as a code block.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tera::Context;

use crate::error::{DocsError, Result};
use crate::render::render_code_block;

pub const API_ENDPOINTS_TEMPLATE: &str = "zerver/api_endpoints.html";

/// Host hard-coded in the curl examples of the catalog file
pub const CATALOG_API_HOST: &str = "https://api.zulip.com";

const API_VERSION: &str = "v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCall {
    pub endpoint: String,
    /// Example request text keyed by language (`curl`, `python`, ...)
    pub example_request: Map<String, Value>,
    pub example_response: String,
    #[serde(default)]
    pub rendered_response: String,
    /// Any other fields, passed to the template untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub fn parse_api_calls(raw: &str, path: &Path) -> Result<Vec<ApiCall>> {
    serde_json::from_str(raw).map_err(|source| DocsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_api_calls(path: &Path) -> Result<Vec<ApiCall>> {
    let raw = std::fs::read_to_string(path).map_err(|source| DocsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_api_calls(&raw, path)
}

/// Spread a one-line response over several lines by breaking after every
/// `", "`. Multi-line responses are returned unchanged.
///
/// This is a plain text substitution, so a comma followed by a space inside
/// a JSON string value is broken too.
pub fn pretty_print_response(response: &str) -> String {
    if response.contains('\n') {
        response.to_string()
    } else {
        response.replace(", ", ",\n ")
    }
}

/// Rewrite every call for the API at `external_api_uri` and return the set
/// of example languages they use.
pub fn prepare_api_calls(calls: &mut [ApiCall], external_api_uri: &str) -> BTreeSet<String> {
    let mut langs = BTreeSet::new();

    for call in calls.iter_mut() {
        call.endpoint = format!("{}/{}/{}", external_api_uri, API_VERSION, call.endpoint);

        if let Some(Value::String(curl)) = call.example_request.get_mut("curl") {
            *curl = curl.replace(CATALOG_API_HOST, external_api_uri);
        }

        let response = pretty_print_response(&call.example_response);
        call.rendered_response = render_code_block(&response, "py");

        langs.extend(call.example_request.keys().cloned());
    }

    langs
}

pub fn add_api_endpoints_context(context: &mut Context, calls: &[ApiCall], langs: &BTreeSet<String>) {
    context.insert("content", calls);
    context.insert("langs", langs);
}
