//! Server configuration
//!
//! Everything the page builders need from the deployment: the external
//! host and API path used to build example URLs, whether the root domain
//! serves a landing page, and where templates and data files live.
//!
//! Values come from environment variables (see `Settings::from_env`), with
//! defaults suitable for local development.

use std::path::PathBuf;

use crate::error::{DocsError, Result};

#[derive(Debug, Clone)]
pub struct Settings {
    /// Host (and optional port) the app is served from, e.g. `zulip.example.com`
    pub external_host: String,
    /// Host plus path prefix of the REST API, e.g. `zulip.example.com/api`
    pub external_api_path: String,
    /// `https://` or `http://`
    pub external_uri_scheme: String,
    /// When true the bare root domain shows a landing page rather than a realm
    pub root_domain_landing_page: bool,
    /// Subdomains that are treated as the root domain (`www` by default)
    pub root_subdomain_aliases: Vec<String>,
    /// Example address for the email gateway; empty disables the integration
    pub email_gateway_example: String,
    pub templates_dir: PathBuf,
    pub api_content_path: PathBuf,
    pub integrations_path: PathBuf,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        let external_host = "localhost:9991".to_string();
        Self {
            external_api_path: format!("{}/api", external_host),
            external_host,
            external_uri_scheme: "https://".to_string(),
            root_domain_landing_page: false,
            root_subdomain_aliases: vec!["www".to_string()],
            email_gateway_example: String::new(),
            templates_dir: PathBuf::from("templates"),
            api_content_path: PathBuf::from("data/api_content.json"),
            integrations_path: PathBuf::from("data/integrations.json"),
            port: 9991,
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup, falling back to
    /// the defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let external_host = lookup("EXTERNAL_HOST").unwrap_or(defaults.external_host);
        // EXTERNAL_API_PATH follows EXTERNAL_HOST unless set explicitly
        let external_api_path = lookup("EXTERNAL_API_PATH")
            .unwrap_or_else(|| format!("{}/api", external_host));

        let root_domain_landing_page = match lookup("ROOT_DOMAIN_LANDING_PAGE") {
            Some(raw) => parse_bool("ROOT_DOMAIN_LANDING_PAGE", &raw)?,
            None => defaults.root_domain_landing_page,
        };

        let root_subdomain_aliases = match lookup("ROOT_SUBDOMAIN_ALIASES") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.root_subdomain_aliases,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| DocsError::Setting {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            external_host,
            external_api_path,
            external_uri_scheme: lookup("EXTERNAL_URI_SCHEME")
                .unwrap_or(defaults.external_uri_scheme),
            root_domain_landing_page,
            root_subdomain_aliases,
            email_gateway_example: lookup("EMAIL_GATEWAY_EXAMPLE")
                .unwrap_or(defaults.email_gateway_example),
            templates_dir: lookup("TEMPLATES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.templates_dir),
            api_content_path: lookup("API_CONTENT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.api_content_path),
            integrations_path: lookup("INTEGRATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.integrations_path),
            port,
        })
    }
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(DocsError::Setting {
            name,
            value: raw.to_string(),
        }),
    }
}
