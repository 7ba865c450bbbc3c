//! Integration Registry
//!
//! The categories, integrations and Hubot lozenges shown on the
//! integrations pages. Loaded once at startup from a JSON file and shared
//! read-only with every request.
//!
//! File layout:
//! ```json
//! {
//!   "categories": {"dev-tools": "Version control"},
//!   "integrations": [{"name": "github", "categories": ["dev-tools"]}],
//!   "hubot_lozenges": [{"name": "assembla"}]
//! }
//! ```

pub mod types;

pub use types::{DocContext, HubotLozenge, Integration, IntegrationKind};

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DocsError, Result};
use crate::settings::Settings;

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    categories: HashMap<String, String>,
    #[serde(default)]
    integrations: Vec<Integration>,
    #[serde(default)]
    hubot_lozenges: Vec<HubotLozenge>,
}

#[derive(Debug, Default)]
pub struct Registry {
    categories: HashMap<String, String>,
    integrations: HashMap<String, Integration>,
    hubot_lozenges: HashMap<String, HubotLozenge>,
}

impl Registry {
    /// Build a registry, filling entry defaults and checking that names are
    /// unique and every referenced category exists.
    pub fn new(
        categories: HashMap<String, String>,
        integrations: Vec<Integration>,
        hubot_lozenges: Vec<HubotLozenge>,
        settings: &Settings,
    ) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(integrations.len());
        for mut integration in integrations {
            integration.apply_defaults(settings);
            if let Some(category) = integration
                .categories
                .iter()
                .find(|c| !categories.contains_key(c.as_str()))
            {
                return Err(DocsError::Registry(format!(
                    "integration '{}' uses unknown category '{}'",
                    integration.name, category
                )));
            }
            let name = integration.name.clone();
            if by_name.insert(name.clone(), integration).is_some() {
                return Err(DocsError::Registry(format!(
                    "duplicate integration '{}'",
                    name
                )));
            }
        }

        let mut lozenges = HashMap::with_capacity(hubot_lozenges.len());
        for mut lozenge in hubot_lozenges {
            lozenge.apply_defaults();
            let name = lozenge.name.clone();
            if lozenges.insert(name.clone(), lozenge).is_some() {
                return Err(DocsError::Registry(format!(
                    "duplicate hubot lozenge '{}'",
                    name
                )));
            }
        }

        Ok(Self {
            categories,
            integrations: by_name,
            hubot_lozenges: lozenges,
        })
    }

    pub fn from_json_str(raw: &str, settings: &Settings) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(raw).map_err(|source| DocsError::Json {
            path: Path::new("<inline>").to_path_buf(),
            source,
        })?;
        Self::new(file.categories, file.integrations, file.hubot_lozenges, settings)
    }

    /// Load the registry file named by `settings.integrations_path`
    pub fn load(settings: &Settings) -> Result<Self> {
        let path = &settings.integrations_path;
        let raw = std::fs::read_to_string(path).map_err(|source| DocsError::Io {
            path: path.clone(),
            source,
        })?;
        let file: RegistryFile = serde_json::from_str(&raw).map_err(|source| DocsError::Json {
            path: path.clone(),
            source,
        })?;

        let registry = Self::new(file.categories, file.integrations, file.hubot_lozenges, settings)?;
        tracing::info!(
            "Loaded registry: {} categories, {} integrations, {} hubot lozenges",
            registry.categories.len(),
            registry.integrations.len(),
            registry.hubot_lozenges.len()
        );
        Ok(registry)
    }

    pub fn categories(&self) -> &HashMap<String, String> {
        &self.categories
    }

    pub fn integrations(&self) -> &HashMap<String, Integration> {
        &self.integrations
    }

    pub fn hubot_lozenges(&self) -> &HashMap<String, HubotLozenge> {
        &self.hubot_lozenges
    }

    pub fn integration(&self, name: &str) -> Option<&Integration> {
        self.integrations.get(name)
    }
}
