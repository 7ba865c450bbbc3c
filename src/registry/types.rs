//! Registry entry types and the per-entry doc context hook

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tera::Context;

use crate::settings::Settings;

// ============================================================================
// Doc Context Hook
// ============================================================================

/// Lets a registry entry inject its own values into the context that
/// integration docs are rendered with.
///
/// Every entry is called on the same shared context, so keys should be
/// specific to the entry unless they are meant to be global.
pub trait DocContext {
    fn add_doc_context(&self, _context: &mut Context) {}
}

// ============================================================================
// Integrations
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntegrationKind {
    #[default]
    Generic,
    /// Incoming webhook; `url` defaults to `api/v1/external/{name}`
    Webhook {
        #[serde(default)]
        url: String,
    },
    /// Email gateway; only usable when the server has one configured
    Email {
        #[serde(skip_deserializing)]
        gateway_example: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    pub name: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub secondary_line_text: Option<String>,
    /// Template path of the markdown documentation
    #[serde(default)]
    pub doc: String,
    #[serde(default)]
    pub stream_name: String,
    #[serde(default)]
    pub legacy: bool,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Extra values the doc template starts from
    #[serde(default)]
    pub doc_context: Option<Map<String, Value>>,
    #[serde(default)]
    pub kind: IntegrationKind,
    #[serde(skip_deserializing)]
    pub is_enabled: bool,
}

impl Integration {
    /// Fill in every field left empty in the registry file.
    pub(crate) fn apply_defaults(&mut self, settings: &Settings) {
        if self.display_name.is_empty() {
            self.display_name = title_case(&self.name);
        }
        if self.client_name.is_empty() {
            self.client_name = self.display_name.clone();
        }
        if self.logo.is_empty() {
            self.logo = format!("/static/images/integrations/logos/{}.png", self.name);
        }
        if self.doc.is_empty() {
            self.doc = format!("zerver/integrations/{}.md", self.name);
        }
        if self.stream_name.is_empty() {
            self.stream_name = self.name.clone();
        }

        self.is_enabled = true;
        match &mut self.kind {
            IntegrationKind::Generic => {}
            IntegrationKind::Webhook { url } => {
                if url.is_empty() {
                    *url = format!("api/v1/external/{}", self.name);
                }
            }
            IntegrationKind::Email { gateway_example } => {
                *gateway_example = settings.email_gateway_example.clone();
                self.is_enabled = !gateway_example.is_empty();
            }
        }
    }

    fn context_key(&self, suffix: &str) -> String {
        format!("{}_{}", self.name.replace('-', "_"), suffix)
    }
}

impl DocContext for Integration {
    fn add_doc_context(&self, context: &mut Context) {
        match &self.kind {
            IntegrationKind::Generic => {}
            IntegrationKind::Webhook { url } => {
                context.insert(self.context_key("webhook_url"), url);
            }
            IntegrationKind::Email { gateway_example } => {
                context.insert("email_gateway_example", gateway_example);
            }
        }
    }
}

// ============================================================================
// Hubot Lozenges
// ============================================================================

/// Badge for a third-party Hubot script shown in the integrations directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubotLozenge {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub git_url: String,
}

impl HubotLozenge {
    pub(crate) fn apply_defaults(&mut self) {
        if self.display_name.is_empty() {
            self.display_name = title_case(&self.name);
        }
        if self.logo.is_empty() {
            self.logo = format!("/static/images/integrations/logos/{}.png", self.name);
        }
        if self.git_url.is_empty() {
            self.git_url = format!("https://github.com/hubot-scripts/hubot-{}", self.name);
        }
    }
}

impl DocContext for HubotLozenge {}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
