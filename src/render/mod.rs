//! Template Rendering
//!
//! Page templates (`.html`) and markdown documents (`.md`) live in one tera
//! instance so markdown can use the same context values as the pages.
//! Only `.html`/`.htm`/`.xml` templates are auto-escaped; markdown is
//! expanded raw and converted afterwards.

pub mod markdown;

pub use markdown::{markdown_to_html, render_code_block};

use std::path::Path;

use tera::{Context, Tera};

use crate::error::Result;

#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Load every template under `dir`, named by their path relative to it
    pub fn load(dir: &Path) -> Result<Self> {
        let glob = format!("{}/**/*", dir.display());
        let tera = Tera::new(&glob)?;
        tracing::info!(
            "Loaded {} templates from {}",
            tera.get_template_names().count(),
            dir.display()
        );
        Ok(Self { tera })
    }

    /// Build a renderer from in-memory `(name, source)` pairs
    pub fn from_templates<'a, I>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;
        Ok(Self { tera })
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(name, context)?)
    }

    /// Expand a markdown template with `context`, then convert it to HTML
    pub fn render_markdown_path(&self, name: &str, context: &Context) -> Result<String> {
        let source = self.tera.render(name, context)?;
        Ok(markdown_to_html(&source))
    }
}
