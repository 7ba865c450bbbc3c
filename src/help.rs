//! Help center article resolution

use tera::Context;

use crate::error::Result;
use crate::render::Renderer;

pub const HELP_PAGE_TEMPLATE: &str = "zerver/help/main.html";
const INDEX_ARTICLE: &str = "index";
const MISSING_ARTICLE: &str = "missing";

/// Template path for an article name.
///
/// Names with a `/` never reach the filesystem; they map to the missing
/// article.
pub fn article_path(article: &str) -> String {
    let article = if article.is_empty() {
        INDEX_ARTICLE
    } else if article.contains('/') {
        MISSING_ARTICLE
    } else {
        article
    };
    format!("zerver/help/{}.md", article)
}

/// Outcome of looking up a help article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleResolution {
    /// Template that will actually be shown
    pub path: String,
    pub not_found: bool,
    /// False only on the help center home
    pub not_index_page: bool,
}

pub fn resolve_article(renderer: &Renderer, article: &str) -> ArticleResolution {
    let requested = article_path(article);
    let exists = renderer.has_template(&requested);

    if !exists {
        tracing::warn!("Help article not found: {:?}", article);
    }

    ArticleResolution {
        path: if exists {
            requested.clone()
        } else {
            article_path(MISSING_ARTICLE)
        },
        not_found: !exists || article.contains('/'),
        not_index_page: !requested.ends_with("/index.md"),
    }
}

/// Add the article values to a context that already holds the API URL
/// values, rendering the article body with that same context.
pub fn add_help_context(
    context: &mut Context,
    renderer: &Renderer,
    resolution: &ArticleResolution,
) -> Result<()> {
    context.insert("article", &resolution.path);
    context.insert("not_index_page", &resolution.not_index_page);
    context.insert("page_is_help_center", &true);

    let article_html = renderer.render_markdown_path(&resolution.path, context)?;
    context.insert("article_html", &article_html);
    Ok(())
}
