//! Registry values for the integrations directory and integration docs

use std::collections::BTreeMap;

use tera::Context;

use crate::registry::{DocContext, Registry};

const SETTINGS_LINK_HTML: &str = r##"<a href="../../#settings">Zulip settings page</a>"##;
const SETTINGS_LINK_TEXT: &str = "Zulip settings page";
const SUBSCRIPTIONS_LINK_HTML: &str = r##"<a target="_blank" href="../../#streams">streams page</a>"##;
const SUBSCRIPTIONS_LINK_TEXT: &str = "streams page";

/// Add the alphabetically sorted registries, the settings/streams link
/// snippets and every entry's own doc context.
///
/// The HTML link variants are only used when `add_api_uri_context` has
/// already set `html_settings_links` to true.
pub fn add_integrations_context(context: &mut Context, registry: &Registry) {
    let categories: BTreeMap<&str, &str> = registry
        .categories()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let integrations: BTreeMap<_, _> = registry
        .integrations()
        .iter()
        .map(|(k, v)| (k.as_str(), v))
        .collect();
    let hubot_lozenges: BTreeMap<_, _> = registry
        .hubot_lozenges()
        .iter()
        .map(|(k, v)| (k.as_str(), v))
        .collect();

    context.insert("categories_dict", &categories);
    context.insert("integrations_dict", &integrations);
    context.insert("hubot_lozenges_dict", &hubot_lozenges);

    let html_links = context
        .get("html_settings_links")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let (settings_html, subscriptions_html) = if html_links {
        (SETTINGS_LINK_HTML, SUBSCRIPTIONS_LINK_HTML)
    } else {
        (SETTINGS_LINK_TEXT, SUBSCRIPTIONS_LINK_TEXT)
    };
    context.insert("settings_html", settings_html);
    context.insert("subscriptions_html", subscriptions_html);

    for integration in integrations.values() {
        integration.add_doc_context(context);
    }
    for lozenge in hubot_lozenges.values() {
        lozenge.add_doc_context(context);
    }
}
