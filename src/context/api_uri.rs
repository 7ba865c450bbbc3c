//! API URL values for pages that show example requests

use tera::Context;

use crate::settings::Settings;
use crate::subdomains::SUBDOMAIN_FOR_ROOT_DOMAIN;

/// Shown in place of a realm when docs are viewed on the landing-page domain
pub const PLACEHOLDER_SUBDOMAIN: &str = "yourZulipDomain";

/// Add `external_api_path_subdomain`, `external_api_uri_subdomain` and
/// `html_settings_links` for the realm at `subdomain`.
pub fn add_api_uri_context(context: &mut Context, settings: &Settings, subdomain: &str) {
    let (display_subdomain, html_settings_links) =
        if subdomain != SUBDOMAIN_FOR_ROOT_DOMAIN || !settings.root_domain_landing_page {
            (subdomain, true)
        } else {
            // No realm to link into from the landing page
            (PLACEHOLDER_SUBDOMAIN, false)
        };

    let external_api_path_subdomain = if display_subdomain != SUBDOMAIN_FOR_ROOT_DOMAIN {
        format!("{}.{}", display_subdomain, settings.external_api_path)
    } else {
        settings.external_api_path.clone()
    };
    let external_api_uri_subdomain = format!(
        "{}{}",
        settings.external_uri_scheme, external_api_path_subdomain
    );

    context.insert("external_api_path_subdomain", &external_api_path_subdomain);
    context.insert("external_api_uri_subdomain", &external_api_uri_subdomain);
    context.insert("html_settings_links", &html_settings_links);
}
