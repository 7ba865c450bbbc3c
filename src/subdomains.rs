//! Realm subdomain detection from the request host

use crate::settings::Settings;

/// Subdomain value meaning "the bare root domain"
pub const SUBDOMAIN_FOR_ROOT_DOMAIN: &str = "";

/// Extract the realm subdomain from a `Host` header value.
///
/// `chat.example.com` with `EXTERNAL_HOST = example.com` gives `chat`.
/// Ports are ignored on both sides. Hosts that are not under the external
/// host, and configured root aliases such as `www`, give the root sentinel.
pub fn get_subdomain(host: &str, settings: &Settings) -> String {
    let host = strip_port(host.trim()).to_lowercase();
    let external = strip_port(&settings.external_host).to_lowercase();

    let suffix = format!(".{}", external);
    let Some(subdomain) = host.strip_suffix(&suffix) else {
        return SUBDOMAIN_FOR_ROOT_DOMAIN.to_string();
    };

    if settings
        .root_subdomain_aliases
        .iter()
        .any(|alias| alias == subdomain)
    {
        return SUBDOMAIN_FOR_ROOT_DOMAIN.to_string();
    }

    subdomain.to_string()
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}
