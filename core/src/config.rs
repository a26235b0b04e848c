//! Base URL resolution and client configuration.
//!
//! # Design
//! `resolve_base_url` is pure: the configured URL and the host the client
//! runs on are passed in explicitly. Only `ClientConfig::from_env` reads the
//! process environment, once, at composition time.
//!
//! A configured URL naming an internal `backend` host is only reachable from
//! inside a container network. When the client itself runs on loopback that
//! host cannot resolve, so the URL is replaced with the local fallback. The
//! check is a literal substring match and only fires for loopback hosts.

use std::env;

use log::debug;

/// Base URL used when nothing usable is configured.
pub const FALLBACK_BASE_URL: &str = "http://localhost:8080";

/// Environment variable holding the target base URL.
pub const API_URL_VAR: &str = "TODO_API_URL";

/// Environment variable holding the hostname the client runs on.
pub const CLIENT_HOST_VAR: &str = "TODO_CLIENT_HOST";

const INTERNAL_HOST_MARKER: &str = "backend";
const LOOPBACK_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Pick the base URL every request is sent to.
pub fn resolve_base_url(configured: Option<&str>, current_host: Option<&str>) -> String {
    let on_loopback = current_host.is_some_and(|host| LOOPBACK_HOSTS.contains(&host));
    match configured {
        Some(url) if url.contains(INTERNAL_HOST_MARKER) && on_loopback => {
            debug!("configured url {url} names an internal host; using {FALLBACK_BASE_URL}");
            FALLBACK_BASE_URL.to_string()
        }
        Some(url) => url.to_string(),
        None => FALLBACK_BASE_URL.to_string(),
    }
}

/// Inputs to base URL resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub configured_url: Option<String>,
    pub current_host: Option<String>,
}

impl ClientConfig {
    /// Read `TODO_API_URL` and `TODO_CLIENT_HOST`, loading `.env` first if
    /// one exists. Empty values count as unset.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            configured_url: non_empty_var(API_URL_VAR),
            current_host: non_empty_var(CLIENT_HOST_VAR),
        }
    }

    pub fn base_url(&self) -> String {
        resolve_base_url(self.configured_url.as_deref(), self.current_host.as_deref())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_url_falls_back_for_any_host() {
        for host in [None, Some("localhost"), Some("127.0.0.1"), Some("prod.example.com")] {
            assert_eq!(resolve_base_url(None, host), FALLBACK_BASE_URL);
        }
    }

    #[test]
    fn backend_url_on_localhost_falls_back() {
        assert_eq!(
            resolve_base_url(Some("http://backend:8080"), Some("localhost")),
            FALLBACK_BASE_URL
        );
    }

    #[test]
    fn backend_url_on_loopback_ip_falls_back() {
        assert_eq!(
            resolve_base_url(Some("http://backend:8080"), Some("127.0.0.1")),
            FALLBACK_BASE_URL
        );
    }

    #[test]
    fn backend_url_on_remote_host_is_kept() {
        assert_eq!(
            resolve_base_url(Some("http://backend:8080"), Some("prod.example.com")),
            "http://backend:8080"
        );
    }

    #[test]
    fn backend_url_without_host_is_kept() {
        assert_eq!(resolve_base_url(Some("http://backend:8080"), None), "http://backend:8080");
    }

    #[test]
    fn plain_url_is_kept_for_any_host() {
        for host in [None, Some("localhost"), Some("127.0.0.1"), Some("prod.example.com")] {
            assert_eq!(
                resolve_base_url(Some("http://api.example.com"), host),
                "http://api.example.com"
            );
        }
    }

    #[test]
    fn marker_is_a_plain_substring_match() {
        assert_eq!(
            resolve_base_url(Some("https://my-backend-api.internal"), Some("localhost")),
            FALLBACK_BASE_URL
        );
    }

    #[test]
    fn config_resolves_through_resolver() {
        let config = ClientConfig {
            configured_url: Some("http://backend:8080".to_string()),
            current_host: Some("localhost".to_string()),
        };
        assert_eq!(config.base_url(), FALLBACK_BASE_URL);
        assert_eq!(ClientConfig::default().base_url(), FALLBACK_BASE_URL);
    }
}
