//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob handed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    pub static_dir: String,
    /// Show error details on the 500 page.
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_allowed_hosts")]
    pub allowed_hosts: Vec<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// JSON fixture replacing the built-in users.
    #[serde(default)]
    pub users_file: Option<String>,
}

fn default_allowed_hosts() -> Vec<String> {
    vec!["127.0.0.1".to_string(), "localhost".to_string()]
}

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl ServerConfig {
    /// Whether `host` (optionally with a port) may be served.
    pub fn is_allowed_host(&self, host: &str) -> bool {
        let host = strip_port(host);
        self.allowed_hosts
            .iter()
            .any(|allowed| allowed == "*" || allowed.eq_ignore_ascii_case(host))
    }
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        // [::1]:8080
        return host.find(']').map_or(host, |end| &host[..=end]);
    }
    host.rsplit_once(':').map_or(host, |(name, _port)| name)
}
