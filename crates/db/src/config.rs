/// Connection settings for the hosted database.
///
/// Built once at startup (from the environment, by the binary) and injected
/// into every handler; nothing below the binary reads environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    base_url: String,
    service_role_key: String,
}

impl DbConfig {
    pub fn new(base_url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            service_role_key: service_role_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Service-role credential: bypasses row-level access rules, so it is
    /// sent only from this backend, never to a browser.
    pub fn service_role_key(&self) -> &str {
        &self.service_role_key
    }
}
