use tiendaops_db::{AdminAuthClient, DbConfig, RestClient};

/// Shared clients, built once at startup and injected into handlers.
///
/// Handlers never read the environment; the configuration travels through
/// this struct (scoped per process, not per invocation).
#[derive(Debug, Clone)]
pub struct AppServices {
    pub db: RestClient,
    pub auth: AdminAuthClient,
}

pub fn build_services(config: &DbConfig) -> AppServices {
    AppServices {
        db: RestClient::new(config),
        auth: AdminAuthClient::new(config),
    }
}
