use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Runtime settings read once at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server = ServerConfig::from_env();
        tracing::debug!(address = %server.bind_address(), "Loaded server configuration");

        Self {
            server,
            cors: cors_config::init_cors(),
        }
    }
}
