use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_database_url() -> String {
    "catalog.db".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
    ]
}

fn default_max_body_size() -> usize {
    256 * 1024
}

/// Configuration options of the catalog service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path of the SQLite database file.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Frontend origins allowed to call the API from a browser.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    /// Largest accepted JSON body, in bytes.
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

impl ServerConfig {
    /// Load settings from `path` (any extension the `config` crate knows,
    /// optional) and `APP_*` environment variables. `FRONTEND_URL` is added to
    /// the allowed origins when set.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins"),
            )
            .build()?;

        let mut config: Self = settings.try_deserialize()?;

        if let Ok(frontend_url) = std::env::var("FRONTEND_URL") {
            config.add_origin(&frontend_url);
        }

        Ok(config)
    }

    pub fn add_origin(&mut self, origin: &str) {
        let origin = origin.trim().trim_end_matches('/');
        if !origin.is_empty() && !self.allowed_origins.iter().any(|o| o == origin) {
            self.allowed_origins.push(origin.to_string());
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.address.clone(), self.port)
    }
}
