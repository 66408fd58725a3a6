use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use crate::analysis::PipelineConfig;

/// Service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level / env-filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Analysis pipeline policy constants
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from an optional `textlens` config file and
    /// `TEXTLENS__`-prefixed environment variables. The bare `PORT`
    /// variable is honored as a final override for deployment platforms
    /// that only inject that.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("textlens").required(false))
            .add_source(config::Environment::with_prefix("TEXTLENS").separator("__"));

        let mut config: ServiceConfig = builder.build()?.try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {port}"))?;
        }

        Ok(config)
    }

    /// Socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5002
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
