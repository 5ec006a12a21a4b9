use roster_business::BusinessConfig;
use serde::Deserialize;
use std::env::vars;
use std::fmt::Display;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Env {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "prod")]
    Prod,
    #[serde(rename = "test")]
    Test,
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Prod => write!(f, "prod"),
            Env::Test => write!(f, "test"),
        }
    }
}

const LOCAL_API_BASE_URL: &str = "http://127.0.0.1:3000";

// The final, validated configuration struct.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    server_addr: String,
    port: u16,
    // Base URL of the upstream users API, without trailing slash
    api_base_url: String,
}

// Environment variables as read, before defaults are applied.
#[derive(Deserialize)]
struct RawConfig {
    env: Env,
    server_addr: Option<String>,
    port: Option<u16>,
    api_base_url: Option<String>,
}

impl Config {
    /// Create a test configuration with default values.
    ///
    /// This function is available for both unit tests and integration tests.
    /// It should not be used in production code.
    pub fn new_for_test() -> Self {
        Self {
            env: Env::Local,
            server_addr: "127.0.0.1".to_owned(),
            port: 8080,
            api_base_url: LOCAL_API_BASE_URL.to_owned(),
        }
    }

    pub fn environment(&self) -> &Env {
        &self.env
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_local(&self) -> bool {
        matches!(self.env, Env::Local)
    }

    /// Upstream settings handed to the business layer.
    pub fn business_config(&self) -> BusinessConfig {
        BusinessConfig::new(self.api_base_url.as_str())
    }

    /// Initializes configuration by reading from environment variables
    /// and applying environment-aware defaults.
    pub fn init() -> anyhow::Result<Self> {
        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            env,
            server_addr,
            port,
            api_base_url,
        } = raw_config;

        let server_addr = match server_addr {
            Some(addr) => addr,
            None => {
                let default_addr = match env {
                    Env::Local => "127.0.0.1",
                    _ => "0.0.0.0",
                };
                info!("SERVER_ADDR not set, defaulting to {default_addr} for {env} environment");
                default_addr.to_owned()
            }
        };

        let port = match port {
            Some(port) => port,
            None if matches!(env, Env::Local) => {
                info!("PORT not set, defaulting to 8080 for local environment");
                8080
            }
            None => anyhow::bail!("PORT must be set for {env} environment"),
        };

        let api_base_url = match api_base_url {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_owned(),
            _ if matches!(env, Env::Local) => {
                info!("API_BASE_URL not set, defaulting to {LOCAL_API_BASE_URL}");
                LOCAL_API_BASE_URL.to_owned()
            }
            _ => anyhow::bail!("API_BASE_URL must be set for {env} environment"),
        };

        Ok(Self {
            env,
            server_addr,
            port,
            api_base_url,
        })
    }
}
