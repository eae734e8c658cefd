use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Public address of the site. Empty means the canonical link is
    /// derived from the incoming request host instead.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            contact_email: default_contact_email(),
            contact_phone: default_contact_phone(),
        }
    }
}

fn default_contact_email() -> String {
    "info@vaastuacceleron.com".to_string()
}

fn default_contact_phone() -> String {
    "+919660515666".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct IntakeConfig {
    /// Where submitted inquiries are POSTed. Ships empty; the operator
    /// points it at their intake service.
    #[serde(default)]
    pub endpoint: String,
    #[serde(default = "default_intake_timeout")]
    pub timeout_seconds: u64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_seconds: default_intake_timeout(),
        }
    }
}

fn default_intake_timeout() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ACCELERON__INTAKE__ENDPOINT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ACCELERON")
                .separator("__")
                .try_parsing(true),
        );

        // Shorthand for the one value every deployment has to set
        if let Ok(endpoint) = env::var("INTAKE_ENDPOINT") {
            builder = builder.set_override("intake.endpoint", endpoint)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.intake.timeout_seconds == 0 {
            return Err("Intake timeout must be at least 1 second".to_string());
        }
        if !self.site.base_url.is_empty() && Url::parse(&self.site.base_url).is_err() {
            return Err("site.base_url must be an absolute URL when set".to_string());
        }
        Ok(())
    }

    /// True once the operator pointed the intake at a parseable address.
    pub fn intake_configured(&self) -> bool {
        Url::parse(self.intake.endpoint.trim()).is_ok()
    }
}
