use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub event: EventSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Default event calendar used when a run request carries no slots
#[derive(Debug, Clone, Deserialize)]
pub struct EventSettings {
    /// First event day as YYYY-MM-DD; today when unset
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default = "default_event_days")]
    pub days: u32,
    #[serde(default = "default_slot_duration")]
    pub slot_duration_minutes: u32,
}

impl EventSettings {
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            start_date: None,
            days: default_event_days(),
            slot_duration_minutes: default_slot_duration(),
        }
    }
}

fn default_event_days() -> u32 { 2 }
fn default_slot_duration() -> u32 { 15 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_interest_weight")]
    pub interest_alignment: f64,
    #[serde(default = "default_investment_weight")]
    pub investment_factor: f64,
    #[serde(default = "default_company_size_weight")]
    pub company_size: f64,
    #[serde(default = "default_facility_weight")]
    pub facility_type: f64,
    #[serde(default = "default_existing_client_weight")]
    pub existing_client: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            interest_alignment: default_interest_weight(),
            investment_factor: default_investment_weight(),
            company_size: default_company_size_weight(),
            facility_type: default_facility_weight(),
            existing_client: default_existing_client_weight(),
        }
    }
}

fn default_interest_weight() -> f64 { 0.40 }
fn default_investment_weight() -> f64 { 0.25 }
fn default_company_size_weight() -> f64 { 0.20 }
fn default_facility_weight() -> f64 { 0.10 }
fn default_existing_client_weight() -> f64 { 0.05 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with NEXO_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with NEXO_)
            // e.g., NEXO_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("NEXO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("NEXO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.interest_alignment, 0.40);
        assert_eq!(weights.investment_factor, 0.25);
        assert_eq!(weights.company_size, 0.20);
        assert_eq!(weights.facility_type, 0.10);
        assert_eq!(weights.existing_client, 0.05);
    }

    #[test]
    fn test_event_settings_parse_start_date() {
        let event = EventSettings {
            start_date: Some("2023-05-18".to_string()),
            ..Default::default()
        };
        assert_eq!(
            event.start_date(),
            NaiveDate::from_ymd_opt(2023, 5, 18).unwrap()
        );
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
