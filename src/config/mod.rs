use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let jitter = JitterMode::parse(
            &env::var("ASSESSMENT_JITTER").unwrap_or_else(|_| "random".to_string()),
        )?;

        let seed = match env::var("ASSESSMENT_JITTER_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed { value: raw })?,
            ),
            _ => None,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringConfig { jitter, seed },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// How confidence jitter is sourced when assembling reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JitterMode {
    Random,
    None,
}

impl JitterMode {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" | "" => Ok(Self::Random),
            "none" | "off" => Ok(Self::None),
            _ => Err(ConfigError::InvalidJitterMode {
                value: value.to_string(),
            }),
        }
    }
}

/// Scoring controls. A seed makes random jitter reproducible.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub jitter: JitterMode,
    pub seed: Option<u64>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidJitterMode { value: String },
    InvalidSeed { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidJitterMode { value } => write!(
                f,
                "ASSESSMENT_JITTER must be 'random' or 'none' (got '{}')",
                value
            ),
            ConfigError::InvalidSeed { value } => write!(
                f,
                "ASSESSMENT_JITTER_SEED must be a valid u64 (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
