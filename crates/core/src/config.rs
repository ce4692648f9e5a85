use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub admin: AdminConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct AdminConfig {
    pub email: String,
    /// SHA-256 hex digest of the admin password. The plaintext is never
    /// configured anywhere.
    pub password_sha256: SecretString,
    pub max_attempts: u32,
    pub attempt_window_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub admin_email: Option<String>,
    pub admin_password_sha256: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin: AdminConfig {
                email: "admin@homeworth.example".to_string(),
                password_sha256: String::new().into(),
                max_attempts: 5,
                attempt_window_secs: 300,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

fn secret_value(value: String) -> SecretString {
    value.into()
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("homeworth.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(admin) = patch.admin {
            if let Some(email) = admin.email {
                self.admin.email = email;
            }
            if let Some(digest) = admin.password_sha256 {
                self.admin.password_sha256 = secret_value(digest);
            }
            if let Some(max_attempts) = admin.max_attempts {
                self.admin.max_attempts = max_attempts;
            }
            if let Some(attempt_window_secs) = admin.attempt_window_secs {
                self.admin.attempt_window_secs = attempt_window_secs;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("HOMEWORTH_ADMIN_EMAIL") {
            self.admin.email = value;
        }
        if let Some(value) = read_env("HOMEWORTH_ADMIN_PASSWORD_SHA256") {
            self.admin.password_sha256 = secret_value(value);
        }
        if let Some(value) = read_env("HOMEWORTH_ADMIN_MAX_ATTEMPTS") {
            self.admin.max_attempts = parse_u32("HOMEWORTH_ADMIN_MAX_ATTEMPTS", &value)?;
        }
        if let Some(value) = read_env("HOMEWORTH_ADMIN_ATTEMPT_WINDOW_SECS") {
            self.admin.attempt_window_secs =
                parse_u64("HOMEWORTH_ADMIN_ATTEMPT_WINDOW_SECS", &value)?;
        }

        let log_level =
            read_env("HOMEWORTH_LOGGING_LEVEL").or_else(|| read_env("HOMEWORTH_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("HOMEWORTH_LOGGING_FORMAT").or_else(|| read_env("HOMEWORTH_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(admin_email) = overrides.admin_email {
            self.admin.email = admin_email;
        }
        if let Some(digest) = overrides.admin_password_sha256 {
            self.admin.password_sha256 = secret_value(digest);
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_admin(&self.admin)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("homeworth.toml"), PathBuf::from("config/homeworth.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_admin(admin: &AdminConfig) -> Result<(), ConfigError> {
    let email = admin.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ConfigError::Validation(
            "admin.email must be a non-empty address containing `@`".to_string(),
        ));
    }

    let digest = admin.password_sha256.expose_secret();
    if digest.is_empty() {
        return Err(ConfigError::Validation(
            "admin.password_sha256 is required. Generate one with: printf '%s' '<password>' | sha256sum"
                .to_string(),
        ));
    }
    if digest.len() != 64 || !digest.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(ConfigError::Validation(
            "admin.password_sha256 must be a 64-character hex SHA-256 digest".to_string(),
        ));
    }

    if admin.max_attempts == 0 {
        return Err(ConfigError::Validation(
            "admin.max_attempts must be greater than zero".to_string(),
        ));
    }

    if admin.attempt_window_secs == 0 || admin.attempt_window_secs > 3_600 {
        return Err(ConfigError::Validation(
            "admin.attempt_window_secs must be in range 1..=3600".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse::<u32>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    admin: Option<AdminPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct AdminPatch {
    email: Option<String>,
    password_sha256: Option<String>,
    max_attempts: Option<u32>,
    attempt_window_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
