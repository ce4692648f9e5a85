use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use homeworth_core::config::{AppConfig, LoadOptions};
use secrecy::ExposeSecret;
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "admin.email",
        &config.admin.email,
        field_source(
            "admin.email",
            Some("HOMEWORTH_ADMIN_EMAIL"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    let digest = redact_digest(config.admin.password_sha256.expose_secret());
    lines.push(render_line(
        "admin.password_sha256",
        &digest,
        field_source(
            "admin.password_sha256",
            Some("HOMEWORTH_ADMIN_PASSWORD_SHA256"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.push(render_line(
        "admin.max_attempts",
        &config.admin.max_attempts.to_string(),
        field_source(
            "admin.max_attempts",
            Some("HOMEWORTH_ADMIN_MAX_ATTEMPTS"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "admin.attempt_window_secs",
        &config.admin.attempt_window_secs.to_string(),
        field_source(
            "admin.attempt_window_secs",
            Some("HOMEWORTH_ADMIN_ATTEMPT_WINDOW_SECS"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        field_source(
            "logging.level",
            Some("HOMEWORTH_LOGGING_LEVEL"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        field_source(
            "logging.format",
            Some("HOMEWORTH_LOGGING_FORMAT"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    let root = PathBuf::from("homeworth.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/homeworth.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_key: Option<&str>,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_key {
        if env::var_os(env_key).is_some() {
            return format!("env ({env_key})");
        }
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

fn redact_digest(digest: &str) -> String {
    if digest.trim().is_empty() {
        return "<unset>".to_string();
    }

    "<redacted>".to_string()
}
