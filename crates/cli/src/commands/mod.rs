pub mod assess;
pub mod catalog;
pub mod config;
pub mod doctor;
pub mod estimate;
pub mod login;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    correlation_id: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, correlation_id: &str, message: impl Into<String>) -> Self {
        Self::build(command, correlation_id, "ok", None, message, None, 0)
    }

    pub fn success_with_data(
        command: &str,
        correlation_id: &str,
        message: impl Into<String>,
        data: Value,
    ) -> Self {
        Self::build(command, correlation_id, "ok", None, message, Some(data), 0)
    }

    pub fn failure(
        command: &str,
        correlation_id: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        Self::build(
            command,
            correlation_id,
            "error",
            Some(error_class.to_string()),
            message,
            None,
            exit_code,
        )
    }

    fn build(
        command: &str,
        correlation_id: &str,
        status: &str,
        error_class: Option<String>,
        message: impl Into<String>,
        data: Option<Value>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: status.to_string(),
            correlation_id: correlation_id.to_string(),
            error_class,
            message: message.into(),
            data,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

pub(crate) fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
