use serde_json::json;
use tracing::info;

use homeworth_core::config::{AppConfig, LoadOptions};
use homeworth_core::gate::{AdminGate, GateOutcome};

use crate::commands::{new_correlation_id, CommandResult};

pub fn run(email: &str, password: &str) -> CommandResult {
    let correlation_id = new_correlation_id();

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "login",
                &correlation_id,
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let gate = AdminGate::from_config(&config.admin);
    let outcome = gate.verify(email, password);

    info!(correlation_id = %correlation_id, granted = outcome.is_granted(), "gate checked");

    match outcome {
        GateOutcome::Granted => CommandResult::success_with_data(
            "login",
            &correlation_id,
            outcome.user_message(),
            json!({ "granted": true }),
        ),
        GateOutcome::Denied => {
            CommandResult::failure("login", &correlation_id, "denied", outcome.user_message(), 3)
        }
        GateOutcome::LockedOut { retry_after_secs } => CommandResult::failure(
            "login",
            &correlation_id,
            "locked_out",
            format!("{} Retry after {retry_after_secs}s.", outcome.user_message()),
            4,
        ),
    }
}
