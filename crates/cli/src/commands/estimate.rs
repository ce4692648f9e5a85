use std::str::FromStr;

use clap::Args;
use rust_decimal::Decimal;
use serde_json::json;
use tracing::info;

use homeworth_core::domain::money::format_inr;
use homeworth_core::errors::{ApplicationError, DomainError};
use homeworth_core::estimator::estimate_value;

use crate::commands::{new_correlation_id, CommandResult};

#[derive(Debug, Args)]
pub struct EstimateArgs {
    #[arg(long = "current-value", help = "Current market value of the property in rupees")]
    pub current_value: String,
    #[arg(long, help = "Planned improvement spend in rupees")]
    pub spend: String,
}

pub fn run(args: &EstimateArgs) -> CommandResult {
    let correlation_id = new_correlation_id();

    let current_value = match parse_amount("current_value", &args.current_value) {
        Ok(value) => value,
        Err(error) => return validation_failure(&correlation_id, error),
    };
    let spend = match parse_amount("improvement_spend", &args.spend) {
        Ok(value) => value,
        Err(error) => return validation_failure(&correlation_id, error),
    };

    let estimate = match estimate_value(current_value, spend) {
        Ok(estimate) => estimate,
        Err(error) => return validation_failure(&correlation_id, error),
    };

    info!(
        correlation_id = %correlation_id,
        roi = %estimate.roi_percentage,
        "estimate completed"
    );

    let message = format!(
        "Estimated increase {}; new property value {}; ROI {}%",
        format_inr(estimate.estimated_increase),
        format_inr(estimate.new_value),
        estimate.roi_percentage.round_dp(1)
    );
    let data = json!({ "estimate": estimate });

    CommandResult::success_with_data("estimate", &correlation_id, message, data)
}

fn parse_amount(field: &'static str, input: &str) -> Result<Decimal, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, "a value is required"));
    }

    Decimal::from_str(trimmed)
        .map_err(|_| DomainError::validation(field, format!("`{trimmed}` is not a number")))
}

fn validation_failure(correlation_id: &str, error: DomainError) -> CommandResult {
    let interface = ApplicationError::from(error).into_interface(correlation_id.to_string());
    CommandResult::failure("estimate", correlation_id, "validation", interface.to_string(), 2)
}
