use clap::Args;
use serde_json::json;
use tracing::info;

use homeworth_core::advisor::RecommendationEngine;
use homeworth_core::domain::property::{lenient_amount, Condition, PropertyProfile, PropertyType};
use homeworth_core::errors::{ApplicationError, DomainError};

use crate::commands::{new_correlation_id, CommandResult};

#[derive(Debug, Args)]
pub struct AssessArgs {
    #[arg(long = "property-type")]
    pub property_type: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub locality: String,
    #[arg(long, help = "Property age in years; malformed input counts as 0")]
    pub age: String,
    #[arg(long, help = "Carpet area in sq ft; malformed input counts as 0")]
    pub area: String,
    #[arg(long, help = "Improvement budget in rupees; malformed input counts as 0")]
    pub budget: String,
    #[arg(long)]
    pub condition: String,
}

pub fn run(args: &AssessArgs) -> CommandResult {
    let correlation_id = new_correlation_id();

    let property_type = match args.property_type.parse::<PropertyType>() {
        Ok(value) => value,
        Err(error) => return validation_failure(&correlation_id, error),
    };
    let condition = match args.condition.parse::<Condition>() {
        Ok(value) => value,
        Err(error) => return validation_failure(&correlation_id, error),
    };

    let profile = PropertyProfile {
        property_type,
        city: args.city.clone(),
        locality: args.locality.clone(),
        age_years: lenient_u32(&args.age),
        area_sq_ft: lenient_u32(&args.area),
        budget: lenient_amount(&args.budget),
        condition,
    };

    if let Err(error) = profile.validate() {
        return validation_failure(&correlation_id, error);
    }

    let engine = RecommendationEngine::new();
    let recommendations = engine.recommend(&profile);

    info!(
        correlation_id = %correlation_id,
        matched = recommendations.len(),
        city = %profile.city,
        "assessment completed"
    );

    let message = format!(
        "Based on your {} in {}, {}: {} recommendations",
        profile.property_type.as_str(),
        profile.locality,
        profile.city,
        recommendations.len()
    );
    let data = json!({
        "profile": profile,
        "recommendations": recommendations,
    });

    CommandResult::success_with_data("assess", &correlation_id, message, data)
}

fn lenient_u32(input: &str) -> u32 {
    u32::try_from(lenient_amount(input)).unwrap_or(0)
}

fn validation_failure(correlation_id: &str, error: DomainError) -> CommandResult {
    let interface = ApplicationError::from(error).into_interface(correlation_id.to_string());
    CommandResult::failure("assess", correlation_id, "validation", interface.to_string(), 2)
}
