use serde_json::json;

use homeworth_core::advisor::{Catalog, Category};
use homeworth_core::errors::{ApplicationError, DomainError};

use crate::commands::{new_correlation_id, CommandResult};

pub fn run(category: Option<&str>) -> CommandResult {
    let correlation_id = new_correlation_id();
    let catalog = Catalog::seeded();

    let entries = match category {
        Some(raw) => match raw.parse::<Category>() {
            Ok(category) => {
                catalog.showcase_in(category).into_iter().cloned().collect::<Vec<_>>()
            }
            Err(error) => return validation_failure(&correlation_id, error),
        },
        None => catalog.showcase().to_vec(),
    };

    let message = match category {
        Some(raw) => format!("{} showcase entries in `{}`", entries.len(), raw.trim()),
        None => format!("{} showcase entries across all categories", entries.len()),
    };
    let data = json!({
        "entries": entries,
        "upgrade_categories": catalog.categories(),
    });

    CommandResult::success_with_data("catalog", &correlation_id, message, data)
}

fn validation_failure(correlation_id: &str, error: DomainError) -> CommandResult {
    let interface = ApplicationError::from(error).into_interface(correlation_id.to_string());
    CommandResult::failure("catalog", correlation_id, "validation", interface.to_string(), 2)
}
