//! Rule evaluation for property assessments.

use tracing::debug;

use super::catalog::{RulePredicate, RuleSeed, RULE_SEEDS};
use super::MAX_RECOMMENDATIONS;
use crate::domain::property::PropertyProfile;
use crate::domain::recommendation::{CostRange, Recommendation};

/// The assessment rule engine.
///
/// Rules are evaluated in seed order and each appends at most one
/// recommendation; the result keeps evaluation order (not priority order)
/// and is truncated to [`MAX_RECOMMENDATIONS`]. The engine is total: every
/// profile produces a result, and equal profiles produce equal results.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(&self, profile: &PropertyProfile) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        for seed in RULE_SEEDS {
            if recommendations.len() == MAX_RECOMMENDATIONS {
                break;
            }
            if predicate_holds(&seed.predicate, profile) {
                recommendations.push(materialize(seed, profile));
            }
        }

        debug!(
            rule_count = RULE_SEEDS.len(),
            matched = recommendations.len(),
            budget = profile.budget,
            "assessment rules evaluated"
        );

        recommendations
    }
}

fn predicate_holds(predicate: &RulePredicate, profile: &PropertyProfile) -> bool {
    match predicate {
        RulePredicate::BudgetAtLeast(min_budget) => profile.budget >= *min_budget,
        RulePredicate::BudgetWithCondition { min_budget, condition } => {
            profile.budget >= *min_budget && profile.condition == *condition
        }
        RulePredicate::BudgetWithMinArea { min_budget, area_over } => {
            profile.budget >= *min_budget && profile.area_sq_ft > *area_over
        }
        RulePredicate::AgeOver(years) => profile.age_years > *years,
        RulePredicate::Always => true,
    }
}

fn materialize(seed: &RuleSeed, profile: &PropertyProfile) -> Recommendation {
    let variables = [
        ("city", profile.city.clone()),
        ("age", profile.age_years.to_string()),
    ];

    Recommendation {
        id: seed.id.to_owned(),
        title: seed.title.to_owned(),
        description: seed.description.to_owned(),
        cost_range: CostRange::new(seed.cost_low, seed.cost_high),
        roi_label: seed.roi_label.to_owned(),
        timeframe: seed.timeframe.to_owned(),
        priority: seed.priority,
        reasons: seed
            .reasons
            .iter()
            .map(|template| substitute_variables(template, &variables))
            .collect(),
        contractor_count: Some(seed.contractor_count),
    }
}

fn substitute_variables(template: &str, variables: &[(&str, String)]) -> String {
    let mut output = template.to_string();
    for (key, value) in variables {
        output = output.replace(&format!("{{{{{key}}}}}"), value);
    }
    output
}
