use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money::format_inr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Display label shown next to a recommendation card.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Long Term",
        }
    }
}

/// Inclusive rupee bounds for an improvement's expected cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub low: Decimal,
    pub high: Decimal,
}

impl CostRange {
    pub fn new(low: impl Into<Decimal>, high: impl Into<Decimal>) -> Self {
        Self { low: low.into(), high: high.into() }
    }
}

impl std::fmt::Display for CostRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", format_inr(self.low), format_inr(self.high))
    }
}

/// One suggested improvement, produced fresh per assessment and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cost_range: CostRange,
    pub roi_label: String,
    pub timeframe: String,
    pub priority: Priority,
    pub reasons: Vec<String>,
    pub contractor_count: Option<u32>,
}
