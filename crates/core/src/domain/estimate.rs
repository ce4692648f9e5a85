use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a value-calculator run. Derived purely from the two inputs —
/// recomputing with the same inputs yields an identical value, so the type
/// carries no identity and no timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueEstimate {
    pub estimated_increase: Decimal,
    pub new_value: Decimal,
    pub roi_percentage: Decimal,
    pub recommendation_titles: Vec<String>,
}
