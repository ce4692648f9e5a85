use rust_decimal::Decimal;

use crate::domain::estimate::ValueEstimate;
use crate::errors::DomainError;

const LIGHT_TIER_CEILING: u32 = 50_000;
const PREMIUM_TIER_FLOOR: u32 = 200_000;

/// Spend bucket that selects both the value multiplier and the suggested
/// improvement titles. One bucketing for both outputs, same thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpendTier {
    Light,
    Standard,
    Premium,
}

impl SpendTier {
    pub fn from_spend(spend: Decimal) -> Self {
        if spend < Decimal::from(LIGHT_TIER_CEILING) {
            SpendTier::Light
        } else if spend > Decimal::from(PREMIUM_TIER_FLOOR) {
            SpendTier::Premium
        } else {
            SpendTier::Standard
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            // 1.15 for small improvements, 1.25 for large ones, 1.20 otherwise.
            SpendTier::Light => Decimal::new(115, 2),
            SpendTier::Standard => Decimal::new(120, 2),
            SpendTier::Premium => Decimal::new(125, 2),
        }
    }

    pub fn suggested_improvements(&self) -> &'static [&'static str] {
        match self {
            SpendTier::Light => {
                &["Fresh paint and lighting upgrades", "Balcony garden and minor repairs"]
            }
            SpendTier::Standard => {
                &["Modular kitchen upgrade", "Bathroom renovation with modern fixtures"]
            }
            SpendTier::Premium => &[
                "Complete interior renovation",
                "Solar panel installation",
                "Smart home automation",
            ],
        }
    }
}

pub trait EstimateEngine: Send + Sync {
    fn estimate(&self, current_value: Decimal, spend: Decimal)
        -> Result<ValueEstimate, DomainError>;
}

#[derive(Default)]
pub struct DeterministicEstimator;

impl EstimateEngine for DeterministicEstimator {
    fn estimate(
        &self,
        current_value: Decimal,
        spend: Decimal,
    ) -> Result<ValueEstimate, DomainError> {
        estimate_value(current_value, spend)
    }
}

pub fn estimate_value(
    current_value: Decimal,
    spend: Decimal,
) -> Result<ValueEstimate, DomainError> {
    if current_value <= Decimal::ZERO {
        return Err(DomainError::validation(
            "current_value",
            "current property value must be greater than zero",
        ));
    }
    if spend <= Decimal::ZERO {
        return Err(DomainError::validation(
            "improvement_spend",
            "improvement budget must be greater than zero",
        ));
    }

    let tier = SpendTier::from_spend(spend);
    let estimated_increase = spend * tier.multiplier();
    let new_value = current_value + estimated_increase;
    let roi_percentage = (estimated_increase - spend) / spend * Decimal::ONE_HUNDRED;

    Ok(ValueEstimate {
        estimated_increase,
        new_value,
        roi_percentage,
        recommendation_titles: tier
            .suggested_improvements()
            .iter()
            .map(|title| (*title).to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{estimate_value, DeterministicEstimator, EstimateEngine, SpendTier};
    use crate::errors::DomainError;

    #[test]
    fn standard_tier_applies_twenty_percent_uplift() {
        let estimate = estimate_value(Decimal::from(5_000_000), Decimal::from(200_000))
            .expect("estimate should succeed");

        assert_eq!(estimate.estimated_increase, Decimal::from(240_000));
        assert_eq!(estimate.new_value, Decimal::from(5_240_000));
        assert_eq!(estimate.roi_percentage, Decimal::from(20));
    }

    #[test]
    fn light_tier_applies_fifteen_percent_uplift() {
        let estimate = estimate_value(Decimal::from(1_000_000), Decimal::from(40_000))
            .expect("estimate should succeed");

        assert_eq!(estimate.estimated_increase, Decimal::from(46_000));
        assert_eq!(estimate.roi_percentage, Decimal::from(15));
        assert_eq!(
            estimate.recommendation_titles,
            vec!["Fresh paint and lighting upgrades", "Balcony garden and minor repairs"]
        );
    }

    #[test]
    fn premium_tier_applies_twenty_five_percent_uplift() {
        let estimate = estimate_value(Decimal::from(9_000_000), Decimal::from(250_000))
            .expect("estimate should succeed");

        assert_eq!(estimate.estimated_increase, Decimal::from(312_500));
        assert_eq!(estimate.roi_percentage, Decimal::from(25));
        assert_eq!(estimate.recommendation_titles.len(), 3);
    }

    #[test]
    fn boundary_spend_stays_in_standard_tier() {
        assert_eq!(SpendTier::from_spend(Decimal::from(50_000)), SpendTier::Standard);
        assert_eq!(SpendTier::from_spend(Decimal::from(200_000)), SpendTier::Standard);
        assert_eq!(SpendTier::from_spend(Decimal::from(49_999)), SpendTier::Light);
        assert_eq!(SpendTier::from_spend(Decimal::from(200_001)), SpendTier::Premium);
    }

    #[test]
    fn non_positive_inputs_are_rejected() {
        let error = estimate_value(Decimal::ZERO, Decimal::from(40_000))
            .expect_err("zero current value should fail");
        assert!(matches!(error, DomainError::Validation { field: "current_value", .. }));

        let error = estimate_value(Decimal::from(1_000_000), Decimal::ZERO)
            .expect_err("zero spend should fail");
        assert!(matches!(error, DomainError::Validation { field: "improvement_spend", .. }));

        assert!(estimate_value(Decimal::from(-5), Decimal::from(40_000)).is_err());
    }

    #[test]
    fn identical_inputs_yield_byte_identical_output() {
        let first = estimate_value(Decimal::from(5_000_000), Decimal::from(200_000))
            .expect("estimate should succeed");
        let second = estimate_value(Decimal::from(5_000_000), Decimal::from(200_000))
            .expect("estimate should succeed");

        let first_json = serde_json::to_string(&first).expect("serialize");
        let second_json = serde_json::to_string(&second).expect("serialize");
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn trait_object_delegates_to_pure_function() {
        let engine: &dyn EstimateEngine = &DeterministicEstimator;
        let estimate = engine
            .estimate(Decimal::from(1_000_000), Decimal::from(40_000))
            .expect("estimate should succeed");
        assert_eq!(estimate.new_value, Decimal::from(1_046_000));
    }
}
