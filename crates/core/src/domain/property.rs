use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Apartment,
    IndependentHouse,
    Villa,
    Duplex,
    Studio,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::IndependentHouse => "independent-house",
            Self::Villa => "villa",
            Self::Duplex => "duplex",
            Self::Studio => "studio",
        }
    }
}

impl std::str::FromStr for PropertyType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "apartment" => Ok(Self::Apartment),
            "independent-house" => Ok(Self::IndependentHouse),
            "villa" => Ok(Self::Villa),
            "duplex" => Ok(Self::Duplex),
            "studio" => Ok(Self::Studio),
            other => Err(DomainError::validation(
                "property_type",
                format!(
                    "unsupported property type `{other}` (expected apartment|independent-house|villa|duplex|studio)"
                ),
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Excellent,
    Good,
    Average,
    NeedsRenovation,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::NeedsRenovation => "needs-renovation",
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "average" => Ok(Self::Average),
            "needs-renovation" => Ok(Self::NeedsRenovation),
            other => Err(DomainError::validation(
                "condition",
                format!(
                    "unsupported condition `{other}` (expected excellent|good|average|needs-renovation)"
                ),
            )),
        }
    }
}

/// The intake form's fixed budget tiers. Each tier is carried through the
/// engine as its numeric rupee value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetTier {
    UpTo50K,
    UpTo100K,
    UpTo200K,
    UpTo500K,
    UpTo1M,
    Above1M,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 6] = [
        Self::UpTo50K,
        Self::UpTo100K,
        Self::UpTo200K,
        Self::UpTo500K,
        Self::UpTo1M,
        Self::Above1M,
    ];

    pub fn value(&self) -> u64 {
        match self {
            Self::UpTo50K => 50_000,
            Self::UpTo100K => 100_000,
            Self::UpTo200K => 200_000,
            Self::UpTo500K => 500_000,
            Self::UpTo1M => 1_000_000,
            Self::Above1M => 1_000_001,
        }
    }

    pub fn from_value(value: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.value() == value)
    }
}

/// Non-throwing integer parse used at the intake boundary: malformed input
/// becomes 0, so downstream threshold predicates simply evaluate false.
pub fn lenient_amount(input: &str) -> u64 {
    input.trim().parse::<u64>().unwrap_or(0)
}

/// One property assessment request. Built from user input, consumed once by
/// the recommendation engine, then discarded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyProfile {
    pub property_type: PropertyType,
    pub city: String,
    pub locality: String,
    pub age_years: u32,
    pub area_sq_ft: u32,
    pub budget: u64,
    pub condition: Condition,
}

impl PropertyProfile {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.city.trim().is_empty() {
            return Err(DomainError::validation("city", "city is required"));
        }
        if self.locality.trim().is_empty() {
            return Err(DomainError::validation("locality", "locality is required"));
        }
        if self.age_years > 100 {
            return Err(DomainError::validation("age_years", "property age must be at most 100"));
        }
        if self.area_sq_ft < 200 {
            return Err(DomainError::validation(
                "area_sq_ft",
                "carpet area must be at least 200 sq ft",
            ));
        }
        if self.budget == 0 {
            return Err(DomainError::validation("budget", "an improvement budget is required"));
        }

        Ok(())
    }
}
