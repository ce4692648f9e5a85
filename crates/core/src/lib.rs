pub mod advisor;
pub mod config;
pub mod domain;
pub mod errors;
pub mod estimator;
pub mod gate;

pub use advisor::{
    Catalog, Category, RecommendationEngine, ShowcaseEntry, UpgradeCategory, MAX_RECOMMENDATIONS,
};
pub use domain::estimate::ValueEstimate;
pub use domain::money::format_inr;
pub use domain::property::{lenient_amount, BudgetTier, Condition, PropertyProfile, PropertyType};
pub use domain::recommendation::{CostRange, Priority, Recommendation};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use estimator::{estimate_value, DeterministicEstimator, EstimateEngine, SpendTier};
pub use gate::{AdminGate, GateOutcome};
