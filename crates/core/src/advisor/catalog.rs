//! Seed data for the recommendation engine and the enhancement showcase.
//!
//! Everything here is immutable startup data: the rule seeds drive the
//! engine, the showcase and upgrade categories back the browsing surface.

use serde::{Deserialize, Serialize};

use crate::domain::property::Condition;
use crate::domain::recommendation::{CostRange, Priority};
use crate::errors::DomainError;

/// Predicate attached to a recommendation rule.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RulePredicate {
    BudgetAtLeast(u64),
    BudgetWithCondition { min_budget: u64, condition: Condition },
    BudgetWithMinArea { min_budget: u64, area_over: u32 },
    AgeOver(u32),
    Always,
}

/// One engine rule: predicate plus the static card it produces.
/// Reason templates may reference `{{city}}` and `{{age}}`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleSeed {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub cost_low: u32,
    pub cost_high: u32,
    pub roi_label: &'static str,
    pub timeframe: &'static str,
    pub priority: Priority,
    pub predicate: RulePredicate,
    pub reasons: &'static [&'static str],
    pub contractor_count: u32,
}

pub(crate) const RULE_SEEDS: &[RuleSeed] = &[
    RuleSeed {
        id: "rec_paint_lighting",
        title: "Fresh Interior Paint & Lighting",
        description: "Complete interior painting with modern colors and LED lighting upgrade throughout the property.",
        cost_low: 25_000,
        cost_high: 45_000,
        roi_label: "+18% Value",
        timeframe: "4-6 days",
        priority: Priority::High,
        predicate: RulePredicate::BudgetWithCondition {
            min_budget: 50_000,
            condition: Condition::NeedsRenovation,
        },
        reasons: &["Property needs renovation", "High ROI for budget", "Quick completion"],
        contractor_count: 12,
    },
    RuleSeed {
        id: "rec_modular_kitchen",
        title: "Modular Kitchen Upgrade",
        description: "Install space-efficient modular kitchen with modern storage and appliances.",
        cost_low: 80_000,
        cost_high: 120_000,
        roi_label: "+25% Value",
        timeframe: "7-10 days",
        priority: Priority::Medium,
        predicate: RulePredicate::BudgetAtLeast(100_000),
        reasons: &["Popular in {{city}}", "High buyer appeal", "Modern lifestyle demand"],
        contractor_count: 8,
    },
    RuleSeed {
        id: "rec_smart_home",
        title: "Smart Home Automation",
        description: "Install smart switches, automated lighting, and security systems for modern living.",
        cost_low: 150_000,
        cost_high: 250_000,
        roi_label: "+30% Value",
        timeframe: "3-5 days",
        priority: Priority::Medium,
        predicate: RulePredicate::BudgetWithMinArea { min_budget: 200_000, area_over: 1_000 },
        reasons: &["Large property size", "Tech-savvy market demand", "Future-proof investment"],
        contractor_count: 5,
    },
    RuleSeed {
        id: "rec_electrical_plumbing",
        title: "Electrical & Plumbing Upgrade",
        description: "Complete rewiring and plumbing system upgrade for safety and efficiency.",
        cost_low: 60_000,
        cost_high: 100_000,
        roi_label: "+20% Value",
        timeframe: "5-8 days",
        priority: Priority::High,
        predicate: RulePredicate::AgeOver(15),
        reasons: &["Property age: {{age}} years", "Safety compliance", "Essential upgrade"],
        contractor_count: 15,
    },
    RuleSeed {
        id: "rec_balcony_garden",
        title: "Balcony Garden & Exterior",
        description: "Create a beautiful balcony garden with plants and improve exterior aesthetics.",
        cost_low: 8_000,
        cost_high: 20_000,
        roi_label: "+12% Value",
        timeframe: "2-3 days",
        priority: Priority::High,
        predicate: RulePredicate::Always,
        reasons: &["Budget-friendly", "High visual impact", "Eco-friendly appeal"],
        contractor_count: 20,
    },
    RuleSeed {
        id: "rec_solar",
        title: "Solar Panel Installation",
        description: "Install rooftop solar panels for sustainable energy and cost savings.",
        cost_low: 250_000,
        cost_high: 400_000,
        roi_label: "+35% Value",
        timeframe: "2-3 days",
        priority: Priority::Low,
        predicate: RulePredicate::BudgetAtLeast(300_000),
        reasons: &["Government incentives", "Long-term savings", "Sustainability trend"],
        contractor_count: 3,
    },
];

/// Enhancement category used to browse the showcase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Interior,
    Electrical,
    Kitchen,
    Bathroom,
    Sustainable,
    Exterior,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Interior,
        Self::Electrical,
        Self::Kitchen,
        Self::Bathroom,
        Self::Sustainable,
        Self::Exterior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interior => "interior",
            Self::Electrical => "electrical",
            Self::Kitchen => "kitchen",
            Self::Bathroom => "bathroom",
            Self::Sustainable => "sustainable",
            Self::Exterior => "exterior",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "interior" => Ok(Self::Interior),
            "electrical" => Ok(Self::Electrical),
            "kitchen" => Ok(Self::Kitchen),
            "bathroom" => Ok(Self::Bathroom),
            "sustainable" => Ok(Self::Sustainable),
            "exterior" => Ok(Self::Exterior),
            other => Err(DomainError::validation(
                "category",
                format!(
                    "unknown category `{other}` (expected interior|electrical|kitchen|bathroom|sustainable|exterior)"
                ),
            )),
        }
    }
}

struct ShowcaseSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    cost_low: u32,
    cost_high: u32,
    roi_label: &'static str,
    timeframe: &'static str,
    category: Category,
    priority: Priority,
}

const SHOWCASE_SEEDS: &[ShowcaseSeed] = &[
    ShowcaseSeed {
        id: "show_interior_paint",
        title: "Fresh Interior Paint",
        description: "Transform your home with modern color schemes and quality paint for instant value addition.",
        cost_low: 15_000,
        cost_high: 30_000,
        roi_label: "+15% Value",
        timeframe: "3-5 days",
        category: Category::Interior,
        priority: Priority::High,
    },
    ShowcaseSeed {
        id: "show_led_lighting",
        title: "LED Lighting Upgrade",
        description: "Replace old bulbs with energy-efficient LED fixtures to modernize and reduce electricity bills.",
        cost_low: 8_000,
        cost_high: 20_000,
        roi_label: "+10% Value",
        timeframe: "1-2 days",
        category: Category::Electrical,
        priority: Priority::High,
    },
    ShowcaseSeed {
        id: "show_modular_kitchen",
        title: "Modular Kitchen",
        description: "Install a space-efficient modular kitchen with modern storage solutions and appliances.",
        cost_low: 80_000,
        cost_high: 200_000,
        roi_label: "+25% Value",
        timeframe: "7-10 days",
        category: Category::Kitchen,
        priority: Priority::Medium,
    },
    ShowcaseSeed {
        id: "show_bathroom_renovation",
        title: "Bathroom Renovation",
        description: "Upgrade with modern fixtures, tiles, and improved ventilation for better functionality.",
        cost_low: 40_000,
        cost_high: 100_000,
        roi_label: "+20% Value",
        timeframe: "5-7 days",
        category: Category::Bathroom,
        priority: Priority::Medium,
    },
    ShowcaseSeed {
        id: "show_solar_panels",
        title: "Solar Panel Installation",
        description: "Install rooftop solar panels for sustainable energy and long-term cost savings.",
        cost_low: 100_000,
        cost_high: 300_000,
        roi_label: "+30% Value",
        timeframe: "2-3 days",
        category: Category::Sustainable,
        priority: Priority::Low,
    },
    ShowcaseSeed {
        id: "show_balcony_garden",
        title: "Balcony Garden Setup",
        description: "Create a green space with plants, seating, and aesthetic elements for natural beauty.",
        cost_low: 5_000,
        cost_high: 15_000,
        roi_label: "+12% Value",
        timeframe: "1-2 days",
        category: Category::Exterior,
        priority: Priority::High,
    },
];

struct UpgradeCategorySeed {
    title: &'static str,
    description: &'static str,
    improvements: &'static [&'static str],
}

const UPGRADE_CATEGORY_SEEDS: &[UpgradeCategorySeed] = &[
    UpgradeCategorySeed {
        title: "Kitchen",
        description: "Modular designs, better storage, chimney & energy-saving appliances.",
        improvements: &["Modular Kitchen", "Smart Appliances", "Better Ventilation", "Storage Solutions"],
    },
    UpgradeCategorySeed {
        title: "Bathroom",
        description: "Anti-slip tiles, geysers, modern fittings, waterproofing for durability.",
        improvements: &["Modern Fixtures", "Better Lighting", "Ventilation", "Waterproofing"],
    },
    UpgradeCategorySeed {
        title: "Exterior",
        description: "Painting, waterproofing, balcony garden, compound wall improvement.",
        improvements: &["Fresh Paint", "Landscaping", "Balcony Garden", "Gate Upgrade"],
    },
    UpgradeCategorySeed {
        title: "Green Upgrades",
        description: "Solar panels, rainwater harvesting, LED lighting, natural ventilation.",
        improvements: &["Solar Panels", "Rainwater Harvesting", "LED Conversion", "Plant Systems"],
    },
    UpgradeCategorySeed {
        title: "Smart Homes",
        description: "Wi-Fi switches, smart locks, CCTV cameras, IoT-enabled lighting.",
        improvements: &["Smart Switches", "Automated Lights", "Security Systems", "Voice Control"],
    },
];

/// One showcase card from the popular-enhancements gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cost_range: CostRange,
    pub roi_label: String,
    pub timeframe: String,
    pub category: Category,
    pub priority: Priority,
}

/// A browsable upgrade theme with its headline improvements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeCategory {
    pub title: String,
    pub description: String,
    pub improvements: Vec<String>,
}

/// Immutable catalog built once at startup from the seed tables.
#[derive(Clone, Debug)]
pub struct Catalog {
    showcase: Vec<ShowcaseEntry>,
    categories: Vec<UpgradeCategory>,
}

impl Catalog {
    pub fn seeded() -> Self {
        let showcase = SHOWCASE_SEEDS
            .iter()
            .map(|seed| ShowcaseEntry {
                id: seed.id.to_owned(),
                title: seed.title.to_owned(),
                description: seed.description.to_owned(),
                cost_range: CostRange::new(seed.cost_low, seed.cost_high),
                roi_label: seed.roi_label.to_owned(),
                timeframe: seed.timeframe.to_owned(),
                category: seed.category,
                priority: seed.priority,
            })
            .collect();

        let categories = UPGRADE_CATEGORY_SEEDS
            .iter()
            .map(|seed| UpgradeCategory {
                title: seed.title.to_owned(),
                description: seed.description.to_owned(),
                improvements: seed.improvements.iter().map(|name| (*name).to_owned()).collect(),
            })
            .collect();

        Self { showcase, categories }
    }

    pub fn showcase(&self) -> &[ShowcaseEntry] {
        &self.showcase
    }

    pub fn showcase_in(&self, category: Category) -> Vec<&ShowcaseEntry> {
        self.showcase.iter().filter(|entry| entry.category == category).collect()
    }

    pub fn categories(&self) -> &[UpgradeCategory] {
        &self.categories
    }

    pub fn find(&self, id: &str) -> Option<&ShowcaseEntry> {
        self.showcase.iter().find(|entry| entry.id.eq_ignore_ascii_case(id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
