use secrecy::ExposeSecret;
use serde::Serialize;

use homeworth_core::advisor::{Catalog, Category, RecommendationEngine, MAX_RECOMMENDATIONS};
use homeworth_core::config::{AppConfig, LoadOptions};
use homeworth_core::domain::property::{BudgetTier, Condition, PropertyProfile, PropertyType};

// sha256("admin123"), the published demo credential. A deployment still
// running it is not ready.
const DEMO_CREDENTIAL_DIGEST: &str =
    "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_admin_gate(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "admin_gate_readiness",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    // Seed data needs no configuration, so this check always runs.
    checks.push(check_catalog_integrity());

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_admin_gate(config: &AppConfig) -> DoctorCheck {
    let digest = config.admin.password_sha256.expose_secret();

    if digest.eq_ignore_ascii_case(DEMO_CREDENTIAL_DIGEST) {
        return DoctorCheck {
            name: "admin_gate_readiness",
            status: CheckStatus::Fail,
            details: "the published demo credential is still configured; rotate admin.password_sha256"
                .to_string(),
        };
    }

    DoctorCheck {
        name: "admin_gate_readiness",
        status: CheckStatus::Pass,
        details: "credential digest format validated by config contract".to_string(),
    }
}

fn check_catalog_integrity() -> DoctorCheck {
    let catalog = Catalog::seeded();

    for category in Category::ALL {
        if catalog.showcase_in(category).is_empty() {
            return DoctorCheck {
                name: "catalog_integrity",
                status: CheckStatus::Fail,
                details: format!("no showcase entry for category `{}`", category.as_str()),
            };
        }
    }

    // Engine smoke: the unconditional rule must fire for any profile, and
    // the result must honor the cap.
    let profile = PropertyProfile {
        property_type: PropertyType::Apartment,
        city: "Pune".to_string(),
        locality: "Baner".to_string(),
        age_years: 20,
        area_sq_ft: 1_200,
        budget: BudgetTier::Above1M.value(),
        condition: Condition::NeedsRenovation,
    };
    let recommendations = RecommendationEngine::new().recommend(&profile);

    if recommendations.len() > MAX_RECOMMENDATIONS {
        return DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Fail,
            details: format!(
                "engine returned {} recommendations, cap is {MAX_RECOMMENDATIONS}",
                recommendations.len()
            ),
        };
    }

    let minimal_profile = PropertyProfile { budget: 0, age_years: 1, ..profile };
    let minimal = RecommendationEngine::new().recommend(&minimal_profile);
    if !minimal.iter().any(|rec| rec.id == "rec_balcony_garden") {
        return DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Fail,
            details: "unconditional balcony rule did not fire".to_string(),
        };
    }

    DoctorCheck {
        name: "catalog_integrity",
        status: CheckStatus::Pass,
        details: "seed tables and engine smoke checks passed".to_string(),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
