use std::env;
use std::sync::{Mutex, OnceLock};

use homeworth_cli::commands::{assess, catalog, config, doctor, estimate, login};
use serde_json::Value;

// sha256("hunter2") / sha256("admin123")
const TEST_DIGEST: &str = "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7";
const DEMO_DIGEST: &str = "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9";

const MANAGED_VARS: &[&str] = &[
    "HOMEWORTH_ADMIN_EMAIL",
    "HOMEWORTH_ADMIN_PASSWORD_SHA256",
    "HOMEWORTH_ADMIN_MAX_ATTEMPTS",
    "HOMEWORTH_ADMIN_ATTEMPT_WINDOW_SECS",
    "HOMEWORTH_LOGGING_LEVEL",
    "HOMEWORTH_LOGGING_FORMAT",
    "HOMEWORTH_LOG_LEVEL",
    "HOMEWORTH_LOG_FORMAT",
];

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn with_env(vars: &[(&str, &str)], test: impl FnOnce()) {
    let _guard = ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    for key in MANAGED_VARS {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test();

    for key in MANAGED_VARS {
        env::remove_var(key);
    }
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn assess_args(
    age: &str,
    area: &str,
    budget: &str,
    condition: &str,
) -> assess::AssessArgs {
    assess::AssessArgs {
        property_type: "apartment".to_string(),
        city: "Mumbai".to_string(),
        locality: "Powai".to_string(),
        age: age.to_string(),
        area: area.to_string(),
        budget: budget.to_string(),
        condition: condition.to_string(),
    }
}

#[test]
fn estimate_reports_standard_tier_uplift() {
    let result = estimate::run(&estimate::EstimateArgs {
        current_value: "5000000".to_string(),
        spend: "200000".to_string(),
    });
    assert_eq!(result.exit_code, 0, "expected successful estimate");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "estimate");
    assert_eq!(payload["status"], "ok");

    let message = payload["message"].as_str().unwrap_or("");
    assert!(message.contains("₹2,40,000"), "message should show the increase: {message}");
    assert!(message.contains("₹52,40,000"), "message should show the new value: {message}");
    assert!(message.contains("20.0%"), "message should show the ROI: {message}");
}

#[test]
fn estimate_rejects_zero_spend() {
    let result = estimate::run(&estimate::EstimateArgs {
        current_value: "1000000".to_string(),
        spend: "0".to_string(),
    });
    assert_eq!(result.exit_code, 2, "expected validation failure code");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "validation");
    assert!(payload["message"].as_str().unwrap_or("").contains("improvement_spend"));
}

#[test]
fn estimate_rejects_non_numeric_input() {
    let result = estimate::run(&estimate::EstimateArgs {
        current_value: "a lot".to_string(),
        spend: "40000".to_string(),
    });
    assert_eq!(result.exit_code, 2);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["error_class"], "validation");
    assert!(payload["message"].as_str().unwrap_or("").contains("current_value"));
}

#[test]
fn assess_caps_recommendations_in_rule_order() {
    let result = assess::run(&assess_args("20", "1500", "1000001", "needs-renovation"));
    assert_eq!(result.exit_code, 0, "expected successful assessment");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "assess");
    assert_eq!(payload["status"], "ok");

    let recommendations = payload["data"]["recommendations"]
        .as_array()
        .expect("recommendations should be an array");
    assert_eq!(recommendations.len(), 4);

    let ids: Vec<&str> =
        recommendations.iter().filter_map(|rec| rec["id"].as_str()).collect();
    assert_eq!(
        ids,
        ["rec_paint_lighting", "rec_modular_kitchen", "rec_smart_home", "rec_electrical_plumbing"]
    );
}

#[test]
fn assess_treats_malformed_age_as_zero() {
    let result = assess::run(&assess_args("not-a-number", "900", "100000", "good"));
    assert_eq!(result.exit_code, 0, "lenient parse should not fail the command");

    let payload = parse_payload(&result.output);
    let recommendations = payload["data"]["recommendations"]
        .as_array()
        .expect("recommendations should be an array");

    // Age coerced to 0, so the rewiring rule cannot fire.
    assert!(recommendations
        .iter()
        .all(|rec| rec["id"].as_str() != Some("rec_electrical_plumbing")));
    assert!(recommendations
        .iter()
        .any(|rec| rec["id"].as_str() == Some("rec_balcony_garden")));
}

#[test]
fn assess_rejects_undersized_area() {
    let result = assess::run(&assess_args("5", "120", "100000", "good"));
    assert_eq!(result.exit_code, 2);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["error_class"], "validation");
    assert!(payload["message"].as_str().unwrap_or("").contains("area_sq_ft"));
}

#[test]
fn catalog_filters_by_category() {
    let result = catalog::run(Some("kitchen"));
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let entries = payload["data"]["entries"].as_array().expect("entries should be an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "Modular Kitchen");
}

#[test]
fn catalog_rejects_unknown_category() {
    let result = catalog::run(Some("garage"));
    assert_eq!(result.exit_code, 2);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["error_class"], "validation");
}

#[test]
fn catalog_lists_all_entries_without_filter() {
    let result = catalog::run(None);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let entries = payload["data"]["entries"].as_array().expect("entries should be an array");
    assert_eq!(entries.len(), 6);

    let upgrade_categories = payload["data"]["upgrade_categories"]
        .as_array()
        .expect("upgrade categories should be an array");
    assert_eq!(upgrade_categories.len(), 5);
}

#[test]
fn login_grants_valid_credentials() {
    with_env(&[("HOMEWORTH_ADMIN_PASSWORD_SHA256", TEST_DIGEST)], || {
        let result = login::run("admin@homeworth.example", "hunter2");
        assert_eq!(result.exit_code, 0, "expected granted login");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["message"], "Welcome to the Admin Dashboard.");
        assert_eq!(payload["data"]["granted"], true);
    });
}

#[test]
fn login_denies_with_a_generic_message() {
    with_env(&[("HOMEWORTH_ADMIN_PASSWORD_SHA256", TEST_DIGEST)], || {
        let wrong_password = login::run("admin@homeworth.example", "letmein");
        assert_eq!(wrong_password.exit_code, 3);

        let payload = parse_payload(&wrong_password.output);
        assert_eq!(payload["error_class"], "denied");
        assert_eq!(payload["message"], "Invalid email or password. Please try again.");

        let wrong_email = login::run("intruder@homeworth.example", "hunter2");
        let other_payload = parse_payload(&wrong_email.output);
        assert_eq!(other_payload["message"], payload["message"]);
    });
}

#[test]
fn login_fails_fast_without_configured_digest() {
    with_env(&[], || {
        let result = login::run("admin@homeworth.example", "hunter2");
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn doctor_passes_with_rotated_credential() {
    with_env(&[("HOMEWORTH_ADMIN_PASSWORD_SHA256", TEST_DIGEST)], || {
        let output = doctor::run(true);
        let payload: Value =
            serde_json::from_str(&output).expect("doctor JSON output should parse");

        assert_eq!(payload["overall_status"], "pass");
        let checks = payload["checks"].as_array().expect("checks should be an array");
        assert_eq!(checks.len(), 3);
    });
}

#[test]
fn doctor_flags_demo_credential() {
    with_env(&[("HOMEWORTH_ADMIN_PASSWORD_SHA256", DEMO_DIGEST)], || {
        let output = doctor::run(true);
        let payload: Value =
            serde_json::from_str(&output).expect("doctor JSON output should parse");

        assert_eq!(payload["overall_status"], "fail");
        let gate_check = payload["checks"]
            .as_array()
            .and_then(|checks| {
                checks.iter().find(|check| check["name"] == "admin_gate_readiness")
            })
            .expect("admin gate check should be present");
        assert_eq!(gate_check["status"], "fail");
    });
}

#[test]
fn config_command_redacts_the_digest() {
    with_env(
        &[
            ("HOMEWORTH_ADMIN_EMAIL", "ops@homeworth.example"),
            ("HOMEWORTH_ADMIN_PASSWORD_SHA256", TEST_DIGEST),
        ],
        || {
            let output = config::run();

            assert!(output.contains("admin.email = ops@homeworth.example"));
            assert!(output.contains("admin.password_sha256 = <redacted>"));
            assert!(!output.contains(TEST_DIGEST), "digest must never be printed");
            assert!(output.contains("env (HOMEWORTH_ADMIN_EMAIL)"));
        },
    );
}
