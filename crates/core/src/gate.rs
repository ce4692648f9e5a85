//! Admin credential gate.
//!
//! Verifies an email/password pair against a configured SHA-256 digest and
//! throttles repeated failures per email inside a sliding window. The gate
//! never reveals which half of the pair was wrong.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::config::AdminConfig;

/// Failed-attempt tracking for a single email.
#[derive(Debug, Default)]
struct AttemptWindow {
    failures: Vec<Instant>,
}

impl AttemptWindow {
    fn count(&self, window: Duration) -> usize {
        self.failures.iter().filter(|at| at.elapsed() < window).count()
    }

    fn record_failure(&mut self, window: Duration) -> usize {
        self.failures.retain(|at| at.elapsed() < window);
        self.failures.push(Instant::now());
        self.failures.len()
    }

    fn clear(&mut self) {
        self.failures.clear();
    }
}

/// Result of a gate check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Granted,
    Denied,
    LockedOut { retry_after_secs: u64 },
}

impl GateOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, GateOutcome::Granted)
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            GateOutcome::Granted => "Welcome to the Admin Dashboard.",
            GateOutcome::Denied => "Invalid email or password. Please try again.",
            GateOutcome::LockedOut { .. } => "Too many failed attempts. Please try again later.",
        }
    }
}

#[derive(Debug)]
pub struct AdminGate {
    email: String,
    password_digest: SecretString,
    max_attempts: u32,
    attempt_window: Duration,
    attempts: Mutex<HashMap<String, AttemptWindow>>,
}

impl AdminGate {
    pub fn from_config(config: &AdminConfig) -> Self {
        Self {
            email: config.email.clone(),
            password_digest: config.password_sha256.clone(),
            max_attempts: config.max_attempts,
            attempt_window: Duration::from_secs(config.attempt_window_secs),
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Checks a credential pair. Email and digest are both compared before
    /// answering so a mismatch in either yields the same generic denial.
    pub fn verify(&self, email: &str, password: &str) -> GateOutcome {
        let key = email.trim().to_ascii_lowercase();

        let mut attempts = self.attempts.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let entry = attempts.entry(key.clone()).or_default();

        if entry.count(self.attempt_window) >= self.max_attempts as usize {
            warn!(email = %key, "admin login throttled");
            return GateOutcome::LockedOut { retry_after_secs: self.attempt_window.as_secs() };
        }

        let email_matches = self.email.trim().eq_ignore_ascii_case(&key);
        let digest_matches =
            sha256_hex(password).eq_ignore_ascii_case(self.password_digest.expose_secret());

        if email_matches && digest_matches {
            entry.clear();
            debug!(email = %key, "admin login granted");
            return GateOutcome::Granted;
        }

        let failure_count = entry.record_failure(self.attempt_window);
        warn!(email = %key, failure_count, "admin login denied");
        GateOutcome::Denied
    }
}

fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::{sha256_hex, AdminGate, GateOutcome};
    use crate::config::AdminConfig;

    // sha256("hunter2")
    const DIGEST: &str = "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7";

    fn gate(max_attempts: u32) -> AdminGate {
        AdminGate::from_config(&AdminConfig {
            email: "admin@homeworth.example".to_string(),
            password_sha256: SecretString::from(DIGEST.to_string()),
            max_attempts,
            attempt_window_secs: 300,
        })
    }

    #[test]
    fn digest_helper_matches_known_vector() {
        assert_eq!(sha256_hex("hunter2"), DIGEST);
    }

    #[test]
    fn valid_credentials_are_granted() {
        let gate = gate(5);
        let outcome = gate.verify("admin@homeworth.example", "hunter2");
        assert!(outcome.is_granted());
        assert_eq!(outcome.user_message(), "Welcome to the Admin Dashboard.");
    }

    #[test]
    fn email_comparison_ignores_case_and_whitespace() {
        let gate = gate(5);
        assert!(gate.verify("  Admin@Homeworth.Example ", "hunter2").is_granted());
    }

    #[test]
    fn wrong_password_and_wrong_email_share_a_generic_message() {
        let gate = gate(5);

        let wrong_password = gate.verify("admin@homeworth.example", "letmein");
        let wrong_email = gate.verify("intruder@homeworth.example", "hunter2");

        assert_eq!(wrong_password, GateOutcome::Denied);
        assert_eq!(wrong_email, GateOutcome::Denied);
        assert_eq!(wrong_password.user_message(), wrong_email.user_message());
    }

    #[test]
    fn repeated_failures_lock_the_email_out() {
        let gate = gate(2);

        assert_eq!(gate.verify("admin@homeworth.example", "bad-1"), GateOutcome::Denied);
        assert_eq!(gate.verify("admin@homeworth.example", "bad-2"), GateOutcome::Denied);

        // Even the correct password is refused once throttled.
        let locked = gate.verify("admin@homeworth.example", "hunter2");
        assert_eq!(locked, GateOutcome::LockedOut { retry_after_secs: 300 });
        assert_eq!(locked.user_message(), "Too many failed attempts. Please try again later.");
    }

    #[test]
    fn lockout_is_scoped_per_email() {
        let gate = gate(1);

        assert_eq!(gate.verify("other@homeworth.example", "bad"), GateOutcome::Denied);
        assert!(matches!(
            gate.verify("other@homeworth.example", "bad"),
            GateOutcome::LockedOut { .. }
        ));

        // The configured admin address is unaffected.
        assert!(gate.verify("admin@homeworth.example", "hunter2").is_granted());
    }

    #[test]
    fn successful_login_clears_the_failure_window() {
        let gate = gate(2);

        assert_eq!(gate.verify("admin@homeworth.example", "bad"), GateOutcome::Denied);
        assert!(gate.verify("admin@homeworth.example", "hunter2").is_granted());

        // The window restarts: one earlier failure no longer counts.
        assert_eq!(gate.verify("admin@homeworth.example", "bad"), GateOutcome::Denied);
        assert!(gate.verify("admin@homeworth.example", "hunter2").is_granted());
    }
}
