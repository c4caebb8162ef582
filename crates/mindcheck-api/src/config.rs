use std::env;

use mindcheck_triage::check_questionnaire_version;
use mindcheck_triage::error::TriageError;
use serde::Serialize;

const DEFAULT_QUESTIONNAIRE_VERSION: &str = "v1";
const DEFAULT_CRISIS_LINE_NAME: &str = "988 Suicide & Crisis Lifeline";
const DEFAULT_CRISIS_LINE_PHONE: &str = "988";

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Stamped on every screening record.
    pub questionnaire_version: String,
    pub crisis_line: EmergencyResources,
}

/// Crisis contact shown alongside an emergency triage result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyResources {
    pub name: String,
    pub phone: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values fall back to the
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            questionnaire_version: get(
                "MINDCHECK_QUESTIONNAIRE_VERSION",
                DEFAULT_QUESTIONNAIRE_VERSION,
            ),
            crisis_line: EmergencyResources {
                name: get("MINDCHECK_CRISIS_LINE_NAME", DEFAULT_CRISIS_LINE_NAME),
                phone: get("MINDCHECK_CRISIS_LINE_PHONE", DEFAULT_CRISIS_LINE_PHONE),
            },
        }
    }
}

impl AppConfig {
    /// Fail startup when the configured version does not match the
    /// registered questionnaires.
    pub fn validate(&self) -> Result<(), TriageError> {
        check_questionnaire_version(&self.questionnaire_version)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
