//! Merge policy: which basis content the final answer is built from.

use std::fmt;

use serde::Serialize;

/// One of the four merge outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    /// KB passed and web succeeded: both are combined.
    DualSourceValidated,
    /// Only the KB passed.
    KbPrimaryWebSupplement,
    /// Only the web search succeeded.
    WebPrimaryKbInsufficient,
    /// Neither source is usable: general-knowledge fallback.
    DualSourceInsufficient,
}

impl ResponseCategory {
    pub const ALL: [ResponseCategory; 4] = [
        ResponseCategory::DualSourceValidated,
        ResponseCategory::KbPrimaryWebSupplement,
        ResponseCategory::WebPrimaryKbInsufficient,
        ResponseCategory::DualSourceInsufficient,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseCategory::DualSourceValidated => "dual_source_validated",
            ResponseCategory::KbPrimaryWebSupplement => "kb_primary_web_supplement",
            ResponseCategory::WebPrimaryKbInsufficient => "web_primary_kb_insufficient",
            ResponseCategory::DualSourceInsufficient => "dual_source_insufficient",
        }
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure function of the two quality flags.
pub fn select_category(kb_passed: bool, web_passed: bool) -> ResponseCategory {
    match (kb_passed, web_passed) {
        (true, true) => ResponseCategory::DualSourceValidated,
        (true, false) => ResponseCategory::KbPrimaryWebSupplement,
        (false, true) => ResponseCategory::WebPrimaryKbInsufficient,
        (false, false) => ResponseCategory::DualSourceInsufficient,
    }
}

/// Per-source grade reported in the internal analytics block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityGrade {
    High,
    Low,
    Error,
}

impl QualityGrade {
    pub fn from_passed(passed: bool) -> Self {
        if passed { QualityGrade::High } else { QualityGrade::Low }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityScores {
    pub kb: QualityGrade,
    pub web: QualityGrade,
}

impl QualityScores {
    pub fn graded(kb_passed: bool, web_passed: bool) -> Self {
        Self {
            kb: QualityGrade::from_passed(kb_passed),
            web: QualityGrade::from_passed(web_passed),
        }
    }

    pub fn error() -> Self {
        Self {
            kb: QualityGrade::Error,
            web: QualityGrade::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_table() {
        assert_eq!(select_category(true, true), ResponseCategory::DualSourceValidated);
        assert_eq!(select_category(true, false), ResponseCategory::KbPrimaryWebSupplement);
        assert_eq!(select_category(false, true), ResponseCategory::WebPrimaryKbInsufficient);
        assert_eq!(select_category(false, false), ResponseCategory::DualSourceInsufficient);
    }

    #[test]
    fn serializes_snake_case_and_uppercase_grades() {
        assert_eq!(
            serde_json::to_value(ResponseCategory::WebPrimaryKbInsufficient).unwrap(),
            "web_primary_kb_insufficient"
        );
        for c in ResponseCategory::ALL {
            assert_eq!(serde_json::to_value(c).unwrap(), c.as_str());
        }
        let scores = serde_json::to_value(QualityScores::graded(true, false)).unwrap();
        assert_eq!(scores["kb"], "HIGH");
        assert_eq!(scores["web"], "LOW");
        assert_eq!(serde_json::to_value(QualityScores::error()).unwrap()["kb"], "ERROR");
    }
}
