//! romi-triage
//!
//! Local, non-clinical severity estimate. A pure function from a report or a
//! partial draft to exactly one [`TriageDecision`]: rules are evaluated in
//! priority order and the first match wins. Nothing is cached, so callers
//! recompute on every draft change.

pub mod rules;
pub mod signals;

use romi_core::models::draft::ReportDraft;
use romi_core::models::report::PatientReport;
use romi_core::models::triage::{TriageDecision, TriageLevel};

pub use signals::TriageSignals;

/// Trait implemented by each alarm rule.
pub trait TriageRule: Send + Sync {
    fn level(&self) -> TriageLevel;

    fn recommendation(&self) -> &'static str;

    /// The reason this rule fires for `signals`, or `None` if it does not.
    fn reason(&self, signals: &TriageSignals) -> Option<&'static str>;
}

/// Alarm rules, highest severity first.
pub fn all_rules() -> &'static [Box<dyn TriageRule>] {
    static RULES: std::sync::LazyLock<Vec<Box<dyn TriageRule>>> = std::sync::LazyLock::new(|| {
        vec![
            Box::new(rules::ImmediateCare),
            Box::new(rules::WatchfulFollowUp),
        ]
    });
    &RULES
}

/// Classify a set of signals. Total: with no alarm rule matching the result
/// is the low-severity default.
pub fn triage(signals: &TriageSignals) -> TriageDecision {
    all_rules()
        .iter()
        .find_map(|rule| {
            rule.reason(signals).map(|reason| TriageDecision {
                level: rule.level(),
                reason: reason.to_string(),
                recommendation: Some(rule.recommendation().to_string()),
            })
        })
        .unwrap_or_else(rules::no_alarm)
}

/// Classify a live draft, whether or not it currently validates.
pub fn triage_draft(draft: &ReportDraft) -> TriageDecision {
    triage(&TriageSignals::from(draft))
}

pub fn triage_report(report: &PatientReport) -> TriageDecision {
    triage(&TriageSignals::from(report))
}
