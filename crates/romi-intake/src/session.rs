use std::collections::HashMap;

use romi_core::FieldPath;
use romi_core::models::draft::{FieldInput, RawValue, ReportDraft};
use romi_core::models::report::PatientReport;
use romi_core::models::triage::TriageDecision;
use romi_schema::{FieldError, validate_field, validate_report};
use romi_storage::KeyValueStore;
use romi_storage::submission::{load_last_submission, save_submission};
use romi_submit::{SubmissionReceipt, Submitter};

use crate::error::IntakeError;
use crate::notice::{self, Notice};
use crate::preview::Preview;
use crate::step::Step;
use crate::summary::{self, SummaryEntry};

/// What the presentation layer shows for one control.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState<'a> {
    pub value: RawValue<'a>,
    /// Whether the current value passes its rule right now.
    pub valid: bool,
    /// The error on display, if the field has been checked and failed.
    pub error: Option<&'a FieldError>,
}

/// One patient filling in the wizard.
///
/// Errors are recorded when a field is checked: on every change to it, when
/// leaving its step, and on submit. Validity in [`FieldState`] is always
/// live. `submit` takes `&mut self`, so at most one submission can be
/// outstanding.
#[derive(Debug, Clone, Default)]
pub struct IntakeSession {
    draft: ReportDraft,
    step: Step,
    errors: HashMap<FieldPath, FieldError>,
    submit_count: u32,
    receipt: Option<SubmissionReceipt>,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: ReportDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    /// Start from the last accepted submission, or from defaults when there
    /// is none.
    pub fn resume<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match load_last_submission(store) {
            Some(report) => {
                tracing::debug!("seeding draft from last submission");
                Self::with_draft(ReportDraft::from(&report))
            }
            None => Self::new(),
        }
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Receipt of the most recent accepted submission in this session.
    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    /// Apply a field-change event and re-check the rule it feeds.
    pub fn apply_change(&mut self, field: FieldPath, input: FieldInput) -> Result<(), IntakeError> {
        self.draft.apply(field, input)?;
        self.check(field.validation_target());
        Ok(())
    }

    pub fn field_state(&self, field: FieldPath) -> FieldState<'_> {
        let target = field.validation_target();
        FieldState {
            value: self.draft.value(field),
            valid: validate_field(target, self.draft.value(target)).is_ok(),
            error: self.errors.get(&target),
        }
    }

    pub fn error(&self, field: FieldPath) -> Option<&FieldError> {
        self.errors.get(&field.validation_target())
    }

    /// Recorded errors in declaration order.
    pub fn errors(&self) -> Vec<&FieldError> {
        FieldPath::VALIDATED
            .iter()
            .filter_map(|f| self.errors.get(f))
            .collect()
    }

    /// Triage of the draft as it stands, valid or not.
    pub fn triage(&self) -> TriageDecision {
        romi_triage::triage_draft(&self.draft)
    }

    pub fn preview(&self) -> Preview {
        Preview::new(&self.draft, self.triage())
    }

    /// The error summary. Empty until the first submit attempt.
    pub fn summary(&self) -> Vec<SummaryEntry> {
        if self.submit_count == 0 {
            return Vec::new();
        }
        summary::summarize(self.errors())
    }

    /// Check the current step and advance if it passes. On failure the step
    /// is unchanged and the returned notice asks the patient to fix it.
    pub fn next_step(&mut self) -> Result<Step, Notice> {
        let mut failed = 0;
        for field in self.step.validated_fields() {
            if !self.check(field) {
                failed += 1;
            }
        }
        if failed > 0 {
            tracing::debug!(step = %self.step, failed, "step has errors");
            return Err(Notice::error(notice::STEP_HAS_ERRORS));
        }
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Go back one step. Never validates.
    pub fn prev_step(&mut self) -> Step {
        self.step = self.step.prev();
        self.step
    }

    /// Validate the whole draft, recording the outcome of every rule.
    pub fn validate(&mut self) -> Result<PatientReport, Vec<FieldError>> {
        let result = validate_report(&self.draft);
        self.errors.clear();
        if let Err(errors) = &result {
            for error in errors {
                self.errors.insert(error.field, error.clone());
            }
        }
        result
    }

    /// The submit event. Validates, hands the report to `submitter` and on
    /// acceptance stores it as the last submission. The draft is never
    /// modified, so a failed attempt can simply be retried.
    pub async fn submit<T, S>(&mut self, submitter: &T, store: &S) -> Notice
    where
        T: Submitter + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        self.submit_count += 1;
        let report = match self.validate() {
            Ok(report) => report,
            Err(errors) => {
                tracing::info!(error_count = errors.len(), "submit blocked by validation");
                return Notice::error(notice::FORM_HAS_ERRORS);
            }
        };

        match submitter.submit(&report).await {
            Ok(receipt) => {
                tracing::info!(id = %receipt.id, "submission accepted");
                save_submission(store, &report);
                self.receipt = Some(receipt);
                Notice::success(notice::SUBMITTED)
            }
            Err(e) => {
                tracing::info!(reason = %e, "submission failed");
                Notice::error(e.to_string())
            }
        }
    }

    /// Run the rule for `target` and record the outcome. Returns whether it
    /// passed.
    fn check(&mut self, target: FieldPath) -> bool {
        match validate_field(target, self.draft.value(target)) {
            Ok(()) => {
                self.errors.remove(&target);
                true
            }
            Err(error) => {
                self.errors.insert(target, error);
                false
            }
        }
    }
}
