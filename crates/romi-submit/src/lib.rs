//! romi-submit
//!
//! The remote intake contract: hand over a validated report, get back an
//! acceptance receipt or a rejection message. [`DemoSubmitter`] is the only
//! implementation; it simulates latency, keyword rejection and transient
//! outages.

pub mod demo;
pub mod error;

use std::future::Future;
use std::pin::Pin;

use romi_core::models::report::PatientReport;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use demo::{DemoSubmitter, SubmitterConfig};
pub use error::SubmissionError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Proof that the remote side accepted a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub message: String,
}

/// Accepts finished reports.
///
/// Callers must not start a second submission before the previous one
/// resolves. Methods return boxed futures for dyn compatibility.
pub trait Submitter: Send + Sync {
    fn submit<'a>(
        &'a self,
        report: &'a PatientReport,
    ) -> BoxFuture<'a, Result<SubmissionReceipt, SubmissionError>>;
}
