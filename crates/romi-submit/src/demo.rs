use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use romi_core::models::report::PatientReport;
use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;
use crate::{BoxFuture, SubmissionReceipt, Submitter};

pub const ACCEPTED_MESSAGE: &str = "Registro recibido";
pub const UNAVAILABLE_MESSAGE: &str = "Servicio temporalmente no disponible. Intenta de nuevo.";

/// Behaviour of the [`DemoSubmitter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitterConfig {
    /// Simulated round-trip time.
    pub latency_ms: u64,
    /// Probability in `[0, 1]` that an otherwise acceptable report fails
    /// with a transient error.
    pub failure_rate: f64,
    /// Reports whose name contains this word (any case) are rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_keyword: Option<String>,
    /// Fixes the random draws, for reproducible runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            failure_rate: 0.0,
            reject_keyword: None,
            seed: None,
        }
    }
}

impl SubmitterConfig {
    /// The policy of the hosted demo: 1.2 s latency, names containing
    /// "test" rejected, 15% transient failures.
    pub fn reference() -> Self {
        Self {
            latency_ms: 1200,
            failure_rate: 0.15,
            reject_keyword: Some("test".to_string()),
            seed: None,
        }
    }
}

pub struct DemoSubmitter {
    config: SubmitterConfig,
    rng: Mutex<StdRng>,
}

impl DemoSubmitter {
    pub fn new(config: SubmitterConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    /// The configured keyword, if `full_name` contains it.
    fn rejected_keyword(&self, full_name: &str) -> Option<&str> {
        self.config
            .reject_keyword
            .as_deref()
            .filter(|k| !k.is_empty())
            .filter(|k| full_name.to_lowercase().contains(&k.to_lowercase()))
    }

    /// Decide the outcome up front so no lock is held across the sleep.
    fn decide(&self, report: &PatientReport) -> Result<SubmissionReceipt, SubmissionError> {
        if let Some(keyword) = self.rejected_keyword(&report.full_name) {
            return Err(SubmissionError::Rejected(format!(
                "El nombre no puede contener la palabra \"{keyword}\"."
            )));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| SubmissionError::Unavailable(UNAVAILABLE_MESSAGE.to_string()))?;
        if rng.r#gen::<f64>() < self.config.failure_rate {
            return Err(SubmissionError::Unavailable(UNAVAILABLE_MESSAGE.to_string()));
        }

        Ok(SubmissionReceipt {
            id: uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid(),
            message: ACCEPTED_MESSAGE.to_string(),
        })
    }
}

impl Default for DemoSubmitter {
    fn default() -> Self {
        Self::new(SubmitterConfig::default())
    }
}

impl Submitter for DemoSubmitter {
    fn submit<'a>(
        &'a self,
        report: &'a PatientReport,
    ) -> BoxFuture<'a, Result<SubmissionReceipt, SubmissionError>> {
        Box::pin(async move {
            tracing::info!(latency_ms = self.config.latency_ms, "submitting report");
            let outcome = self.decide(report);
            if self.config.latency_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
            }
            match &outcome {
                Ok(receipt) => tracing::info!(id = %receipt.id, "report accepted"),
                Err(e) => tracing::info!(reason = %e, "report not accepted"),
            }
            outcome
        })
    }
}
