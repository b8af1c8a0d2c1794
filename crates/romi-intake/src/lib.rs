//! romi-intake
//!
//! Drives the schema validator and the triage classifier from discrete
//! field-change events and one submit event, the way the four-step intake
//! wizard does. Everything a presentation layer needs is exposed as plain
//! values: per-field state, the live triage, a preview, the ordered error
//! summary and typed notices.

pub mod error;
pub mod notice;
pub mod preview;
pub mod session;
pub mod step;
pub mod summary;

pub use error::IntakeError;
pub use notice::{Notice, NoticeKind};
pub use preview::Preview;
pub use session::{FieldState, IntakeSession};
pub use step::Step;
pub use summary::SummaryEntry;
