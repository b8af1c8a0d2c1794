use romi_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Core(#[from] CoreError),
}
