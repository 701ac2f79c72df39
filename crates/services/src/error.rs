//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{SessionError, ShareError};

/// Errors emitted by `SessionFlowService`.
///
/// Malformed user input is not an error at this layer; it is ignored and
/// reported as `InputOutcome::Ignored`. Only phase-contract violations and
/// share-link construction failures surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionFlowError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Share(#[from] ShareError),
}
