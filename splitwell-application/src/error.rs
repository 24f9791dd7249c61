use crate::model::ExpenseReview;
use thiserror::Error;

/// Failure surfaced by an `ExpenseGateway` implementation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backend answered with a non-success status. `message` is whatever
    /// could be extracted from the response body, which may be absent or
    /// malformed.
    #[error("expense creation rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The request never produced a response.
    #[error("failed to reach the expense backend: {0}")]
    Transport(String),
}

impl GatewayError {
    /// The user-facing rendition of this failure.
    pub fn display_message(&self) -> String {
        match self {
            GatewayError::Rejected { status, message } => {
                splitwell_i18n::expense_creation_failed(*status, message)
            }
            GatewayError::Transport(detail) => {
                format!("{}: {detail}", splitwell_i18n::EXPENSE_CREATION_FAILED)
            }
        }
    }
}

/// Why a submission attempt did not reach the backend, or failed there.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more gates failed; the review carries which ones.
    #[error("expense submission blocked by validation")]
    Blocked(ExpenseReview),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
