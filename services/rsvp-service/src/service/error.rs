use thiserror::Error;

use crate::domain::Rejection;
use crate::repo::StoreError;

#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("Guest not found")]
    NotFound,

    #[error("Submission rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RsvpError {
    /// True when the system, not the guest, is at fault.
    pub fn is_failure(&self) -> bool {
        matches!(self, RsvpError::Integrity(_) | RsvpError::Store(_))
    }
}
