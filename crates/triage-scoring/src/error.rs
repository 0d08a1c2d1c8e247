use thiserror::Error;

/// Reasons a scored batch is not ready to be submitted for grading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("no patient records were loaded")]
    NoPatients,

    #[error("no patients identified in any cohort")]
    EmptySubmission,
}
