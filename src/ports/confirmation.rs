use crate::domain::AppError;

/// Port for asking the operator to confirm a run.
pub trait ConfirmationPort {
    /// Show `summary` and return whether the operator agreed.
    fn confirm(&self, summary: &str) -> Result<bool, AppError>;
}
