use super::domain::{Applicant, ApplicantId, ApplicantStatus, NewApplicant};

/// Storage abstraction so the service and router can be exercised in
/// isolation. The store owns identifier assignment and uniqueness; `list`
/// returns rows in store order, which the service relies on as the tie-break
/// when sorting.
pub trait ApplicantRepository: Send + Sync {
    fn insert(&self, submission: NewApplicant) -> Result<Applicant, RepositoryError>;
    fn list(&self) -> Result<Vec<Applicant>, RepositoryError>;
    fn update_status(
        &self,
        id: ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RepositoryError>;
    fn delete(&self, id: ApplicantId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("applicant not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
