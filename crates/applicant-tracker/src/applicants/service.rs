use std::sync::Arc;

use super::domain::{
    Applicant, ApplicantId, ApplicantQuery, ApplicantStatus, NewApplicant, SortKey,
};
use super::repository::{ApplicantRepository, RepositoryError};

/// Service wrapping the repository with the list/filter/sort semantics and the
/// lifecycle operations exposed over HTTP.
pub struct ApplicantService<R> {
    repository: Arc<R>,
}

impl<R> ApplicantService<R>
where
    R: ApplicantRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List applicants, optionally filtered by a case-insensitive substring
    /// over name or skills and ordered by experience descending. Ties keep the
    /// order the store returned.
    pub fn list(&self, query: &ApplicantQuery) -> Result<Vec<Applicant>, ApplicantServiceError> {
        let mut applicants = self.repository.list()?;

        if let Some(needle) = query.search.as_deref() {
            let needle = needle.to_lowercase();
            applicants.retain(|applicant| matches_search(applicant, &needle));
        }

        match query.sort {
            // Vec::sort_by is stable, so equal experience keeps store order.
            Some(SortKey::Experience) => {
                applicants.sort_by(|a, b| b.experience.cmp(&a.experience))
            }
            None => {}
        }

        Ok(applicants)
    }

    /// Insert a new applicant, returning the record with its assigned id.
    pub fn create(&self, submission: NewApplicant) -> Result<Applicant, ApplicantServiceError> {
        let applicant = self.repository.insert(submission)?;
        tracing::debug!(id = %applicant.id, "applicant created");
        Ok(applicant)
    }

    /// Overwrite the status of one applicant, leaving every other field as-is.
    pub fn update_status(
        &self,
        id: ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, ApplicantServiceError> {
        let applicant = self.repository.update_status(id, status)?;
        Ok(applicant)
    }

    /// Remove one applicant outright. There is no soft-delete.
    pub fn delete(&self, id: ApplicantId) -> Result<(), ApplicantServiceError> {
        self.repository.delete(id)?;
        Ok(())
    }
}

/// True when the lowercased needle occurs in the applicant's name or skills.
fn matches_search(applicant: &Applicant, needle: &str) -> bool {
    applicant.name.to_lowercase().contains(needle)
        || applicant.skills.to_lowercase().contains(needle)
}

/// Error raised by the applicant service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicantServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
