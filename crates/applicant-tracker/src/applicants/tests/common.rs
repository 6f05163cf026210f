use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::applicants::domain::{Applicant, ApplicantId, ApplicantStatus, NewApplicant};
use crate::applicants::repository::{ApplicantRepository, RepositoryError};
use crate::applicants::{applicant_router, ApplicantService};

pub(super) fn submission(name: &str, skills: &str, experience: u16) -> NewApplicant {
    NewApplicant {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        skills: skills.to_string(),
        experience,
        notes: None,
        status: ApplicantStatus::default(),
    }
}

pub(super) fn build_service() -> (ApplicantService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ApplicantService::new(repository.clone());
    (service, repository)
}

pub(super) fn applicant_router_with_service(
    service: ApplicantService<MemoryRepository>,
) -> axum::Router {
    applicant_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Vec-backed store keeping insertion order, mirroring the API binary's
/// repository closely enough for the ordering tests to be meaningful.
#[derive(Default)]
pub(super) struct MemoryRepository {
    rows: Mutex<Vec<Applicant>>,
    sequence: AtomicI64,
}

impl ApplicantRepository for MemoryRepository {
    fn insert(&self, submission: NewApplicant) -> Result<Applicant, RepositoryError> {
        let id = ApplicantId(self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let applicant = Applicant {
            id,
            name: submission.name,
            email: submission.email,
            skills: submission.skills,
            experience: submission.experience,
            notes: submission.notes,
            status: submission.status,
        };
        let mut rows = self.rows.lock().expect("repository mutex poisoned");
        rows.push(applicant.clone());
        Ok(applicant)
    }

    fn list(&self) -> Result<Vec<Applicant>, RepositoryError> {
        let rows = self.rows.lock().expect("repository mutex poisoned");
        Ok(rows.clone())
    }

    fn update_status(
        &self,
        id: ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RepositoryError> {
        let mut rows = self.rows.lock().expect("repository mutex poisoned");
        let applicant = rows
            .iter_mut()
            .find(|applicant| applicant.id == id)
            .ok_or(RepositoryError::NotFound)?;
        applicant.status = status;
        Ok(applicant.clone())
    }

    fn delete(&self, id: ApplicantId) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().expect("repository mutex poisoned");
        let before = rows.len();
        rows.retain(|applicant| applicant.id != id);
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Repository that fails every call, for exercising the 500 path.
pub(super) struct UnavailableRepository;

impl ApplicantRepository for UnavailableRepository {
    fn insert(&self, _submission: NewApplicant) -> Result<Applicant, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_status(
        &self,
        _id: ApplicantId,
        _status: ApplicantStatus,
    ) -> Result<Applicant, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: ApplicantId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
