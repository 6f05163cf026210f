use applicant_tracker::applicants::{
    Applicant, ApplicantId, ApplicantRepository, ApplicantStatus, NewApplicant, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local applicant store. Rows are kept in insertion order so that the
/// list endpoint's tie-break ("whatever the store returns") is deterministic
/// within one process lifetime.
#[derive(Default)]
pub(crate) struct InMemoryApplicantRepository {
    rows: Mutex<Vec<Applicant>>,
    sequence: AtomicI64,
}

impl ApplicantRepository for InMemoryApplicantRepository {
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
