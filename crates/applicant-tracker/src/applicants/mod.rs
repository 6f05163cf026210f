//! Applicant intake, lookup, and lifecycle updates.
//!
//! The module is split the same way the HTTP surface is: `domain` defines the
//! records that cross the wire, `repository` is the storage seam so the service
//! can be exercised against any backend, `service` holds the list/filter/sort
//! semantics, and `router` maps the four endpoints onto the service.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicantId, ApplicantQuery, ApplicantStatus, NewApplicant, SortKey, StatusUpdate,
};
pub use repository::{ApplicantRepository, RepositoryError};
pub use router::applicant_router;
pub use service::{ApplicantService, ApplicantServiceError};
