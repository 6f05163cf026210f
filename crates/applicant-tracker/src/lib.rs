//! Core library for the applicant tracking service.
//!
//! The `applicants` module carries the domain types, the storage seam, and the
//! HTTP router for the applicant resource. `config` and `telemetry` hold the
//! environment-driven runtime wiring shared with the API binary.

pub mod applicants;
pub mod config;
pub mod error;
pub mod telemetry;
