use serde::{Deserialize, Serialize};

/// Store-assigned numeric identifier for an applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(pub i64);

impl std::fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Hiring stages an applicant moves through. The set is closed; anything else
/// on the wire is rejected during deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicantStatus {
    #[default]
    New,
    Interviewed,
    Rejected,
    Hired,
}

impl ApplicantStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicantStatus::New => "New",
            ApplicantStatus::Interviewed => "Interviewed",
            ApplicantStatus::Rejected => "Rejected",
            ApplicantStatus::Hired => "Hired",
        }
    }
}

/// A tracked candidate record. `notes` serializes as `null` when absent to
/// match the store's nullable column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub name: String,
    pub email: String,
    pub skills: String,
    pub experience: u16,
    pub notes: Option<String>,
    pub status: ApplicantStatus,
}

/// Client-submitted payload for creating an applicant. The identifier is
/// assigned by the store; `notes` and `status` are optional with `status`
/// defaulting to [`ApplicantStatus::New`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplicant {
    pub name: String,
    pub email: String,
    pub skills: String,
    pub experience: u16,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: ApplicantStatus,
}

/// Body of the status-change endpoint. Only the status field is mutable after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicantStatus,
}

/// Recognized sort keys for the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Experience,
}

impl SortKey {
    /// Parses the raw `sort` query value. Unrecognized values mean "no sort",
    /// they are not an error.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "experience" => Some(SortKey::Experience),
            _ => None,
        }
    }
}

/// Normalized list query: an optional search needle and an optional sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantQuery {
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}

impl ApplicantQuery {
    /// Builds a query from raw parameter strings. Empty search strings are
    /// dropped so that `?search=` behaves like no search at all.
    pub fn from_params(search: Option<String>, sort: Option<String>) -> Self {
        let search = search.filter(|needle| !needle.is_empty());
        let sort = sort.as_deref().and_then(SortKey::parse);
        Self { search, sort }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_new() {
        assert_eq!(ApplicantStatus::default(), ApplicantStatus::New);
    }

    #[test]
    fn status_round_trips_through_labels() {
        for status in [
            ApplicantStatus::New,
            ApplicantStatus::Interviewed,
            ApplicantStatus::Rejected,
            ApplicantStatus::Hired,
        ] {
            let json = serde_json::to_string(&status).expect("status serializes");
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<ApplicantStatus, _> = serde_json::from_str("\"Archived\"");
        assert!(result.is_err());
    }

    #[test]
    fn submission_defaults_notes_and_status() {
        let submission: NewApplicant = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "skills": "Rust, SQL",
            "experience": 4,
        }))
        .expect("minimal payload deserializes");

        assert_eq!(submission.notes, None);
        assert_eq!(submission.status, ApplicantStatus::New);
    }

    #[test]
    fn query_drops_empty_search_and_unknown_sort() {
        let query =
            ApplicantQuery::from_params(Some(String::new()), Some("created_at".to_string()));
        assert_eq!(query, ApplicantQuery::default());

        let query =
            ApplicantQuery::from_params(Some("rust".to_string()), Some("experience".to_string()));
        assert_eq!(query.search.as_deref(), Some("rust"));
        assert_eq!(query.sort, Some(SortKey::Experience));
    }
}
