//! Grade entity, request DTO and list filters.

use std::borrow::Cow;

use gradebox_core::grade::{GradeInput, InstitutionType, VALID_INSTITUTION_TYPES};
use gradebox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored grade record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: DbId,
    pub student_name: String,
    pub subject: String,
    pub grade_value: f64,
    pub institution_type: Option<InstitutionType>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /grade` and `PUT /grade/{id}`.
///
/// Every field is optional at the serde level so that missing fields are
/// reported together by [`GradeRequest::validate_shape`] instead of failing
/// deserialization on the first one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GradeRequest {
    #[serde(rename = "studentName")]
    #[validate(required, length(min = 3, max = 100))]
    pub student_name: Option<String>,

    #[validate(required, length(min = 2, max = 50))]
    pub subject: Option<String>,

    #[serde(rename = "gradeValue")]
    #[validate(required, range(min = 0.0, max = 10.0))]
    pub grade_value: Option<f64>,

    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(rename = "institutionType", default, deserialize_with = "present")]
    pub institution_type: Option<Option<String>>,
}

/// Wrap whatever the key holds in `Some`, so `null` stays distinguishable
/// from a missing key.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl GradeRequest {
    /// Run the declarative field checks plus the institution type enum check,
    /// collecting every violation.
    pub fn validate_shape(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        match &self.institution_type {
            Some(None) => {
                let mut error = ValidationError::new("invalid_type");
                error.message = Some(Cow::from(format!(
                    "Expected {}, received null",
                    expected_institution_types()
                )));
                errors.add("institutionType", error);
            }
            Some(Some(label)) if InstitutionType::parse(label).is_none() => {
                let mut error = ValidationError::new("enum");
                error.message = Some(Cow::from(format!(
                    "Invalid enum value. Expected {}, received '{label}'",
                    expected_institution_types()
                )));
                errors.add("institutionType", error);
            }
            _ => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn expected_institution_types() -> String {
    VALID_INSTITUTION_TYPES
        .iter()
        .map(|t| format!("'{t}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl From<GradeRequest> for GradeInput {
    fn from(req: GradeRequest) -> Self {
        GradeInput {
            student_name: req.student_name.unwrap_or_default(),
            subject: req.subject.unwrap_or_default(),
            grade_value: req.grade_value,
            institution_type: req.institution_type.flatten(),
        }
    }
}

// ---------------------------------------------------------------------------
// List filters
// ---------------------------------------------------------------------------

/// Query filters for `GET /grade`. Empty strings are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeListParams {
    /// Case-insensitive substring of the student name.
    pub student_name: Option<String>,
    /// Case-insensitive substring of the subject.
    pub subject: Option<String>,
    /// Exact institution type label.
    pub institution_type: Option<String>,
}

impl GradeListParams {
    /// Whether `grade` satisfies every supplied filter.
    pub fn matches(&self, grade: &Grade) -> bool {
        if let Some(term) = non_empty(&self.student_name) {
            if !contains_ignore_case(&grade.student_name, term) {
                return false;
            }
        }

        if let Some(term) = non_empty(&self.subject) {
            if !contains_ignore_case(&grade.subject, term) {
                return false;
            }
        }

        if let Some(label) = non_empty(&self.institution_type) {
            if grade.institution_type.map(InstitutionType::as_str) != Some(label) {
                return false;
            }
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
