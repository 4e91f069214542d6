//! Grade business rules.
//!
//! Field validation, normalization (trimming and rounding) and the
//! institution type vocabulary. The store calls [`validate_input`] before any
//! mutation, so a rejected create or update never leaves partial state.

use serde::{Deserialize, Serialize};

use crate::error::GradeRuleViolation;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum student name length after trimming.
pub const MIN_STUDENT_NAME_LEN: usize = 3;

/// Maximum student name length accepted at the HTTP boundary.
pub const MAX_STUDENT_NAME_LEN: usize = 100;

/// Minimum subject length after trimming.
pub const MIN_SUBJECT_LEN: usize = 2;

/// Maximum subject length accepted at the HTTP boundary.
pub const MAX_SUBJECT_LEN: usize = 50;

/// Lowest allowed grade value.
pub const MIN_GRADE_VALUE: f64 = 0.0;

/// Highest allowed grade value.
pub const MAX_GRADE_VALUE: f64 = 10.0;

// ---------------------------------------------------------------------------
// Institution type
// ---------------------------------------------------------------------------

/// Tutoring context a grade was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstitutionType {
    #[serde(rename = "Tutoria Particular")]
    TutoriaParticular,
    #[serde(rename = "Escola Pequena")]
    EscolaPequena,
    #[serde(rename = "Outro")]
    Outro,
}

/// Label for [`InstitutionType::TutoriaParticular`].
pub const INSTITUTION_TUTORIA_PARTICULAR: &str = "Tutoria Particular";
/// Label for [`InstitutionType::EscolaPequena`].
pub const INSTITUTION_ESCOLA_PEQUENA: &str = "Escola Pequena";
/// Label for [`InstitutionType::Outro`].
pub const INSTITUTION_OUTRO: &str = "Outro";

/// All valid institution type labels.
pub const VALID_INSTITUTION_TYPES: &[&str] = &[
    INSTITUTION_TUTORIA_PARTICULAR,
    INSTITUTION_ESCOLA_PEQUENA,
    INSTITUTION_OUTRO,
];

impl InstitutionType {
    /// Parse an exact label. Matching is case-sensitive.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            INSTITUTION_TUTORIA_PARTICULAR => Some(InstitutionType::TutoriaParticular),
            INSTITUTION_ESCOLA_PEQUENA => Some(InstitutionType::EscolaPequena),
            INSTITUTION_OUTRO => Some(InstitutionType::Outro),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InstitutionType::TutoriaParticular => INSTITUTION_TUTORIA_PARTICULAR,
            InstitutionType::EscolaPequena => INSTITUTION_ESCOLA_PEQUENA,
            InstitutionType::Outro => INSTITUTION_OUTRO,
        }
    }
}

impl std::fmt::Display for InstitutionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Input and normalized output
// ---------------------------------------------------------------------------

/// Raw field values for a create or a full-replace update.
///
/// A missing name or subject is an empty string, a missing grade value is
/// `None`. An empty `institution_type` counts as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeInput {
    pub student_name: String,
    pub subject: String,
    pub grade_value: Option<f64>,
    pub institution_type: Option<String>,
}

/// Field values that passed every rule, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidGrade {
    pub student_name: String,
    pub subject: String,
    pub grade_value: f64,
    pub institution_type: Option<InstitutionType>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check every grade rule in order and normalize the accepted values.
///
/// Returns the first violated rule:
/// name, subject, missing value, value range, institution type.
pub fn validate_input(input: &GradeInput) -> Result<ValidGrade, GradeRuleViolation> {
    let student_name = input.student_name.trim();
    if student_name.chars().count() < MIN_STUDENT_NAME_LEN {
        return Err(GradeRuleViolation::StudentNameRequired);
    }

    let subject = input.subject.trim();
    if subject.chars().count() < MIN_SUBJECT_LEN {
        return Err(GradeRuleViolation::SubjectRequired);
    }

    let grade_value = input
        .grade_value
        .ok_or(GradeRuleViolation::GradeValueRequired)?;

    if !grade_value.is_finite() || !(MIN_GRADE_VALUE..=MAX_GRADE_VALUE).contains(&grade_value) {
        return Err(GradeRuleViolation::GradeValueOutOfRange);
    }

    let institution_type = match input.institution_type.as_deref() {
        None | Some("") => None,
        Some(label) => Some(
            InstitutionType::parse(label).ok_or(GradeRuleViolation::InvalidInstitutionType)?,
        ),
    };

    Ok(ValidGrade {
        student_name: student_name.to_string(),
        subject: subject.to_string(),
        grade_value: round_grade_value(grade_value),
        institution_type,
    })
}

/// Round to two decimal places, halves rounding up.
///
/// Grade values are never negative, so `f64::round` (half away from zero)
/// agrees with half-up here. Negative zero comes out as `0.0`.
pub fn round_grade_value(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
