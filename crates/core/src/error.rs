use crate::types::DbId;

/// A grade business rule that rejected a create or update.
///
/// Rules are checked in declaration order and the first failure wins; see
/// [`crate::grade::validate_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GradeRuleViolation {
    #[error("studentNameRequired")]
    StudentNameRequired,

    #[error("subjectRequired")]
    SubjectRequired,

    #[error("gradeValueRequired")]
    GradeValueRequired,

    #[error("gradeValueOutOfRange")]
    GradeValueOutOfRange,

    #[error("invalidInstitutionType")]
    InvalidInstitutionType,
}

impl GradeRuleViolation {
    /// Stable identifier reported to clients in error details.
    pub fn code(self) -> &'static str {
        match self {
            GradeRuleViolation::StudentNameRequired => "studentNameRequired",
            GradeRuleViolation::SubjectRequired => "subjectRequired",
            GradeRuleViolation::GradeValueRequired => "gradeValueRequired",
            GradeRuleViolation::GradeValueOutOfRange => "gradeValueOutOfRange",
            GradeRuleViolation::InvalidInstitutionType => "invalidInstitutionType",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Grade rule violated: {0}")]
    Rule(#[from] GradeRuleViolation),

    #[error("Internal error: {0}")]
    Internal(String),
}
