//! Grade store: the injectable [`GradeStore`] trait and its in-memory
//! implementation.

use async_trait::async_trait;
use gradebox_core::error::CoreError;
use gradebox_core::grade::{validate_input, GradeInput};
use gradebox_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::grade::{Grade, GradeListParams};

/// First id handed out by a fresh store.
const FIRST_ID: DbId = 1;

/// CRUD operations over grade records.
///
/// Not-found is a normal outcome (`None` / `false`), never an error. Errors
/// are reserved for rule violations and backend failures.
#[async_trait]
pub trait GradeStore: Send + Sync {
    /// Validate, normalize and insert a new grade with the next sequential id.
    async fn create(&self, input: GradeInput) -> Result<Grade, CoreError>;

    /// All grades matching `params`, in insertion order.
    async fn list(&self, params: &GradeListParams) -> Result<Vec<Grade>, CoreError>;

    async fn get(&self, id: DbId) -> Result<Option<Grade>, CoreError>;

    /// Replace every mutable field of an existing grade.
    ///
    /// Returns `Ok(None)` without validating when `id` does not exist.
    async fn update(&self, id: DbId, input: GradeInput) -> Result<Option<Grade>, CoreError>;

    /// Remove a grade. Returns `true` if a record was removed.
    async fn delete(&self, id: DbId) -> Result<bool, CoreError>;
}

#[derive(Debug)]
struct GradeTable {
    grades: Vec<Grade>,
    next_id: DbId,
}

/// Process-local grade store.
///
/// The record list and the id counter share one lock, so every operation is
/// observed atomically. Ids are never reused, even after deletes.
#[derive(Debug)]
pub struct InMemoryGradeStore {
    table: RwLock<GradeTable>,
}

impl InMemoryGradeStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(GradeTable {
                grades: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    /// Number of stored grades.
    pub async fn len(&self) -> usize {
        self.table.read().await.grades.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryGradeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GradeStore for InMemoryGradeStore {
    async fn create(&self, input: GradeInput) -> Result<Grade, CoreError> {
        let valid = validate_input(&input)?;
        let now = chrono::Utc::now();

        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let grade = Grade {
            id,
            student_name: valid.student_name,
            subject: valid.subject,
            grade_value: valid.grade_value,
            institution_type: valid.institution_type,
            created_at: now,
            updated_at: now,
        };
        table.grades.push(grade.clone());

        tracing::debug!(grade_id = id, "Grade stored");
        Ok(grade)
    }

    async fn list(&self, params: &GradeListParams) -> Result<Vec<Grade>, CoreError> {
        let table = self.table.read().await;
        Ok(table
            .grades
            .iter()
            .filter(|g| params.matches(g))
            .cloned()
            .collect())
    }

    async fn get(&self, id: DbId) -> Result<Option<Grade>, CoreError> {
        let table = self.table.read().await;
        Ok(table.grades.iter().find(|g| g.id == id).cloned())
    }

    async fn update(&self, id: DbId, input: GradeInput) -> Result<Option<Grade>, CoreError> {
        let mut table = self.table.write().await;

        let Some(grade) = table.grades.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };

        let valid = validate_input(&input)?;

        grade.student_name = valid.student_name;
        grade.subject = valid.subject;
        grade.grade_value = valid.grade_value;
        grade.institution_type = valid.institution_type;
        grade.updated_at = chrono::Utc::now();

        tracing::debug!(grade_id = id, "Grade replaced");
        Ok(Some(grade.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let mut table = self.table.write().await;

        match table.grades.iter().position(|g| g.id == id) {
            Some(index) => {
                table.grades.remove(index);
                tracing::debug!(grade_id = id, "Grade removed");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
