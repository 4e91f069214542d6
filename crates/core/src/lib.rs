//! GradeBox domain layer.
//!
//! Pure business rules for grade records: identifier and timestamp types,
//! the institution type vocabulary, field validation and normalization, and
//! the error taxonomy shared by the store and the HTTP layer. No I/O.

pub mod error;
pub mod grade;
pub mod types;
