//! Repository layer.
//!
//! Stores are exposed as traits so handlers hold an `Arc<dyn ...>` and tests
//! can construct an isolated instance each.

pub mod grade_repo;

pub use grade_repo::{GradeStore, InMemoryGradeStore};
