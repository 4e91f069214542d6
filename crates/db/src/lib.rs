//! Grade storage layer.
//!
//! Models and DTOs live in [`models`]; the injectable [`GradeStore`] trait and
//! its in-memory implementation live in [`repositories`].

pub mod models;
pub mod repositories;

pub use repositories::{GradeStore, InMemoryGradeStore};
