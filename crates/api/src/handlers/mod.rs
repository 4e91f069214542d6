pub mod grade;
pub mod not_found;
