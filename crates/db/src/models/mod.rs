//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as held by the store
//! - A `Deserialize` request DTO validated at the HTTP boundary
//! - A `Deserialize` list filter struct for query strings

pub mod grade;
