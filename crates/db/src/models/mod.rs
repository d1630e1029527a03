//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Where the entity is mutable, an update DTO (all `Option` fields)

pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod lesson_progress;
pub mod payment;
pub mod session;
pub mod user;
