//! HTTP handlers, one module per resource.

pub mod auth;
pub mod categories;
pub mod courses;
pub mod lessons;
pub mod payments;
pub mod progress;
pub mod users;
