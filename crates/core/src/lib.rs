//! Domain types and pure authorization logic shared across the workspace.
//!
//! This crate has no I/O. Everything here is testable in isolation:
//! - [`types`] -- id and timestamp aliases.
//! - [`error`] -- the domain error enum.
//! - [`roles`] -- user role/status and course status enums.
//! - [`entitlement`] -- the access-control gate (who may see/do what).
//! - [`slug`] -- URL slug generation for courses and categories.

pub mod entitlement;
pub mod error;
pub mod roles;
pub mod slug;
pub mod types;
