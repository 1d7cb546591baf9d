//! # Domain Models
//!
//! Pure localization types with a single dependency (`serde`).
//! Keep it lean: no I/O or heavy logic, just data, constants and collaborator traits.

pub mod config;
pub mod constants;
pub mod language;
