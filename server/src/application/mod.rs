//! Application layer: port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::api`, or `crate::commands`.

pub mod ports;
pub mod services;

pub use ports::{CommandRunner, ManifestStore};
