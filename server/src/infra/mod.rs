//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution and
//! manifest files on disk.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::api` or `crate::commands` are forbidden.

pub mod command_runner;
pub mod config;
pub mod manifest_store;

pub use command_runner::TokioCommandRunner;
pub use manifest_store::FsManifestStore;
