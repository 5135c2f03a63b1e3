//! Paragon: deploys AI agents to Kubernetes.
//!
//! Library target exposes every layer for the unit test harness; the
//! `paragon` binary is a thin wrapper over [`cli::Cli`].

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod api;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
