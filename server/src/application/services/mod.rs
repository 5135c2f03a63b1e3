//! Application services: use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports`, never from `crate::infra`, `crate::api`,
//! or `crate::commands`.

pub mod apply;
pub mod deploy;
pub mod kubectl;
pub mod namespace;
pub mod templates;

pub use deploy::DeploymentOrchestrator;
pub use templates::TemplateRegistry;
