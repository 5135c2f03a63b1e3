pub mod agent;
pub mod config;
pub mod result;
pub mod secrets;
pub mod template;

pub use agent::{AgentConfig, CloudProvider, RawAgentConfig, RawResources, RawScaling, Resources};
pub use config::ServerConfig;
pub use result::{DeploymentResult, DeploymentStatus, FailureKind, ServiceAddress, ServiceInfo};
pub use secrets::SecretSet;
pub use template::{AgentDefaultConfig, AgentTemplate, AgentType, UpdatePromptRequest};
