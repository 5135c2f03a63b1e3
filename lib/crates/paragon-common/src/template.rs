// lib/crates/paragon-common/src/template.rs

use serde::{Deserialize, Serialize};

/// Category of a predefined agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    CustomerSupport,
    ContentWriter,
    DataAnalyst,
}

/// Model settings a template starts an agent with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefaultConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl Default for AgentDefaultConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            system_prompt: default_system_prompt(),
        }
    }
}

fn default_model() -> String {
    "mixtral-8x7b-32768".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_system_prompt() -> String {
    "You are a helpful AI assistant.".to_string()
}

/// A predefined agent users can start from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub agent_type: AgentType,
    pub framework: String,
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub default_config: AgentDefaultConfig,
}

/// Body of `POST /agents/update-template`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePromptRequest {
    pub system_prompt: String,
    /// Template to update; every template when absent.
    #[serde(default)]
    pub agent_id: Option<String>,
}
