//! Application service: in-memory agent template registry.
//!
//! One registry is built at startup and shared through the HTTP state; it is
//! never a process-wide global.

use std::sync::{PoisonError, RwLock};

use paragon_common::AgentTemplate;

use crate::domain::error::TemplateError;
use crate::domain::templates::builtin_templates;

pub struct TemplateRegistry {
    templates: RwLock<Vec<AgentTemplate>>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new(builtin_templates())
    }
}

impl TemplateRegistry {
    #[must_use]
    pub fn new(templates: Vec<AgentTemplate>) -> Self {
        Self {
            templates: RwLock::new(templates),
        }
    }

    #[must_use]
    pub fn list(&self) -> Vec<AgentTemplate> {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for an unknown id.
    pub fn get(&self, id: &str) -> Result<AgentTemplate, TemplateError> {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// Add `template` and return the full list.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::AlreadyExists`] if the id is taken.
    pub fn create(&self, template: AgentTemplate) -> Result<Vec<AgentTemplate>, TemplateError> {
        let mut templates = self
            .templates
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if templates.iter().any(|t| t.id == template.id) {
            return Err(TemplateError::AlreadyExists(template.id));
        }
        templates.push(template);
        Ok(templates.clone())
    }

    /// Replace the default system prompt of template `agent_id`, or of every
    /// template when `agent_id` is `None`. Returns how many were updated.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NoMatch`] when nothing was updated.
    pub fn update_prompt(
        &self,
        agent_id: Option<&str>,
        system_prompt: &str,
    ) -> Result<usize, TemplateError> {
        let mut templates = self
            .templates
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut updated = 0;
        for template in templates
            .iter_mut()
            .filter(|t| agent_id.is_none_or(|id| t.id == id))
        {
            template.default_config.system_prompt = system_prompt.to_string();
            updated += 1;
        }
        if updated == 0 {
            return Err(TemplateError::NoMatch(
                agent_id.unwrap_or_default().to_string(),
            ));
        }
        Ok(updated)
    }
}
