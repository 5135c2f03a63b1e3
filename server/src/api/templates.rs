//! Agent template endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use paragon_common::{AgentTemplate, UpdatePromptRequest};
use serde::Serialize;
use tracing::info;

use super::AppState;
use super::error::ApiError;

#[derive(Debug, Serialize)]
pub struct UpdatePromptResponse {
    pub status: &'static str,
    pub updated_agents: usize,
}

pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<AgentTemplate>> {
    Json(state.templates.list())
}

pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AgentTemplate>, ApiError> {
    Ok(Json(state.templates.get(&id)?))
}

/// Register a new template and return the full list.
pub async fn create_template(
    State(state): State<AppState>,
    payload: Result<Json<AgentTemplate>, JsonRejection>,
) -> Result<Json<Vec<AgentTemplate>>, ApiError> {
    let Json(template) = payload?;
    let id = template.id.clone();
    let all = state.templates.create(template)?;
    info!(template = %id, total = all.len(), "template created");
    Ok(Json(all))
}

/// Replace the default system prompt of one template, or of all of them
/// when no `agent_id` is given.
pub async fn update_template_prompt(
    State(state): State<AppState>,
    payload: Result<Json<UpdatePromptRequest>, JsonRejection>,
) -> Result<Json<UpdatePromptResponse>, ApiError> {
    let Json(request) = payload?;
    let updated = state
        .templates
        .update_prompt(request.agent_id.as_deref(), &request.system_prompt)?;
    info!(agent_id = ?request.agent_id, updated, "template prompt updated");
    Ok(Json(UpdatePromptResponse {
        status: "success",
        updated_agents: updated,
    }))
}
