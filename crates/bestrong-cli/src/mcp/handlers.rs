//! MCP tool handler implementations.

use std::sync::Arc;

use bestrong_core::{
    display::{CreateResult, DeleteResult},
    params as core, GenerateResponse, Planner,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Transparent wrapper giving core parameter types the serde and schema
/// plumbing MCP needs, without the core depending on rmcp.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type GeneratePlan = McpParams<core::GeneratePlan>;
pub type ListWorkouts = McpParams<core::ListWorkouts>;
pub type DeleteWorkout = McpParams<core::DeleteWorkout>;

pub type McpResult = Result<CallToolResult, ErrorData>;

pub struct McpHandlers {
    planner: Arc<Planner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    /// Generates and saves a plan. Returns the markdown plan followed by the
    /// JSON response body.
    pub async fn generate_workout_plan(
        &self,
        Parameters(params): Parameters<GeneratePlan>,
    ) -> McpResult {
        debug!("generate_workout_plan: {params:?}");

        let saved = self
            .planner
            .generate_workout(params.as_ref())
            .await
            .map_err(|e| to_mcp_error(bestrong_core::api::GENERATION_FAILED, &e))?;

        let body = serde_json::to_string_pretty(&GenerateResponse::from(saved.clone()))
            .map_err(|e| {
                ErrorData::internal_error(format!("Failed to serialize response: {e}"), None)
            })?;

        Ok(CallToolResult::success(vec![
            Content::text(CreateResult::new(saved).to_string()),
            Content::text(body),
        ]))
    }

    pub async fn show_workout(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_workout: {params:?}");

        let workout = self
            .planner
            .show_workout(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get workout", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            workout.to_string(),
        )]))
    }

    pub async fn list_workouts(&self, Parameters(params): Parameters<ListWorkouts>) -> McpResult {
        debug!("list_workouts: {params:?}");

        let inner_params = params.as_ref();
        let workouts = self
            .planner
            .list_workouts_summary(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list workouts", &e))?;

        let title = match (&inner_params.user_id, workouts.is_empty()) {
            (Some(user), true) => format!("No workouts saved for {user}"),
            (Some(user), false) => format!("Workouts of {user}"),
            (None, true) => "No saved workouts".to_string(),
            (None, false) => "Saved Workouts".to_string(),
        };

        let result = format!("# {title}\n\n{workouts}");
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn delete_workout(&self, Parameters(params): Parameters<DeleteWorkout>) -> McpResult {
        debug!("delete_workout: {params:?}");

        let inner_params = params.as_ref();
        let deleted = self
            .planner
            .delete_workout(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete workout", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Workout with ID {} not found", inner_params.id),
                    None,
                )
            })?;

        Ok(CallToolResult::success(vec![Content::text(
            DeleteResult::new(deleted).to_string(),
        )]))
    }

    pub async fn list_exercises(&self) -> McpResult {
        debug!("list_exercises");
        Ok(CallToolResult::success(vec![Content::text(
            self.planner.catalog().to_string(),
        )]))
    }
}
