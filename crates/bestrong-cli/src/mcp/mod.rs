//! MCP server for BeStrong.
//!
//! Exposes workout generation and the saved-workout store as Model Context
//! Protocol tools over stdio.

use std::sync::Arc;

use anyhow::Result;
use bestrong_core::Planner;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{DeleteWorkout, GeneratePlan, Id, ListWorkouts, McpResult};

/// MCP server for BeStrong
#[derive(Clone)]
pub struct BestrongMcpServer {
    planner: Arc<Planner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BestrongMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "generate_workout_plan",
        description = "Generate a seven-day workout plan and save it for the user. Required: userId, goal (weight_loss, muscle_gain, endurance, general_fitness), fitnessLevel (beginner, intermediate, advanced) and availableDays (at least 1; values above 7 are capped). Optional age, weight (kg), height (cm) and gender refine the daily calorie target. Optional policy (cap_and_walk or reduce_and_reject), restAfter and seed tune scheduling. Returns the plan as markdown and the JSON response body with workoutId."
    )]
    async fn generate_workout_plan(&self, params: Parameters<GeneratePlan>) -> McpResult {
        self.handlers().generate_workout_plan(params).await
    }

    #[tool(
        name = "show_workout",
        description = "Show a saved workout by its numeric ID: user, calorie target, schedule overview and every day's exercises with sets, reps and rest."
    )]
    async fn show_workout(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_workout(params).await
    }

    #[tool(
        name = "list_workouts",
        description = "List saved workouts, newest first. Pass userId to list only that user's workouts."
    )]
    async fn list_workouts(&self, params: Parameters<ListWorkouts>) -> McpResult {
        self.handlers().list_workouts(params).await
    }

    #[tool(
        name = "delete_workout",
        description = "Permanently delete a saved workout. Requires confirmed=true. This operation cannot be undone."
    )]
    async fn delete_workout(&self, params: Parameters<DeleteWorkout>) -> McpResult {
        self.handlers().delete_workout(params).await
    }

    #[tool(
        name = "list_exercises",
        description = "List the exercise catalog grouped by muscle bucket, with each exercise's target muscle and equipment."
    )]
    async fn list_exercises(&self) -> McpResult {
        self.handlers().list_exercises().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BestrongMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bestrong".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"BeStrong generates weekly workout plans and keeps them per user.

## Core Concepts
- **Plan**: seven days, each a workout day with exercises or a rest day, meant to be repeated for 4 weeks
- **Goal**: weight_loss, muscle_gain, endurance or general_fitness
- **Fitness level**: beginner, intermediate or advanced; decides sets, reps and rest

## Workflow
1. Call `generate_workout_plan` with userId, goal, fitnessLevel and availableDays
2. Use `list_workouts` (optionally with userId) to find earlier plans
3. Use `show_workout` to display one, `delete_workout` with confirmed=true to remove it
4. Use `list_exercises` to see which exercises plans draw from"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: BestrongMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting BeStrong MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use bestrong_core::PlannerBuilder;
    use tempfile::TempDir;

    use super::*;

    async fn server() -> (BestrongMcpServer, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let planner = PlannerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .unwrap();
        (BestrongMcpServer::new(planner), temp_dir)
    }

    fn text(result: &rmcp::model::CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_registers_all_tools() {
        let (server, _dir) = server().await;
        let mut names: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "delete_workout",
                "generate_workout_plan",
                "list_exercises",
                "list_workouts",
                "show_workout",
            ]
        );
    }

    #[tokio::test]
    async fn test_generate_then_list_and_delete() {
        let (server, _dir) = server().await;

        let params: GeneratePlan = serde_json::from_value(serde_json::json!({
            "userId": "mcp-user",
            "goal": "general_fitness",
            "fitnessLevel": "beginner",
            "availableDays": 3,
            "seed": 5
        }))
        .unwrap();
        let result = server.generate_workout_plan(Parameters(params)).await.unwrap();
        let output = text(&result);
        assert!(output.contains("Saved workout with ID: 1"));
        assert!(output.contains("\"workoutId\": \"workout-"));

        let params: ListWorkouts =
            serde_json::from_value(serde_json::json!({ "userId": "mcp-user" })).unwrap();
        let result = server.list_workouts(Parameters(params)).await.unwrap();
        assert!(text(&result).contains("# Workouts of mcp-user"));

        let params: DeleteWorkout =
            serde_json::from_value(serde_json::json!({ "id": 1, "confirmed": true })).unwrap();
        let result = server.delete_workout(Parameters(params)).await.unwrap();
        assert!(text(&result).contains("Deleted workout"));

        let params: Id = serde_json::from_value(serde_json::json!({ "id": 1 })).unwrap();
        let err = server.show_workout(Parameters(params)).await.unwrap_err();
        assert!(err.message.contains("not found"));
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_fields() {
        let (server, _dir) = server().await;
        let params: GeneratePlan =
            serde_json::from_value(serde_json::json!({ "userId": "u1" })).unwrap();

        let err = server
            .generate_workout_plan(Parameters(params))
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Missing required fields"));
    }

    #[tokio::test]
    async fn test_list_exercises() {
        let (server, _dir) = server().await;
        let result = server.list_exercises().await.unwrap();
        assert!(text(&result).contains("Bench Press"));
    }
}
