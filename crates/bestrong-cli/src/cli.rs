//! Command handlers for the terminal front end.

use std::process;

use anyhow::{Context, Result};
use bestrong_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    params::{DeleteWorkout, GeneratePlan, Id, ListWorkouts},
    ErrorResponse, GenerateResponse, Planner, PlannerError,
};
use log::{debug, warn};

use crate::{
    args::{GenerateArgs, TemplateArgs, WorkoutCommands},
    renderer::TerminalRenderer,
};

/// Exit status for requests the caller can fix.
const EXIT_CLIENT_ERROR: i32 = 2;
/// Exit status for unexpected failures.
const EXIT_SERVER_ERROR: i32 = 1;

pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let json = args.json;
        let save = !args.no_save;
        let params = GeneratePlan::from(args);
        debug!("generate: {params:?} (save: {save})");

        if json {
            return self.generate_json(&params, save).await;
        }

        let markdown = if save {
            let saved = self
                .planner
                .generate_workout(&params)
                .await
                .context("Failed to generate workout plan")?;
            CreateResult::new(saved).to_string()
        } else {
            self.planner
                .preview_workout(&params)
                .await
                .context("Failed to generate workout plan")?
                .to_string()
        };
        self.renderer.render(&markdown)
    }

    /// Prints the response body as JSON. Failures print the error body and
    /// exit with a status derived from the error class.
    async fn generate_json(&self, params: &GeneratePlan, save: bool) -> Result<()> {
        let outcome = if save {
            self.planner
                .generate_workout(params)
                .await
                .map(GenerateResponse::from)
        } else {
            self.planner
                .preview_workout(params)
                .await
                .map(GenerateResponse::from)
        };

        match outcome {
            Ok(response) => {
                println!("{}", serde_json::to_string_pretty(&response)?);
                Ok(())
            }
            Err(e) => {
                warn!("Workout generation failed: {e}");
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ErrorResponse::from_error(&e))?
                );
                process::exit(exit_status(&e))
            }
        }
    }

    pub async fn handle_workout_command(&self, command: WorkoutCommands) -> Result<()> {
        match command {
            WorkoutCommands::Show(args) => self.show_workout(&args.into()).await,
            WorkoutCommands::List(args) => self.list_workouts(&args.into()).await,
            WorkoutCommands::Delete(args) => self.delete_workout(&args.into()).await,
        }
    }

    async fn show_workout(&self, params: &Id) -> Result<()> {
        let workout = self
            .planner
            .show_workout(params)
            .await
            .context("Failed to show workout")?;
        self.renderer.render(&workout.to_string())
    }

    pub async fn list_workouts(&self, params: &ListWorkouts) -> Result<()> {
        let workouts = self
            .planner
            .list_workouts_summary(params)
            .await
            .context("Failed to list workouts")?;

        let title = match &params.user_id {
            Some(user) => format!("Workouts of {user}"),
            None => "Saved Workouts".to_string(),
        };
        self.renderer.render(&format!("# {title}\n\n{workouts}"))
    }

    async fn delete_workout(&self, params: &DeleteWorkout) -> Result<()> {
        let deleted = self
            .planner
            .delete_workout(params)
            .await
            .context("Failed to delete workout")?;

        let message = match deleted {
            Some(workout) => DeleteResult::new(workout).to_string(),
            None => OperationStatus::failure(format!("Workout with ID {} not found", params.id))
                .to_string(),
        };
        self.renderer.render(&message)
    }

    pub fn show_catalog(&self) -> Result<()> {
        self.renderer.render(&self.planner.catalog().to_string())
    }

    pub fn show_template(&self, args: &TemplateArgs) -> Result<()> {
        let template = self
            .planner
            .weekly_template(&args.goal, &args.level)
            .context("Failed to resolve template")?;
        self.renderer.render(&template.to_string())
    }
}

fn exit_status(error: &PlannerError) -> i32 {
    if error.status_code() < 500 {
        EXIT_CLIENT_ERROR
    } else {
        EXIT_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_by_error_class() {
        let err = PlannerError::configuration("Unknown goal");
        assert_eq!(exit_status(&err), EXIT_CLIENT_ERROR);

        let err = PlannerError::WorkoutNotFound { id: 4 };
        assert_eq!(exit_status(&err), EXIT_CLIENT_ERROR);

        let err = PlannerError::Generation {
            message: "no valid workout days".to_string(),
        };
        assert_eq!(exit_status(&err), EXIT_SERVER_ERROR);
    }
}
