//! Response bodies returned to clients.
//!
//! Success:
//!
//! ```json
//! { "success": true, "workoutId": "workout-1718000000000", "workoutPlan": { ... } }
//! ```
//!
//! Failure, with [`PlannerError::status_code`] deciding between 400, 404 and
//! 500:
//!
//! ```json
//! { "error": "Failed to generate workout plan", "details": "..." }
//! ```

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    error::PlannerError,
    models::{GeneratedWorkout, SavedWorkout, WorkoutPlan},
};

/// Summary line used for failed generation requests.
pub const GENERATION_FAILED: &str = "Failed to generate workout plan";

/// Builds the public workout identifier for a generation at `now`.
///
/// ```rust
/// use bestrong_core::api::workout_id;
///
/// let now = jiff::Timestamp::from_millisecond(1_718_000_000_000)?;
/// assert_eq!(workout_id(now), "workout-1718000000000");
/// # Ok::<(), jiff::Error>(())
/// ```
pub fn workout_id(now: Timestamp) -> String {
    format!("workout-{}", now.as_millisecond())
}

/// Body of a successful generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub workout_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calorie_target: Option<u32>,
    pub workout_plan: WorkoutPlan,
}

impl From<GeneratedWorkout> for GenerateResponse {
    fn from(generated: GeneratedWorkout) -> Self {
        Self {
            success: true,
            workout_id: generated.workout_id,
            calorie_target: generated.calorie_target,
            workout_plan: generated.workout_plan,
        }
    }
}

impl From<SavedWorkout> for GenerateResponse {
    fn from(saved: SavedWorkout) -> Self {
        Self {
            success: true,
            workout_id: saved.workout_id,
            calorie_target: saved.calorie_target,
            workout_plan: saved.workout_plan,
        }
    }
}

/// Body of a failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
        }
    }

    /// Wraps a generation failure, keeping the original message as details.
    pub fn from_error(error: &PlannerError) -> Self {
        Self::new(GENERATION_FAILED, error.to_string())
    }
}
