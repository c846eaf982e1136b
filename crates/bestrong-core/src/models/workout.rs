//! Persisted workout record.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::WorkoutPlan;

/// A generated plan saved for a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedWorkout {
    /// Database identifier
    pub id: u64,
    /// Public identifier handed back to the caller (`workout-<millis>`)
    pub workout_id: String,
    pub user_id: String,
    /// Daily calorie target computed from the profile, when one was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calorie_target: Option<u32>,
    /// Timestamp when the plan was saved (UTC)
    pub created_at: Timestamp,
    pub workout_plan: WorkoutPlan,
}

/// A freshly generated plan that has not been saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedWorkout {
    /// Public identifier (`workout-<millis>`)
    pub workout_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calorie_target: Option<u32>,
    pub workout_plan: WorkoutPlan,
}
