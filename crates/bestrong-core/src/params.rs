//! Parameter structures for planner operations.
//!
//! These are shared by every front end (CLI, MCP) and deserialize from the
//! camelCase request shape clients send:
//!
//! ```json
//! { "userId": "u1", "goal": "muscle_gain", "fitnessLevel": "beginner",
//!   "availableDays": 3, "age": 30, "weight": 80, "height": 180, "gender": "male" }
//! ```
//!
//! Interface layers add their own derives (clap, schemars) on wrapper types
//! and convert into these with `From`.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    calories::{Gender, Profile},
    composer::{PlanRequest, SchedulePolicy},
    error::{PlannerError, Result},
    models::{FitnessLevel, Goal},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the saved workout
    pub id: u64,
}

/// Parameters for generating a weekly workout plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlan {
    /// User the plan is generated for (required)
    #[serde(default)]
    pub user_id: String,
    /// Training goal: weight_loss, muscle_gain, endurance or general_fitness
    #[serde(default)]
    pub goal: String,
    /// Fitness level: beginner, intermediate or advanced
    #[serde(default)]
    pub fitness_level: String,
    /// Training days per week wanted, at least 1; values above 7 are capped
    #[serde(default)]
    pub available_days: i64,
    /// Age in years (13-100), used for the calorie target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Body weight in kg (30-200), used for the calorie target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height in cm (100-250), used for the calorie target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// male, female or other
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Scheduling policy override; the planner default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<SchedulePolicy>,
    /// Force a rest day after this many consecutive workout days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_after: Option<u32>,
    /// Seed for reproducible exercise selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GeneratePlan {
    /// Creates parameters with the four required fields set.
    pub fn new(
        user_id: impl Into<String>,
        goal: impl Into<String>,
        fitness_level: impl Into<String>,
        available_days: i64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            goal: goal.into(),
            fitness_level: fitness_level.into(),
            available_days,
            ..Self::default()
        }
    }

    /// Validates the request and returns the parsed plan request and body
    /// profile.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when a required field is missing, the
    ///   day count is negative, or a measurement is out of range
    /// * `PlannerError::Configuration` - when the goal or fitness level is
    ///   unknown
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bestrong_core::params::GeneratePlan;
    ///
    /// let params = GeneratePlan::new("user-1", "muscle_gain", "beginner", 3);
    /// let (request, profile) = params.validate()?;
    /// assert_eq!(request.available_days, 3);
    /// assert!(profile.is_empty());
    ///
    /// let params = GeneratePlan::new("", "muscle_gain", "", 3);
    /// let err = params.validate().unwrap_err();
    /// assert!(err.to_string().contains("userId, fitnessLevel"));
    /// # Ok::<(), bestrong_core::PlannerError>(())
    /// ```
    pub fn validate(&self) -> Result<(PlanRequest, Profile)> {
        let missing: Vec<&str> = [
            ("userId", self.user_id.trim().is_empty()),
            ("goal", self.goal.trim().is_empty()),
            ("fitnessLevel", self.fitness_level.trim().is_empty()),
            ("availableDays", self.available_days == 0),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        if !missing.is_empty() {
            return Err(PlannerError::invalid_input("request")
                .with_reason(format!("Missing required fields: {}", missing.join(", "))));
        }

        if self.available_days < 0 {
            return Err(PlannerError::invalid_input("availableDays").with_reason(format!(
                "must be at least 1, got {}",
                self.available_days
            )));
        }

        let goal: Goal = self.goal.parse()?;
        let fitness_level: FitnessLevel = self.fitness_level.parse()?;
        let available_days = u32::try_from(self.available_days).unwrap_or(u32::MAX);

        let profile = Profile {
            age: self.age,
            weight_kg: self.weight,
            height_cm: self.height,
            gender: self
                .gender
                .as_deref()
                .filter(|g| !g.trim().is_empty())
                .map(str::parse::<Gender>)
                .transpose()?,
        };
        profile.validate()?;

        Ok((PlanRequest::new(goal, fitness_level, available_days), profile))
    }
}

/// Parameters for listing saved workouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ListWorkouts {
    /// Only list workouts of this user; all users when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Parameters for deleting a saved workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteWorkout {
    /// The ID of the workout to delete
    pub id: u64,
    /// Must be true; guards against accidental deletion
    #[serde(default)]
    pub confirmed: bool,
}
