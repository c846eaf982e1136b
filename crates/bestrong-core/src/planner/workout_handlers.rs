//! Workout handler operations returning domain results and display wrappers.

use jiff::Timestamp;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use super::Planner;
use crate::{
    api::workout_id,
    calories,
    display::{SavedWorkouts, WeeklyTemplate},
    error::{PlannerError, Result},
    models::{FitnessLevel, GeneratedWorkout, Goal, SavedWorkout},
    params::{DeleteWorkout, GeneratePlan, Id, ListWorkouts},
};

impl Planner {
    /// Generates a plan without saving it.
    ///
    /// Validates the request, composes the week and computes the calorie
    /// target. A `seed` in the request makes exercise selection reproducible.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - missing fields or out-of-range values
    /// * `PlannerError::Configuration` - unknown goal or fitness level
    /// * `PlannerError::Validation` - no room for a workout (reduce-and-reject)
    /// * `PlannerError::SelectionExhausted` / `PlannerError::Generation` -
    ///   catalog or template data cannot produce a plan
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use bestrong_core::{params::GeneratePlan, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let mut params = GeneratePlan::new("user-1", "endurance", "advanced", 5);
    /// params.seed = Some(7);
    /// let generated = planner.preview_workout(&params).await?;
    /// assert!(generated.calorie_target.is_some());
    /// # Result::<(), bestrong_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn preview_workout(&self, params: &GeneratePlan) -> Result<GeneratedWorkout> {
        let (request, profile) = params.validate()?;
        let composer = self.composer_for(params);

        let workout_plan = match params.seed {
            Some(seed) => composer.generate_with_rng(&request, &mut StdRng::seed_from_u64(seed))?,
            None => composer.generate(&request)?,
        };
        let calorie_target = calories::calorie_target(&profile, request.available_days)?;

        Ok(GeneratedWorkout {
            workout_id: workout_id(Timestamp::now()),
            calorie_target: Some(calorie_target),
            workout_plan,
        })
    }

    /// Generates a plan and saves it for the requesting user.
    ///
    /// # Errors
    ///
    /// Everything [`Planner::preview_workout`] returns, plus
    /// `PlannerError::Database` if the plan cannot be stored.
    pub async fn generate_workout(&self, params: &GeneratePlan) -> Result<SavedWorkout> {
        let generated = self.preview_workout(params).await?;
        let saved = self.save_workout(params.user_id.trim(), generated).await?;
        info!(
            "Saved workout {} ({}) for user '{}'",
            saved.id, saved.workout_id, saved.user_id
        );
        Ok(saved)
    }

    /// Retrieves a saved workout, failing when it does not exist.
    pub async fn show_workout(&self, params: &Id) -> Result<SavedWorkout> {
        self.get_workout(params)
            .await?
            .ok_or(PlannerError::WorkoutNotFound { id: params.id })
    }

    /// Lists saved workouts wrapped for display.
    pub async fn list_workouts_summary(&self, params: &ListWorkouts) -> Result<SavedWorkouts> {
        Ok(SavedWorkouts(self.list_workouts(params).await?))
    }

    /// Permanently deletes a saved workout.
    ///
    /// Requires `confirmed` to be set. Returns the deleted workout, or `None`
    /// if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `confirmed` is false
    pub async fn delete_workout(&self, params: &DeleteWorkout) -> Result<Option<SavedWorkout>> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input("confirmed").with_reason(
                "Workout deletion requires explicit confirmation. Set 'confirmed' to true to proceed.",
            ));
        }

        let id = Id { id: params.id };
        let workout = self.get_workout(&id).await?;
        if workout.is_some() {
            self.delete_workout_by_id(&id).await?;
        }
        Ok(workout)
    }

    /// Resolves the weekly template for a goal and level, with the day type
    /// behind each token.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` for unknown goals, levels or
    /// unregistered pairs.
    pub fn weekly_template(&self, goal: &str, level: &str) -> Result<WeeklyTemplate> {
        let goal: Goal = goal.parse()?;
        let level: FitnessLevel = level.parse()?;
        let tokens = self.templates().goal_level_template(goal, level)?;

        Ok(WeeklyTemplate {
            goal,
            level,
            days: tokens
                .iter()
                .map(|token| {
                    let day_type = self.templates().day_type(token.as_str()).cloned();
                    (token.clone(), day_type)
                })
                .collect(),
        })
    }
}
