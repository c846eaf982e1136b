//! Weekly plan model definitions.

use serde::{Deserialize, Serialize};

use super::{FitnessLevel, Goal, PlannedExercise};

/// Number of weeks a generated plan is meant to be repeated for.
pub const PLAN_WEEKS: u32 = 4;

/// Every plan covers exactly one week.
pub const DAYS_PER_WEEK: usize = 7;

/// Display name of a rest day.
pub const REST_DAY_NAME: &str = "Rest Day";

/// Day-type token recorded on rest days.
pub const REST_DAY_TYPE: &str = "rest";

/// One day of the weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// 1-based position in the week
    pub day: u32,
    pub name: String,
    /// Day-type token ("push", "full_body_1", "rest", ...)
    #[serde(rename = "type")]
    pub day_type: String,
    pub is_rest_day: bool,
    /// Empty iff `is_rest_day`
    #[serde(default)]
    pub exercises: Vec<PlannedExercise>,
}

impl WorkoutDay {
    /// Creates an empty rest day at the given position.
    pub fn rest(day: u32) -> Self {
        Self {
            day,
            name: REST_DAY_NAME.to_string(),
            day_type: REST_DAY_TYPE.to_string(),
            is_rest_day: true,
            exercises: Vec::new(),
        }
    }

    /// Creates a workout day from a day-type template's name and token.
    pub fn workout(
        day: u32,
        name: impl Into<String>,
        day_type: impl Into<String>,
        exercises: Vec<PlannedExercise>,
    ) -> Self {
        Self {
            day,
            name: name.into(),
            day_type: day_type.into(),
            is_rest_day: false,
            exercises,
        }
    }
}

/// A generated weekly workout plan.
///
/// Invariants upheld by the composer: `days.len() == 7`, days numbered 1..=7,
/// `rest_days` equals the number of rest entries and
/// `available_days + rest_days == total_days == 7`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub weeks: u32,
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
    /// Active days actually scheduled
    pub available_days: u32,
    /// Active days the caller asked for
    pub original_available_days: u32,
    pub rest_days: u32,
    pub total_days: u32,
    pub days: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    /// Iterates over the non-rest days.
    pub fn workout_days(&self) -> impl Iterator<Item = &WorkoutDay> {
        self.days.iter().filter(|d| !d.is_rest_day)
    }

    /// Counts rest entries in `days`.
    pub fn count_rest_days(&self) -> usize {
        self.days.iter().filter(|d| d.is_rest_day).count()
    }

    /// Total number of exercises across the week.
    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(|d| d.exercises.len()).sum()
    }
}
