//! Data models for workout plans.
//!
//! This module contains the domain values produced and consumed by plan
//! generation. Display implementations live in [`crate::display::models`] so
//! the data structures stay free of presentation logic.
//!
//! # Wire Format
//!
//! Every model serializes to camelCase JSON matching the client contract
//! (`fitnessLevel`, `isRestDay`, `originalAvailableDays`, ...). The one
//! renamed field is [`PlannedExercise::rest_seconds`], which travels as
//! `rest`.
//!
//! # Examples
//!
//! ```rust
//! use bestrong_core::models::{FitnessLevel, Goal};
//!
//! let goal: Goal = "muscle_gain".parse()?;
//! let level: FitnessLevel = "beginner".parse()?;
//! assert_eq!(goal, Goal::MuscleGain);
//! assert_eq!(level.as_str(), "beginner");
//!
//! // Unknown goals name the valid options
//! let err = "flexibility".parse::<Goal>().unwrap_err();
//! assert!(err.to_string().contains("weight_loss"));
//! # Ok::<(), bestrong_core::PlannerError>(())
//! ```

pub mod exercise;
pub mod goal;
pub mod plan;
pub mod workout;


pub use exercise::{ExerciseCategory, ExerciseDefinition, PlannedExercise, PrescriptionConfig};
pub use goal::{FitnessLevel, Goal};
pub use plan::{WorkoutDay, WorkoutPlan, DAYS_PER_WEEK, PLAN_WEEKS, REST_DAY_NAME, REST_DAY_TYPE};
pub use workout::{GeneratedWorkout, SavedWorkout};
