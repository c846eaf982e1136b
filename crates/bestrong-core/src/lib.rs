//! Core library for the BeStrong workout planner.
//!
//! Generates a seven-day workout plan from a training goal, a fitness level
//! and the number of days a user wants to train, then stores it per user.
//!
//! # Layers
//!
//! - **Data** ([`catalog`], [`templates`]): the exercise catalog grouped into
//!   muscle buckets and the weekly templates per goal and level. Both are
//!   validated once on load and shared read-only afterwards.
//! - **Generation** ([`prescription`], [`selector`], [`composer`]): resolves
//!   set/rep/rest prescriptions, selects exercises per day and reconciles the
//!   requested training days with a template.
//! - **Outer surface** ([`params`], [`api`], [`calories`], [`planner`],
//!   [`db`], [`display`]): request validation, response bodies, calorie
//!   targets, persistence and markdown output.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bestrong_core::{
//!     catalog::ExerciseCatalog,
//!     composer::{PlanComposer, PlanRequest},
//!     models::{FitnessLevel, Goal},
//!     templates::TemplateRegistry,
//! };
//!
//! let composer = PlanComposer::new(
//!     Arc::new(ExerciseCatalog::builtin()),
//!     Arc::new(TemplateRegistry::builtin()),
//! );
//! let plan = composer.generate(&PlanRequest::new(Goal::WeightLoss, FitnessLevel::Advanced, 7))?;
//!
//! assert_eq!(plan.total_days, 7);
//! assert_eq!(plan.rest_days, 0);
//! println!("{plan}");
//! # Ok::<(), bestrong_core::PlannerError>(())
//! ```

pub mod api;
pub mod calories;
pub mod catalog;
pub mod composer;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod prescription;
pub mod selector;
pub mod templates;

// Re-export commonly used types
pub use api::{ErrorResponse, GenerateResponse};
pub use catalog::ExerciseCatalog;
pub use composer::{PlanComposer, PlanRequest, SchedulePolicy};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, SavedWorkouts, WeeklyTemplate};
pub use error::{PlannerError, Result};
pub use models::{
    FitnessLevel, GeneratedWorkout, Goal, PlannedExercise, SavedWorkout, WorkoutDay, WorkoutPlan,
};
pub use params::{DeleteWorkout, GeneratePlan, Id, ListWorkouts};
pub use planner::{Planner, PlannerBuilder};
pub use templates::TemplateRegistry;
