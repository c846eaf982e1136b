//! High-level planner API.
//!
//! [`Planner`] ties the pieces together: it owns the shared catalog and
//! template data, runs plan composition for each request and stores results
//! in SQLite.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (generate, list,│───▶│  (workout_ops)  │───▶│   (via db/)     │
//! │  show, delete)  │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Catalog and template data are loaded once in [`PlannerBuilder::build`] and
//! shared read-only by every request. Database work runs on the blocking
//! thread pool; each call opens its own connection.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bestrong_core::{params::GeneratePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/bestrong.db"))
//!     .build()
//!     .await?;
//!
//! let params = GeneratePlan::new("user-1", "muscle_gain", "beginner", 3);
//! let saved = planner.generate_workout(&params).await?;
//! assert_eq!(saved.workout_plan.days.len(), 7);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task::JoinError;

use crate::{
    catalog::ExerciseCatalog,
    composer::{PlanComposer, SchedulePolicy},
    error::PlannerError,
    params::GeneratePlan,
    templates::TemplateRegistry,
};

pub mod builder;
pub mod workout_handlers;
pub mod workout_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for generating and managing workouts.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
    catalog: Arc<ExerciseCatalog>,
    templates: Arc<TemplateRegistry>,
    policy: SchedulePolicy,
    max_consecutive_workouts: usize,
}

impl Planner {
    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Default scheduling policy for requests that do not set one.
    pub fn policy(&self) -> SchedulePolicy {
        self.policy
    }

    /// Composer configured from planner defaults and request overrides.
    pub(crate) fn composer_for(&self, params: &GeneratePlan) -> PlanComposer {
        let rest_after = params
            .rest_after
            .map_or(self.max_consecutive_workouts, |n| n as usize);

        PlanComposer::new(Arc::clone(&self.catalog), Arc::clone(&self.templates))
            .with_policy(params.policy.unwrap_or(self.policy))
            .with_max_consecutive_workouts(rest_after)
    }
}

pub(crate) fn join_error(e: JoinError) -> PlannerError {
    PlannerError::TaskJoin(e.to_string())
}
