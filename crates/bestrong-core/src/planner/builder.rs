//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::info;
use tokio::task;

use super::Planner;
use crate::{
    catalog::ExerciseCatalog,
    composer::SchedulePolicy,
    db::Database,
    error::{PlannerError, Result},
    templates::TemplateRegistry,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    catalog_file: Option<PathBuf>,
    templates_file: Option<PathBuf>,
    policy: SchedulePolicy,
    max_consecutive_workouts: usize,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/bestrong/bestrong.db` or
    /// `~/.local/share/bestrong/bestrong.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the built-in exercise catalog with a JSON file.
    pub fn with_catalog_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the built-in template registry with a JSON file.
    pub fn with_templates_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.templates_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the default scheduling policy. Requests may still override it.
    pub fn with_policy(mut self, policy: SchedulePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the default consecutive-workout limit; `0` disables it.
    pub fn with_max_consecutive_workouts(mut self, limit: usize) -> Self {
        self.max_consecutive_workouts = limit;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if no default database location
    /// can be determined
    /// Returns `PlannerError::FileSystem` if a data file cannot be read or the
    /// database directory cannot be created
    /// Returns `PlannerError::Configuration` if a data file is invalid
    /// Returns `PlannerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let catalog_file = self.catalog_file;
        let templates_file = self.templates_file;
        let (catalog, templates) = task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;

            let catalog = match catalog_file {
                Some(path) => ExerciseCatalog::load(path)?,
                None => ExerciseCatalog::builtin(),
            };
            let templates = match templates_file {
                Some(path) => TemplateRegistry::load(path)?,
                None => TemplateRegistry::builtin(),
            };
            Ok::<_, PlannerError>((catalog, templates))
        })
        .await
        .map_err(super::join_error)??;

        info!(
            "Planner ready: database {}, {} exercises, {} scheduling",
            db_path.display(),
            catalog.distinct_exercise_count(),
            self.policy.as_str()
        );

        Ok(Planner {
            db_path,
            catalog: Arc::new(catalog),
            templates: Arc::new(templates),
            policy: self.policy,
            max_consecutive_workouts: self.max_consecutive_workouts,
        })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("bestrong")
            .place_data_file("bestrong.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}
