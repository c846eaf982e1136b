use std::sync::Arc;

use bestrong_core::{ExerciseCatalog, PlanComposer, Planner, PlannerBuilder, TemplateRegistry};
use tempfile::TempDir;

/// Helper function to create a test planner backed by a temporary database
#[allow(dead_code)]
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Composer over the built-in catalog and templates
#[allow(dead_code)]
pub fn builtin_composer() -> PlanComposer {
    PlanComposer::new(
        Arc::new(ExerciseCatalog::builtin()),
        Arc::new(TemplateRegistry::builtin()),
    )
}
