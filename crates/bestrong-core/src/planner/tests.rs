use tempfile::TempDir;

use super::*;
use crate::{models::FitnessLevel, templates::DayToken};

async fn planner_with(builder: PlannerBuilder) -> (TempDir, Planner) {
    let temp_dir = TempDir::new().unwrap();
    let planner = builder
        .with_database_path(Some(temp_dir.path().join("nested/dir/test.db")))
        .build()
        .await
        .unwrap();
    (temp_dir, planner)
}

#[tokio::test]
async fn test_build_creates_database_directory() {
    let (temp_dir, planner) = planner_with(PlannerBuilder::new()).await;
    assert!(temp_dir.path().join("nested/dir/test.db").exists());
    assert_eq!(planner.policy(), SchedulePolicy::CapAndWalk);
    assert_eq!(planner.catalog().distinct_exercise_count(), 30);
}

#[tokio::test]
async fn test_request_overrides_planner_policy() {
    let (_dir, planner) =
        planner_with(PlannerBuilder::new().with_policy(SchedulePolicy::ReduceAndReject)).await;

    let mut params = GeneratePlan::new("u1", "muscle_gain", "beginner", 3);
    assert_eq!(planner.composer_for(&params).policy(), SchedulePolicy::ReduceAndReject);

    params.policy = Some(SchedulePolicy::CapAndWalk);
    assert_eq!(planner.composer_for(&params).policy(), SchedulePolicy::CapAndWalk);
}

#[tokio::test]
async fn test_build_loads_custom_data_files() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("catalog.json");
    let templates_path = temp_dir.path().join("templates.json");
    std::fs::write(
        &catalog_path,
        r#"{"core": [
            {"name": "Plank", "muscle": "core", "equipment": "bodyweight"},
            {"name": "Dead Bug", "muscle": "core", "equipment": "bodyweight"}
        ]}"#,
    )
    .unwrap();
    std::fs::write(
        &templates_path,
        r#"{
            "dayTypes": {"abs": {"name": "Abs Day", "muscles": ["core"], "exerciseCount": 2}},
            "plans": {"endurance": {"beginner": ["abs", "rest"]}}
        }"#,
    )
    .unwrap();

    let planner = PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_catalog_file(Some(&catalog_path))
        .with_templates_file(Some(&templates_path))
        .build()
        .await
        .unwrap();

    assert_eq!(planner.catalog().distinct_exercise_count(), 2);
    let template = planner.weekly_template("endurance", "beginner").unwrap();
    assert_eq!(template.level, FitnessLevel::Beginner);
    assert_eq!(template.days[1].0, DayToken::Rest);
    assert_eq!(template.days[0].1.as_ref().map(|d| d.name()), Some("Abs Day"));
}

#[tokio::test]
async fn test_build_fails_for_missing_catalog_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_catalog_file(Some(temp_dir.path().join("missing.json")))
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::FileSystem { .. }));
}
