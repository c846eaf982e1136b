use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temporary directory"),
        }
    }

    fn db_arg(&self) -> String {
        self.dir
            .path()
            .join("cli_test.db")
            .to_str()
            .expect("temp path is UTF-8")
            .to_string()
    }

    fn write(&self, name: &str, contents: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path.to_str().expect("temp path is UTF-8").to_string()
    }

    /// `bestrong --no-color --database-file <tmp>`
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("bestrong").expect("Failed to find bestrong binary");
        cmd.args(["--no-color", "--database-file", &self.db_arg()]);
        cmd
    }

    fn generate_json(&self, extra: &[&str]) -> Value {
        let output = self
            .cmd()
            .args(["generate", "alice", "--goal", "muscle_gain", "--level", "beginner", "--days", "3", "--json"])
            .args(extra)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&output).expect("stdout is JSON")
    }
}

#[test]
fn test_generate_saves_and_prints_plan() {
    let env = TestEnv::new();

    env.cmd()
        .args(["generate", "alice", "--goal", "muscle_gain", "--level", "beginner", "--days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved workout with ID: 1"))
        .stdout(predicate::str::contains("- Calorie target: 2690 kcal/day"))
        .stdout(predicate::str::contains("## Day 1: Full Body Workout A"));
}

#[test]
fn test_generate_json_response_body() {
    let env = TestEnv::new();
    let body = env.generate_json(&["--seed", "11"]);

    assert_eq!(body["success"], true);
    assert!(body["workoutId"].as_str().unwrap().starts_with("workout-"));
    assert_eq!(body["calorieTarget"], 2690);

    let plan = &body["workoutPlan"];
    assert_eq!(plan["goal"], "muscle_gain");
    assert_eq!(plan["fitnessLevel"], "beginner");
    assert_eq!(plan["totalDays"], 7);
    assert_eq!(plan["weeks"], 4);
    assert_eq!(plan["days"].as_array().unwrap().len(), 7);
}

#[test]
fn test_seed_makes_output_reproducible() {
    let env = TestEnv::new();
    let first = env.generate_json(&["--seed", "42", "--no-save"]);
    let second = env.generate_json(&["--seed", "42", "--no-save"]);
    assert_eq!(first["workoutPlan"], second["workoutPlan"]);
}

#[test]
fn test_no_save_leaves_store_empty() {
    let env = TestEnv::new();

    env.cmd()
        .args(["generate", "bob", "-g", "endurance", "-l", "advanced", "-d", "5", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# workout-"))
        .stdout(predicate::str::contains("Saved workout").not());

    env.cmd()
        .args(["workout", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts found."));
}

#[test]
fn test_generate_json_client_error_exits_2() {
    let env = TestEnv::new();

    let output = env
        .cmd()
        .args(["generate", "alice", "--goal", "flexibility", "--level", "beginner", "--days", "3", "--json"])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();

    let body: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(body["error"], "Failed to generate workout plan");
    assert!(body["details"].as_str().unwrap().contains("weight_loss"));
}

#[test]
fn test_generate_json_negative_days_exits_2() {
    let env = TestEnv::new();

    env.cmd()
        .args(["generate", "alice", "-g", "endurance", "-l", "beginner", "-d", "-1", "--json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("availableDays"));
}

#[test]
fn test_generate_json_out_of_range_profile_exits_2() {
    let env = TestEnv::new();

    env.cmd()
        .args(["generate", "alice", "-g", "endurance", "-l", "beginner", "-d", "3", "--age", "9", "--json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("'age'"));
}

#[test]
fn test_reduce_and_reject_rejects_full_week() {
    let env = TestEnv::new();
    let templates = env.write(
        "templates.json",
        r#"{
            "dayTypes": {},
            "plans": { "endurance": { "beginner": ["rest", "rest", "rest", "rest", "rest", "rest", "rest"] } }
        }"#,
    );

    env.cmd()
        .args(["--templates-file", &templates])
        .args(["generate", "alice", "-g", "endurance", "-l", "beginner", "-d", "3"])
        .args(["--policy", "reduce-and-reject", "--json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid workout schedule"));
}

#[test]
fn test_small_catalog_is_server_error() {
    let env = TestEnv::new();
    let catalog = env.write(
        "catalog.json",
        r#"{ "chest": [{ "name": "Push-ups", "muscle": "chest", "equipment": "bodyweight" }] }"#,
    );

    env.cmd()
        .args(["--catalog-file", &catalog])
        .args(["generate", "alice", "-g", "muscle_gain", "-l", "beginner", "-d", "3", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Cannot select"));
}

#[test]
fn test_generate_error_without_json() {
    let env = TestEnv::new();

    env.cmd()
        .args(["generate", "alice", "-g", "endurance", "-l", "expert", "-d", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to generate workout plan"));
}

#[test]
fn test_workout_show_list_delete() {
    let env = TestEnv::new();
    env.generate_json(&[]);
    env.cmd()
        .args(["generate", "bob", "-g", "weight_loss", "-l", "intermediate", "-d", "4"])
        .assert()
        .success();

    env.cmd()
        .args(["workout", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. workout-"))
        .stdout(predicate::str::contains("- User: alice"));

    env.cmd()
        .args(["workout", "list", "--user", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Workouts of bob"))
        .stdout(predicate::str::contains("(ID: 2)"))
        .stdout(predicate::str::contains("(ID: 1)").not());

    env.cmd()
        .args(["workout", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    env.cmd()
        .args(["workout", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted workout"));

    env.cmd()
        .args(["workout", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Workout with ID 1 not found"));

    env.cmd()
        .args(["workout", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workout with ID 1 not found"));
}

#[test]
fn test_default_command_lists_workouts() {
    let env = TestEnv::new();
    env.generate_json(&[]);

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Saved Workouts"))
        .stdout(predicate::str::contains("- **User**: alice"));
}

#[test]
fn test_catalog_lists_buckets() {
    let env = TestEnv::new();

    env.cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Exercise catalog"))
        .stdout(predicate::str::contains("## chest"))
        .stdout(predicate::str::contains("- Bench Press (chest, barbell)"));
}

#[test]
fn test_template_command() {
    let env = TestEnv::new();

    env.cmd()
        .args(["template", "--goal", "muscle_gain", "--level", "beginner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Muscle Gain template (beginner)"))
        .stdout(predicate::str::contains("1. Full Body Workout A (`full_body_1`)"))
        .stdout(predicate::str::contains("2. Rest Day"));

    env.cmd()
        .args(["template", "--goal", "yoga", "--level", "beginner"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to resolve template"));
}

#[test]
fn test_template_from_file_marks_unknown_tokens() {
    let env = TestEnv::new();
    let templates = env.write(
        "templates.json",
        r#"{
            "dayTypes": { "run": { "name": "Run Day", "muscles": ["cardio"], "exerciseCount": 2 } },
            "plans": { "endurance": { "beginner": ["run", "yoga", "rest", "run", "rest", "rest", "rest"] } }
        }"#,
    );

    env.cmd()
        .args(["--templates-file", &templates])
        .args(["template", "-g", "endurance", "-l", "beginner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Run Day (`run`)"))
        .stdout(predicate::str::contains("2. `yoga` (no day type registered, skipped)"));
}
