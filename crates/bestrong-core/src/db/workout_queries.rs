//! Saved workout CRUD operations.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{GeneratedWorkout, SavedWorkout, WorkoutPlan},
};

const INSERT_WORKOUT_SQL: &str = "INSERT INTO workouts (workout_id, user_id, goal, fitness_level, available_days, calorie_target, plan_json, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_WORKOUT_SQL: &str = "SELECT id, workout_id, user_id, calorie_target, plan_json, created_at FROM workouts WHERE id = ?1";
const SELECT_ALL_WORKOUTS_SQL: &str = "SELECT id, workout_id, user_id, calorie_target, plan_json, created_at FROM workouts ORDER BY created_at DESC, id DESC";
const SELECT_USER_WORKOUTS_SQL: &str = "SELECT id, workout_id, user_id, calorie_target, plan_json, created_at FROM workouts WHERE user_id = ?1 ORDER BY created_at DESC, id DESC";
const DELETE_WORKOUT_SQL: &str = "DELETE FROM workouts WHERE id = ?1";

impl super::Database {
    /// Saves a generated workout for `user_id`.
    pub fn insert_workout(
        &mut self,
        user_id: &str,
        generated: GeneratedWorkout,
    ) -> Result<SavedWorkout> {
        let plan_json = serde_json::to_string(&generated.workout_plan)?;
        let now = Timestamp::now();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_WORKOUT_SQL,
            params![
                &generated.workout_id,
                user_id,
                generated.workout_plan.goal.as_str(),
                generated.workout_plan.fitness_level.as_str(),
                generated.workout_plan.available_days,
                generated.calorie_target,
                &plan_json,
                now.to_string(),
            ],
        )
        .db_context("Failed to insert workout")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(SavedWorkout {
            id,
            workout_id: generated.workout_id,
            user_id: user_id.to_string(),
            calorie_target: generated.calorie_target,
            created_at: now,
            workout_plan: generated.workout_plan,
        })
    }

    /// Retrieves a saved workout by its ID.
    pub fn get_workout(&self, id: u64) -> Result<Option<SavedWorkout>> {
        self.connection
            .query_row(SELECT_WORKOUT_SQL, params![id as i64], saved_workout_from_row)
            .optional()
            .db_context("Failed to query workout")
    }

    /// Lists saved workouts, newest first, optionally for one user.
    pub fn list_workouts(&self, user_id: Option<&str>) -> Result<Vec<SavedWorkout>> {
        let mut stmt = self
            .connection
            .prepare(if user_id.is_some() {
                SELECT_USER_WORKOUTS_SQL
            } else {
                SELECT_ALL_WORKOUTS_SQL
            })
            .db_context("Failed to prepare query")?;

        let rows = match user_id {
            Some(user) => stmt.query_map(params![user], saved_workout_from_row),
            None => stmt.query_map([], saved_workout_from_row),
        }
        .db_context("Failed to query workouts")?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read workout row")
    }

    /// Deletes a saved workout. Returns whether a row was removed.
    pub fn delete_workout(&mut self, id: u64) -> Result<bool> {
        let affected = self
            .connection
            .execute(DELETE_WORKOUT_SQL, params![id as i64])
            .db_context("Failed to delete workout")?;
        Ok(affected > 0)
    }
}

fn saved_workout_from_row(row: &Row<'_>) -> rusqlite::Result<SavedWorkout> {
    let plan_json: String = row.get(4)?;
    let workout_plan: WorkoutPlan = serde_json::from_str(&plan_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(SavedWorkout {
        id: row.get::<_, i64>(0)? as u64,
        workout_id: row.get(1)?,
        user_id: row.get(2)?,
        calorie_target: row.get(3)?,
        created_at: row
            .get::<_, String>(5)?
            .parse::<Timestamp>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?,
        workout_plan,
    })
}
