//! Schema setup and upgrades of older database files.

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");
const HAS_CALORIE_TARGET_SQL: &str =
    "SELECT COUNT(*) FROM pragma_table_info('workouts') WHERE name = 'calorie_target'";
const ADD_CALORIE_TARGET_SQL: &str = "ALTER TABLE workouts ADD COLUMN calorie_target INTEGER";

impl super::Database {
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Adds columns introduced after a database file was first created.
    fn apply_migrations(&self) -> Result<()> {
        let has_calorie_target = self
            .connection
            .query_row(HAS_CALORIE_TARGET_SQL, [], |row| row.get::<_, i64>(0))
            .db_context("Failed to inspect workouts table")?
            > 0;

        if !has_calorie_target {
            self.connection
                .execute(ADD_CALORIE_TARGET_SQL, [])
                .db_context("Failed to add calorie_target column to workouts table")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use super::super::Database;

    #[test]
    fn test_old_database_gains_calorie_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("old.db");

        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_id TEXT NOT NULL,
                user_id TEXT NOT NULL,
                goal TEXT NOT NULL,
                fitness_level TEXT NOT NULL,
                available_days INTEGER NOT NULL,
                plan_json TEXT NOT NULL,
                created_at TEXT NOT NULL
            );",
        )
        .unwrap();
        drop(conn);

        let db = Database::new(&path).unwrap();
        let columns: i64 = db
            .connection
            .query_row(super::HAS_CALORIE_TARGET_SQL, [], |row| row.get(0))
            .unwrap();
        assert_eq!(columns, 1);
    }
}
