//! Saved workout storage operations for the Planner.

use tokio::task;

use super::{join_error, Planner};
use crate::{
    db::Database,
    error::Result,
    models::{GeneratedWorkout, SavedWorkout},
    params::{Id, ListWorkouts},
};

impl Planner {
    /// Persists a generated workout for a user.
    pub async fn save_workout(
        &self,
        user_id: &str,
        generated: GeneratedWorkout,
    ) -> Result<SavedWorkout> {
        let db_path = self.db_path.clone();
        let user_id = user_id.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_workout(&user_id, generated)
        })
        .await
        .map_err(join_error)?
    }

    /// Retrieves a saved workout by its ID.
    pub async fn get_workout(&self, params: &Id) -> Result<Option<SavedWorkout>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_workout(id)
        })
        .await
        .map_err(join_error)?
    }

    /// Lists saved workouts, newest first.
    pub async fn list_workouts(&self, params: &ListWorkouts) -> Result<Vec<SavedWorkout>> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_workouts(user_id.as_deref())
        })
        .await
        .map_err(join_error)?
    }

    /// Deletes a saved workout without confirmation. Returns whether it
    /// existed.
    pub(crate) async fn delete_workout_by_id(&self, params: &Id) -> Result<bool> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_workout(id)
        })
        .await
        .map_err(join_error)?
    }
}
