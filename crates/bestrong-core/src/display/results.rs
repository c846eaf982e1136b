//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::SavedWorkout;

/// Wraps a newly created resource with a confirmation line.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<SavedWorkout> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved workout with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wraps a deleted resource with a confirmation line.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<SavedWorkout> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted workout '{}' of user '{}' (ID: {})",
            self.resource.workout_id, self.resource.user_id, self.resource.id
        )
    }
}
