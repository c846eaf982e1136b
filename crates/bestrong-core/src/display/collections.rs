//! Collection wrapper types for displaying groups of saved workouts.

use std::fmt;

use crate::models::SavedWorkout;

/// Newtype wrapper for displaying a list of saved workouts in compact form.
///
/// # Examples
///
/// ```rust
/// use bestrong_core::display::SavedWorkouts;
///
/// let empty = SavedWorkouts(Vec::new());
/// assert!(empty.is_empty());
/// assert_eq!(empty.to_string(), "No workouts found.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SavedWorkouts(pub Vec<SavedWorkout>);

impl SavedWorkouts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SavedWorkout> {
        self.0.iter()
    }
}

impl IntoIterator for SavedWorkouts {
    type Item = SavedWorkout;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SavedWorkouts {
    type Item = &'a SavedWorkout;
    type IntoIter = std::slice::Iter<'a, SavedWorkout>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SavedWorkouts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No workouts found.");
        }
        for workout in &self.0 {
            workout.fmt_summary(f)?;
        }
        Ok(())
    }
}
