//! Set/rep/rest prescriptions by fitness level and exercise category.

use crate::models::{ExerciseCategory, FitnessLevel, PrescriptionConfig};

/// Resolves the prescription for one exercise.
///
/// | level        | strength        | cardio              | core            |
/// |--------------|-----------------|---------------------|-----------------|
/// | beginner     | 3 × 8-12, 60 s  | 3 × 30-45 sec, 30 s | 3 × 10-15, 45 s |
/// | intermediate | 4 × 6-10, 90 s  | 4 × 45-60 sec, 45 s | 4 × 15-20, 60 s |
/// | advanced     | 5 × 4-8, 120 s  | 5 × 60-90 sec, 60 s | 5 × 20-25, 75 s |
///
/// # Examples
///
/// ```rust
/// use bestrong_core::{
///     models::{ExerciseCategory, FitnessLevel},
///     prescription::resolve,
/// };
///
/// let config = resolve(FitnessLevel::Intermediate, ExerciseCategory::Strength);
/// assert_eq!(config.sets, 4);
/// assert_eq!(config.reps, "6-10");
/// assert_eq!(config.rest_seconds, 90);
/// ```
pub fn resolve(level: FitnessLevel, category: ExerciseCategory) -> PrescriptionConfig {
    use ExerciseCategory::*;
    use FitnessLevel::*;

    let (sets, reps, rest_seconds) = match (level, category) {
        (Beginner, Strength) => (3, "8-12", 60),
        (Beginner, Cardio) => (3, "30-45 sec", 30),
        (Beginner, Core) => (3, "10-15", 45),
        (Intermediate, Strength) => (4, "6-10", 90),
        (Intermediate, Cardio) => (4, "45-60 sec", 45),
        (Intermediate, Core) => (4, "15-20", 60),
        (Advanced, Strength) => (5, "4-8", 120),
        (Advanced, Cardio) => (5, "60-90 sec", 60),
        (Advanced, Core) => (5, "20-25", 75),
    };

    PrescriptionConfig {
        sets,
        reps: reps.to_string(),
        rest_seconds,
    }
}
