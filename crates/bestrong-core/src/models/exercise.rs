//! Exercise definitions and resolved prescriptions.

use serde::{Deserialize, Serialize};

/// A catalog entry. Identity is `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseDefinition {
    /// Display name, unique within a selection
    pub name: String,
    /// Target muscle (finer-grained than the catalog bucket, e.g. "triceps")
    pub muscle: String,
    /// Required equipment ("barbell", "bodyweight", ...)
    pub equipment: String,
}

impl ExerciseDefinition {
    pub fn new(
        name: impl Into<String>,
        muscle: impl Into<String>,
        equipment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            muscle: muscle.into(),
            equipment: equipment.into(),
        }
    }
}

/// Prescription category of an exercise slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Core,
}

impl ExerciseCategory {
    /// Derives the category for an exercise drawn from `bucket_key` on a day
    /// that is or is not a cardio day. The literal "core" bucket wins over the
    /// day type.
    pub fn for_slot(bucket_key: &str, is_cardio_day: bool) -> Self {
        if bucket_key == "core" {
            ExerciseCategory::Core
        } else if is_cardio_day {
            ExerciseCategory::Cardio
        } else {
            ExerciseCategory::Strength
        }
    }
}

/// Sets, rep range and rest interval for one exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionConfig {
    pub sets: u32,
    /// Range label, e.g. "8-12" or "30-45 sec"
    pub reps: String,
    pub rest_seconds: u32,
}

/// An exercise scheduled on a workout day, with its prescription flattened in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    pub name: String,
    pub muscle: String,
    pub equipment: String,
    pub sets: u32,
    pub reps: String,
    /// Rest between sets in seconds
    #[serde(rename = "rest")]
    pub rest_seconds: u32,
}

impl PlannedExercise {
    /// Stamps a catalog entry with a resolved prescription.
    pub fn new(definition: &ExerciseDefinition, prescription: PrescriptionConfig) -> Self {
        Self {
            name: definition.name.clone(),
            muscle: definition.muscle.clone(),
            equipment: definition.equipment.clone(),
            sets: prescription.sets,
            reps: prescription.reps,
            rest_seconds: prescription.rest_seconds,
        }
    }
}
