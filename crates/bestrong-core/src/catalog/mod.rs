//! Exercise catalog: exercises grouped into muscle buckets.
//!
//! The catalog is loaded once (built in, or from a JSON file) and then shared
//! read-only between generation requests, typically behind an `Arc`.
//!
//! # JSON Format
//!
//! A JSON object whose keys are bucket names, in the order they should be
//! sampled, and whose values are exercise lists:
//!
//! ```json
//! {
//!   "chest": [{ "name": "Bench Press", "muscle": "chest", "equipment": "barbell" }],
//!   "core":  [{ "name": "Plank", "muscle": "core", "equipment": "bodyweight" }]
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bestrong_core::catalog::{resolve_bucket_key, ExerciseCatalog};
//!
//! let catalog = ExerciseCatalog::builtin();
//! assert_eq!(catalog.muscle_exercises("chest")[0].name, "Bench Press");
//! assert!(catalog.muscle_exercises("neck").is_empty());
//! assert_eq!(resolve_bucket_key("triceps"), "arms");
//! ```

mod builtin;

use std::{collections::HashSet, fmt, fs, path::Path};

use log::{debug, warn};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::{
    error::{PlannerError, Result},
    models::ExerciseDefinition,
};

/// Muscle keys used by day templates that have no bucket of their own.
const BUCKET_ALIASES: &[(&str, &str)] = &[("triceps", "arms"), ("biceps", "arms")];

/// Maps a template muscle key onto the catalog bucket that holds it.
pub fn resolve_bucket_key(muscle: &str) -> &str {
    BUCKET_ALIASES
        .iter()
        .find(|(alias, _)| *alias == muscle)
        .map_or(muscle, |(_, bucket)| *bucket)
}

/// One catalog partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleBucket {
    pub key: String,
    pub exercises: Vec<ExerciseDefinition>,
}

/// Read-only exercise dataset keyed by muscle bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCatalog {
    buckets: Vec<MuscleBucket>,
    distinct_exercises: usize,
}

impl ExerciseCatalog {
    /// Builds and validates a catalog from ordered buckets.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` when a bucket key or exercise
    /// name is blank, a bucket key repeats, or no non-empty bucket remains.
    pub fn new(buckets: Vec<MuscleBucket>) -> Result<Self> {
        let mut seen_keys = HashSet::new();
        let mut kept = Vec::with_capacity(buckets.len());

        for bucket in buckets {
            let key = bucket.key.trim().to_lowercase();
            if key.is_empty() {
                return Err(PlannerError::configuration(
                    "Exercise catalog contains a bucket with an empty key",
                ));
            }
            if !seen_keys.insert(key.clone()) {
                return Err(PlannerError::configuration(format!(
                    "Exercise catalog lists bucket '{key}' more than once"
                )));
            }
            if let Some(blank) = bucket.exercises.iter().find(|e| e.name.trim().is_empty()) {
                return Err(PlannerError::configuration(format!(
                    "Exercise catalog bucket '{key}' has an exercise without a name ({blank:?})"
                )));
            }
            if bucket.exercises.is_empty() {
                warn!("Dropping empty exercise bucket '{key}'");
                continue;
            }
            kept.push(MuscleBucket {
                key,
                exercises: bucket.exercises,
            });
        }

        if kept.is_empty() {
            return Err(PlannerError::configuration(
                "Exercise catalog has no exercises",
            ));
        }

        let distinct_exercises = kept
            .iter()
            .flat_map(|b| b.exercises.iter().map(|e| e.name.as_str()))
            .collect::<HashSet<_>>()
            .len();

        debug!(
            "Loaded exercise catalog: {} buckets, {} distinct exercises",
            kept.len(),
            distinct_exercises
        );

        Ok(Self {
            buckets: kept,
            distinct_exercises,
        })
    }

    /// The built-in six-bucket dataset.
    pub fn builtin() -> Self {
        let buckets = builtin::BUILTIN_BUCKETS
            .iter()
            .map(|(key, entries)| MuscleBucket {
                key: (*key).to_string(),
                exercises: entries
                    .iter()
                    .map(|(name, muscle, equipment)| {
                        ExerciseDefinition::new(*name, *muscle, *equipment)
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();
        let distinct_exercises = buckets.iter().map(|b| b.exercises.len()).sum();
        Self {
            buckets,
            distinct_exercises,
        }
    }

    /// Parses a catalog from JSON, preserving bucket order.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.0)
    }

    /// Loads a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Exercises in the given bucket, in catalog order. Unknown keys yield an
    /// empty slice.
    pub fn muscle_exercises(&self, key: &str) -> &[ExerciseDefinition] {
        self.buckets
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.exercises.as_slice())
            .unwrap_or(&[])
    }

    /// Bucket keys in catalog order.
    pub fn muscle_keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.key.as_str())
    }

    /// All buckets in catalog order.
    pub fn buckets(&self) -> &[MuscleBucket] {
        &self.buckets
    }

    /// Number of exercises with distinct names across all buckets.
    pub fn distinct_exercise_count(&self) -> usize {
        self.distinct_exercises
    }
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Ordered bucket list read straight off a JSON object.
struct RawCatalog(Vec<MuscleBucket>);

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct BucketsVisitor;

        impl<'de> Visitor<'de> for BucketsVisitor {
            type Value = RawCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of muscle bucket names to exercise lists")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut buckets = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, exercises)) =
                    map.next_entry::<String, Vec<ExerciseDefinition>>()?
                {
                    buckets.push(MuscleBucket { key, exercises });
                }
                Ok(RawCatalog(buckets))
            }
        }

        deserializer.deserialize_map(BucketsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = ExerciseCatalog::builtin();
        let keys: Vec<_> = catalog.muscle_keys().collect();
        assert_eq!(keys, ["chest", "back", "shoulders", "legs", "arms", "core"]);
        assert_eq!(catalog.distinct_exercise_count(), 30);
        assert!(catalog.buckets().iter().all(|b| b.exercises.len() == 5));
    }

    #[test]
    fn test_unknown_bucket_is_empty() {
        let catalog = ExerciseCatalog::builtin();
        assert!(catalog.muscle_exercises("neck").is_empty());
        assert!(catalog.muscle_exercises("triceps").is_empty());
    }

    #[test]
    fn test_bucket_aliases() {
        assert_eq!(resolve_bucket_key("triceps"), "arms");
        assert_eq!(resolve_bucket_key("biceps"), "arms");
        assert_eq!(resolve_bucket_key("chest"), "chest");
        assert_eq!(resolve_bucket_key("unknown"), "unknown");
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"{
            "legs": [{"name": "Squats", "muscle": "legs", "equipment": "barbell"}],
            "chest": [{"name": "Push-ups", "muscle": "chest", "equipment": "bodyweight"}],
            "arms": [{"name": "Bicep Curls", "muscle": "biceps", "equipment": "dumbbell"}]
        }"#;
        let catalog = ExerciseCatalog::from_json(json).unwrap();
        let keys: Vec<_> = catalog.muscle_keys().collect();
        assert_eq!(keys, ["legs", "chest", "arms"]);
        assert_eq!(catalog.distinct_exercise_count(), 3);
    }

    #[test]
    fn test_from_json_drops_empty_buckets() {
        let json = r#"{
            "cardio": [],
            "core": [{"name": "Plank", "muscle": "core", "equipment": "bodyweight"}]
        }"#;
        let catalog = ExerciseCatalog::from_json(json).unwrap();
        assert_eq!(catalog.muscle_keys().collect::<Vec<_>>(), ["core"]);
    }

    #[test]
    fn test_distinct_count_ignores_repeated_names() {
        let json = r#"{
            "chest": [{"name": "Dips", "muscle": "chest", "equipment": "bodyweight"}],
            "arms": [{"name": "Dips", "muscle": "triceps", "equipment": "bodyweight"}]
        }"#;
        let catalog = ExerciseCatalog::from_json(json).unwrap();
        assert_eq!(catalog.distinct_exercise_count(), 1);
    }

    #[test]
    fn test_invalid_catalogs_are_rejected() {
        assert!(matches!(
            ExerciseCatalog::from_json("{}"),
            Err(PlannerError::Configuration { .. })
        ));
        assert!(matches!(
            ExerciseCatalog::from_json(
                r#"{"chest": [{"name": " ", "muscle": "chest", "equipment": "none"}]}"#
            ),
            Err(PlannerError::Configuration { .. })
        ));
        assert!(matches!(
            ExerciseCatalog::from_json("[1, 2]"),
            Err(PlannerError::Serialization { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ExerciseCatalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, PlannerError::FileSystem { .. }));
    }
}
