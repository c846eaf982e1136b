//! Exercise selection for a single workout day.
//!
//! Selection runs in two passes:
//!
//! 1. **Catalog order**: exercises are spread across the requested muscle
//!    groups, `ceil(count / muscles)` per group, taken in catalog order and
//!    skipping names already chosen.
//! 2. **Random fill**: if the first pass came up short, exercises are drawn
//!    uniformly from a random bucket of the whole catalog until the day is
//!    full. Draws are capped; running out fails with
//!    [`PlannerError::SelectionExhausted`] instead of looping.

use std::collections::HashSet;

use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::{
    catalog::{resolve_bucket_key, ExerciseCatalog},
    error::{PlannerError, Result},
    models::{ExerciseCategory, ExerciseDefinition, FitnessLevel, PlannedExercise},
    prescription,
    templates::DayTypeTemplate,
};

/// Random draws allowed per requested exercise before giving up.
const DRAWS_PER_EXERCISE: usize = 64;

/// Lower bound on the random draw budget, so small requests still get a fair
/// chance against large catalogs.
const MIN_DRAW_BUDGET: usize = 256;

/// Picks non-duplicate exercises from a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseSelector<'a> {
    catalog: &'a ExerciseCatalog,
}

impl<'a> ExerciseSelector<'a> {
    pub fn new(catalog: &'a ExerciseCatalog) -> Self {
        Self { catalog }
    }

    /// Selects exactly `count` distinct exercises targeting `muscles`.
    ///
    /// Exercises from the "core" bucket get the core prescription, all others
    /// the strength prescription.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::SelectionExhausted` when the catalog holds fewer
    /// than `count` distinct exercises or the random fill exceeds its draw
    /// budget.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bestrong_core::{catalog::ExerciseCatalog, models::FitnessLevel, selector::ExerciseSelector};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let catalog = ExerciseCatalog::builtin();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let picked = ExerciseSelector::new(&catalog)
    ///     .select(&["chest", "triceps"], 4, FitnessLevel::Beginner, &mut rng)?;
    /// assert_eq!(picked.len(), 4);
    /// assert_eq!(picked[0].name, "Bench Press");
    /// # Ok::<(), bestrong_core::PlannerError>(())
    /// ```
    pub fn select<S, R>(
        &self,
        muscles: &[S],
        count: usize,
        level: FitnessLevel,
        rng: &mut R,
    ) -> Result<Vec<PlannedExercise>>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        self.select_with(muscles, count, level, false, rng)
    }

    /// Selects the exercises for one day type. On cardio days the non-core
    /// exercises taken from the day's own muscle groups get the cardio
    /// prescription; random fill picks keep core or strength.
    pub fn select_for_day<R>(
        &self,
        day_type: &DayTypeTemplate,
        level: FitnessLevel,
        rng: &mut R,
    ) -> Result<Vec<PlannedExercise>>
    where
        R: Rng + ?Sized,
    {
        self.select_with(
            day_type.muscles(),
            day_type.exercise_count(),
            level,
            day_type.is_cardio(),
            rng,
        )
    }

    fn select_with<S, R>(
        &self,
        muscles: &[S],
        count: usize,
        level: FitnessLevel,
        cardio_day: bool,
        rng: &mut R,
    ) -> Result<Vec<PlannedExercise>>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let available = self.catalog.distinct_exercise_count();
        if count > available {
            return Err(PlannerError::SelectionExhausted {
                requested: count,
                available,
                reason: "catalog is too small".to_string(),
            });
        }

        let mut picks = Picks::new(count, level, cardio_day);

        if !muscles.is_empty() {
            let per_group = (count + muscles.len() - 1) / muscles.len();
            for muscle in muscles {
                if picks.is_full() {
                    break;
                }
                let bucket_key = resolve_bucket_key(muscle.as_ref());
                for exercise in self.catalog.muscle_exercises(bucket_key).iter().take(per_group) {
                    if picks.is_full() {
                        break;
                    }
                    picks.offer(bucket_key, exercise);
                }
            }
        }

        if !picks.is_full() {
            debug!(
                "Catalog pass filled {}/{} exercises, drawing the rest at random",
                picks.selected.len(),
                count
            );
            picks.cardio_day = false;
            self.random_fill(&mut picks, rng)?;
        }

        Ok(picks.selected)
    }

    fn random_fill<R: Rng + ?Sized>(&self, picks: &mut Picks<'a>, rng: &mut R) -> Result<()> {
        let keys: Vec<&str> = self.catalog.muscle_keys().collect();
        let budget = (picks.count * DRAWS_PER_EXERCISE).max(MIN_DRAW_BUDGET);

        for _ in 0..budget {
            if picks.is_full() {
                return Ok(());
            }
            let Some(key) = keys.choose(rng) else {
                break;
            };
            if let Some(exercise) = self.catalog.muscle_exercises(key).choose(rng) {
                picks.offer(key, exercise);
            }
        }

        if picks.is_full() {
            Ok(())
        } else {
            Err(PlannerError::SelectionExhausted {
                requested: picks.count,
                available: self.catalog.distinct_exercise_count(),
                reason: format!("random fill gave up after {budget} draws"),
            })
        }
    }
}

/// Running selection state for one call.
struct Picks<'a> {
    count: usize,
    level: FitnessLevel,
    cardio_day: bool,
    used: HashSet<&'a str>,
    selected: Vec<PlannedExercise>,
}

impl<'a> Picks<'a> {
    fn new(count: usize, level: FitnessLevel, cardio_day: bool) -> Self {
        Self {
            count,
            level,
            cardio_day,
            used: HashSet::with_capacity(count),
            selected: Vec::with_capacity(count),
        }
    }

    fn is_full(&self) -> bool {
        self.selected.len() >= self.count
    }

    /// Accepts the exercise unless its name is already taken.
    fn offer(&mut self, bucket_key: &str, exercise: &'a ExerciseDefinition) {
        if !self.used.insert(exercise.name.as_str()) {
            return;
        }
        let category = ExerciseCategory::for_slot(bucket_key, self.cardio_day);
        self.selected.push(PlannedExercise::new(
            exercise,
            prescription::resolve(self.level, category),
        ));
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::templates::TemplateRegistry;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn names(picks: &[PlannedExercise]) -> Vec<&str> {
        picks.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_full_body_takes_first_of_each_bucket() {
        let catalog = ExerciseCatalog::builtin();
        let muscles = ["chest", "back", "legs", "shoulders", "arms", "core"];
        let picks = ExerciseSelector::new(&catalog)
            .select(&muscles, 6, FitnessLevel::Beginner, &mut rng())
            .unwrap();

        assert_eq!(
            names(&picks),
            ["Bench Press", "Pull-ups", "Squats", "Overhead Press", "Bicep Curls", "Plank"]
        );
        assert_eq!(picks[0].reps, "8-12");
        assert_eq!(picks[5].reps, "10-15");
    }

    #[test]
    fn test_push_day_remaps_triceps_and_stops_at_count() {
        let catalog = ExerciseCatalog::builtin();
        let picks = ExerciseSelector::new(&catalog)
            .select(&["chest", "shoulders", "triceps"], 8, FitnessLevel::Advanced, &mut rng())
            .unwrap();

        // ceil(8 / 3) = 3 per group, the last group cut short at 8
        assert_eq!(
            names(&picks),
            [
                "Bench Press",
                "Incline Dumbbell Press",
                "Push-ups",
                "Overhead Press",
                "Lateral Raises",
                "Rear Delt Flyes",
                "Bicep Curls",
                "Tricep Dips",
            ]
        );
        assert!(picks.iter().all(|p| p.sets == 5));
    }

    #[test]
    fn test_random_fill_completes_short_buckets() {
        let catalog = ExerciseCatalog::builtin();
        // A single bucket of five cannot fill ten slots alone
        let picks = ExerciseSelector::new(&catalog)
            .select(&["core"], 10, FitnessLevel::Intermediate, &mut rng())
            .unwrap();

        assert_eq!(picks.len(), 10);
        let unique: HashSet<_> = picks.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(unique.len(), 10);
        for pick in picks.iter().filter(|p| p.muscle == "core") {
            assert_eq!(pick.reps, "15-20");
        }
    }

    #[test]
    fn test_unknown_muscles_fall_back_to_random_fill() {
        let catalog = ExerciseCatalog::builtin();
        let picks = ExerciseSelector::new(&catalog)
            .select(&["neck"], 3, FitnessLevel::Beginner, &mut rng())
            .unwrap();
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_empty_muscle_list_uses_random_fill() {
        let catalog = ExerciseCatalog::builtin();
        let muscles: [&str; 0] = [];
        let picks = ExerciseSelector::new(&catalog)
            .select(&muscles, 5, FitnessLevel::Beginner, &mut rng())
            .unwrap();
        assert_eq!(picks.len(), 5);
    }

    #[test]
    fn test_whole_catalog_can_be_selected() {
        let catalog = ExerciseCatalog::builtin();
        let picks = ExerciseSelector::new(&catalog)
            .select(&["chest"], 30, FitnessLevel::Beginner, &mut rng())
            .unwrap();
        let unique: HashSet<_> = picks.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(unique.len(), 30);
    }

    #[test]
    fn test_count_above_catalog_size_fails_fast() {
        let catalog = ExerciseCatalog::builtin();
        let err = ExerciseSelector::new(&catalog)
            .select(&["chest"], 31, FitnessLevel::Beginner, &mut rng())
            .unwrap_err();
        match err {
            PlannerError::SelectionExhausted {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 31);
                assert_eq!(available, 30);
            }
            other => panic!("Expected SelectionExhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_count_selects_nothing() {
        let catalog = ExerciseCatalog::builtin();
        let picks = ExerciseSelector::new(&catalog)
            .select(&["chest"], 0, FitnessLevel::Beginner, &mut rng())
            .unwrap();
        assert!(picks.is_empty());
    }

    #[test]
    fn test_cardio_day_prescriptions() {
        let catalog = ExerciseCatalog::builtin();
        let registry = TemplateRegistry::builtin();
        let cardio = registry.day_type("cardio").unwrap();

        let picks = ExerciseSelector::new(&catalog)
            .select_for_day(cardio, FitnessLevel::Beginner, &mut rng())
            .unwrap();

        assert_eq!(picks.len(), 4);
        // All four come from the core bucket
        assert!(picks.iter().all(|p| p.muscle == "core"));
        assert!(picks.iter().all(|p| p.reps == "10-15"));
    }

    #[test]
    fn test_cardio_prescription_covers_targeted_picks_only() {
        let catalog = ExerciseCatalog::from_json(
            r#"{
                "cardio": [{ "name": "Rowing", "muscle": "cardio", "equipment": "machine" }],
                "chest": [{ "name": "Bench Press", "muscle": "chest", "equipment": "barbell" }]
            }"#,
        )
        .unwrap();
        let day_type = DayTypeTemplate::new("Conditioning", vec!["cardio".to_string()], 2)
            .unwrap()
            .with_cardio(true);

        let picks = ExerciseSelector::new(&catalog)
            .select_for_day(&day_type, FitnessLevel::Beginner, &mut rng())
            .unwrap();

        assert_eq!(names(&picks), ["Rowing", "Bench Press"]);
        assert_eq!(picks[0].reps, "30-45 sec");
        assert_eq!(picks[1].reps, "8-12");
    }

    #[test]
    fn test_same_seed_same_selection() {
        let catalog = ExerciseCatalog::builtin();
        let selector = ExerciseSelector::new(&catalog);
        let first = selector
            .select(&["legs"], 12, FitnessLevel::Beginner, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let second = selector
            .select(&["legs"], 12, FitnessLevel::Beginner, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(first, second);
    }
}
