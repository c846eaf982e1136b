//! Built-in weekly templates and day types.

use crate::models::{FitnessLevel, Goal};

/// `(token, display name, muscles, exercise count, cardio day)`
pub(super) const BUILTIN_DAY_TYPES: &[(&str, &str, &[&str], usize, bool)] = &[
    (
        "full_body_1",
        "Full Body Workout A",
        &["chest", "back", "legs", "shoulders", "arms", "core"],
        6,
        false,
    ),
    (
        "full_body_2",
        "Full Body Workout B",
        &["chest", "back", "legs", "shoulders", "arms", "core"],
        6,
        false,
    ),
    (
        "full_body_3",
        "Full Body Workout C",
        &["chest", "back", "legs", "shoulders", "arms", "core"],
        6,
        false,
    ),
    ("push", "Push Day", &["chest", "shoulders", "triceps"], 8, false),
    ("pull", "Pull Day", &["back", "biceps"], 6, false),
    ("legs", "Leg Day", &["legs", "core"], 6, false),
    ("cardio", "Cardio Day", &["core"], 4, true),
];

/// Weekly token sequences per goal and level.
pub(super) const BUILTIN_PLANS: &[(Goal, FitnessLevel, &[&str])] = &[
    (
        Goal::WeightLoss,
        FitnessLevel::Beginner,
        &["full_body_1", "cardio", "full_body_2", "cardio", "full_body_3"],
    ),
    (
        Goal::WeightLoss,
        FitnessLevel::Intermediate,
        &["push", "pull", "legs", "cardio", "push", "pull", "legs"],
    ),
    (
        Goal::WeightLoss,
        FitnessLevel::Advanced,
        &["push", "pull", "legs", "push", "pull", "legs", "cardio"],
    ),
    (
        Goal::MuscleGain,
        FitnessLevel::Beginner,
        &["full_body_1", "rest", "full_body_2", "rest", "full_body_3", "rest", "rest"],
    ),
    (
        Goal::MuscleGain,
        FitnessLevel::Intermediate,
        &["push", "pull", "legs", "rest", "push", "pull", "legs"],
    ),
    (
        Goal::MuscleGain,
        FitnessLevel::Advanced,
        &["push", "pull", "legs", "push", "pull", "legs", "rest"],
    ),
    (
        Goal::Endurance,
        FitnessLevel::Beginner,
        &["cardio", "full_body_1", "cardio", "full_body_2", "cardio", "rest", "rest"],
    ),
    (
        Goal::Endurance,
        FitnessLevel::Intermediate,
        &["cardio", "push", "cardio", "pull", "cardio", "legs", "rest"],
    ),
    (
        Goal::Endurance,
        FitnessLevel::Advanced,
        &["cardio", "push", "cardio", "pull", "cardio", "legs", "cardio"],
    ),
    (
        Goal::GeneralFitness,
        FitnessLevel::Beginner,
        &["full_body_1", "rest", "full_body_2", "rest", "full_body_3", "rest", "rest"],
    ),
    (
        Goal::GeneralFitness,
        FitnessLevel::Intermediate,
        &["push", "pull", "legs", "rest", "push", "pull", "legs"],
    ),
    (
        Goal::GeneralFitness,
        FitnessLevel::Advanced,
        &["push", "pull", "legs", "push", "pull", "legs", "rest"],
    ),
];
