//! Markdown Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    catalog::ExerciseCatalog,
    models::{GeneratedWorkout, PlannedExercise, SavedWorkout, WorkoutDay, WorkoutPlan},
};

impl fmt::Display for PlannedExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** ({}, {}): {} × {}, rest {}s",
            self.name, self.muscle, self.equipment, self.sets, self.reps, self.rest_seconds
        )
    }
}

impl fmt::Display for WorkoutDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rest_day {
            writeln!(f, "## Day {}: {}", self.day, self.name)?;
            return writeln!(f);
        }

        writeln!(f, "## Day {}: {} (`{}`)", self.day, self.name, self.day_type)?;
        writeln!(f)?;
        for exercise in &self.exercises {
            write!(f, "{exercise}")?;
        }
        writeln!(f)
    }
}

impl WorkoutPlan {
    fn fmt_overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Goal: {}", self.goal.label())?;
        writeln!(f, "- Fitness level: {}", self.fitness_level)?;
        writeln!(
            f,
            "- Training days: {} of {} (requested {})",
            self.available_days, self.total_days, self.original_available_days
        )?;
        writeln!(f, "- Rest days: {}", self.rest_days)?;
        writeln!(f, "- Repeat for: {} weeks", self.weeks)
    }

    fn fmt_days(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in &self.days {
            writeln!(f)?;
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WorkoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} plan ({})", self.goal.label(), self.fitness_level)?;
        writeln!(f)?;
        self.fmt_overview(f)?;
        self.fmt_days(f)
    }
}

impl fmt::Display for GeneratedWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.workout_id)?;
        writeln!(f)?;
        if let Some(target) = self.calorie_target {
            writeln!(f, "- Calorie target: {target} kcal/day")?;
        }
        self.workout_plan.fmt_overview(f)?;
        self.workout_plan.fmt_days(f)
    }
}

impl fmt::Display for SavedWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.workout_id)?;
        writeln!(f)?;
        writeln!(f, "- User: {}", self.user_id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(target) = self.calorie_target {
            writeln!(f, "- Calorie target: {target} kcal/day")?;
        }
        self.workout_plan.fmt_overview(f)?;
        self.workout_plan.fmt_days(f)
    }
}

impl SavedWorkout {
    /// Compact form used in listings.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = &self.workout_plan;
        writeln!(f, "## {} (ID: {})", self.workout_id, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **User**: {}", self.user_id)?;
        writeln!(
            f,
            "- **Plan**: {} ({}), {} training days",
            plan.goal.label(),
            plan.fitness_level,
            plan.available_days
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for ExerciseCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Exercise catalog")?;
        for bucket in self.buckets() {
            writeln!(f)?;
            writeln!(f, "## {}", bucket.key)?;
            writeln!(f)?;
            for exercise in &bucket.exercises {
                writeln!(
                    f,
                    "- {} ({}, {})",
                    exercise.name, exercise.muscle, exercise.equipment
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseDefinition, FitnessLevel, Goal, PrescriptionConfig};

    fn plan() -> WorkoutPlan {
        let bench = ExerciseDefinition::new("Bench Press", "chest", "barbell");
        let exercise = PlannedExercise::new(
            &bench,
            PrescriptionConfig {
                sets: 3,
                reps: "8-12".to_string(),
                rest_seconds: 60,
            },
        );
        let mut days = vec![WorkoutDay::workout(1, "Push Day", "push", vec![exercise])];
        days.extend((2..=7).map(WorkoutDay::rest));

        WorkoutPlan {
            weeks: 4,
            goal: Goal::MuscleGain,
            fitness_level: FitnessLevel::Beginner,
            available_days: 1,
            original_available_days: 1,
            rest_days: 6,
            total_days: 7,
            days,
        }
    }

    #[test]
    fn test_plan_display() {
        let output = plan().to_string();
        assert!(output.starts_with("# Muscle Gain plan (beginner)"));
        assert!(output.contains("- Training days: 1 of 7 (requested 1)"));
        assert!(output.contains("## Day 1: Push Day (`push`)"));
        assert!(output.contains("- **Bench Press** (chest, barbell): 3 × 8-12, rest 60s"));
        assert!(output.contains("## Day 7: Rest Day"));
    }

    #[test]
    fn test_catalog_display_lists_buckets_in_order() {
        let output = ExerciseCatalog::builtin().to_string();
        let chest = output.find("## chest").unwrap();
        let core = output.find("## core").unwrap();
        assert!(chest < core);
        assert!(output.contains("- Tricep Dips (triceps, bodyweight)"));
    }
}
