//! Display of a resolved weekly template.

use std::fmt;

use crate::{
    models::{FitnessLevel, Goal, REST_DAY_NAME},
    templates::{DayToken, DayTypeTemplate},
};

/// The token sequence of one goal and level, with the day type each token
/// resolves to (`None` for rest slots and unregistered tokens).
#[derive(Debug, Clone)]
pub struct WeeklyTemplate {
    pub goal: Goal,
    pub level: FitnessLevel,
    pub days: Vec<(DayToken, Option<DayTypeTemplate>)>,
}

impl fmt::Display for WeeklyTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} template ({})", self.goal.label(), self.level)?;
        writeln!(f)?;

        for (position, (token, day_type)) in self.days.iter().enumerate() {
            let n = position + 1;
            match (token, day_type) {
                (DayToken::Rest, _) => writeln!(f, "{n}. {REST_DAY_NAME}")?,
                (DayToken::Workout(name), Some(day_type)) => writeln!(
                    f,
                    "{n}. {} (`{name}`): {}, {} exercises{}",
                    day_type.name(),
                    day_type.muscles().join(", "),
                    day_type.exercise_count(),
                    if day_type.is_cardio() { ", cardio" } else { "" }
                )?,
                (DayToken::Workout(name), None) => {
                    writeln!(f, "{n}. `{name}` (no day type registered, skipped)")?
                }
            }
        }
        Ok(())
    }
}
