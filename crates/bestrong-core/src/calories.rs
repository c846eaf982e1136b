//! Daily calorie target from body measurements and training frequency.
//!
//! Uses the Harris–Benedict basal metabolic rate scaled by an activity
//! multiplier derived from the number of training days per week.

use std::{fmt, ops::RangeInclusive, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

pub const AGE_RANGE: RangeInclusive<f64> = 13.0..=100.0;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=200.0;
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;

const DEFAULT_AGE: f64 = 25.0;
const DEFAULT_WEIGHT_KG: f64 = 70.0;
const DEFAULT_HEIGHT_CM: f64 = 175.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(PlannerError::invalid_input("gender")
                .with_reason(format!("'{s}' is not one of: male, female, other"))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional body measurements. Missing values fall back to defaults
/// (25 years, 70 kg, 175 cm, male).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Profile {
    pub age: Option<f64>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub gender: Option<Gender>,
}

impl Profile {
    /// True when no measurement was supplied.
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.weight_kg.is_none()
            && self.height_cm.is_none()
            && self.gender.is_none()
    }

    /// Checks every supplied measurement against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        check_range("age", self.age, &AGE_RANGE)?;
        check_range("weight", self.weight_kg, &WEIGHT_RANGE_KG)?;
        check_range("height", self.height_cm, &HEIGHT_RANGE_CM)?;
        Ok(())
    }

    /// Basal metabolic rate in kcal/day.
    pub fn bmr(&self) -> f64 {
        let age = self.age.unwrap_or(DEFAULT_AGE);
        let weight = self.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG);
        let height = self.height_cm.unwrap_or(DEFAULT_HEIGHT_CM);

        match self.gender.unwrap_or_default() {
            Gender::Female => 655.1 + 9.563 * weight + 1.850 * height - 4.676 * age,
            Gender::Male | Gender::Other => 66.47 + 13.75 * weight + 5.003 * height - 6.755 * age,
        }
    }
}

fn check_range(field: &str, value: Option<f64>, range: &RangeInclusive<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || !range.contains(&v) => Err(PlannerError::invalid_input(field)
            .with_reason(format!(
                "{v} is outside the accepted range {}-{}",
                range.start(),
                range.end()
            ))),
        _ => Ok(()),
    }
}

/// Activity multiplier for a number of training days per week.
pub fn activity_multiplier(training_days: u32) -> f64 {
    match training_days {
        0 => 1.2,
        1 | 2 => 1.375,
        3 => 1.55,
        4 | 5 => 1.725,
        _ => 1.9,
    }
}

/// Daily calorie target, rounded to the nearest kcal.
///
/// # Examples
///
/// ```rust
/// use bestrong_core::calories::{calorie_target, Profile};
///
/// // Defaults: 25 years, 70 kg, 175 cm, male, three training days
/// assert_eq!(calorie_target(&Profile::default(), 3)?, 2690);
/// # Ok::<(), bestrong_core::PlannerError>(())
/// ```
pub fn calorie_target(profile: &Profile, training_days: u32) -> Result<u32> {
    profile.validate()?;
    let target = profile.bmr() * activity_multiplier(training_days);
    Ok(target.round().max(0.0) as u32)
}
