//! Plan template registry: weekly token sequences and day-type definitions.
//!
//! A weekly template is an ordered list of [`DayToken`]s for one
//! `(Goal, FitnessLevel)` pair. Each workout token names a
//! [`DayTypeTemplate`] describing which muscle buckets the day targets and how
//! many exercises it holds.
//!
//! Day types are validated once, when the registry is built. Entries loaded
//! from JSON that fail validation are dropped with a warning; tokens that name
//! them are skipped later during plan composition instead of failing the
//! request.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "dayTypes": {
//!     "push": { "name": "Push Day", "muscles": ["chest", "triceps"], "exerciseCount": 6 }
//!   },
//!   "plans": {
//!     "muscle_gain": { "beginner": ["push", "rest", "push", "rest", "rest", "rest", "rest"] }
//!   }
//! }
//! ```

mod builtin;

use std::{collections::HashMap, fmt, fs, path::Path};

use log::{debug, warn};
use serde::{Deserialize, Serialize, Serializer};

use crate::{
    error::{PlannerError, Result},
    models::{FitnessLevel, Goal},
};

/// One slot of a weekly template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DayToken {
    /// A rest slot ("rest" or "rest day")
    Rest,
    /// A workout slot naming a day type
    Workout(String),
}

impl DayToken {
    /// Parses a raw token. Rest markers are matched case-insensitively.
    pub fn parse(token: &str) -> Self {
        let trimmed = token.trim();
        match trimmed.to_lowercase().as_str() {
            "rest" | "rest day" | "rest_day" => DayToken::Rest,
            _ => DayToken::Workout(trimmed.to_string()),
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, DayToken::Rest)
    }

    pub fn as_str(&self) -> &str {
        match self {
            DayToken::Rest => "rest",
            DayToken::Workout(token) => token,
        }
    }
}

impl fmt::Display for DayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DayToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// What a workout day targets.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayTypeTemplate {
    name: String,
    muscles: Vec<String>,
    exercise_count: usize,
    cardio: bool,
}

impl DayTypeTemplate {
    /// Creates a validated day type.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if the name is blank, the muscle
    /// list is empty or the exercise count is zero.
    ///
    /// Muscle groups are trimmed and lowercased to match catalog bucket keys.
    pub fn new(
        name: impl Into<String>,
        muscles: Vec<String>,
        exercise_count: usize,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlannerError::configuration("Day type name must not be empty"));
        }
        if muscles.is_empty() || muscles.iter().any(|m| m.trim().is_empty()) {
            return Err(PlannerError::configuration(format!(
                "Day type '{name}' needs at least one non-empty muscle group"
            )));
        }
        if exercise_count == 0 {
            return Err(PlannerError::configuration(format!(
                "Day type '{name}' must schedule at least one exercise"
            )));
        }
        let muscles = muscles.into_iter().map(|m| m.trim().to_lowercase()).collect();
        Ok(Self {
            name,
            muscles,
            exercise_count,
            cardio: false,
        })
    }

    /// Marks the day type as a cardio day, which changes the prescription of
    /// its non-core exercises.
    pub fn with_cardio(mut self, cardio: bool) -> Self {
        self.cardio = cardio;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target muscle groups, in selection order.
    pub fn muscles(&self) -> &[String] {
        &self.muscles
    }

    pub fn exercise_count(&self) -> usize {
        self.exercise_count
    }

    pub fn is_cardio(&self) -> bool {
        self.cardio
    }
}

/// Static tables mapping goals/levels to weekly templates and tokens to day
/// types.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    day_types: HashMap<String, DayTypeTemplate>,
    plans: HashMap<(Goal, FitnessLevel), Vec<DayToken>>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in registry: four goals at three levels and seven day types.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (token, name, muscles, count, cardio) in builtin::BUILTIN_DAY_TYPES {
            let muscles = muscles.iter().map(|m| (*m).to_string()).collect();
            if let Ok(day_type) = DayTypeTemplate::new(*name, muscles, *count) {
                registry.insert_day_type(*token, day_type.with_cardio(*cardio));
            }
        }
        for (goal, level, tokens) in builtin::BUILTIN_PLANS {
            registry.insert_plan(*goal, *level, tokens.iter().map(|t| DayToken::parse(t)).collect());
        }
        registry
    }

    /// Registers or replaces a day type.
    pub fn insert_day_type(&mut self, token: impl Into<String>, day_type: DayTypeTemplate) {
        self.day_types.insert(token.into(), day_type);
    }

    /// Registers or replaces the weekly template for a goal and level.
    pub fn insert_plan(&mut self, goal: Goal, level: FitnessLevel, tokens: Vec<DayToken>) {
        self.plans.insert((goal, level), tokens);
    }

    /// Parses a registry from JSON. Invalid day types are dropped with a
    /// warning; unknown goal or level keys are configuration errors.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawRegistry = serde_json::from_str(json)?;
        let mut registry = Self::new();

        for (token, raw_day) in raw.day_types {
            let cardio = raw_day.cardio.unwrap_or(token == "cardio");
            match raw_day.into_template(&token) {
                Ok(day_type) => registry.insert_day_type(token, day_type.with_cardio(cardio)),
                Err(e) => warn!("Skipping day type '{token}': {e}"),
            }
        }

        for (goal_key, levels) in raw.plans {
            let goal: Goal = goal_key.parse()?;
            for (level_key, tokens) in levels {
                let level: FitnessLevel = level_key.parse()?;
                let tokens = tokens.iter().map(|t| DayToken::parse(t)).collect();
                registry.insert_plan(goal, level, tokens);
            }
        }

        debug!(
            "Loaded template registry: {} day types, {} weekly templates",
            registry.day_types.len(),
            registry.plans.len()
        );
        Ok(registry)
    }

    /// Loads a registry from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Looks up a day type by token.
    pub fn day_type(&self, token: &str) -> Option<&DayTypeTemplate> {
        self.day_types.get(token)
    }

    /// Returns the weekly template for a goal and level.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` naming the valid goals and levels
    /// when the pair is not registered.
    pub fn goal_level_template(&self, goal: Goal, level: FitnessLevel) -> Result<&[DayToken]> {
        self.plans
            .get(&(goal, level))
            .map(Vec::as_slice)
            .ok_or_else(|| {
                PlannerError::configuration(format!(
                    "No workout template registered for goal '{goal}' at level '{level}'. Valid goals: {}. Valid fitness levels: {}",
                    Goal::valid_values(),
                    FitnessLevel::valid_values()
                ))
            })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegistry {
    #[serde(default)]
    day_types: HashMap<String, RawDayType>,
    #[serde(default)]
    plans: HashMap<String, HashMap<String, Vec<String>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDayType {
    name: Option<String>,
    muscles: Option<Vec<String>>,
    exercise_count: Option<i64>,
    cardio: Option<bool>,
}

impl RawDayType {
    fn into_template(self, token: &str) -> Result<DayTypeTemplate> {
        let muscles = self.muscles.ok_or_else(|| {
            PlannerError::configuration(format!("Day type '{token}' has no muscles array"))
        })?;
        let count = self
            .exercise_count
            .filter(|c| *c > 0)
            .and_then(|c| usize::try_from(c).ok())
            .ok_or_else(|| {
                PlannerError::configuration(format!(
                    "Day type '{token}' needs a positive exerciseCount"
                ))
            })?;
        DayTypeTemplate::new(self.name.unwrap_or_else(|| token.to_string()), muscles, count)
    }
}
