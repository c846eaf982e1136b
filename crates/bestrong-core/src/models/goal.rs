//! Training goal and fitness level enumerations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Type-safe enumeration of training goals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Endurance,
    GeneralFitness,
}

impl Goal {
    /// All goals in registry order.
    pub const ALL: [Goal; 4] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Endurance,
        Goal::GeneralFitness,
    ];

    /// Wire representation of the goal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Endurance => "endurance",
            Goal::GeneralFitness => "general_fitness",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Endurance => "Endurance",
            Goal::GeneralFitness => "General Fitness",
        }
    }

    /// Comma-separated list of valid wire values, for error messages.
    pub fn valid_values() -> String {
        Self::ALL.map(|g| g.as_str()).join(", ")
    }
}

impl FromStr for Goal {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "weight_loss" => Ok(Goal::WeightLoss),
            "muscle_gain" => Ok(Goal::MuscleGain),
            "endurance" => Ok(Goal::Endurance),
            "general_fitness" => Ok(Goal::GeneralFitness),
            _ => Err(PlannerError::configuration(format!(
                "Unknown goal '{s}'. Valid goals: {}",
                Self::valid_values()
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe enumeration of fitness levels. Drives set/rep/rest prescriptions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// All levels from least to most experienced.
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    /// Wire representation of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }

    /// Comma-separated list of valid wire values, for error messages.
    pub fn valid_values() -> String {
        Self::ALL.map(|l| l.as_str()).join(", ")
    }
}

impl FromStr for FitnessLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            _ => Err(PlannerError::configuration(format!(
                "Unknown fitness level '{s}'. Valid fitness levels: {}",
                Self::valid_values()
            ))),
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Accepts "Muscle Gain" and "muscle-gain" as well as the wire form.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}
