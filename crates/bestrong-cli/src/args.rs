//! Command-line arguments.
//!
//! Each subcommand has its own clap struct that converts into the matching
//! core parameter type with `From`, so core types stay free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use bestrong_core::{
    params::{DeleteWorkout, GeneratePlan, Id, ListWorkouts},
    SchedulePolicy,
};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Weekly workout plan generator
///
/// Builds a seven-day plan from a training goal, a fitness level and the
/// number of days you want to train, and keeps generated plans per user.
/// Runs as a regular CLI or as an MCP (Model Context Protocol) server for AI
/// assistants.
#[derive(Parser)]
#[command(version, about, name = "bestrong")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/bestrong/bestrong.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// JSON exercise catalog replacing the built-in one
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// JSON weekly templates replacing the built-in ones
    #[arg(long, global = true)]
    pub templates_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a weekly workout plan
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Manage saved workouts
    #[command(alias = "w")]
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// List the exercise catalog by muscle bucket
    Catalog,
    /// Show the weekly template for a goal and fitness level
    #[command(alias = "t")]
    Template(TemplateArgs),
    /// Start the MCP server
    Serve,
}

/// Generate a weekly workout plan
///
/// The plan is saved for the user unless --no-save is given. Body
/// measurements only affect the calorie target, never the exercises.
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// User the plan belongs to
    pub user_id: String,
    /// Training goal: weight_loss, muscle_gain, endurance or general_fitness
    #[arg(short, long)]
    pub goal: String,
    /// Fitness level: beginner, intermediate or advanced
    #[arg(short, long)]
    pub level: String,
    /// Training days per week (values above 7 are capped)
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: i64,
    /// Age in years
    #[arg(long)]
    pub age: Option<f64>,
    /// Body weight in kg
    #[arg(long)]
    pub weight: Option<f64>,
    /// Height in cm
    #[arg(long)]
    pub height: Option<f64>,
    /// male, female or other
    #[arg(long)]
    pub gender: Option<String>,
    /// How requested days are fitted into the template
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
    /// Force a rest day after this many consecutive workout days
    #[arg(long)]
    pub rest_after: Option<u32>,
    /// Seed for reproducible exercise selection
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the response body as JSON
    #[arg(long)]
    pub json: bool,
    /// Generate without saving the plan
    #[arg(long)]
    pub no_save: bool,
}

impl From<GenerateArgs> for GeneratePlan {
    fn from(val: GenerateArgs) -> Self {
        GeneratePlan {
            user_id: val.user_id,
            goal: val.goal,
            fitness_level: val.level,
            available_days: val.days,
            age: val.age,
            weight: val.weight,
            height: val.height,
            gender: val.gender,
            policy: val.policy.map(Into::into),
            rest_after: val.rest_after,
            seed: val.seed,
        }
    }
}

/// Command-line spelling of the scheduling policies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Walk the template and cap at seven days (default)
    CapAndWalk,
    /// Reduce requested days to fit the template's rest days, reject when none fit
    ReduceAndReject,
}

impl From<PolicyArg> for SchedulePolicy {
    fn from(val: PolicyArg) -> Self {
        match val {
            PolicyArg::CapAndWalk => SchedulePolicy::CapAndWalk,
            PolicyArg::ReduceAndReject => SchedulePolicy::ReduceAndReject,
        }
    }
}

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Show a saved workout
    #[command(alias = "s")]
    Show(ShowWorkoutArgs),
    /// List saved workouts, newest first
    #[command(aliases = ["l", "ls"])]
    List(ListWorkoutsArgs),
    /// Delete a saved workout permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteWorkoutArgs),
}

#[derive(ClapArgs)]
pub struct ShowWorkoutArgs {
    /// ID of the saved workout
    pub id: u64,
}

impl From<ShowWorkoutArgs> for Id {
    fn from(val: ShowWorkoutArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(ClapArgs)]
pub struct ListWorkoutsArgs {
    /// Only list workouts of this user
    #[arg(short, long)]
    pub user: Option<String>,
}

impl From<ListWorkoutsArgs> for ListWorkouts {
    fn from(val: ListWorkoutsArgs) -> Self {
        ListWorkouts { user_id: val.user }
    }
}

#[derive(ClapArgs)]
pub struct DeleteWorkoutArgs {
    /// ID of the workout to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteWorkoutArgs> for DeleteWorkout {
    fn from(val: DeleteWorkoutArgs) -> Self {
        DeleteWorkout {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(ClapArgs)]
pub struct TemplateArgs {
    /// Training goal
    #[arg(short, long)]
    pub goal: String,
    /// Fitness level
    #[arg(short, long)]
    pub level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_args_into_params() {
        let args = Args::parse_from([
            "bestrong",
            "generate",
            "alice",
            "--goal",
            "muscle_gain",
            "--level",
            "beginner",
            "--days",
            "4",
            "--policy",
            "reduce-and-reject",
            "--rest-after",
            "2",
            "--seed",
            "9",
        ]);
        let Some(Commands::Generate(generate)) = args.command else {
            panic!("Expected generate command");
        };

        let params = GeneratePlan::from(generate);
        assert_eq!(params.user_id, "alice");
        assert_eq!(params.fitness_level, "beginner");
        assert_eq!(params.available_days, 4);
        assert_eq!(params.policy, Some(SchedulePolicy::ReduceAndReject));
        assert_eq!(params.rest_after, Some(2));
        assert_eq!(params.seed, Some(9));
    }

    #[test]
    fn test_negative_days_reach_validation() {
        let args = Args::parse_from([
            "bestrong", "generate", "bob", "-g", "endurance", "-l", "beginner", "-d", "-3",
        ]);
        let Some(Commands::Generate(generate)) = args.command else {
            panic!("Expected generate command");
        };
        assert_eq!(generate.days, -3);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["bestrong", "catalog", "--no-color", "--catalog-file", "c.json"]);
        assert!(args.no_color);
        assert_eq!(args.catalog_file, Some(PathBuf::from("c.json")));
    }
}
