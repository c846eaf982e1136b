//! Weekly plan composition.
//!
//! [`PlanComposer`] turns a goal, fitness level and requested number of
//! active days into a seven-day [`WorkoutPlan`]:
//!
//! 1. Resolve the weekly template for the goal and level.
//! 2. Reconcile the requested active days with the template's fixed rest
//!    slots according to the [`SchedulePolicy`].
//! 3. Materialize each slot, selecting exercises for workout days. Tokens
//!    without a registered day type are skipped.
//! 4. Pad to seven days, renumber and recount rest days.

use std::sync::Arc;

use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::ExerciseCatalog,
    error::{PlannerError, Result},
    models::{FitnessLevel, Goal, WorkoutDay, WorkoutPlan, DAYS_PER_WEEK, PLAN_WEEKS},
    selector::ExerciseSelector,
    templates::{DayToken, TemplateRegistry},
};

/// Template passes allowed when cycling back over workout tokens.
const REWALK_FACTOR: usize = 5;

/// How requested active days are fitted into a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SchedulePolicy {
    /// Walk the template, keeping rest slots and taking workout slots until
    /// the request is met, cycling over workout tokens if the template runs
    /// out. Never rejects a request.
    #[default]
    CapAndWalk,
    /// Reduce the request to what fits beside the template's rest slots and
    /// reject templates that leave no room for a workout.
    ReduceAndReject,
}

impl SchedulePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulePolicy::CapAndWalk => "cap_and_walk",
            SchedulePolicy::ReduceAndReject => "reduce_and_reject",
        }
    }
}

/// Input to plan generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRequest {
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
    /// Active days the caller would like, at least 1
    pub available_days: u32,
}

impl PlanRequest {
    pub fn new(goal: Goal, fitness_level: FitnessLevel, available_days: u32) -> Self {
        Self {
            goal,
            fitness_level,
            available_days,
        }
    }
}

/// A reconciled week of day tokens, at most seven slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    slots: Vec<DayToken>,
}

impl Schedule {
    pub fn slots(&self) -> &[DayToken] {
        &self.slots
    }

    pub fn workout_count(&self) -> usize {
        self.slots.iter().filter(|t| !t.is_rest()).count()
    }

    pub fn rest_count(&self) -> usize {
        self.slots.iter().filter(|t| t.is_rest()).count()
    }

    /// Inserts a rest slot after every `limit` consecutive workout slots,
    /// dropping whatever no longer fits in the week.
    fn limit_consecutive(self, limit: usize) -> Self {
        let mut slots = Vec::with_capacity(DAYS_PER_WEEK);
        let mut streak = 0;
        for token in self.slots {
            if token.is_rest() {
                streak = 0;
            } else {
                if streak == limit {
                    slots.push(DayToken::Rest);
                    streak = 0;
                }
                streak += 1;
            }
            slots.push(token);
        }
        slots.truncate(DAYS_PER_WEEK);
        Self { slots }
    }

    fn pad(mut self) -> Self {
        self.slots.resize(DAYS_PER_WEEK, DayToken::Rest);
        self
    }
}

/// Builds weekly plans from shared catalog and template data.
#[derive(Debug, Clone)]
pub struct PlanComposer {
    catalog: Arc<ExerciseCatalog>,
    templates: Arc<TemplateRegistry>,
    policy: SchedulePolicy,
    max_consecutive_workouts: Option<usize>,
}

impl PlanComposer {
    pub fn new(catalog: Arc<ExerciseCatalog>, templates: Arc<TemplateRegistry>) -> Self {
        Self {
            catalog,
            templates,
            policy: SchedulePolicy::default(),
            max_consecutive_workouts: None,
        }
    }

    pub fn with_policy(mut self, policy: SchedulePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Forces a rest day after `limit` workout days in a row. `0` disables
    /// the constraint.
    pub fn with_max_consecutive_workouts(mut self, limit: usize) -> Self {
        self.max_consecutive_workouts = (limit > 0).then_some(limit);
        self
    }

    pub fn policy(&self) -> SchedulePolicy {
        self.policy
    }

    /// Generates a plan using an entropy-seeded random source.
    pub fn generate(&self, request: &PlanRequest) -> Result<WorkoutPlan> {
        let mut rng = StdRng::from_entropy();
        self.generate_with_rng(request, &mut rng)
    }

    /// Generates a plan drawing fallback exercises from `rng`.
    ///
    /// # Errors
    ///
    /// - `PlannerError::InvalidInput` if `available_days` is zero
    /// - `PlannerError::Configuration` if no template exists for the goal and
    ///   level
    /// - `PlannerError::Validation` if the reduce-and-reject policy finds no
    ///   room for a workout
    /// - `PlannerError::SelectionExhausted` if a day cannot be filled
    /// - `PlannerError::Generation` if no workout day could be materialized.
    ///   This includes an all-rest template under the cap-and-walk policy,
    ///   which is treated as a template defect rather than a caller error
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    ///
    /// use bestrong_core::{
    ///     catalog::ExerciseCatalog,
    ///     composer::{PlanComposer, PlanRequest},
    ///     models::{FitnessLevel, Goal},
    ///     templates::TemplateRegistry,
    /// };
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let composer = PlanComposer::new(
    ///     Arc::new(ExerciseCatalog::builtin()),
    ///     Arc::new(TemplateRegistry::builtin()),
    /// );
    /// let request = PlanRequest::new(Goal::MuscleGain, FitnessLevel::Beginner, 3);
    /// let plan = composer.generate_with_rng(&request, &mut StdRng::seed_from_u64(1))?;
    ///
    /// assert_eq!(plan.days.len(), 7);
    /// assert_eq!(plan.rest_days, 4);
    /// # Ok::<(), bestrong_core::PlannerError>(())
    /// ```
    pub fn generate_with_rng<R>(&self, request: &PlanRequest, rng: &mut R) -> Result<WorkoutPlan>
    where
        R: Rng + ?Sized,
    {
        if request.available_days == 0 {
            return Err(PlannerError::invalid_input("availableDays").with_reason("must be at least 1"));
        }

        let template = self
            .templates
            .goal_level_template(request.goal, request.fitness_level)?;
        debug!(
            "Composing {} plan at {} level from {}-slot template",
            request.goal,
            request.fitness_level,
            template.len()
        );

        let schedule = self.reconcile(template, request.available_days)?;
        debug!(
            "Reconciled schedule: {} workout and {} rest slots",
            schedule.workout_count(),
            schedule.rest_count()
        );

        let days = self.materialize(&schedule, request.fitness_level, rng)?;
        let workout_days = days.iter().filter(|d| !d.is_rest_day).count();
        let rest_days = days.len() - workout_days;

        Ok(WorkoutPlan {
            weeks: PLAN_WEEKS,
            goal: request.goal,
            fitness_level: request.fitness_level,
            available_days: workout_days as u32,
            original_available_days: request.available_days,
            rest_days: rest_days as u32,
            total_days: DAYS_PER_WEEK as u32,
            days,
        })
    }

    /// Fits `available_days` active days into `template`, returning exactly
    /// seven slots.
    ///
    /// # Errors
    ///
    /// Only the reduce-and-reject policy fails, with
    /// `PlannerError::Validation`, when the template's rest slots fill the
    /// whole week.
    pub fn reconcile(&self, template: &[DayToken], available_days: u32) -> Result<Schedule> {
        let requested = (available_days as usize).min(DAYS_PER_WEEK);

        let target = match self.policy {
            SchedulePolicy::CapAndWalk => requested,
            SchedulePolicy::ReduceAndReject => {
                let fixed_rest = template.iter().filter(|t| t.is_rest()).count();
                let room = DAYS_PER_WEEK.saturating_sub(fixed_rest);
                if room == 0 {
                    return Err(PlannerError::Validation {
                        message: format!(
                            "template has {fixed_rest} rest days, leaving no room for a workout"
                        ),
                    });
                }
                if requested > room {
                    debug!("Reducing active days from {requested} to {room}");
                }
                requested.min(room)
            }
        };

        let mut schedule = walk(template, target);
        if let Some(limit) = self.max_consecutive_workouts {
            schedule = schedule.limit_consecutive(limit);
        }
        Ok(schedule.pad())
    }

    fn materialize<R>(
        &self,
        schedule: &Schedule,
        level: FitnessLevel,
        rng: &mut R,
    ) -> Result<Vec<WorkoutDay>>
    where
        R: Rng + ?Sized,
    {
        let selector = ExerciseSelector::new(&self.catalog);
        let mut days = Vec::with_capacity(DAYS_PER_WEEK);

        for token in schedule.slots() {
            let day_number = days.len() as u32 + 1;
            match token {
                DayToken::Rest => days.push(WorkoutDay::rest(day_number)),
                DayToken::Workout(name) => {
                    let Some(day_type) = self.templates.day_type(name) else {
                        warn!("Skipping day '{name}': no day type registered for it");
                        continue;
                    };
                    let exercises = selector.select_for_day(day_type, level, rng)?;
                    days.push(WorkoutDay::workout(
                        day_number,
                        day_type.name(),
                        name.as_str(),
                        exercises,
                    ));
                }
            }
        }

        if days.iter().all(|d| d.is_rest_day) {
            return Err(PlannerError::Generation {
                message: "no valid workout days".to_string(),
            });
        }

        while days.len() < DAYS_PER_WEEK {
            days.push(WorkoutDay::rest(days.len() as u32 + 1));
        }
        Ok(days)
    }
}

/// Cap-and-walk pass: rest slots pass through, workout slots are taken while
/// below `target`, then workout tokens are cycled until `target` is met.
fn walk(template: &[DayToken], target: usize) -> Schedule {
    let mut slots = Vec::with_capacity(DAYS_PER_WEEK);
    let mut workouts = 0;

    for token in template {
        if slots.len() >= DAYS_PER_WEEK {
            break;
        }
        if token.is_rest() {
            slots.push(DayToken::Rest);
        } else if workouts < target {
            slots.push(token.clone());
            workouts += 1;
        }
    }

    let mut cycle = template.iter().filter(|t| !t.is_rest()).cycle();
    let mut attempts = template.len() * REWALK_FACTOR;
    while workouts < target && slots.len() < DAYS_PER_WEEK && attempts > 0 {
        let Some(token) = cycle.next() else {
            break;
        };
        slots.push(token.clone());
        workouts += 1;
        attempts -= 1;
    }

    Schedule { slots }
}
