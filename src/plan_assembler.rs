// ABOUTME: Assembles the full multi-week training plan from goal and calendar anchor
// ABOUTME: Drives the phase scheduler and session generator, aggregating weekly load summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Plan assembler.
//!
//! Drives the phase scheduler and the weekly session generator across the
//! whole plan span, attaches calendar dates, and aggregates per-week load
//! summaries plus the narrative strategy descriptor.
//!
//! "Now" is always an injected date; the assembler never reads the
//! platform clock, so assembly is referentially transparent and an
//! orchestrating caller can rebuild any week in isolation via
//! [`PlanAssembler::build_week`] when it needs to checkpoint and resume.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use tracing::debug;
use uuid::Uuid;

use crate::config::PlanEngineConfig;
use crate::errors::PlanResult;
use crate::models::{
    Phase, PhaseKind, RaceGoal, Session, TrainingPlan, WeekLoadSummary, WeekPlan,
};
use crate::phase_scheduler::{compute_phases, phase_for_week};
use crate::session_generator::SessionGenerator;

/// Assembles complete training plans.
#[derive(Debug, Clone, Default)]
pub struct PlanAssembler {
    config: PlanEngineConfig,
}

impl PlanAssembler {
    /// Create an assembler with the given configuration
    #[must_use]
    pub const fn new(config: PlanEngineConfig) -> Self {
        Self { config }
    }

    /// Assemble the full plan for a goal.
    ///
    /// `today` anchors the calendar when the goal has no target date;
    /// `created_at` is stamped onto the plan. Both are injected so the
    /// assembler stays a pure function of its arguments.
    pub fn assemble(
        &self,
        goal: &RaceGoal,
        today: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> PlanResult<TrainingPlan> {
        let total_weeks = goal.weeks_or_default();
        let phases = compute_phases(total_weeks, &self.config.scheduler)?;
        let anchor = plan_anchor(goal, total_weeks, today);

        let mut weeks = Vec::with_capacity(total_weeks as usize);
        for week_number in 1..=total_weeks {
            debug!(week_number, "assembling week");
            weeks.push(self.build_week(goal, &phases, week_number, anchor));
        }

        Ok(TrainingPlan {
            id: Uuid::new_v4(),
            created_at,
            goal: goal.clone(),
            overall_strategy: overall_strategy(goal, &phases),
            phases,
            weeks,
        })
    }

    /// Build a single week of the plan.
    ///
    /// Public so an orchestrating caller can assemble incrementally,
    /// retrying or resuming week by week without recomputing the rest.
    #[must_use]
    pub fn build_week(
        &self,
        goal: &RaceGoal,
        phases: &[Phase],
        week_number: u32,
        anchor: NaiveDate,
    ) -> WeekPlan {
        let generator = SessionGenerator::new(self.config.generator.clone());
        let phase = phase_for_week(week_number, phases);
        let deload = generator.is_deload_week(week_number);
        let sessions = generator.generate_week(week_number, phase, goal, phases);

        WeekPlan {
            week_number,
            start_date: anchor + Days::new(u64::from(week_number - 1) * 7),
            phase,
            deload,
            focus: week_focus(phase, deload).into(),
            summary: summarize_week(&sessions),
            sessions,
        }
    }
}

/// Resolve the Monday the plan's first week starts on.
///
/// With a target date, the plan is laid out so it ends on race week:
/// `total_weeks x 7` days back from the race, snapped to Monday.
/// Without one, the plan starts from the injected "today", snapped the
/// same way.
fn plan_anchor(goal: &RaceGoal, total_weeks: u32, today: NaiveDate) -> NaiveDate {
    let raw = goal
        .target_date
        .map_or(today, |race_day| race_day - Days::new(u64::from(total_weeks) * 7));
    snap_to_monday(raw)
}

/// Snap a date to the week's Monday: Sundays roll forward one day,
/// Mondays stay, every other day rolls back to the preceding Monday.
fn snap_to_monday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Mon => date,
        Weekday::Sun => date + Days::new(1),
        other => date - Days::new(u64::from(other.num_days_from_monday())),
    }
}

fn summarize_week(sessions: &[Session]) -> WeekLoadSummary {
    let total_distance_km = sessions
        .iter()
        .filter(|s| s.discipline.is_endurance())
        .filter_map(|s| s.details.distance_km)
        .sum();
    let strength_sessions = sessions
        .iter()
        .filter(|s| s.discipline.is_strength())
        .count() as u32;
    let total_minutes: u32 = sessions.iter().map(|s| s.duration_min).sum();
    WeekLoadSummary {
        total_distance_km,
        strength_sessions,
        estimated_hours: (f64::from(total_minutes) / 60.0 * 10.0).round() / 10.0,
    }
}

/// Fixed focus line per phase; the deload message overrides all of them.
const fn week_focus(phase: PhaseKind, deload: bool) -> &'static str {
    if deload {
        return "Deload week: pull volume back and let the previous block sink in.";
    }
    match phase {
        PhaseKind::Base => "Build the aerobic engine and movement quality.",
        PhaseKind::Build => "Raise race-specific intensity and strength load.",
        PhaseKind::Peak => "Touch race effort while volume stays honest.",
        PhaseKind::Taper => "Shed fatigue, keep the sharpness. Trust the work already done.",
    }
}

const fn phase_intent(kind: PhaseKind) -> &'static str {
    match kind {
        PhaseKind::Base => "lay the aerobic and structural foundation",
        PhaseKind::Build => "stack race-specific work on top of the base",
        PhaseKind::Peak => "hit peak volume and race-pace confidence",
        PhaseKind::Taper => "shed fatigue so race day lands on fresh legs",
    }
}

fn overall_strategy(goal: &RaceGoal, phases: &[Phase]) -> String {
    let race = goal.race_name.as_deref().unwrap_or("your goal race");
    let distance = goal.target_distance_km.map_or_else(
        || "the planned distance".to_owned(),
        |d| format!("{d} km"),
    );

    let mut lines = vec![format!("Preparation for {race} ({distance}).")];
    for phase in phases.iter().filter(|p| p.duration_weeks > 0) {
        let range = if phase.start_week == phase.end_week {
            format!("week {}", phase.start_week)
        } else {
            format!("weeks {}-{}", phase.start_week, phase.end_week)
        };
        lines.push(format!(
            "{} ({range}): {}.",
            capitalize(phase.kind.as_str()),
            phase_intent(phase.kind)
        ));
    }
    lines.join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
