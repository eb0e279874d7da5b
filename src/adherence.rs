// ABOUTME: Adherence analysis matching logged workouts against the prescribed week
// ABOUTME: Classifies sessions as completed, modified, skipped, or extra with a load delta
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Adherence analyzer.
//!
//! Compares one prescribed week against externally-logged workouts and
//! produces a classified diff. Absence of a match is never an error: an
//! unmatched prescription is `skipped`, an unmatched logged workout is
//! `extra`, and both are ordinary output states.
//!
//! Matching prefers the same calendar day, falls back to one day either
//! side, and requires the two discipline tags to share a type-equivalence
//! class (see [`Discipline::matches`]). Each logged workout is consumed by
//! at most one prescription.

use chrono::Days;

use crate::config::AdherenceConfig;
use crate::constants::adherence::ZONE_EXPECTED_EFFORT;
use crate::models::{
    ActualWorkout, AdherenceReport, CompletedSession, Discipline, LoadDelta, ModifiedSession,
    Session, WeekPlan,
};

/// Analyzes adherence of logged training against a prescribed week.
#[derive(Debug, Clone, Default)]
pub struct AdherenceAnalyzer {
    config: AdherenceConfig,
}

impl AdherenceAnalyzer {
    /// Create an analyzer with the given tolerances
    #[must_use]
    pub const fn new(config: AdherenceConfig) -> Self {
        Self { config }
    }

    /// Compare what was actually logged against one prescribed week.
    ///
    /// Every prescribed session is classified, so `completed`, `modified`,
    /// and `skipped` together exhaust the week's session list. Rest and
    /// mobility slots take part in matching (a logged mobility session can
    /// claim one) but are left out of the completion-rate denominator,
    /// which covers only the sessions users are expected to log.
    #[must_use]
    pub fn compare(&self, week: &WeekPlan, actuals: &[ActualWorkout]) -> AdherenceReport {
        let week_end = week.start_date + Days::new(7);
        let in_window: Vec<&ActualWorkout> = actuals
            .iter()
            .filter(|a| a.date >= week.start_date && a.date < week_end)
            .collect();

        let mut consumed = vec![false; in_window.len()];
        let mut matches: Vec<Option<usize>> = vec![None; week.sessions.len()];

        // Same-day pass first, then the +-1 day fallback, so a workout on
        // the prescribed day is never stolen by a neighboring session.
        for exact in [true, false] {
            for (si, session) in week.sessions.iter().enumerate() {
                if matches[si].is_some() {
                    continue;
                }
                let prescribed_date =
                    week.start_date + Days::new(session.day.offset_from_monday());
                matches[si] = in_window.iter().enumerate().position(|(ai, actual)| {
                    if consumed[ai] || !session.discipline.matches(&actual.discipline) {
                        return false;
                    }
                    let gap = (actual.date - prescribed_date).num_days().abs();
                    if exact {
                        gap == 0
                    } else {
                        gap <= self.config.day_tolerance
                    }
                });
                if let Some(ai) = matches[si] {
                    consumed[ai] = true;
                }
            }
        }

        let mut completed = Vec::new();
        let mut modified = Vec::new();
        let mut skipped = Vec::new();
        let mut rated_total = 0_usize;
        let mut rated_performed = 0_usize;
        for (si, session) in week.sessions.iter().enumerate() {
            let rated = counts_toward_completion(&session.discipline);
            if rated {
                rated_total += 1;
            }
            match matches[si] {
                None => skipped.push(session.clone()),
                Some(ai) => {
                    if rated {
                        rated_performed += 1;
                    }
                    let actual = in_window[ai];
                    let deviations = self.deviations(session, actual);
                    if deviations.is_empty() {
                        completed.push(CompletedSession {
                            planned: session.clone(),
                            actual: actual.clone(),
                        });
                    } else {
                        modified.push(ModifiedSession {
                            planned: session.clone(),
                            actual: actual.clone(),
                            deviations,
                        });
                    }
                }
            }
        }

        let extra: Vec<ActualWorkout> = in_window
            .iter()
            .enumerate()
            .filter(|(ai, _)| !consumed[*ai])
            .map(|(_, a)| (*a).clone())
            .collect();

        let completion_rate_pct = if rated_total == 0 {
            0.0
        } else {
            100.0 * rated_performed as f64 / rated_total as f64
        };

        AdherenceReport {
            load_delta: load_delta(week, &in_window),
            completed,
            modified,
            skipped,
            extra,
            completion_rate_pct,
        }
    }

    /// Human-readable notes for each significant deviation between a
    /// prescription and its matched workout. Empty means completed as
    /// planned.
    fn deviations(&self, session: &Session, actual: &ActualWorkout) -> Vec<String> {
        let mut notes = Vec::new();

        let duration_gap = i64::from(actual.duration_min) - i64::from(session.duration_min);
        if duration_gap.abs() > self.config.duration_tolerance_min {
            notes.push(format!(
                "duration {} min vs {} min planned",
                actual.duration_min, session.duration_min
            ));
        }

        if let (Some(actual_km), Some(planned_km)) =
            (actual.distance_km, session.details.distance_km)
        {
            if (actual_km - planned_km).abs() > self.config.distance_tolerance_km {
                notes.push(format!(
                    "distance {actual_km:.1} km vs {planned_km:.1} km planned"
                ));
            }
        }

        if let (Some(effort), Some(expected)) = (
            actual.perceived_effort,
            session.details.intensity_zone.and_then(expected_effort),
        ) {
            let gap = i16::from(effort) - i16::from(expected);
            if gap.abs() > self.config.effort_tolerance {
                notes.push(format!(
                    "perceived effort {effort} vs ~{expected} expected for zone {}",
                    session.details.intensity_zone.unwrap_or_default()
                ));
            }
        }

        notes
    }
}

/// Disciplines that count toward the completion rate. Rest and mobility
/// slots are prescribed structure, not workouts the user is asked to log.
fn counts_toward_completion(discipline: &Discipline) -> bool {
    !matches!(discipline, Discipline::Rest | Discipline::Mobility)
}

/// Expected perceived effort for an intensity zone, 1-5
fn expected_effort(zone: u8) -> Option<u8> {
    match zone {
        1..=5 => Some(ZONE_EXPECTED_EFFORT[zone as usize - 1]),
        _ => None,
    }
}

fn load_delta(week: &WeekPlan, in_window: &[&ActualWorkout]) -> LoadDelta {
    let planned_distance: f64 = week
        .sessions
        .iter()
        .filter(|s| s.discipline.is_endurance())
        .filter_map(|s| s.details.distance_km)
        .sum();
    let planned_strength = week
        .sessions
        .iter()
        .filter(|s| s.discipline.is_strength())
        .count() as i32;
    let planned_minutes: i64 = week.sessions.iter().map(|s| i64::from(s.duration_min)).sum();

    let actual_distance: f64 = in_window.iter().filter_map(|a| a.distance_km).sum();
    let actual_strength = in_window
        .iter()
        .filter(|a| a.discipline.is_strength())
        .count() as i32;
    let actual_minutes: i64 = in_window.iter().map(|a| i64::from(a.duration_min)).sum();

    LoadDelta {
        distance_km: actual_distance - planned_distance,
        strength_sessions: actual_strength - planned_strength,
        duration_min: actual_minutes - planned_minutes,
    }
}
