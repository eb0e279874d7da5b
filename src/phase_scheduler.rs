// ABOUTME: Macro-cycle phase partitioning for training plans
// ABOUTME: Splits a total plan duration into contiguous base, build, peak, and taper blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Phase scheduler.
//!
//! Splits a plan's total duration into the four macro-cycle phases. The
//! core invariant: phase durations always sum exactly to the requested
//! week count, with the taper absorbing all rounding error. Phases are
//! contiguous, ordered base, build, peak, taper, and cover `1..=total`
//! with no gaps or overlaps.

use tracing::warn;

use crate::config::SchedulerConfig;
use crate::errors::{PlanError, PlanResult};
use crate::models::{Phase, PhaseKind};

/// Compute the macro-cycle phases for a plan of `total_weeks` weeks.
///
/// Plans shorter than the short-prep threshold use a compressed
/// 20/50/20 split with at least one taper week; standard plans use
/// 45/35/10 with the taper taking the remainder. The base allocation
/// rounds up so the aerobic foundation absorbs the rounding benefit;
/// build and peak round to nearest.
pub fn compute_phases(total_weeks: u32, config: &SchedulerConfig) -> PlanResult<Vec<Phase>> {
    if total_weeks < 1 {
        return Err(PlanError::InvalidDuration(total_weeks));
    }

    let total = f64::from(total_weeks);
    let short_prep = total_weeks < config.short_prep_threshold_weeks;

    let (mut base, mut build, mut peak) = if short_prep {
        let [b, bu, p] = config.short_prep_split;
        (
            (total * b).round() as u32,
            (total * bu).round() as u32,
            (total * p).round() as u32,
        )
    } else {
        let [b, bu, p] = config.standard_split;
        (
            (total * b).ceil() as u32,
            (total * bu).round() as u32,
            (total * p).round() as u32,
        )
    };

    let allocated = base + build + peak;
    let mut taper = total_weeks.saturating_sub(allocated);
    if short_prep && taper < config.short_prep_min_taper_weeks {
        taper = config.short_prep_min_taper_weeks;
    }

    // The taper floor (or aggressive rounding on very short plans) can push
    // the sum past the total; shave the excess off peak, then build, then
    // base so the coverage invariant holds exactly.
    let mut excess = (base + build + peak + taper).saturating_sub(total_weeks);
    for duration in [&mut peak, &mut build, &mut base] {
        let cut = excess.min(*duration);
        *duration -= cut;
        excess -= cut;
    }

    let mut phases = Vec::with_capacity(4);
    let mut next_start: u32 = 1;
    for (kind, duration) in [
        (PhaseKind::Base, base),
        (PhaseKind::Build, build),
        (PhaseKind::Peak, peak),
        (PhaseKind::Taper, taper),
    ] {
        let start_week = next_start;
        // Zero-duration phases keep an empty range (end < start) so the
        // fixed ordering survives without claiming any week.
        let end_week = if duration == 0 {
            start_week.saturating_sub(1)
        } else {
            start_week + duration - 1
        };
        phases.push(Phase {
            kind,
            duration_weeks: duration,
            start_week,
            end_week,
        });
        next_start += duration;
    }

    debug_assert_eq!(
        phases.iter().map(|p| p.duration_weeks).sum::<u32>(),
        total_weeks
    );
    Ok(phases)
}

/// Resolve which phase a 1-based week number belongs to.
///
/// The scheduler's coverage invariant makes the fallback unreachable for
/// any week inside the plan; if it ever fires, it signals a scheduler bug
/// and is logged as such before defaulting to base.
#[must_use]
pub fn phase_for_week(week_number: u32, phases: &[Phase]) -> PhaseKind {
    for phase in phases {
        if phase.contains_week(week_number) {
            return phase.kind;
        }
    }
    warn!(
        week_number,
        "week not covered by any phase; falling back to base (scheduler invariant violated)"
    );
    PhaseKind::Base
}
