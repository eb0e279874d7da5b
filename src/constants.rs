// ABOUTME: Training methodology constants used throughout the plan engine
// ABOUTME: Fixed periodization ratios, recovery thresholds, and adherence tolerances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Training methodology constants.
//!
//! These values encode the coaching methodology itself rather than
//! per-deployment tuning; the user-tunable layer lives in
//! [`crate::config`], whose defaults reproduce these numbers.

/// Defaults applied when a goal omits numeric fields
pub mod defaults {
    /// Target distance assumed when the goal specifies none (half marathon)
    pub const DEFAULT_TARGET_DISTANCE_KM: f64 = 21.0;

    /// Plan length assumed when the goal specifies none
    pub const DEFAULT_PLAN_WEEKS: u32 = 12;
}

/// Macro-cycle phase partitioning ratios
pub mod periodization {
    /// Plans shorter than this use the compressed short-prep split
    pub const SHORT_PREP_THRESHOLD_WEEKS: u32 = 12;

    /// Short-prep base/build/peak shares of total weeks
    pub const SHORT_PREP_SPLIT: [f64; 3] = [0.20, 0.50, 0.20];

    /// Standard base/build/peak shares of total weeks
    pub const STANDARD_SPLIT: [f64; 3] = [0.45, 0.35, 0.10];

    /// Minimum taper length under the short-prep split
    pub const SHORT_PREP_MIN_TAPER_WEEKS: u32 = 1;
}

/// Weekly volume scaling
pub mod volume {
    /// Every Nth week is a deload week
    pub const DELOAD_INTERVAL_WEEKS: u32 = 4;

    /// Volume multiplier applied on deload weeks
    pub const DELOAD_FACTOR: f64 = 0.6;

    /// Taper volume decay per week into the taper phase
    pub const TAPER_DECAY_PER_WEEK: f64 = 0.2;

    /// Taper volume never drops below this share of nominal effort
    pub const TAPER_FLOOR: f64 = 0.3;

    /// Long-run starting distance at week one, kilometers
    pub const LONG_RUN_BASE_KM: f64 = 8.0;

    /// Weekly geometric growth of the long run
    pub const LONG_RUN_WEEKLY_GROWTH: f64 = 1.1;

    /// Long-run cap as a share of goal race distance
    pub const LONG_RUN_CAP_RATIO: f64 = 1.2;

    /// Easy-run distance as a share of the long run
    pub const EASY_RUN_RATIO: f64 = 0.5;
}

/// Fixed per-day session shapes
pub mod sessions {
    /// Mobility and activation session length, minutes
    pub const MOBILITY_DURATION_MIN: u32 = 30;

    /// Hybrid strength session length, minutes
    pub const STRENGTH_DURATION_MIN: u32 = 60;

    /// High-intensity circuit session length, minutes
    pub const CIRCUIT_DURATION_MIN: u32 = 45;

    /// Interval session length before volume scaling, minutes
    pub const INTERVAL_DURATION_MIN: u32 = 50;

    /// Light core and mobility session substituted for the circuit on
    /// deload and taper weeks, minutes
    pub const LIGHT_CORE_DURATION_MIN: u32 = 30;

    /// Active recovery session length, minutes
    pub const ACTIVE_RECOVERY_DURATION_MIN: u32 = 30;

    /// Assumed long-run pace for duration estimates, minutes per kilometer
    pub const LONG_RUN_PACE_MIN_PER_KM: f64 = 7.0;

    /// Assumed easy-run pace for duration estimates, minutes per kilometer
    pub const EASY_RUN_PACE_MIN_PER_KM: f64 = 6.5;
}

/// Adherence-matching tolerances
pub mod adherence {
    /// Duration deviation beyond this many minutes is significant
    pub const DURATION_TOLERANCE_MIN: i64 = 15;

    /// Distance deviation beyond this many kilometers is significant
    pub const DISTANCE_TOLERANCE_KM: f64 = 2.0;

    /// Perceived-effort deviation beyond this many points is significant
    pub const EFFORT_TOLERANCE: i16 = 2;

    /// Matching falls back to this many days either side of the
    /// prescribed day when no same-day workout exists
    pub const DAY_TOLERANCE: i64 = 1;

    /// Expected perceived effort for each intensity zone 1-5
    pub const ZONE_EXPECTED_EFFORT: [u8; 5] = [3, 4, 6, 8, 9];
}

/// Readiness score thresholds and volume multipliers
pub mod readiness {
    /// Scores below this are critical
    pub const CRITICAL_BELOW: f64 = 33.0;

    /// Scores below this (and not critical) are a warning
    pub const WARNING_BELOW: f64 = 50.0;

    /// Scores below this (and not warning) are moderate
    pub const MODERATE_BELOW: f64 = 67.0;

    /// Scores at or above this are prime
    pub const PRIME_AT_OR_ABOVE: f64 = 85.0;

    /// Volume multiplier when critical
    pub const CRITICAL_FACTOR: f64 = 0.3;

    /// Volume multiplier when warning
    pub const WARNING_FACTOR: f64 = 0.6;

    /// Volume multiplier when moderate
    pub const MODERATE_FACTOR: f64 = 0.85;

    /// Sleep performance below this percentage triggers the sleep penalty
    pub const SLEEP_PENALTY_BELOW_PCT: f64 = 60.0;

    /// Extra multiplier applied when the sleep penalty triggers
    pub const SLEEP_PENALTY_FACTOR: f64 = 0.85;
}
