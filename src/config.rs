// ABOUTME: Tunable configuration for the plan engine components
// ABOUTME: Defaults reproduce the standard Stride coaching methodology numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Plan engine configuration.
//!
//! Every tunable knob the components read lives here, grouped per
//! component. `Default` reproduces the standard methodology values from
//! [`crate::constants`]; a deployment can deserialize overrides on top.

use serde::{Deserialize, Serialize};

use crate::constants::{adherence, periodization, readiness, volume};

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanEngineConfig {
    /// Phase scheduler tunables
    pub scheduler: SchedulerConfig,
    /// Weekly session generator tunables
    pub generator: GeneratorConfig,
    /// Adherence analyzer tolerances
    pub adherence: AdherenceConfig,
    /// Readiness adjustment thresholds
    pub readiness: ReadinessConfig,
}

/// Phase scheduler tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Plans shorter than this many weeks use the short-prep split
    pub short_prep_threshold_weeks: u32,
    /// Short-prep base/build/peak shares of total weeks
    pub short_prep_split: [f64; 3],
    /// Standard base/build/peak shares of total weeks
    pub standard_split: [f64; 3],
    /// Minimum taper length under the short-prep split
    pub short_prep_min_taper_weeks: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            short_prep_threshold_weeks: periodization::SHORT_PREP_THRESHOLD_WEEKS,
            short_prep_split: periodization::SHORT_PREP_SPLIT,
            standard_split: periodization::STANDARD_SPLIT,
            short_prep_min_taper_weeks: periodization::SHORT_PREP_MIN_TAPER_WEEKS,
        }
    }
}

/// Weekly session generator tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Every Nth week is a deload week
    pub deload_interval_weeks: u32,
    /// Volume multiplier applied on deload weeks
    pub deload_factor: f64,
    /// Taper volume decay per week into the taper phase
    pub taper_decay_per_week: f64,
    /// Taper volume floor as a share of nominal effort
    pub taper_floor: f64,
    /// Long-run starting distance at week one, kilometers
    pub long_run_base_km: f64,
    /// Weekly geometric growth factor of the long run
    pub long_run_weekly_growth: f64,
    /// Long-run cap as a share of goal race distance
    pub long_run_cap_ratio: f64,
    /// Easy-run distance as a share of the long run
    pub easy_run_ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            deload_interval_weeks: volume::DELOAD_INTERVAL_WEEKS,
            deload_factor: volume::DELOAD_FACTOR,
            taper_decay_per_week: volume::TAPER_DECAY_PER_WEEK,
            taper_floor: volume::TAPER_FLOOR,
            long_run_base_km: volume::LONG_RUN_BASE_KM,
            long_run_weekly_growth: volume::LONG_RUN_WEEKLY_GROWTH,
            long_run_cap_ratio: volume::LONG_RUN_CAP_RATIO,
            easy_run_ratio: volume::EASY_RUN_RATIO,
        }
    }
}

/// Adherence analyzer tolerances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdherenceConfig {
    /// Duration deviation beyond this many minutes is significant
    pub duration_tolerance_min: i64,
    /// Distance deviation beyond this many kilometers is significant
    pub distance_tolerance_km: f64,
    /// Perceived-effort deviation beyond this many points is significant
    pub effort_tolerance: i16,
    /// Matching tolerance in days around the prescribed day
    pub day_tolerance: i64,
}

impl Default for AdherenceConfig {
    fn default() -> Self {
        Self {
            duration_tolerance_min: adherence::DURATION_TOLERANCE_MIN,
            distance_tolerance_km: adherence::DISTANCE_TOLERANCE_KM,
            effort_tolerance: adherence::EFFORT_TOLERANCE,
            day_tolerance: adherence::DAY_TOLERANCE,
        }
    }
}

/// Readiness adjustment thresholds and multipliers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Scores below this are critical
    pub critical_below: f64,
    /// Scores below this (and not critical) are a warning
    pub warning_below: f64,
    /// Scores below this (and not warning) are moderate
    pub moderate_below: f64,
    /// Scores at or above this are prime
    pub prime_at_or_above: f64,
    /// Volume multiplier when critical
    pub critical_factor: f64,
    /// Volume multiplier when warning
    pub warning_factor: f64,
    /// Volume multiplier when moderate
    pub moderate_factor: f64,
    /// Sleep performance below this percentage triggers the sleep penalty
    pub sleep_penalty_below_pct: f64,
    /// Extra multiplier applied when the sleep penalty triggers
    pub sleep_penalty_factor: f64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            critical_below: readiness::CRITICAL_BELOW,
            warning_below: readiness::WARNING_BELOW,
            moderate_below: readiness::MODERATE_BELOW,
            prime_at_or_above: readiness::PRIME_AT_OR_ABOVE,
            critical_factor: readiness::CRITICAL_FACTOR,
            warning_factor: readiness::WARNING_FACTOR,
            moderate_factor: readiness::MODERATE_FACTOR,
            sleep_penalty_below_pct: readiness::SLEEP_PENALTY_BELOW_PCT,
            sleep_penalty_factor: readiness::SLEEP_PENALTY_FACTOR,
        }
    }
}
