// ABOUTME: Day-by-day session prescription for one training week
// ABOUTME: Applies deload, taper, and progressive-overload scaling to a fixed weekly template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Weekly session generator.
//!
//! A deterministic function of its inputs: the same week number, phase,
//! goal, and configuration always produce the same seven sessions, so a
//! plan can be regenerated reproducibly and tested without fixtures.
//!
//! The weekly structure is a fixed day-to-template table (mobility,
//! intervals, hybrid strength, easy run, circuit, active recovery, long
//! run) rather than anything polymorphic; only the volume figures and the
//! interval structure vary with week, phase, and deload state.

use crate::config::GeneratorConfig;
use crate::constants::sessions::{
    ACTIVE_RECOVERY_DURATION_MIN, CIRCUIT_DURATION_MIN, EASY_RUN_PACE_MIN_PER_KM,
    INTERVAL_DURATION_MIN, LIGHT_CORE_DURATION_MIN, LONG_RUN_PACE_MIN_PER_KM,
    MOBILITY_DURATION_MIN, STRENGTH_DURATION_MIN,
};
use crate::models::{
    DayOfWeek, Discipline, Phase, PhaseKind, RaceGoal, Session, SessionDetails,
};

/// Generates the per-day prescription for a single week.
#[derive(Debug, Clone, Default)]
pub struct SessionGenerator {
    config: GeneratorConfig,
}

/// Volume figures shared by every day of one week
#[derive(Debug, Clone, Copy)]
struct WeekVolume {
    deload: bool,
    /// Combined deload and taper multiplier
    factor: f64,
    long_km: f64,
    easy_km: f64,
    /// Elevation gain per kilometer from the goal
    elevation_ratio: f64,
}

impl SessionGenerator {
    /// Create a generator with the given tunables
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Whether the given week is a deload week
    #[must_use]
    pub const fn is_deload_week(&self, week_number: u32) -> bool {
        week_number % self.config.deload_interval_weeks == 0
    }

    /// Taper volume multiplier for a week, 1.0 outside the taper phase.
    ///
    /// Decay begins on the first taper week, so even a one-week taper runs
    /// below nominal volume, and continues per week after, floored at the
    /// configured share of nominal effort. The taper start is read from
    /// the actual computed phase list, never assumed from the plan length.
    #[must_use]
    pub fn taper_factor(&self, week_number: u32, phase: PhaseKind, phases: &[Phase]) -> f64 {
        if phase != PhaseKind::Taper {
            return 1.0;
        }
        let Some(taper) = phases
            .iter()
            .find(|p| p.kind == PhaseKind::Taper && p.duration_weeks > 0)
        else {
            return 1.0;
        };
        let weeks_in = f64::from(week_number.saturating_sub(taper.start_week) + 1);
        (1.0 - self.config.taper_decay_per_week * weeks_in).max(self.config.taper_floor)
    }

    /// Generate the seven sessions of one week, Monday through Sunday.
    ///
    /// Never fails: missing goal figures degrade to the documented
    /// defaults rather than erroring.
    #[must_use]
    pub fn generate_week(
        &self,
        week_number: u32,
        phase: PhaseKind,
        goal: &RaceGoal,
        phases: &[Phase],
    ) -> Vec<Session> {
        let volume = self.week_volume(week_number, phase, goal, phases);

        DayOfWeek::ALL
            .iter()
            .map(|&day| {
                let mut session = self.session_for_day(day, phase, volume);
                session.week_number = week_number;
                session.phase = phase;
                session.deload = volume.deload;
                session
            })
            .collect()
    }

    fn week_volume(
        &self,
        week_number: u32,
        phase: PhaseKind,
        goal: &RaceGoal,
        phases: &[Phase],
    ) -> WeekVolume {
        let deload = self.is_deload_week(week_number);
        let deload_factor = if deload { self.config.deload_factor } else { 1.0 };
        let factor = deload_factor * self.taper_factor(week_number, phase, phases);

        let progression = self.config.long_run_base_km
            * self
                .config
                .long_run_weekly_growth
                .powi(week_number as i32 - 1);
        let cap = self.config.long_run_cap_ratio * goal.distance_or_default();
        let long_km = (progression.min(cap) * factor).round();
        let easy_km = (long_km * self.config.easy_run_ratio).round();

        WeekVolume {
            deload,
            factor,
            long_km,
            easy_km,
            elevation_ratio: goal.elevation_ratio(),
        }
    }

    /// Fixed day-to-template dispatch. Each slot overrides the default
    /// rest template; the stamps (week, phase, deload) are filled in by
    /// the caller.
    fn session_for_day(&self, day: DayOfWeek, phase: PhaseKind, volume: WeekVolume) -> Session {
        match day {
            DayOfWeek::Monday => mobility_session(day),
            DayOfWeek::Tuesday => interval_session(day, phase, volume),
            DayOfWeek::Wednesday => hybrid_strength_session(day, volume),
            DayOfWeek::Thursday => easy_run_session(day, volume),
            DayOfWeek::Friday => {
                if volume.deload || phase == PhaseKind::Taper {
                    light_core_session(day)
                } else {
                    circuit_session(day, volume)
                }
            }
            DayOfWeek::Saturday => active_recovery_session(day),
            DayOfWeek::Sunday => long_run_session(day, volume),
        }
    }
}

fn scaled_minutes(nominal: u32, factor: f64) -> u32 {
    (f64::from(nominal) * factor).round() as u32
}

fn elevation_for(distance_km: f64, ratio: f64) -> f64 {
    (distance_km * ratio).round()
}

fn blank_session(day: DayOfWeek) -> Session {
    // Stamps are overwritten by the caller; the rest template is the
    // default every day slot starts from.
    Session::rest(day, 0, PhaseKind::Base, false)
}

fn mobility_session(day: DayOfWeek) -> Session {
    Session {
        discipline: Discipline::Mobility,
        subtype: "mobility".into(),
        title: "Mobility & activation".into(),
        description: "Hips, ankles, and thoracic spine. Keep it unhurried.".into(),
        duration_min: MOBILITY_DURATION_MIN,
        details: SessionDetails::default(),
        ..blank_session(day)
    }
}

fn interval_session(day: DayOfWeek, phase: PhaseKind, volume: WeekVolume) -> Session {
    let (intervals, zone, title) = match phase {
        PhaseKind::Base => (
            "8x20s strides, full recovery",
            2,
            "Aerobic run with strides",
        ),
        PhaseKind::Build => ("6x3min @ 5k effort, 2min jog", 4, "VO2 intervals"),
        PhaseKind::Peak => ("3x1km @ race pace, 90s jog", 4, "Race-pace repeats"),
        PhaseKind::Taper => ("4x200m relaxed-fast, full recovery", 3, "Sharpening strides"),
    };
    Session {
        discipline: Discipline::EnduranceRun,
        subtype: "intervals".into(),
        title: title.into(),
        description: "Warm up well before the first rep; cut the session before form degrades."
            .into(),
        duration_min: scaled_minutes(INTERVAL_DURATION_MIN, volume.factor),
        details: SessionDetails {
            intervals: Some(intervals.into()),
            intensity_zone: Some(zone),
            ..SessionDetails::default()
        },
        ..blank_session(day)
    }
}

fn hybrid_strength_session(day: DayOfWeek, volume: WeekVolume) -> Session {
    Session {
        discipline: Discipline::HybridStrength,
        subtype: "hybrid_strength".into(),
        title: "Hybrid strength".into(),
        description: "Compound lifts paired with short engine pieces.".into(),
        duration_min: scaled_minutes(STRENGTH_DURATION_MIN, volume.factor),
        details: SessionDetails {
            exercises: Some(vec![
                "Back squat 4x6".into(),
                "Weighted lunge 3x10/side".into(),
                "Sled push 4x25m".into(),
                "Farmer carry 4x40m".into(),
            ]),
            format: Some("superset".into()),
            ..SessionDetails::default()
        },
        ..blank_session(day)
    }
}

fn easy_run_session(day: DayOfWeek, volume: WeekVolume) -> Session {
    Session {
        discipline: Discipline::RecoveryRun,
        subtype: "easy_run".into(),
        title: "Easy recovery run".into(),
        description: "Conversational pace throughout. Slower is fine.".into(),
        duration_min: (volume.easy_km * EASY_RUN_PACE_MIN_PER_KM).round() as u32,
        details: SessionDetails {
            distance_km: Some(volume.easy_km),
            elevation_gain_m: Some(elevation_for(volume.easy_km, volume.elevation_ratio)),
            intensity_zone: Some(2),
            ..SessionDetails::default()
        },
        ..blank_session(day)
    }
}

fn circuit_session(day: DayOfWeek, volume: WeekVolume) -> Session {
    Session {
        discipline: Discipline::Circuit,
        subtype: "circuit".into(),
        title: "High-intensity circuit".into(),
        description: "Steady pacing across rounds; the last round should match the first.".into(),
        duration_min: scaled_minutes(CIRCUIT_DURATION_MIN, volume.factor),
        details: SessionDetails {
            exercises: Some(vec![
                "Ski erg 500m".into(),
                "Wall balls x20".into(),
                "Burpee broad jumps x10".into(),
                "Row 500m".into(),
            ]),
            format: Some("AMRAP 4 rounds".into()),
            ..SessionDetails::default()
        },
        ..blank_session(day)
    }
}

fn light_core_session(day: DayOfWeek) -> Session {
    Session {
        discipline: Discipline::Mobility,
        subtype: "core_mobility".into(),
        title: "Light core & mobility".into(),
        description: "Low-load core circuit and stretching in place of the usual circuit.".into(),
        duration_min: LIGHT_CORE_DURATION_MIN,
        details: SessionDetails {
            format: Some("circuit, easy effort".into()),
            ..SessionDetails::default()
        },
        ..blank_session(day)
    }
}

fn active_recovery_session(day: DayOfWeek) -> Session {
    Session {
        discipline: Discipline::Mobility,
        subtype: "active_recovery".into(),
        title: "Active recovery".into(),
        description: "Walk or gentle spin plus stretching.".into(),
        duration_min: ACTIVE_RECOVERY_DURATION_MIN,
        details: SessionDetails::default(),
        ..blank_session(day)
    }
}

fn long_run_session(day: DayOfWeek, volume: WeekVolume) -> Session {
    Session {
        discipline: Discipline::EnduranceRun,
        subtype: "long_run".into(),
        title: "Long endurance run".into(),
        description: "The cornerstone session. Fuel early and keep the effort honest.".into(),
        duration_min: (volume.long_km * LONG_RUN_PACE_MIN_PER_KM).round() as u32,
        details: SessionDetails {
            distance_km: Some(volume.long_km),
            elevation_gain_m: Some(elevation_for(volume.long_km, volume.elevation_ratio)),
            intensity_zone: Some(2),
            ..SessionDetails::default()
        },
        ..blank_session(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::phase_scheduler::compute_phases;

    fn generator() -> SessionGenerator {
        SessionGenerator::new(GeneratorConfig::default())
    }

    fn goal() -> RaceGoal {
        RaceGoal {
            race_name: Some("Alpine Half".into()),
            target_distance_km: Some(21.0),
            target_elevation_m: Some(300.0),
            total_weeks: Some(12),
            ..RaceGoal::default()
        }
    }

    fn twelve_week_phases() -> Vec<Phase> {
        compute_phases(12, &SchedulerConfig::default()).unwrap()
    }

    #[test]
    fn week_always_has_seven_sessions_monday_first() {
        let sessions = generator().generate_week(1, PhaseKind::Base, &goal(), &twelve_week_phases());
        assert_eq!(sessions.len(), 7);
        let days: Vec<DayOfWeek> = sessions.iter().map(|s| s.day).collect();
        assert_eq!(days, DayOfWeek::ALL.to_vec());
    }

    #[test]
    fn generation_is_deterministic() {
        let phases = twelve_week_phases();
        let a = generator().generate_week(5, PhaseKind::Base, &goal(), &phases);
        let b = generator().generate_week(5, PhaseKind::Base, &goal(), &phases);
        assert_eq!(a, b);
    }

    #[test]
    fn every_session_is_stamped_with_week_and_phase() {
        let sessions =
            generator().generate_week(8, PhaseKind::Build, &goal(), &twelve_week_phases());
        for session in &sessions {
            assert_eq!(session.week_number, 8);
            assert_eq!(session.phase, PhaseKind::Build);
            assert!(session.deload, "week 8 is a deload week");
        }
    }

    #[test]
    fn deload_week_never_exceeds_nominal_volume() {
        let phases = twelve_week_phases();
        let generator = generator();
        let deload = generator.generate_week(4, PhaseKind::Base, &goal(), &phases);

        // Same week with the deload multiplier forced off
        let nominal_config = GeneratorConfig {
            deload_factor: 1.0,
            ..GeneratorConfig::default()
        };
        let nominal = SessionGenerator::new(nominal_config).generate_week(
            4,
            PhaseKind::Base,
            &goal(),
            &phases,
        );

        for (d, n) in deload.iter().zip(&nominal) {
            assert!(d.duration_min <= n.duration_min);
            if let (Some(dd), Some(nd)) = (d.details.distance_km, n.details.distance_km) {
                assert!(dd <= nd);
            }
        }
    }

    #[test]
    fn long_run_progresses_geometrically_then_caps() {
        let phases = twelve_week_phases();
        let generator = generator();
        let week1 = generator.generate_week(1, PhaseKind::Base, &goal(), &phases);
        let week2 = generator.generate_week(2, PhaseKind::Base, &goal(), &phases);
        // 8 * 1.1^0 = 8, 8 * 1.1^1 = 8.8 -> 9
        assert_eq!(week1[6].details.distance_km, Some(8.0));
        assert_eq!(week2[6].details.distance_km, Some(9.0));

        // Far enough out the progression caps at 120% of goal distance
        let goal_short = RaceGoal {
            target_distance_km: Some(10.0),
            total_weeks: Some(12),
            ..RaceGoal::default()
        };
        let capped = generator.generate_week(11, PhaseKind::Peak, &goal_short, &phases);
        assert_eq!(capped[6].details.distance_km, Some(12.0));
    }

    #[test]
    fn easy_run_is_half_the_long_run() {
        let sessions = generator().generate_week(1, PhaseKind::Base, &goal(), &twelve_week_phases());
        assert_eq!(sessions[3].details.distance_km, Some(4.0));
        assert_eq!(sessions[6].details.distance_km, Some(8.0));
    }

    #[test]
    fn elevation_targets_follow_the_goal_ratio() {
        // 300m over 21km ~= 14.29 m/km; week-1 long run of 8km -> 114m
        let sessions = generator().generate_week(1, PhaseKind::Base, &goal(), &twelve_week_phases());
        assert_eq!(sessions[6].details.elevation_gain_m, Some(114.0));
    }

    #[test]
    fn flat_goal_yields_zero_elevation_targets() {
        let flat = RaceGoal {
            total_weeks: Some(12),
            ..RaceGoal::default()
        };
        let sessions = generator().generate_week(1, PhaseKind::Base, &flat, &twelve_week_phases());
        assert_eq!(sessions[6].details.elevation_gain_m, Some(0.0));
    }

    #[test]
    fn taper_factor_decays_from_the_actual_taper_start() {
        let phases = compute_phases(14, &SchedulerConfig::default()).unwrap();
        let generator = generator();
        let taper_start = phases[3].start_week;
        let first = generator.taper_factor(taper_start, PhaseKind::Taper, &phases);
        let second = generator.taper_factor(taper_start + 1, PhaseKind::Taper, &phases);
        assert!((first - 0.8).abs() < f64::EPSILON);
        assert!((second - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn first_taper_week_already_runs_below_nominal() {
        // 12-week plan: the taper is the single final week
        let phases = twelve_week_phases();
        let factor = generator().taper_factor(12, PhaseKind::Taper, &phases);
        assert!((factor - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn taper_factor_is_monotonic_and_floored() {
        let phases = compute_phases(20, &SchedulerConfig::default()).unwrap();
        let generator = generator();
        let taper = &phases[3];
        let mut last = f64::INFINITY;
        for week in taper.start_week..=taper.end_week + 5 {
            let factor = generator.taper_factor(week, PhaseKind::Taper, &phases);
            assert!(factor <= last);
            assert!(factor >= 0.3 - f64::EPSILON);
            last = factor;
        }
        assert!(
            (generator.taper_factor(taper.start_week + 10, PhaseKind::Taper, &phases) - 0.3).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn taper_factor_is_one_outside_the_taper() {
        let phases = twelve_week_phases();
        let factor = generator().taper_factor(5, PhaseKind::Base, &phases);
        assert!((factor - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn friday_circuit_is_replaced_on_deload_and_taper_weeks() {
        let phases = twelve_week_phases();
        let generator = generator();

        let normal = generator.generate_week(2, PhaseKind::Base, &goal(), &phases);
        assert_eq!(normal[4].discipline, Discipline::Circuit);

        let deload = generator.generate_week(4, PhaseKind::Base, &goal(), &phases);
        assert_eq!(deload[4].discipline, Discipline::Mobility);

        let taper = generator.generate_week(12, PhaseKind::Taper, &goal(), &phases);
        assert_eq!(taper[4].discipline, Discipline::Mobility);
    }

    #[test]
    fn interval_structure_follows_the_phase() {
        let phases = twelve_week_phases();
        let generator = generator();
        let base = generator.generate_week(1, PhaseKind::Base, &goal(), &phases);
        let build = generator.generate_week(7, PhaseKind::Build, &goal(), &phases);
        assert!(base[1].details.intervals.as_deref().unwrap().contains("strides"));
        assert!(build[1].details.intervals.as_deref().unwrap().contains("5k effort"));
        assert_eq!(base[1].details.intensity_zone, Some(2));
        assert_eq!(build[1].details.intensity_zone, Some(4));
    }

    #[test]
    fn missing_goal_fields_degrade_to_defaults() {
        let sessions = generator().generate_week(
            1,
            PhaseKind::Base,
            &RaceGoal::default(),
            &twelve_week_phases(),
        );
        assert_eq!(sessions.len(), 7);
        assert_eq!(sessions[6].details.distance_km, Some(8.0));
        assert_eq!(sessions[6].details.elevation_gain_m, Some(0.0));
    }
}
