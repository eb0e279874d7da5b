// ABOUTME: Readiness-driven adjustment of a single day's prescription
// ABOUTME: Converts a recovery score into a scaled or rest-day replacement recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Readiness adjustment.
//!
//! Classifies today's recovery score against fixed thresholds and, when
//! warranted, proposes a modified version of today's session. The output
//! is advisory: committing it to the persisted plan is the mutation API's
//! job, and the decision is surfaced for user confirmation first.

use crate::config::ReadinessConfig;
use crate::models::{
    AdjustmentRecommendation, ReadinessSnapshot, ReadinessStatus, Session,
};

/// Recommends single-day adjustments from a readiness snapshot.
#[derive(Debug, Clone, Default)]
pub struct ReadinessAdjuster {
    config: ReadinessConfig,
}

impl ReadinessAdjuster {
    /// Create an adjuster with the given thresholds
    #[must_use]
    pub const fn new(config: ReadinessConfig) -> Self {
        Self { config }
    }

    /// Classify a recovery score against the configured thresholds
    #[must_use]
    pub fn classify(&self, score: f64) -> ReadinessStatus {
        if score < self.config.critical_below {
            ReadinessStatus::Critical
        } else if score < self.config.warning_below {
            ReadinessStatus::Warning
        } else if score < self.config.moderate_below {
            ReadinessStatus::Moderate
        } else if score >= self.config.prime_at_or_above {
            ReadinessStatus::Prime
        } else {
            ReadinessStatus::Good
        }
    }

    const fn status_factor(&self, status: ReadinessStatus) -> f64 {
        match status {
            ReadinessStatus::Critical => self.config.critical_factor,
            ReadinessStatus::Warning => self.config.warning_factor,
            ReadinessStatus::Moderate => self.config.moderate_factor,
            ReadinessStatus::Good | ReadinessStatus::Prime => 1.0,
        }
    }

    /// Recommend what to do with today's session given the readiness
    /// snapshot. The snapshot is an opaque external reading; the score is
    /// clamped into range and nothing else is validated.
    #[must_use]
    pub fn recommend(
        &self,
        session: &Session,
        readiness: &ReadinessSnapshot,
    ) -> AdjustmentRecommendation {
        let score = readiness.recovery_score.clamp(0.0, 100.0);
        let status = self.classify(score);
        let mut factor = self.status_factor(status);
        let mut rationale = status_rationale(status).to_owned();

        let sleep_penalty = readiness
            .sleep_performance_pct
            .is_some_and(|pct| pct < self.config.sleep_penalty_below_pct);
        if sleep_penalty {
            factor *= self.config.sleep_penalty_factor;
            rationale.push_str(
                " Sleep performance was low last night; trimming the session further as a caution.",
            );
        }

        let should_adjust = sleep_penalty
            || matches!(status, ReadinessStatus::Critical | ReadinessStatus::Warning);

        let alternate_session = if should_adjust && !session.is_rest() {
            Some(if status == ReadinessStatus::Critical {
                critical_rest_replacement(session)
            } else {
                scaled_replacement(session, factor)
            })
        } else {
            None
        };

        AdjustmentRecommendation {
            status,
            rationale,
            should_adjust,
            alternate_session,
            recovery_score: score,
        }
    }
}

const fn status_rationale(status: ReadinessStatus) -> &'static str {
    match status {
        ReadinessStatus::Critical => {
            "Recovery is critically low. Training today would dig the hole deeper; take the rest."
        }
        ReadinessStatus::Warning => {
            "Recovery is well below normal. A much lighter session protects the rest of the week."
        }
        ReadinessStatus::Moderate => {
            "Recovery is slightly down. A small trim keeps the session productive."
        }
        ReadinessStatus::Good => "Recovery is on track. Train as planned.",
        ReadinessStatus::Prime => "Fully recovered. A great day to execute the session as written.",
    }
}

/// Rest-day replacement for a critically low score. Discards the original
/// structure entirely; only the day slot and week stamps survive.
fn critical_rest_replacement(session: &Session) -> Session {
    let mut rest = Session::rest(
        session.day,
        session.week_number,
        session.phase,
        session.deload,
    );
    rest.description =
        "Recovery score is critically low. Full rest today protects the rest of the block.".into();
    rest
}

/// Volume-scaled copy of the original session: duration and distance
/// shrink by the combined factor, everything else is preserved.
fn scaled_replacement(session: &Session, factor: f64) -> Session {
    let mut adjusted = session.clone();
    adjusted.title = format!("Adjusted: {}", session.title);
    adjusted.duration_min = (f64::from(session.duration_min) * factor).round() as u32;
    if let Some(km) = session.details.distance_km {
        adjusted.details.distance_km = Some((km * factor * 10.0).round() / 10.0);
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, Discipline, PhaseKind, SessionDetails};

    fn adjuster() -> ReadinessAdjuster {
        ReadinessAdjuster::new(ReadinessConfig::default())
    }

    fn session() -> Session {
        Session {
            day: DayOfWeek::Tuesday,
            discipline: Discipline::EnduranceRun,
            subtype: "intervals".into(),
            title: "VO2 intervals".into(),
            description: "Warm up well.".into(),
            duration_min: 60,
            details: SessionDetails {
                distance_km: Some(10.0),
                intensity_zone: Some(4),
                intervals: Some("6x3min @ 5k effort".into()),
                ..SessionDetails::default()
            },
            week_number: 7,
            phase: PhaseKind::Build,
            deload: false,
        }
    }

    fn snapshot(score: f64) -> ReadinessSnapshot {
        ReadinessSnapshot {
            recovery_score: score,
            sleep_performance_pct: None,
        }
    }

    #[test]
    fn classification_boundaries_are_exact() {
        let adjuster = adjuster();
        assert_eq!(adjuster.classify(32.0), ReadinessStatus::Critical);
        assert_eq!(adjuster.classify(33.0), ReadinessStatus::Warning);
        assert_eq!(adjuster.classify(49.0), ReadinessStatus::Warning);
        assert_eq!(adjuster.classify(50.0), ReadinessStatus::Moderate);
        assert_eq!(adjuster.classify(66.0), ReadinessStatus::Moderate);
        assert_eq!(adjuster.classify(67.0), ReadinessStatus::Good);
        assert_eq!(adjuster.classify(84.0), ReadinessStatus::Good);
        assert_eq!(adjuster.classify(85.0), ReadinessStatus::Prime);
    }

    #[test]
    fn critical_score_converts_to_rest() {
        let rec = adjuster().recommend(&session(), &snapshot(25.0));
        assert_eq!(rec.status, ReadinessStatus::Critical);
        assert!(rec.should_adjust);
        let alternate = rec.alternate_session.unwrap();
        assert!(alternate.is_rest());
        assert_eq!(alternate.duration_min, 0);
        assert_eq!(alternate.day, DayOfWeek::Tuesday);
        assert_eq!(alternate.week_number, 7);
        assert!(alternate.details.intervals.is_none());
    }

    #[test]
    fn warning_scales_duration_and_distance() {
        let rec = adjuster().recommend(&session(), &snapshot(40.0));
        assert_eq!(rec.status, ReadinessStatus::Warning);
        assert!(rec.should_adjust);
        let alternate = rec.alternate_session.unwrap();
        assert_eq!(alternate.duration_min, 36); // 60 * 0.6
        assert_eq!(alternate.details.distance_km, Some(6.0));
        assert!(alternate.title.starts_with("Adjusted: "));
        // Non-scaled structure is preserved
        assert_eq!(alternate.description, "Warm up well.");
        assert_eq!(
            alternate.details.intervals.as_deref(),
            Some("6x3min @ 5k effort")
        );
    }

    #[test]
    fn moderate_and_above_do_not_adjust() {
        for score in [55.0, 70.0, 90.0] {
            let rec = adjuster().recommend(&session(), &snapshot(score));
            assert!(!rec.should_adjust, "score {score} should not adjust");
            assert!(rec.alternate_session.is_none());
        }
    }

    #[test]
    fn low_sleep_forces_adjustment_even_when_recovered() {
        let rec = adjuster().recommend(
            &session(),
            &ReadinessSnapshot {
                recovery_score: 70.0,
                sleep_performance_pct: Some(50.0),
            },
        );
        assert_eq!(rec.status, ReadinessStatus::Good);
        assert!(rec.should_adjust);
        assert!(rec.rationale.contains("Sleep performance was low"));
        let alternate = rec.alternate_session.unwrap();
        assert_eq!(alternate.duration_min, 51); // 60 * 1.0 * 0.85
    }

    #[test]
    fn sleep_penalty_stacks_on_the_status_factor() {
        let rec = adjuster().recommend(
            &session(),
            &ReadinessSnapshot {
                recovery_score: 40.0,
                sleep_performance_pct: Some(50.0),
            },
        );
        let alternate = rec.alternate_session.unwrap();
        // 60 * 0.6 * 0.85 = 30.6 -> 31
        assert_eq!(alternate.duration_min, 31);
        assert_eq!(alternate.details.distance_km, Some(5.1));
    }

    #[test]
    fn adequate_sleep_does_not_trigger_the_penalty() {
        let rec = adjuster().recommend(
            &session(),
            &ReadinessSnapshot {
                recovery_score: 70.0,
                sleep_performance_pct: Some(60.0),
            },
        );
        assert!(!rec.should_adjust);
        assert!(rec.alternate_session.is_none());
    }

    #[test]
    fn rest_day_originals_never_produce_an_alternate() {
        let rest = Session::rest(DayOfWeek::Monday, 3, PhaseKind::Base, false);
        let rec = adjuster().recommend(&rest, &snapshot(20.0));
        assert_eq!(rec.status, ReadinessStatus::Critical);
        assert!(rec.should_adjust);
        assert!(rec.alternate_session.is_none());
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let rec = adjuster().recommend(&session(), &snapshot(250.0));
        assert!((rec.recovery_score - 100.0).abs() < f64::EPSILON);
        assert_eq!(rec.status, ReadinessStatus::Prime);

        let rec = adjuster().recommend(&session(), &snapshot(-10.0));
        assert!((rec.recovery_score - 0.0).abs() < f64::EPSILON);
        assert_eq!(rec.status, ReadinessStatus::Critical);
    }

    #[test]
    fn no_adjustment_echoes_score_without_an_alternate() {
        let rec = adjuster().recommend(&session(), &snapshot(75.0));
        assert_eq!(rec.status, ReadinessStatus::Good);
        assert!((rec.recovery_score - 75.0).abs() < f64::EPSILON);
        assert!(rec.alternate_session.is_none());
        assert!(!rec.rationale.is_empty());
    }
}
