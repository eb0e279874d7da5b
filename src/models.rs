// ABOUTME: Data model for training plans, sessions, logged workouts, and readiness signals
// ABOUTME: Plain serde-serializable structures shared with the persistence and API collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Core data model for the plan engine.
//!
//! Everything here is a plain immutable data structure. Durability and
//! multi-user isolation belong to the persistence collaborator; this crate
//! only produces and consumes these shapes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::defaults::{DEFAULT_PLAN_WEEKS, DEFAULT_TARGET_DISTANCE_KM};

/// Race or target-event descriptor driving all downstream scaling.
///
/// Immutable once a plan is generated. Missing numeric fields are not
/// errors; accessors apply documented defaults instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaceGoal {
    /// Display name of the target race, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_name: Option<String>,
    /// Target race distance in kilometers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_distance_km: Option<f64>,
    /// Target elevation gain in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_elevation_m: Option<f64>,
    /// Race date, used to anchor the plan calendar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    /// Total plan duration in weeks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weeks: Option<u32>,
}

impl RaceGoal {
    /// Target distance with the half-marathon default applied
    #[must_use]
    pub fn distance_or_default(&self) -> f64 {
        match self.target_distance_km {
            Some(d) if d > 0.0 => d,
            _ => DEFAULT_TARGET_DISTANCE_KM,
        }
    }

    /// Elevation gain per kilometer of race distance.
    ///
    /// Zero when the goal specifies no usable distance, so flat-race plans
    /// carry no climbing targets.
    #[must_use]
    pub fn elevation_ratio(&self) -> f64 {
        match (self.target_elevation_m, self.target_distance_km) {
            (Some(elev), Some(dist)) if dist > 0.0 => elev / dist,
            _ => 0.0,
        }
    }

    /// Plan length with the 12-week default applied
    #[must_use]
    pub fn weeks_or_default(&self) -> u32 {
        self.total_weeks.unwrap_or(DEFAULT_PLAN_WEEKS)
    }
}

/// Macro-cycle phase emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// Aerobic base building
    Base,
    /// Progressive overload and race-specific work
    Build,
    /// Peak volume and intensity
    Peak,
    /// Pre-race volume reduction
    Taper,
}

impl PhaseKind {
    /// Lowercase name as shown to users and stored by collaborators
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contiguous block of weeks with a single training emphasis.
///
/// A full set of phases covers `1..=total_weeks` exactly, with no gaps or
/// overlaps. Week ranges are inclusive on both ends. Zero-duration phases
/// are kept in the list with an empty range so ordering stays fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase emphasis
    pub kind: PhaseKind,
    /// Length of the phase in weeks (may be zero for very short plans)
    pub duration_weeks: u32,
    /// First week of the phase, 1-based inclusive
    pub start_week: u32,
    /// Last week of the phase, inclusive
    pub end_week: u32,
}

impl Phase {
    /// Whether the given 1-based week number falls inside this phase
    #[must_use]
    pub const fn contains_week(&self, week: u32) -> bool {
        self.duration_weeks > 0 && week >= self.start_week && week <= self.end_week
    }
}

/// Day slot within a training week, Monday-first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl DayOfWeek {
    /// All seven days in calendar order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Offset in days from Monday
    #[must_use]
    pub const fn offset_from_monday(self) -> u64 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }
}

/// Discipline tag for prescribed sessions and logged workouts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// Structured endurance running (intervals, tempo, long runs)
    EnduranceRun,
    /// Easy or recovery-pace running
    RecoveryRun,
    /// Conventional strength training
    Strength,
    /// Mixed strength and engine work
    HybridStrength,
    /// High-intensity circuit session
    Circuit,
    /// Hyrox-format race simulation
    Hyrox,
    /// `CrossFit`-style workout
    Crossfit,
    /// Mobility, stretching, or core work
    Mobility,
    /// Rest day
    Rest,
    /// Provider-specific tag outside the standard set
    Other(String),
}

/// Group of discipline tags treated as interchangeable when matching
/// logged workouts against prescriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquivalenceClass {
    /// All running variants
    Running,
    /// Strength, circuit, and hybrid-race formats
    Strength,
    /// Mobility and core work
    Mobility,
    /// Rest
    Rest,
}

impl Discipline {
    /// The equivalence class this discipline belongs to, or `None` for
    /// nonstandard tags which only ever match themselves exactly
    #[must_use]
    pub const fn equivalence_class(&self) -> Option<EquivalenceClass> {
        match self {
            Self::EnduranceRun | Self::RecoveryRun => Some(EquivalenceClass::Running),
            Self::Strength | Self::HybridStrength | Self::Circuit | Self::Hyrox
            | Self::Crossfit => Some(EquivalenceClass::Strength),
            Self::Mobility => Some(EquivalenceClass::Mobility),
            Self::Rest => Some(EquivalenceClass::Rest),
            Self::Other(_) => None,
        }
    }

    /// Whether two disciplines are interchangeable for adherence matching
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self.equivalence_class(), other.equivalence_class()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }

    /// Whether this discipline counts toward weekly strength-session load
    #[must_use]
    pub const fn is_strength(&self) -> bool {
        matches!(
            self,
            Self::Strength | Self::HybridStrength | Self::Circuit | Self::Hyrox | Self::Crossfit
        )
    }

    /// Whether this discipline carries a distance figure
    #[must_use]
    pub const fn is_endurance(&self) -> bool {
        matches!(self, Self::EnduranceRun | Self::RecoveryRun)
    }
}

/// Discipline-shaped detail bag attached to a session.
///
/// Which fields are populated depends on the discipline: interval notation
/// and target zone for structured work, distance and elevation for
/// endurance work, exercise list and format tag for strength work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionDetails {
    /// Prescribed distance in kilometers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Climbing target in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    /// Target intensity zone, 1-5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_zone: Option<u8>,
    /// Structured interval notation, e.g. "6x400m @ 5k pace"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intervals: Option<String>,
    /// Exercise list for strength and circuit sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<String>>,
    /// Session format tag, e.g. "EMOM", "AMRAP", "superset"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// One prescribed unit of training for a single day.
///
/// Created by the weekly session generator and immutable once emitted.
/// Later mutation (edits, completion, drag-to-different-day) belongs to the
/// external mutation API, not this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Day slot within the week
    pub day: DayOfWeek,
    /// Discipline tag
    pub discipline: Discipline,
    /// Finer-grained session subtype, e.g. "intervals", "long_run"
    pub subtype: String,
    /// Short human-readable title
    pub title: String,
    /// Longer coaching description
    pub description: String,
    /// Prescribed duration in minutes
    pub duration_min: u32,
    /// Discipline-specific details
    pub details: SessionDetails,
    /// Owning week number, 1-based
    pub week_number: u32,
    /// Owning phase
    pub phase: PhaseKind,
    /// Whether the owning week is a deload week
    pub deload: bool,
}

impl Session {
    /// Whether this is an explicit rest day
    #[must_use]
    pub fn is_rest(&self) -> bool {
        matches!(self.discipline, Discipline::Rest)
    }

    /// Explicit rest-day session carrying the given week stamps.
    ///
    /// Used both for unprescribed day slots and as the replacement the
    /// readiness adjuster emits on a critical recovery score.
    #[must_use]
    pub fn rest(day: DayOfWeek, week_number: u32, phase: PhaseKind, deload: bool) -> Self {
        Self {
            day,
            discipline: Discipline::Rest,
            subtype: "rest".into(),
            title: "Rest day".into(),
            description: "Full rest. Recovery is where adaptation happens.".into(),
            duration_min: 0,
            details: SessionDetails::default(),
            week_number,
            phase,
            deload,
        }
    }
}

/// Aggregate load figures for one training week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekLoadSummary {
    /// Sum of prescribed distance across endurance sessions, kilometers
    pub total_distance_km: f64,
    /// Count of strength-class sessions
    pub strength_sessions: u32,
    /// Sum of prescribed duration across all sessions, in hours to one
    /// decimal place
    pub estimated_hours: f64,
}

/// One calendar week of the assembled plan.
///
/// Always carries exactly seven sessions, one per day; a day without
/// training is an explicit rest session, never an omission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Week number, 1-based
    pub week_number: u32,
    /// Monday the week starts on
    pub start_date: NaiveDate,
    /// Phase this week belongs to
    pub phase: PhaseKind,
    /// Whether this is a deload week
    pub deload: bool,
    /// Free-text focus statement shown at the top of the week
    pub focus: String,
    /// Aggregate load summary
    pub summary: WeekLoadSummary,
    /// The seven prescribed sessions, Monday through Sunday
    pub sessions: Vec<Session>,
}

/// Fully assembled multi-week training plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Unique plan identity
    pub id: Uuid,
    /// When the plan was generated
    pub created_at: DateTime<Utc>,
    /// Frozen snapshot of the goal the plan was built from
    pub goal: RaceGoal,
    /// Ordered macro-cycle phases covering every week
    pub phases: Vec<Phase>,
    /// Ordered week plans covering `1..=total_weeks`
    pub weeks: Vec<WeekPlan>,
    /// Narrative strategy descriptor naming each phase's intent
    pub overall_strategy: String,
}

/// Externally-logged record of what a user actually did.
///
/// Owned and persisted outside this engine; the adherence analyzer only
/// reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualWorkout {
    /// Calendar day the workout was performed
    pub date: NaiveDate,
    /// Discipline tag reported by the logging source
    pub discipline: Discipline,
    /// Actual duration in minutes
    pub duration_min: u32,
    /// Actual distance in kilometers, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Perceived-effort score, 1-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perceived_effort: Option<u8>,
}

/// A prescribed session completed essentially as written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedSession {
    /// The prescription
    pub planned: Session,
    /// The matched logged workout
    pub actual: ActualWorkout,
}

/// A prescribed session performed with significant deviation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifiedSession {
    /// The prescription
    pub planned: Session,
    /// The matched logged workout
    pub actual: ActualWorkout,
    /// Human-readable notes on each significant deviation
    pub deviations: Vec<String>,
}

/// Signed difference between actual and planned weekly load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadDelta {
    /// Actual minus planned distance, kilometers
    pub distance_km: f64,
    /// Actual minus planned strength-session count
    pub strength_sessions: i32,
    /// Actual minus planned duration, minutes
    pub duration_min: i64,
}

/// Classified diff between one prescribed week and what was logged.
///
/// Ephemeral output, recomputed on demand and never persisted by this
/// engine. The `completed`, `modified`, and `skipped` lists partition the
/// prescribed session set exactly; `extra` is disjoint from all matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdherenceReport {
    /// Sessions completed as planned
    pub completed: Vec<CompletedSession>,
    /// Sessions performed with significant deviation
    pub modified: Vec<ModifiedSession>,
    /// Prescribed sessions with no matching logged workout
    pub skipped: Vec<Session>,
    /// Logged workouts matching no prescription
    pub extra: Vec<ActualWorkout>,
    /// Actual-minus-planned load figures for the week
    pub load_delta: LoadDelta,
    /// Share of loggable prescriptions (everything but rest and mobility
    /// slots) that were performed, 0-100
    pub completion_rate_pct: f64,
}

/// Today's physiological signal from the external metrics collaborator.
///
/// Treated as an opaque, possibly-stale reading; the engine clamps the
/// score into range and defaults nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessSnapshot {
    /// Recovery/readiness score, 0-100
    pub recovery_score: f64,
    /// Sleep-performance percentage, when the wearable supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_performance_pct: Option<f64>,
}

/// Readiness classification over fixed score thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// Severely under-recovered; training is counterproductive
    Critical,
    /// Under-recovered; substantial volume reduction advised
    Warning,
    /// Mildly fatigued; small trim advised
    Moderate,
    /// Normal recovery
    Good,
    /// Fully recovered
    Prime,
}

/// Advisory output of the readiness adjustment component.
///
/// Applying it to persisted plan state is the mutation API's concern; the
/// engine only decides what to recommend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentRecommendation {
    /// Readiness classification
    pub status: ReadinessStatus,
    /// Human-readable rationale shown for user confirmation
    pub rationale: String,
    /// Whether the engine recommends replacing today's session
    pub should_adjust: bool,
    /// Scaled or rest-day replacement session, present only when an
    /// adjustment is recommended for a non-rest original
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_session: Option<Session>,
    /// Echo of the (clamped) readiness score the decision was based on
    pub recovery_score: f64,
}
