// ABOUTME: Library entry point for the Stride training-plan engine
// ABOUTME: Periodization, weekly prescription, adherence analysis, and readiness adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! # Stride Plan Engine
//!
//! The training-plan periodization and adaptation engine behind the Stride
//! coaching platform. Turns a race goal into a structured week-by-week
//! schedule, reconciles what was actually performed against what was
//! prescribed, and modulates a single day's prescription from a live
//! readiness signal.
//!
//! ## Components
//!
//! - **Phase scheduler**: splits a plan duration into base, build, peak,
//!   and taper blocks that cover every week exactly once
//! - **Session generator**: deterministic day-by-day prescription for one
//!   week, with deload, taper, and progressive-overload scaling
//! - **Plan assembler**: drives the two above across the whole plan span
//!   and attaches calendar dates and load summaries
//! - **Adherence analyzer**: classified diff of logged workouts against a
//!   prescribed week
//! - **Readiness adjuster**: converts a recovery score into a modified
//!   single-day prescription
//!
//! Every component is a pure, synchronous computation over immutable
//! inputs. There is no I/O, no shared state, and no platform clock: "now"
//! is always an injected parameter, so concurrent invocations for
//! different users are trivially safe and every call is reproducible.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, Utc};
//! use stride_plan_engine::config::PlanEngineConfig;
//! use stride_plan_engine::models::RaceGoal;
//! use stride_plan_engine::plan_assembler::PlanAssembler;
//!
//! let goal = RaceGoal {
//!     race_name: Some("Alpine Half".into()),
//!     target_distance_km: Some(21.0),
//!     target_elevation_m: Some(300.0),
//!     total_weeks: Some(12),
//!     ..RaceGoal::default()
//! };
//! let assembler = PlanAssembler::new(PlanEngineConfig::default());
//! let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//! let plan = assembler.assemble(&goal, today, Utc::now()).unwrap();
//! assert_eq!(plan.weeks.len(), 12);
//! ```

/// Adherence analysis of logged workouts against the prescribed week
pub mod adherence;
/// Tunable configuration for all engine components
pub mod config;
/// Training methodology constants
pub mod constants;
/// Error types for structurally invalid input
pub mod errors;
/// Shared data model
pub mod models;
/// Macro-cycle phase partitioning
pub mod phase_scheduler;
/// Multi-week plan assembly
pub mod plan_assembler;
/// Readiness-driven single-day adjustment
pub mod readiness;
/// Day-by-day weekly session generation
pub mod session_generator;

pub use adherence::AdherenceAnalyzer;
pub use config::PlanEngineConfig;
pub use errors::{PlanError, PlanResult};
pub use models::{
    ActualWorkout, AdherenceReport, AdjustmentRecommendation, DayOfWeek, Discipline, Phase,
    PhaseKind, RaceGoal, ReadinessSnapshot, ReadinessStatus, Session, TrainingPlan, WeekPlan,
};
pub use phase_scheduler::{compute_phases, phase_for_week};
pub use plan_assembler::PlanAssembler;
pub use readiness::ReadinessAdjuster;
pub use session_generator::SessionGenerator;
