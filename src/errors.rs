// ABOUTME: Error types for the plan engine's structurally-invalid-input failures
// ABOUTME: No-match and missing-data situations are modeled as output states, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Unified error handling for the plan engine.
//!
//! The engine throws only for structurally invalid input. Absence of data
//! (no matching workout, missing goal fields) is always representable in
//! the output types and never surfaces as an error.

use thiserror::Error;

/// Errors produced by the plan engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PlanError {
    /// Plan duration must be at least one week
    #[error("invalid plan duration: {0} weeks (must be at least 1)")]
    InvalidDuration(u32),
}

/// Result alias used throughout the engine
pub type PlanResult<T> = Result<T, PlanError>;
