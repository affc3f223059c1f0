// ABOUTME: Core types and constants for the FitMind weight-loss planning engine
// ABOUTME: Foundation crate with domain models, validation errors, and physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

#![deny(unsafe_code)]

//! # FitMind Core
//!
//! Foundation crate providing the shared vocabulary of the planning engine.
//! It carries no algorithms; the `fitmind-intelligence` crate builds on it.
//!
//! ## Modules
//!
//! - **errors**: `ValidationError` for rejected plans and `ParseEnumError` for strict string parsing
//! - **constants**: Physiological constants (energy density of fat, BMI bands, pace table)
//! - **models**: Profile snapshot, closed enums (gender, activity, pace) and weight observations

/// Validation and parsing error types
pub mod errors;

/// Physiological and calendar constants organized by domain
pub mod constants;

/// Core data models (profile snapshot, pace, weight observations)
pub mod models;

pub use errors::{ParseEnumError, ValidationError};
pub use models::{ActivityLevel, Gender, Pace, UserProfile, WeightObservation};
