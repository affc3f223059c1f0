// ABOUTME: Core data models for the weight-loss planning engine
// ABOUTME: Re-exports profile enums, the profile snapshot, and weight observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

/// Profile snapshot and the closed enums it is built from
pub mod profile;

/// Raw body-weight measurements
pub mod observation;

pub use observation::WeightObservation;
pub use profile::{ActivityLevel, Gender, Pace, UserProfile};
