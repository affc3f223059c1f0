// ABOUTME: Output helpers for fitmind-cli
// ABOUTME: Prints command results to stdout as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use anyhow::Result;
use fitmind_engine::input::write_json;
use serde::Serialize;
use std::io;

/// Print a command result to stdout
pub fn emit<T: Serialize>(value: &T) -> Result<()> {
    write_json(io::stdout().lock(), value)
}
