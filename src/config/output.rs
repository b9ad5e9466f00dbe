// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Output configuration module.

use super::ConfigResult;
use super::Validate;
use serde::{Deserialize, Serialize};

/// How command results are written.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text, one result per line
    #[default]
    Plain,
    /// One JSON value per command
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Format of command results
    pub format: OutputFormat,
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
