// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary configuration module.
//!
//! Word list sources loaded into the trie at startup and how their lines are
//! interpreted.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word list files, one word per line, loaded in order
    pub paths: Vec<PathBuf>,

    /// Whether to strip leading and trailing whitespace from each line
    pub trim: bool,

    /// Whether to skip lines that are empty (after trimming, if enabled)
    pub skip_blank: bool,

    /// Lines starting with this prefix are ignored; an empty string disables comments
    pub comment_prefix: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            trim: true,
            skip_blank: true,
            comment_prefix: "#".to_string(),
        }
    }
}

impl DictionaryConfig {
    /// The comment prefix, or `None` when comments are disabled.
    pub fn comment_prefix(&self) -> Option<&str> {
        if self.comment_prefix.is_empty() {
            None
        } else {
            Some(&self.comment_prefix)
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = self.paths.iter().find(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "Dictionary path cannot be empty: {path:?}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dictionary_config_is_valid() {
        assert!(DictionaryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_comment_prefix_disables_comments() {
        let config = DictionaryConfig {
            comment_prefix: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.comment_prefix(), None);
        assert_eq!(DictionaryConfig::default().comment_prefix(), Some("#"));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let config = DictionaryConfig {
            paths: vec![PathBuf::new()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
