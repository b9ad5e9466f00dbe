// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary error module.
//!
//! Errors raised while reading word lists from disk.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a dictionary file.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file does not exist.
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),

    /// The dictionary file exists but could not be read.
    #[error("Failed to read dictionary {path} at line {line}: {source}")]
    Read {
        /// The file being read
        path: PathBuf,
        /// 1-based line number where reading stopped
        line: usize,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// A line of a dictionary stream could not be read.
    #[error("Failed to read dictionary at line {line}: {source}")]
    Line {
        /// 1-based line number where reading stopped
        line: usize,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },
}

impl DictionaryError {
    /// Attaches the file being read to a line-level error.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            Self::Line { line, source } => Self::Read {
                path: path.to_path_buf(),
                line,
                source,
            },
            other => other,
        }
    }
}
