// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Trie Library
//!
//! A prefix tree over `char` sequences with exact lookup, sorted prefix
//! search and non-pruning deletion, plus the pieces needed to drive it from
//! the command line: configuration, dictionary loading and a line-oriented
//! command session.
//!
//! # Architecture
//!
//! - [`data_structures::lau_trie`] holds the trie itself and never fails
//! - [`dictionary`] fills a trie from word list files
//! - [`session`] parses commands and writes their results
//! - [`config`] and [`error`] are shared by the outer layers

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::LauTrie;

/// Version information for Lau Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
