// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for Lau Trie.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests of the trie using proptest
//! - Table-driven session parsing tests using test-case
//! - Shared fixtures and strategies

pub mod session_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
