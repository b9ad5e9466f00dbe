// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for Lau Trie.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Plain owned trees, no shared ownership or interior mutability
//! - No error returns for "not found" outcomes

pub mod lau_trie;

// Re-export common data structures
pub use lau_trie::LauTrie;
