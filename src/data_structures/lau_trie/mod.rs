// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Trie Implementation
//!
//! A prefix tree over `char` sequences supporting exact lookup, sorted
//! prefix search and deletion of stored words.
//!
//! Deletion only clears the terminal marker of a word; the nodes along its
//! path stay in place so that re-inserting the word, or any word sharing
//! the path, allocates nothing.
//!
//! # Example
//!
//! ```
//! use lau_trie_lib::data_structures::lau_trie::LauTrie;
//!
//! let mut trie = LauTrie::new();
//! trie.insert("an");
//! trie.insert("anna");
//! trie.insert("annabelle");
//!
//! assert!(trie.exists("anna"));
//! assert_eq!(trie.search("an"), vec!["an", "anna", "annabelle"]);
//!
//! assert!(trie.delete("an"));
//! assert!(!trie.exists("an"));
//! assert!(trie.exists("anna"));
//! ```

mod node;

use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

use node::TrieNode;

/// Lau Trie stores words along paths of single-character edges.
///
/// Key features:
/// * Exact membership checks that distinguish stored words from mere prefixes
/// * Prefix search returning every stored word under a prefix, sorted ascending
/// * Non-pruning deletion; the path of a deleted word is kept for reuse
/// * Level-order rendering through [`Display`] for debugging
///
/// The empty string is a valid word: inserting it marks the root itself as
/// terminal. [`LauTrie::search`] never reports it, since an empty prefix
/// matches nothing.
#[derive(Debug, Default)]
pub struct LauTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of terminal nodes
    len: usize,
}

impl LauTrie {
    /// Creates a new empty `LauTrie` holding only the root node.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the path are created; existing ones are reused.
    /// Inserting a word that is already stored leaves the trie unchanged.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    pub fn insert<S>(&mut self, word: S)
    where
        S: AsRef<str>,
    {
        let word = word.as_ref();

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }

        if node.mark_terminal(word) {
            self.len += 1;
            tracing::trace!(word, "inserted word");
        }
    }

    /// Checks if a word is stored in the trie.
    ///
    /// A path that exists only as the prefix of longer words does not count.
    ///
    /// # Returns
    ///
    /// `true` if `word` was inserted and not deleted since, `false` otherwise.
    pub fn exists<S>(&self, word: S) -> bool
    where
        S: AsRef<str>,
    {
        self.root
            .descendant(word.as_ref())
            .is_some_and(|node| node.terminal)
    }

    /// Finds all stored words starting with `prefix`.
    ///
    /// The prefix itself is included when it is a stored word. An empty
    /// prefix yields no results.
    ///
    /// # Returns
    ///
    /// The matching words in ascending order, each appearing once. Empty if
    /// nothing matches.
    pub fn search<S>(&self, prefix: S) -> Vec<String>
    where
        S: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            return Vec::new();
        }

        let Some(start) = self.root.descendant(prefix) else {
            return Vec::new();
        };

        // Depth-first over the subtree; the sort below fixes the order
        let mut matches = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            stack.extend(node.children.values());

            if let Some(word) = node.word() {
                matches.push(word.to_owned());
            }
        }

        matches.sort_unstable();
        matches
    }

    /// Deletes a word from the trie.
    ///
    /// Only the terminal marker and stored value are cleared. Nodes are
    /// never removed, and other words sharing the path are unaffected.
    ///
    /// # Returns
    ///
    /// `true` if `word` was stored and is now deleted, `false` if it was not
    /// stored.
    pub fn delete<S>(&mut self, word: S) -> bool
    where
        S: AsRef<str>,
    {
        let word = word.as_ref();

        let removed = self
            .root
            .descendant_mut(word)
            .is_some_and(|node| node.clear_terminal(word));

        if removed {
            self.len -= 1;
            tracing::trace!(word, "deleted word");
        }
        removed
    }

    /// Returns the number of words stored in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie stores no words.
    ///
    /// Nodes left behind by deleted words don't count.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the trie, the root included.
    ///
    /// This walks the whole structure, so it is an O(n) operation.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Removes every word and node, leaving only a fresh root.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }
}

impl<S> FromIterator<S> for LauTrie
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<S> Extend<S> for LauTrie
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl Display for LauTrie {
    /// Writes the keys of the trie in level order.
    ///
    /// Each key is followed by its terminal marker in parentheses, `*` for
    /// terminal nodes and nothing otherwise. Levels are separated by line
    /// breaks and siblings appear in ascending order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut queue: VecDeque<&TrieNode> = VecDeque::new();
        queue.push_back(&self.root);

        while !queue.is_empty() {
            for _ in 0..queue.len() {
                let Some(node) = queue.pop_front() else {
                    break;
                };
                for (key, child) in node.sorted_children() {
                    let marker = if child.terminal { "*" } else { "" };
                    write!(f, "{key}({marker}) ")?;
                    if !child.children.is_empty() {
                        queue.push_back(child);
                    }
                }
            }
            if !queue.is_empty() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
