// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lau Trie.
//!
//! Nodes are the building blocks of the trie. Each one stands for a single
//! character position of some stored word; the root is a node without a key.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Children of a node, keyed by the character of the edge leading to them.
pub(crate) type ChildMap = HashMap<char, TrieNode, FnvBuildHasher>;

/// A node in the Lau Trie.
///
/// Terminal nodes carry the complete word that ends at them.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// The character on the edge into this node, `None` only for the root
    pub key: Option<char>,

    /// Map of characters to child nodes
    pub children: ChildMap,

    /// Whether some inserted word ends exactly at this node
    pub terminal: bool,

    /// The stored word, present iff `terminal` is set
    pub value: Option<String>,
}

impl TrieNode {
    /// Creates a new keyless node, used for the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new node reached through the edge `key`.
    pub fn with_key(key: char) -> Self {
        Self {
            key: Some(key),
            children: ChildMap::default(),
            terminal: false,
            value: None,
        }
    }

    /// Returns the child for `ch`, creating it if it doesn't exist yet.
    pub fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        self.children
            .entry(ch)
            .or_insert_with(|| TrieNode::with_key(ch))
    }

    /// Follows `path` from this node, one character per edge.
    pub fn descendant(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(self, |node, ch| node.children.get(&ch))
    }

    /// Mutable counterpart of [`TrieNode::descendant`].
    pub fn descendant_mut(&mut self, path: &str) -> Option<&mut TrieNode> {
        path.chars()
            .try_fold(self, |node, ch| node.children.get_mut(&ch))
    }

    /// Marks this node as the end of `word`.
    ///
    /// Returns `true` if the node was not terminal before.
    pub fn mark_terminal(&mut self, word: &str) -> bool {
        let is_new = !self.terminal;
        self.terminal = true;
        if self.value.as_deref() != Some(word) {
            self.value = Some(word.to_owned());
        }
        is_new
    }

    /// Clears the terminal marker if this node stores exactly `word`.
    ///
    /// Returns `true` if the marker was cleared.
    pub fn clear_terminal(&mut self, word: &str) -> bool {
        if !self.terminal || self.value.as_deref() != Some(word) {
            return false;
        }
        self.terminal = false;
        self.value = None;
        true
    }

    /// The stored word, if this node is terminal.
    pub fn word(&self) -> Option<&str> {
        if self.terminal {
            self.value.as_deref()
        } else {
            None
        }
    }

    /// Children in ascending order of their edge character.
    pub fn sorted_children(&self) -> Vec<(char, &TrieNode)> {
        let mut children: Vec<_> = self.children.iter().map(|(ch, node)| (*ch, node)).collect();
        children.sort_unstable_by_key(|(ch, _)| *ch);
        children
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl Drop for TrieNode {
    // Iterative teardown: derived drop glue recurses once per trie level.
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
