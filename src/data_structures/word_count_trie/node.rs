// Copyright (c) 2025 Wordtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the word count trie.
//!
//! Every node owns its children directly, so the whole tree is dropped with
//! its root and no node is ever reachable from two parents.

/// Character stored in the root node. It is never compared against input.
pub(crate) const ROOT_SENTINEL: char = '\0';

/// A node in the word count trie.
///
/// `count == 0` marks a node that only lies on the path of longer words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Character this node represents on the path from the root
    pub character: char,

    /// Number of times the word ending here was inserted
    pub count: u64,

    /// Children in the order they were first created
    pub children: Vec<TrieNode>,
}

impl TrieNode {
    /// Creates a node for `character` with a zero count and no children.
    pub fn new(character: char) -> Self {
        Self {
            character,
            count: 0,
            children: Vec::new(),
        }
    }

    /// Creates the sentinel root node.
    pub fn root() -> Self {
        Self::new(ROOT_SENTINEL)
    }

    /// Whether a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.count > 0
    }

    /// Returns the child for `character`, if one exists.
    pub fn child(&self, character: char) -> Option<&TrieNode> {
        self.children.iter().find(|child| child.character == character)
    }

    /// Returns the child for `character`, appending a new one when missing.
    ///
    /// The boolean is `true` when the child had to be created.
    pub fn child_or_insert(&mut self, character: char) -> (&mut TrieNode, bool) {
        let existing = self
            .children
            .iter()
            .position(|child| child.character == character);

        match existing {
            Some(index) => (&mut self.children[index], false),
            None => {
                self.children.push(TrieNode::new(character));
                let last = self.children.len() - 1;
                (&mut self.children[last], true)
            }
        }
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}
