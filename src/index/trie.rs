// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character trie over an arena of nodes.
//!
//! Nodes live in one `Vec`, addressed by `u32` ids, with node 0 as the root.
//! Each node keeps its children as a `(char, id)` list sorted by `char`, so
//! a lookup costs one binary search per query character and a depth-first
//! walk yields words in code-point order.
//!
//! ```text
//! words: "to", "tea", "ten"
//!
//!   (0) ─t─▶ (1) ─e─▶ (3) ─a─▶ (4)*
//!             │          └─n─▶ (5)*
//!             └─o─▶ (2)*
//!
//!   * = terminal
//! ```

use std::borrow::Cow;

use crate::error::Result;
use crate::index::{Diagnostic, Diagnostics, IndexOptions, MembershipIndex};

const ROOT: u32 = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Sorted by char
    children: Vec<(char, u32)>,
    terminal: bool,
}

impl TrieNode {
    fn child(&self, ch: char) -> Option<u32> {
        self.children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|i| self.children[i].1)
    }
}

#[derive(Debug, Clone)]
pub struct CharTrie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for CharTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl CharTrie {
    pub const NAME: &'static str = "CharTrie";

    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Add a word during the build phase. Returns `false` if it was already
    /// present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = ROOT;
        for ch in word.chars() {
            current = match self.nodes[current as usize].child(ch) {
                Some(next) => next,
                None => self.push_child(current, ch),
            };
        }

        let node = &mut self.nodes[current as usize];
        if node.terminal {
            false
        } else {
            node.terminal = true;
            self.words += 1;
            true
        }
    }

    fn push_child(&mut self, parent: u32, ch: char) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(TrieNode::default());
        let children = &mut self.nodes[parent as usize].children;
        let slot = children.partition_point(|&(c, _)| c < ch);
        children.insert(slot, (ch, id));
        id
    }

    /// Nodes allocated, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether any stored word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    fn walk(&self, s: &str) -> Option<u32> {
        s.chars()
            .try_fold(ROOT, |node, ch| self.nodes[node as usize].child(ch))
    }
}

impl MembershipIndex for CharTrie {
    fn build_with<I>(words: I, _options: &IndexOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(&word.into());
        }
        log::trace!(
            "{}: {} words over {} nodes",
            Self::NAME,
            trie.words,
            trie.nodes.len()
        );
        Ok(trie)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn contains(&self, query: &str) -> bool {
        self.walk(query)
            .is_some_and(|node| self.nodes[node as usize].terminal)
    }

    fn size(&self) -> usize {
        self.words
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Cow<'_, str>> + '_> {
        Box::new(TrieWords::new(self))
    }

    fn diagnostics(&self) -> Option<&dyn Diagnostics> {
        Some(self)
    }
}

impl Diagnostics for CharTrie {
    fn metrics(&self) -> Vec<Diagnostic> {
        vec![
            Diagnostic::count("nodes", self.node_count()),
            Diagnostic::count("words", self.words),
        ]
    }
}

/// Lazy depth-first walk; each frame is `(node, next child position)`.
struct TrieWords<'a> {
    trie: &'a CharTrie,
    stack: Vec<(u32, usize)>,
    prefix: String,
    root_pending: bool,
}

impl<'a> TrieWords<'a> {
    fn new(trie: &'a CharTrie) -> Self {
        Self {
            trie,
            stack: vec![(ROOT, 0)],
            prefix: String::new(),
            root_pending: trie.nodes[ROOT as usize].terminal,
        }
    }
}

impl<'a> Iterator for TrieWords<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.root_pending {
            self.root_pending = false;
            return Some(Cow::Owned(String::new()));
        }

        loop {
            let (node, pos) = self.stack.last_mut()?;
            let children = &self.trie.nodes[*node as usize].children;

            if let Some(&(ch, child)) = children.get(*pos) {
                *pos += 1;
                self.prefix.push(ch);
                self.stack.push((child, 0));
                if self.trie.nodes[child as usize].terminal {
                    return Some(Cow::Owned(self.prefix.clone()));
                }
            } else {
                self.stack.pop();
                // The root frame has no char; popping it empties the stack.
                self.prefix.pop();
            }
        }
    }
}
