//! Prefix trie over the known multi-word expressions
//!
//! Nodes live in one contiguous vector and refer to their children by index,
//! so lookups walk at most one node per character of the query. The index is
//! built once and never mutated afterwards, which makes it safe to share
//! between threads by plain reference or `Arc`.

use std::collections::HashMap;

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Whether this node marks the end of an entry
    is_end: bool,
}

/// Immutable set of multi-word strings with prefix queries
///
/// Entries are stored exactly as supplied: case folding, if any, is the
/// responsibility of whoever produced the word list.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    /// All nodes in contiguous storage, root at index 0
    nodes: Vec<TrieNode>,
    /// Number of distinct entries
    len: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }
}

impl PrefixIndex {
    /// Build an index from a collection of entries
    ///
    /// Empty strings are ignored and duplicates are stored once.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry.as_ref());
        }
        index
    }

    /// An index with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    fn insert(&mut self, entry: &str) {
        if entry.is_empty() {
            return;
        }

        let mut current_idx = 0u32;

        for ch in entry.chars() {
            let node = &self.nodes[current_idx as usize];
            let next_idx = if let Some(&child_idx) = node.children.get(&ch) {
                child_idx
            } else {
                let new_idx = self.nodes.len() as u32;
                self.nodes.push(TrieNode::default());
                self.nodes[current_idx as usize]
                    .children
                    .insert(ch, new_idx);
                new_idx
            };

            current_idx = next_idx;
        }

        let node = &mut self.nodes[current_idx as usize];
        if !node.is_end {
            node.is_end = true;
            self.len += 1;
        }
    }

    /// Follow `key` from the root, returning the node it ends on
    fn walk(&self, key: &str) -> Option<&TrieNode> {
        let mut current_idx = 0u32;

        for ch in key.chars() {
            let node = &self.nodes[current_idx as usize];
            current_idx = *node.children.get(&ch)?;
        }

        Some(&self.nodes[current_idx as usize])
    }

    /// Exact membership test
    pub fn contains(&self, key: &str) -> bool {
        self.walk(key).is_some_and(|node| node.is_end)
    }

    /// True if at least one entry starts with `key`
    ///
    /// Every node of the trie lies on the path of some entry, so reaching a
    /// node is enough. The empty key is a prefix of any entry.
    pub fn has_prefix(&self, key: &str) -> bool {
        if key.is_empty() {
            return !self.is_empty();
        }
        self.walk(key).is_some()
    }

    /// Byte length of the longest entry that `text` starts with
    ///
    /// Walks the trie once, stopping as soon as the consumed text is no
    /// longer a prefix of any entry or `text` is exhausted.
    pub fn longest_match(&self, text: &str) -> Option<usize> {
        let mut current_idx = 0u32;
        let mut best = None;

        for (offset, ch) in text.char_indices() {
            let node = &self.nodes[current_idx as usize];
            match node.children.get(&ch) {
                Some(&next_idx) => current_idx = next_idx,
                None => break,
            }
            if self.nodes[current_idx as usize].is_end {
                best = Some(offset + ch.len_utf8());
            }
        }

        best
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
