//! Namespace tree and random builder
//!
//! A [`Node`] carries no kind tag. A node with children is a directory, a
//! node without is a file, and a file silently becomes a directory the
//! first time a later walk descends into it.
//!
//! The builder repeats random walks from the root. Each walk picks a target
//! depth in `[1, d]` and descends one level at a time: while the current
//! directory has room it tries a fresh random segment (inserting it when
//! unused, otherwise following the existing child of that name), and once
//! the directory is full it follows a uniformly chosen child. Every
//! insertion consumes one unit of the file budget; the budget is never
//! refunded when an inserted file later turns into a directory.

use indexmap::IndexMap;
use indexmap::map::Entry;
use rand::Rng;
use serde::Serialize;

use crate::config::GenConfig;
use crate::error::{Error, Result};
use crate::names::random_segment;

/// A directory or file in the generated namespace.
///
/// Children keep insertion order, which is the order they are serialized in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    children: IndexMap<String, Node>,
}

impl Node {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Children keyed by separator-prefixed segment, in insertion order.
    pub fn children(&self) -> &IndexMap<String, Node> {
        &self.children
    }

    /// Look up a child by segment (including its separator).
    pub fn child(&self, segment: &str) -> Option<&Node> {
        self.children.get(segment)
    }

    /// Whether this node currently has children.
    pub fn is_dir(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this node currently has no children.
    pub fn is_file(&self) -> bool {
        self.children.is_empty()
    }

    /// Return the child at `segment`, inserting an empty one if missing.
    pub fn insert(&mut self, segment: impl Into<String>) -> &mut Node {
        self.children.entry(segment.into()).or_default()
    }

    /// Structural statistics for the subtree below this node.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut stack: Vec<(&Node, usize)> = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            stats.max_width = stats.max_width.max(node.children.len());
            for child in node.children.values() {
                stats.nodes += 1;
                if child.is_dir() {
                    stats.directories += 1;
                } else {
                    stats.files += 1;
                }
                stats.max_depth = stats.max_depth.max(depth + 1);
                stack.push((child, depth + 1));
            }
        }
        stats
    }
}

/// Shape of a built tree, derived structurally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Nodes below the root.
    pub nodes: u64,
    /// Nodes with at least one child.
    pub directories: u64,
    /// Nodes with no children.
    pub files: u64,
    /// Deepest node, in segments from the root.
    pub max_depth: usize,
    /// Largest child count of any directory (root included).
    pub max_width: usize,
}

/// A fully built tree.
#[derive(Debug, Clone)]
pub struct Tree {
    root: Node,
    rounds: u64,
}

impl Tree {
    /// Grow a tree by random walks until `config.files` nodes are inserted.
    ///
    /// Fails with [`Error::InvalidConfig`] when a bound is zero (see
    /// [`GenConfig::check_bounds`]). Capacity is not checked here: with a
    /// request beyond [`feasibility::max_files`](crate::feasibility::max_files)
    /// or a small naming space this may never return.
    pub fn build<R: Rng + ?Sized>(config: &GenConfig, rng: &mut R) -> Result<Self> {
        config.check_bounds()?;
        let mut root = Node::new();
        let mut remaining = config.files;
        let mut rounds: u64 = 0;

        while remaining > 0 {
            rounds += 1;
            let target_depth = rng.random_range(1..=config.depth);
            let mut cur = &mut root;
            let mut cur_depth = 0;

            while cur_depth < target_depth && remaining > 0 {
                let len = cur.children.len();
                cur = if len < config.width {
                    let segment = random_segment(rng, config.max_name_len, config.exact_length);
                    match cur.children.entry(segment) {
                        Entry::Occupied(entry) => entry.into_mut(),
                        Entry::Vacant(entry) => {
                            remaining -= 1;
                            entry.insert(Node::new())
                        }
                    }
                } else {
                    let index = rng.random_range(0..len);
                    &mut cur.children[index]
                };
                cur_depth += 1;
            }
        }

        tracing::debug!(files = config.files, rounds, "tree built");
        Ok(Self { root, rounds })
    }

    /// Root node. The root itself has no path and is never emitted.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of random walks taken.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Structural statistics.
    pub fn stats(&self) -> TreeStats {
        self.root.stats()
    }

    /// Consume the tree and return its root.
    pub fn into_root(self) -> Node {
        self.root
    }
}
