//! Linear-time construction from entries that are already sorted.

use compare::Compare;
use slab::Slab;
use std::cmp::Ordering::Less;
use std::vec;
use super::{Color, Link, Node, Tree};
use crate::error::{Error, Result};
use crate::policy::Policy;

impl<K, V, C> Tree<K, V, C> where C: Compare<K> {
    /// Builds a tree from entries in strictly ascending key order without any rebalancing.
    ///
    /// The result has the shape of a complete binary tree: every node is black except those
    /// on the deepest level below the root, which are red, keeping the black-height as small
    /// as the shape allows.
    pub fn from_sorted<I>(policy: Policy<K, C>, entries: I) -> Result<Self>
        where I: IntoIterator<Item = (K, V)> {

        let entries = sorted(&policy, entries)?;
        let mut tree = Tree::new(policy);
        tree.fill(entries);
        Ok(tree)
    }

    /// Adds entries in strictly ascending key order, building in linear time if the tree is
    /// empty and inserting one by one otherwise. Nothing is added if the entries are
    /// rejected.
    pub fn extend_sorted<I>(&mut self, entries: I) -> Result<()>
        where I: IntoIterator<Item = (K, V)> {

        let entries = sorted(&self.policy, entries)?;

        if self.is_empty() {
            self.fill(entries);
            self.mod_count += 1;
        } else {
            for (key, value) in entries { self.insert(key, value); }
        }

        Ok(())
    }

    fn fill(&mut self, entries: Vec<(K, V)>) {
        let len = entries.len();
        let red_level = red_level(len);

        self.nodes = Slab::with_capacity(len);
        self.root = self.build(&mut entries.into_iter(), 0, 0, len, red_level);

        tracing::debug!(len, ?red_level, "built tree from sorted entries");
    }

    // Builds the subtree holding entries `lo..hi`, consuming them from `entries` in order.
    fn build(&mut self, entries: &mut vec::IntoIter<(K, V)>, level: usize, lo: usize, hi: usize,
             red_level: Option<usize>) -> Link {

        if lo >= hi { return None; }

        let mid = lo + (hi - lo - 1) / 2;
        let left = self.build(entries, level + 1, lo, mid, red_level);

        let (key, value) = entries.next()?;
        let mut node = Node::new(key, value, None);
        node.color = if Some(level) == red_level { Color::Red } else { Color::Black };
        node.left = left;

        let id = self.nodes.insert(node);
        if let Some(left) = left { self.nodes[left].parent = Some(id); }

        let right = self.build(entries, level + 1, mid + 1, hi, red_level);
        self.nodes[id].right = right;
        if let Some(right) = right { self.nodes[right].parent = Some(id); }

        Some(id)
    }
}

// Collects the entries, checking each key against the policy and that the keys ascend.
fn sorted<K, V, C, I>(policy: &Policy<K, C>, entries: I) -> Result<Vec<(K, V)>>
    where C: Compare<K>, I: IntoIterator<Item = (K, V)> {

    let entries: Vec<(K, V)> = entries.into_iter().collect();

    for (key, _) in &entries { policy.admit(key)?; }

    if entries.windows(2).any(|pair| policy.compare(&pair[0].0, &pair[1].0) != Less) {
        return Err(Error::Unordered);
    }

    Ok(entries)
}

/// The depth, counting the root as zero, of the deepest level of a complete tree of `len`
/// nodes, whether or not it is full. Nodes at that depth are colored red. A lone root has no
/// red level.
fn red_level(len: usize) -> Option<usize> {
    if len < 2 { return None; }
    Some(len.ilog2() as usize)
}
