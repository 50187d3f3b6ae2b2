//! The red-black engine.
//!
//! Nodes live in a slab and refer to each other by index, so parent links are plain
//! handles rather than owning pointers.

mod build;
mod iter;


use compare::Compare;
use slab::Slab;
use std::cmp::Ordering::{self, *};
use std::iter::successors;
use std::mem;
use crate::policy::Policy;

pub use self::iter::{IntoIter, Iter};

/// A handle to a node in a tree's arena.
pub type NodeId = usize;

/// A possibly absent child or parent. `None` is the black leaf position.
pub type Link = Option<NodeId>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone)]
pub struct Node<K, V> {
    key: K,
    value: V,
    color: Color,
    parent: Link,
    left: Link,
    right: Link,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Link) -> Self {
        Node { key: key, value: value, color: Color::Red, parent: parent, left: None, right: None }
    }

    pub fn key(&self) -> &K { &self.key }

    pub fn value(&self) -> &V { &self.value }
}

/// An entry unlinked by [`Tree::delete`].
pub struct Removed<K, V> {
    pub key: K,
    pub value: V,
    /// The node whose entry was moved into the deleted handle, if the deleted node had two
    /// children. That node no longer exists.
    pub relocated: Link,
}

/// A red-black tree over an arena of nodes.
#[derive(Clone)]
pub struct Tree<K, V, C> {
    nodes: Slab<Node<K, V>>,
    root: Link,
    mod_count: u64,
    policy: Policy<K, C>,
}

impl<K, V, C> Tree<K, V, C> {
    pub fn new(policy: Policy<K, C>) -> Self {
        Tree { nodes: Slab::new(), root: None, mod_count: 0, policy: policy }
    }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.root.is_none() }

    pub fn policy(&self) -> &Policy<K, C> { &self.policy }

    /// The number of structural modifications made so far.
    pub fn mod_count(&self) -> u64 { self.mod_count }

    pub fn node(&self, id: NodeId) -> &Node<K, V> { &self.nodes[id] }

    pub fn first(&self) -> Link { self.extremum::<Left>(self.root) }

    pub fn last(&self) -> Link { self.extremum::<Right>(self.root) }

    pub fn successor(&self, id: NodeId) -> Link { self.step::<Right>(id) }

    pub fn predecessor(&self, id: NodeId) -> Link { self.step::<Left>(id) }

    /// Returns an iterator over the entries from `start` up to, but excluding, `fence`.
    pub fn walk(&self, start: Link, fence: Link, descending: bool) -> Iter<'_, K, V, C> {
        Iter::new(self, start, fence, descending)
    }

    pub fn iter(&self) -> Iter<'_, K, V, C> { self.walk(self.first(), None, false) }

    pub fn clear(&mut self) {
        tracing::trace!(len = self.len(), "clearing tree");
        self.nodes.clear();
        self.root = None;
        self.mod_count += 1;
    }

    /// Moves every entry out of the tree, leaving it empty.
    pub fn take_entries(&mut self) -> IntoIter<K, V> {
        let order: Vec<NodeId> = successors(self.first(), |&id| self.successor(id)).collect();
        self.root = None;
        self.mod_count += 1;
        IntoIter::new(order, mem::take(&mut self.nodes))
    }

    fn extremum<D: Dir>(&self, from: Link) -> Link {
        let mut id = from?;
        while let Some(next) = D::link(&self.nodes[id]) { id = next; }
        Some(id)
    }

    // The in-order neighbor of `id` in direction `D`: the nearest node of the `D` subtree,
    // or else the first ancestor reached from its opposite side.
    fn step<D: Dir>(&self, id: NodeId) -> Link {
        if let Some(child) = D::link(&self.nodes[id]) {
            return self.extremum::<D::Opposite>(Some(child));
        }

        let mut child = id;
        let mut parent = self.nodes[id].parent;

        while let Some(p) = parent {
            if D::link(&self.nodes[p]) != Some(child) { break; }
            child = p;
            parent = self.nodes[p].parent;
        }

        parent
    }

    fn color(&self, link: Link) -> Color { link.map_or(Color::Black, |id| self.nodes[id].color) }

    fn set_color(&mut self, link: Link, color: Color) {
        if let Some(id) = link { self.nodes[id].color = color; }
    }

    fn parent(&self, link: Link) -> Link { link.and_then(|id| self.nodes[id].parent) }

    fn child<D: Dir>(&self, link: Link) -> Link { link.and_then(|id| D::link(&self.nodes[id])) }

    // Points whichever link referred to `old` (the root, or one of `parent`'s children) at
    // `new`.
    fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.nodes[parent];
                if node.left == Some(old) { node.left = new; } else { node.right = new; }
            }
        }
    }

    // Rotates the subtree at `p` towards `D`: `p`'s opposite child takes its place and `p`
    // becomes that child's `D` child.
    fn rotate<D: Dir>(&mut self, p: Link) {
        let Some(p) = p else { return };
        let Some(r) = <D::Opposite as Dir>::link(&self.nodes[p]) else { return };

        let inner = D::link(&self.nodes[r]);
        *<D::Opposite as Dir>::link_mut(&mut self.nodes[p]) = inner;
        if let Some(inner) = inner { self.nodes[inner].parent = Some(p); }

        let grandparent = self.nodes[p].parent;
        self.nodes[r].parent = grandparent;
        self.replace_child(grandparent, p, Some(r));

        *D::link_mut(&mut self.nodes[r]) = Some(p);
        self.nodes[p].parent = Some(r);
    }

    /// Unlinks the node `id` and returns its entry.
    ///
    /// A node with two children is not unlinked itself: it takes over its successor's
    /// entry and the successor's node is removed instead, as reported by
    /// [`Removed::relocated`].
    pub fn delete(&mut self, id: NodeId) -> Removed<K, V> {
        let mut target = id;
        let mut relocated = None;

        if self.nodes[id].left.is_some() && self.nodes[id].right.is_some() {
            if let Some(succ) = self.successor(id) {
                if let Some((node, next)) = self.nodes.get2_mut(id, succ) {
                    mem::swap(&mut node.key, &mut next.key);
                    mem::swap(&mut node.value, &mut next.value);
                }
                target = succ;
                relocated = Some(succ);
            }
        }

        let node = &self.nodes[target];
        let (parent, color) = (node.parent, node.color);

        match node.left.or(node.right) {
            Some(replacement) => {
                self.nodes[replacement].parent = parent;
                self.replace_child(parent, target, Some(replacement));
                if color == Color::Black { self.fix_after_remove(Some(replacement)); }
            }
            None if parent.is_none() => self.root = None,
            None => {
                // the node stands in for its own empty replacement until fixed up
                if color == Color::Black { self.fix_after_remove(Some(target)); }
                if let Some(parent) = self.nodes[target].parent {
                    self.replace_child(Some(parent), target, None);
                }
            }
        }

        self.mod_count += 1;
        let node = self.nodes.remove(target);
        Removed { key: node.key, value: node.value, relocated: relocated }
    }

    fn fix_after_insert(&mut self, id: NodeId) {
        let mut x = Some(id);

        while x != self.root && self.color(self.parent(x)) == Color::Red {
            let grandparent = self.parent(self.parent(x));
            x = if self.parent(x) == self.child::<Left>(grandparent) {
                self.fix_insert::<Left>(x)
            } else {
                self.fix_insert::<Right>(x)
            };
        }

        self.set_color(self.root, Color::Black);
    }

    // One insertion fixup step for a red `x` whose red parent is the `D` child of its
    // grandparent. Returns the node to continue from.
    fn fix_insert<D: Dir>(&mut self, mut x: Link) -> Link {
        let uncle = self.child::<D::Opposite>(self.parent(self.parent(x)));

        if self.color(uncle) == Color::Red {
            self.set_color(self.parent(x), Color::Black);
            self.set_color(uncle, Color::Black);
            let grandparent = self.parent(self.parent(x));
            self.set_color(grandparent, Color::Red);
            return grandparent;
        }

        if x == self.child::<D::Opposite>(self.parent(x)) {
            x = self.parent(x);
            self.rotate::<D>(x);
        }

        let parent = self.parent(x);
        self.set_color(parent, Color::Black);
        let grandparent = self.parent(parent);
        self.set_color(grandparent, Color::Red);
        self.rotate::<D::Opposite>(grandparent);
        x
    }

    fn fix_after_remove(&mut self, mut x: Link) {
        while let Some(id) = x {
            if Some(id) == self.root || self.color(x) == Color::Red { break; }

            x = if x == self.child::<Left>(self.parent(x)) {
                self.fix_remove::<Left>(x)
            } else {
                self.fix_remove::<Right>(x)
            };
        }

        self.set_color(x, Color::Black);
    }

    // One deletion fixup step for a doubly black `x` that is the `D` child of its parent.
    // Returns the node still carrying the deficit, or the root once it is absorbed.
    fn fix_remove<D: Dir>(&mut self, x: Link) -> Link {
        let mut sibling = self.child::<D::Opposite>(self.parent(x));

        if self.color(sibling) == Color::Red {
            self.set_color(sibling, Color::Black);
            self.set_color(self.parent(x), Color::Red);
            self.rotate::<D>(self.parent(x));
            sibling = self.child::<D::Opposite>(self.parent(x));
        }

        let near = self.child::<D>(sibling);
        let far = self.child::<D::Opposite>(sibling);

        if self.color(near) == Color::Black && self.color(far) == Color::Black {
            self.set_color(sibling, Color::Red);
            return self.parent(x);
        }

        if self.color(far) == Color::Black {
            self.set_color(near, Color::Black);
            self.set_color(sibling, Color::Red);
            self.rotate::<D::Opposite>(sibling);
            sibling = self.child::<D::Opposite>(self.parent(x));
        }

        self.set_color(sibling, self.color(self.parent(x)));
        self.set_color(self.parent(x), Color::Black);
        self.set_color(self.child::<D::Opposite>(sibling), Color::Black);
        self.rotate::<D>(self.parent(x));
        self.root
    }
}

impl<K, V, C> Tree<K, V, C> where C: Compare<K> {
    /// Inserts an entry, returning the previous value if the key was already present.
    ///
    /// Replacing a value is not a structural modification.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = None;
        let mut order = Equal;
        let mut link = self.root;

        while let Some(id) = link {
            order = self.policy.compare(&key, &self.nodes[id].key);
            link = match order {
                Less => self.nodes[id].left,
                Greater => self.nodes[id].right,
                Equal => return Some(mem::replace(&mut self.nodes[id].value, value)),
            };
            parent = Some(id);
        }

        let id = self.nodes.insert(Node::new(key, value, parent));

        match parent {
            None => self.root = Some(id),
            Some(p) if order == Less => self.nodes[p].left = Some(id),
            Some(p) => self.nodes[p].right = Some(id),
        }

        self.fix_after_insert(id);
        self.mod_count += 1;
        None
    }
}

impl<K, V, C> Tree<K, V, C> {
    pub fn value_mut(&mut self, id: NodeId) -> &mut V { &mut self.nodes[id].value }

    pub fn find<Q: ?Sized>(&self, key: &Q) -> Link where C: Compare<Q, K> {
        let mut link = self.root;

        while let Some(id) = link {
            let node = &self.nodes[id];
            link = match self.policy.compare(key, &node.key) {
                Equal => return Some(id),
                Less => node.left,
                Greater => node.right,
            };
        }

        None
    }

    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        self.find(key).map(|id| {
            let removed = self.delete(id);
            (removed.key, removed.value)
        })
    }

    /// The greatest key less than or equal to `key`.
    pub fn floor<Q: ?Sized>(&self, key: &Q) -> Link where C: Compare<Q, K> {
        self.closest::<Left, Q>(key, true)
    }

    /// The greatest key strictly less than `key`.
    pub fn lower<Q: ?Sized>(&self, key: &Q) -> Link where C: Compare<Q, K> {
        self.closest::<Left, Q>(key, false)
    }

    /// The least key greater than or equal to `key`.
    pub fn ceiling<Q: ?Sized>(&self, key: &Q) -> Link where C: Compare<Q, K> {
        self.closest::<Right, Q>(key, true)
    }

    /// The least key strictly greater than `key`.
    pub fn higher<Q: ?Sized>(&self, key: &Q) -> Link where C: Compare<Q, K> {
        self.closest::<Right, Q>(key, false)
    }

    // The node nearest to `key` on its `D` side, remembering the best candidate seen on
    // the way down.
    fn closest<D: Dir, Q: ?Sized>(&self, key: &Q, inclusive: bool) -> Link
        where C: Compare<Q, K> {

        let mut link = self.root;
        let mut best = None;

        while let Some(id) = link {
            let node = &self.nodes[id];
            link = match self.policy.compare(key, &node.key) {
                Equal if inclusive => return Some(id),
                Equal => D::link(node),
                order if order == D::toward() => D::link(node),
                _ => {
                    best = Some(id);
                    <D::Opposite as Dir>::link(node)
                }
            };
        }

        best
    }
}

/// A side of a node. Algorithms are written once against `Dir` and mirrored through
/// `Opposite`.
pub trait Dir {
    type Opposite: Dir<Opposite = Self>;

    /// The comparison of a searched key with a node's key that leads into this side.
    fn toward() -> Ordering;

    fn link<K, V>(node: &Node<K, V>) -> Link;
    fn link_mut<K, V>(node: &mut Node<K, V>) -> &mut Link;
}

#[allow(unused)]
pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn toward() -> Ordering { Less }

    fn link<K, V>(node: &Node<K, V>) -> Link { node.left }
    fn link_mut<K, V>(node: &mut Node<K, V>) -> &mut Link { &mut node.left }
}

#[allow(unused)]
pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn toward() -> Ordering { Greater }

    fn link<K, V>(node: &Node<K, V>) -> Link { node.right }
    fn link_mut<K, V>(node: &mut Node<K, V>) -> &mut Link { &mut node.right }
}
