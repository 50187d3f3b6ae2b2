use slab::Slab;
use std::vec;
use super::{Link, Node, NodeId, Tree};

/// A borrowing in-order walk over part of a tree.
pub struct Iter<'a, K: 'a, V: 'a, C: 'a> {
    tree: &'a Tree<K, V, C>,
    next: Link,
    fence: Link,
    descending: bool,
}

impl<'a, K, V, C> Iter<'a, K, V, C> {
    pub fn new(tree: &'a Tree<K, V, C>, start: Link, fence: Link, descending: bool) -> Self {
        Iter { tree: tree, next: start, fence: fence, descending: descending }
    }
}

impl<'a, K, V, C> Clone for Iter<'a, K, V, C> {
    fn clone(&self) -> Self { Iter { ..*self } }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let id = self.next.filter(|&id| Some(id) != self.fence)?;
        let tree = self.tree;
        self.next = if self.descending { tree.predecessor(id) } else { tree.successor(id) };
        let node = tree.node(id);
        Some((&node.key, &node.value))
    }
}

/// An iterator that owns the entries taken out of a tree.
pub struct IntoIter<K, V> {
    order: vec::IntoIter<NodeId>,
    nodes: Slab<Node<K, V>>,
}

impl<K, V> IntoIter<K, V> {
    pub fn new(order: Vec<NodeId>, nodes: Slab<Node<K, V>>) -> Self {
        IntoIter { order: order.into_iter(), nodes: nodes }
    }

    fn take(&mut self, id: NodeId) -> (K, V) {
        let node = self.nodes.remove(id);
        (node.key, node.value)
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> { self.order.next().map(|id| self.take(id)) }

    fn size_hint(&self) -> (usize, Option<usize>) { self.order.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> { self.order.next_back().map(|id| self.take(id)) }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
