use compare::Compare;
use crate::error::{Error, Result};
use crate::node::Link;
use super::Shared;

/// A fail-fast iterator over a map's entries.
///
/// Acquire through [`TreeMap::iter`](struct.TreeMap.html#method.iter) or any of the other
/// iterating methods of maps and views. It yields copies of the entries, so the map may be
/// changed while the iterator is alive; if it is structurally changed other than through
/// [`remove`](#method.remove), the next call to `next` yields
/// `Err(Error::ConcurrentModification)` and the iterator ends.
///
/// # Examples
///
/// ```
/// let map: rbmap::TreeMap<_, _> = (1..=5).map(|k| (k, k * k)).collect();
/// let mut it = map.iter();
///
/// while let Some(entry) = it.next() {
///     if entry.unwrap().0 % 2 == 0 { it.remove().unwrap(); }
/// }
///
/// assert_eq!(map.keys().collect::<Result<Vec<_>, _>>(), Ok(vec![1, 3, 5]));
/// ```
pub struct Iter<K, V, C> where C: Compare<K> {
    tree: Shared<K, V, C>,
    next: Link,
    fence: Link,
    last: Link,
    expected: u64,
    descending: bool,
}

impl<K, V, C> Iter<K, V, C> where C: Compare<K> {
    pub(super) fn new(tree: Shared<K, V, C>, next: Link, fence: Link, descending: bool) -> Self {
        let expected = tree.borrow().mod_count();

        Iter {
            tree: tree,
            next: next,
            fence: fence,
            last: None,
            expected: expected,
            descending: descending,
        }
    }

    fn step<T, F>(&mut self, f: F) -> Option<Result<T>> where F: FnOnce(&K, &V) -> T {
        let tree = self.tree.borrow();
        let id = self.next.filter(|&id| Some(id) != self.fence)?;

        if tree.mod_count() != self.expected {
            tracing::debug!(expected = self.expected, actual = tree.mod_count(),
                            "concurrent modification detected");
            self.next = None;
            return Some(Err(Error::ConcurrentModification));
        }

        self.next = if self.descending { tree.predecessor(id) } else { tree.successor(id) };
        self.last = Some(id);

        let node = tree.node(id);
        Some(Ok(f(node.key(), node.value())))
    }

    /// Removes the entry most recently returned by `next` from the map and returns it.
    ///
    /// Returns `Error::IllegalState` if `next` has not returned an entry since the iterator
    /// was created or since the last call to `remove`, and
    /// `Error::ConcurrentModification` if the map was structurally changed behind the
    /// iterator's back. The iterator continues normally afterwards.
    pub fn remove(&mut self) -> Result<(K, V)> {
        let mut tree = self.tree.borrow_mut();
        let last = self.last.ok_or(Error::IllegalState)?;

        if tree.mod_count() != self.expected { return Err(Error::ConcurrentModification); }

        self.last = None;
        let removed = tree.delete(last);

        // `last` now holds the entry that lived in the relocated node
        if let Some(relocated) = removed.relocated {
            if self.next == Some(relocated) { self.next = Some(last); }
            if self.fence == Some(relocated) { self.fence = Some(last); }
        }

        self.expected = tree.mod_count();
        Ok((removed.key, removed.value))
    }
}

impl<K, V, C> Clone for Iter<K, V, C> where C: Compare<K> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree.clone(),
            next: self.next,
            fence: self.fence,
            last: self.last,
            expected: self.expected,
            descending: self.descending,
        }
    }
}

impl<K, V, C> Iterator for Iter<K, V, C> where K: Clone, V: Clone, C: Compare<K> {
    type Item = Result<(K, V)>;

    fn next(&mut self) -> Option<Result<(K, V)>> { self.step(|k, v| (k.clone(), v.clone())) }
}

/// A fail-fast iterator over a map's keys.
///
/// Acquire through [`TreeMap::keys`](struct.TreeMap.html#method.keys).
pub struct Keys<K, V, C>(pub(crate) Iter<K, V, C>) where C: Compare<K>;

impl<K, V, C> Keys<K, V, C> where C: Compare<K> {
    /// Removes the entry whose key was most recently returned by `next`, as
    /// [`Iter::remove`](struct.Iter.html#method.remove) does.
    pub fn remove(&mut self) -> Result<K> { self.0.remove().map(|e| e.0) }
}

impl<K, V, C> Clone for Keys<K, V, C> where C: Compare<K> {
    fn clone(&self) -> Self { Keys(self.0.clone()) }
}

impl<K, V, C> Iterator for Keys<K, V, C> where K: Clone, C: Compare<K> {
    type Item = Result<K>;
    fn next(&mut self) -> Option<Result<K>> { self.0.step(|k, _| k.clone()) }
}

/// A fail-fast iterator over a map's values.
///
/// Acquire through [`TreeMap::values`](struct.TreeMap.html#method.values).
pub struct Values<K, V, C>(pub(crate) Iter<K, V, C>) where C: Compare<K>;

impl<K, V, C> Values<K, V, C> where C: Compare<K> {
    /// Removes the entry whose value was most recently returned by `next`, as
    /// [`Iter::remove`](struct.Iter.html#method.remove) does.
    pub fn remove(&mut self) -> Result<V> { self.0.remove().map(|e| e.1) }
}

impl<K, V, C> Clone for Values<K, V, C> where C: Compare<K> {
    fn clone(&self) -> Self { Values(self.0.clone()) }
}

impl<K, V, C> Iterator for Values<K, V, C> where V: Clone, C: Compare<K> {
    type Item = Result<V>;
    fn next(&mut self) -> Option<Result<V>> { self.0.step(|_, v| v.clone()) }
}
