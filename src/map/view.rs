//! Live views of a key range of a map.

use compare::Compare;
use std::cmp::Ordering::*;
use std::fmt::{self, Debug};
use std::ops::Bound::{self, *};
use crate::error::{Error, Result};
use crate::node::{Link, Tree};
use super::{Iter, Keys, Shared, Values, bound, cloned_entry, cloned_key};

/// The bounds of a view, in the tree's own order, and the direction it is seen in.
pub struct Window<K> {
    lo: Bound<K>,
    hi: Bound<K>,
    descending: bool,
}

impl<K> Window<K> {
    pub fn full() -> Self { Window::new(Unbounded, Unbounded, false) }

    pub fn new(lo: Bound<K>, hi: Bound<K>, descending: bool) -> Self {
        Window { lo: lo, hi: hi, descending: descending }
    }

    fn too_low<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> bool
        where C: Compare<Q, K> {

        match self.lo {
            Unbounded => false,
            Included(ref lo) => tree.policy().compare(key, lo) == Less,
            Excluded(ref lo) => tree.policy().compare(key, lo) != Greater,
        }
    }

    fn too_high<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> bool
        where C: Compare<Q, K> {

        match self.hi {
            Unbounded => false,
            Included(ref hi) => tree.policy().compare(key, hi) == Greater,
            Excluded(ref hi) => tree.policy().compare(key, hi) != Less,
        }
    }

    pub fn contains<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> bool
        where C: Compare<Q, K> {

        !self.too_low(tree, key) && !self.too_high(tree, key)
    }

    // Like `contains`, but treats both bounds as inclusive.
    fn contains_closed<V, C>(&self, tree: &Tree<K, V, C>, key: &K) -> bool where C: Compare<K> {
        let above = match self.lo {
            Unbounded => true,
            Included(ref lo) | Excluded(ref lo) => tree.policy().compare(key, lo) != Less,
        };

        let below = match self.hi {
            Unbounded => true,
            Included(ref hi) | Excluded(ref hi) => tree.policy().compare(key, hi) != Greater,
        };

        above && below
    }

    // Whether `bound` may bound a view nested in this one.
    fn admits<V, C>(&self, tree: &Tree<K, V, C>, bound: &Bound<K>) -> bool where C: Compare<K> {
        match *bound {
            Unbounded => true,
            Included(ref key) => self.contains(tree, key),
            Excluded(ref key) => self.contains_closed(tree, key),
        }
    }

    /// Narrows the window to `lo..hi`, given in the tree's order. An unbounded end keeps the
    /// current bound.
    pub fn restrict<V, C>(&self, tree: &Tree<K, V, C>, lo: Bound<K>, hi: Bound<K>)
        -> Result<Window<K>> where K: Clone, C: Compare<K> {

        if !self.admits(tree, &lo) || !self.admits(tree, &hi) { return Err(Error::OutOfBounds); }

        if let (Included(l) | Excluded(l), Included(h) | Excluded(h)) = (&lo, &hi) {
            if tree.policy().compare(l, h) == Greater { return Err(Error::OutOfBounds); }
        }

        let lo = match lo { Unbounded => self.lo.clone(), lo => lo };
        let hi = match hi { Unbounded => self.hi.clone(), hi => hi };
        Ok(Window::new(lo, hi, self.descending))
    }

    /// Narrows the window to keys from `from` to `to` in the view's direction.
    pub fn restrict_relative<V, C>(&self, tree: &Tree<K, V, C>, from: Bound<K>, to: Bound<K>)
        -> Result<Window<K>> where K: Clone, C: Compare<K> {

        if self.descending { self.restrict(tree, to, from) } else { self.restrict(tree, from, to) }
    }

    /// The same window seen in the opposite direction.
    pub fn reversed(&self) -> Window<K> where K: Clone {
        Window::new(self.lo.clone(), self.hi.clone(), !self.descending)
    }

    fn below_hi<V, C>(&self, tree: &Tree<K, V, C>, link: Link) -> Link where C: Compare<K> {
        link.filter(|&id| !self.too_high(tree, tree.node(id).key()))
    }

    fn above_lo<V, C>(&self, tree: &Tree<K, V, C>, link: Link) -> Link where C: Compare<K> {
        link.filter(|&id| !self.too_low(tree, tree.node(id).key()))
    }

    fn lowest<V, C>(&self, tree: &Tree<K, V, C>) -> Link where C: Compare<K> {
        let link = match self.lo {
            Unbounded => tree.first(),
            Included(ref lo) => tree.ceiling(lo),
            Excluded(ref lo) => tree.higher(lo),
        };

        self.below_hi(tree, link)
    }

    fn highest<V, C>(&self, tree: &Tree<K, V, C>) -> Link where C: Compare<K> {
        let link = match self.hi {
            Unbounded => tree.last(),
            Included(ref hi) => tree.floor(hi),
            Excluded(ref hi) => tree.lower(hi),
        };

        self.above_lo(tree, link)
    }

    fn abs_ceiling<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> Link
        where C: Compare<K> + Compare<Q, K> {

        if self.too_low(tree, key) { return self.lowest(tree); }
        self.below_hi(tree, tree.ceiling(key))
    }

    fn abs_higher<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> Link
        where C: Compare<K> + Compare<Q, K> {

        if self.too_low(tree, key) { return self.lowest(tree); }
        self.below_hi(tree, tree.higher(key))
    }

    fn abs_floor<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> Link
        where C: Compare<K> + Compare<Q, K> {

        if self.too_high(tree, key) { return self.highest(tree); }
        self.above_lo(tree, tree.floor(key))
    }

    fn abs_lower<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> Link
        where C: Compare<K> + Compare<Q, K> {

        if self.too_high(tree, key) { return self.highest(tree); }
        self.above_lo(tree, tree.lower(key))
    }

    pub fn first<V, C>(&self, tree: &Tree<K, V, C>) -> Link where C: Compare<K> {
        if self.descending { self.highest(tree) } else { self.lowest(tree) }
    }

    pub fn last<V, C>(&self, tree: &Tree<K, V, C>) -> Link where C: Compare<K> {
        if self.descending { self.lowest(tree) } else { self.highest(tree) }
    }

    pub fn ceiling<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> Link
        where C: Compare<K> + Compare<Q, K> {

        if self.descending { self.abs_floor(tree, key) } else { self.abs_ceiling(tree, key) }
    }

    pub fn higher<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> Link
        where C: Compare<K> + Compare<Q, K> {

        if self.descending { self.abs_lower(tree, key) } else { self.abs_higher(tree, key) }
    }

    pub fn floor<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> Link
        where C: Compare<K> + Compare<Q, K> {

        if self.descending { self.abs_ceiling(tree, key) } else { self.abs_floor(tree, key) }
    }

    pub fn lower<Q: ?Sized, V, C>(&self, tree: &Tree<K, V, C>, key: &Q) -> Link
        where C: Compare<K> + Compare<Q, K> {

        if self.descending { self.abs_higher(tree, key) } else { self.abs_lower(tree, key) }
    }

    /// The node to start a walk from, the first node past the window in that direction, and
    /// whether the walk descends in the tree's order.
    pub fn span<V, C>(&self, tree: &Tree<K, V, C>, reverse: bool) -> (Link, Link, bool)
        where C: Compare<K> {

        if self.descending != reverse {
            let fence = match self.lo {
                Unbounded => None,
                Included(ref lo) => tree.lower(lo),
                Excluded(ref lo) => tree.floor(lo),
            };

            (self.highest(tree), fence, true)
        } else {
            let fence = match self.hi {
                Unbounded => None,
                Included(ref hi) => tree.higher(hi),
                Excluded(ref hi) => tree.ceiling(hi),
            };

            (self.lowest(tree), fence, false)
        }
    }
}

impl<K> Clone for Window<K> where K: Clone {
    fn clone(&self) -> Self { Window::new(self.lo.clone(), self.hi.clone(), self.descending) }
}

/// A live view of the entries of a [`TreeMap`](struct.TreeMap.html) whose keys lie in a
/// range, possibly seen in descending order.
///
/// A view shares the map's tree: it sees every later change to the map, and changes made
/// through it are seen by the map. In a descending view, `first` and `last`, `floor` and
/// `ceiling`, and `lower` and `higher` trade places, and ranges are given from the view's
/// greater key to its lesser one.
///
/// Cloning a view yields another handle to the same map.
///
/// # Examples
///
/// ```
/// let map: rbmap::TreeMap<_, _> = (1..=10).map(|k| (k, k * 10)).collect();
/// let view = map.sub_map(3, true, 8, false).unwrap().descending_map();
///
/// assert_eq!(view.first_entry(), Some((7, 70)));
/// assert_eq!(view.last_entry(), Some((3, 30)));
/// assert_eq!(view.higher_key(&5), Some(4));
/// assert_eq!(view.floor_key(&0), Some(3));
/// ```
pub struct SubMap<K, V, C> where C: Compare<K> {
    tree: Shared<K, V, C>,
    window: Window<K>,
}

impl<K, V, C> SubMap<K, V, C> where C: Compare<K> {
    pub(super) fn new(tree: Shared<K, V, C>, window: Window<K>) -> Self {
        SubMap { tree: tree, window: window }
    }

    /// Returns the number of entries in the view.
    ///
    /// This walks the view's entries.
    pub fn len(&self) -> usize {
        let tree = self.tree.borrow();
        let (start, fence, descending) = self.window.span(&tree, false);
        tree.walk(start, fence, descending).count()
    }

    /// Checks if the view is empty.
    pub fn is_empty(&self) -> bool { self.window.first(&self.tree.borrow()).is_none() }

    // Fails with `Error::OutOfBounds` if the key lies outside the window.
    fn check<Q: ?Sized>(&self, tree: &Tree<K, V, C>, key: &Q) -> Result<()>
        where C: Compare<Q, K> {

        if self.window.contains(tree, key) { Ok(()) } else { Err(Error::OutOfBounds) }
    }

    /// Checks if the view contains the given key.
    ///
    /// Returns `Error::OutOfBounds` if the key lies outside the view.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> Result<bool> where C: Compare<Q, K> {
        let tree = self.tree.borrow();
        self.check(&tree, key)?;
        Ok(tree.find(key).is_some())
    }

    /// Returns a copy of the value associated with the given key, if any.
    ///
    /// Returns `Error::OutOfBounds` if the key lies outside the view.
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Result<Option<V>>
        where C: Compare<Q, K>, V: Clone {

        let tree = self.tree.borrow();
        self.check(&tree, key)?;
        Ok(tree.find(key).map(|id| tree.node(id).value().clone()))
    }

    /// Inserts an entry into the backing map, returning the previous value, if any, for the
    /// key.
    ///
    /// Returns `Error::OutOfBounds` if the key lies outside the view.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let mut tree = self.tree.borrow_mut();
        tree.policy().admit(&key)?;
        self.check(&tree, &key)?;
        Ok(tree.insert(key, value))
    }

    /// Removes the given key from the backing map, returning its value if it was present.
    ///
    /// Returns `Error::OutOfBounds` if the key lies outside the view, in which case the map is
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Error;
    ///
    /// let map: rbmap::TreeMap<_, _> = (1..=10).map(|k| (k, ())).collect();
    /// let mut view = map.sub_map(3, true, 7, false).unwrap();
    ///
    /// assert_eq!(view.remove(&3), Ok(Some(())));
    /// assert_eq!(view.remove(&3), Ok(None));
    /// assert_eq!(view.remove(&8), Err(Error::OutOfBounds));
    /// assert!(map.contains_key(&8));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Result<Option<V>> where C: Compare<Q, K> {
        self.remove_entry(key).map(|e| e.map(|e| e.1))
    }

    /// Removes the given key from the backing map, returning the stored key and its value.
    ///
    /// Returns `Error::OutOfBounds` if the key lies outside the view.
    pub fn remove_entry<Q: ?Sized>(&mut self, key: &Q) -> Result<Option<(K, V)>>
        where C: Compare<Q, K> {

        let mut tree = self.tree.borrow_mut();
        self.check(&tree, key)?;
        Ok(tree.remove(key))
    }

    /// Removes the view's entries from the backing map, leaving all others in place.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: rbmap::TreeMap<_, _> = (1..=6).map(|k| (k, ())).collect();
    ///
    /// map.sub_map(2, true, 4, true).unwrap().clear();
    /// assert_eq!(map.keys().collect::<Result<Vec<_>, _>>(), Ok(vec![1, 5, 6]));
    /// ```
    pub fn clear(&mut self) {
        let mut tree = self.tree.borrow_mut();
        while let Some(id) = self.window.lowest(&tree) { tree.delete(id); }
    }

    /// Returns the view's first entry, or `None` if the view is empty.
    pub fn first_entry(&self) -> Option<(K, V)> where K: Clone, V: Clone {
        let tree = self.tree.borrow();
        cloned_entry(&tree, self.window.first(&tree))
    }

    /// Returns the view's last entry, or `None` if the view is empty.
    pub fn last_entry(&self) -> Option<(K, V)> where K: Clone, V: Clone {
        let tree = self.tree.borrow();
        cloned_entry(&tree, self.window.last(&tree))
    }

    /// Returns the view's first key, or `Error::Empty` if the view is empty.
    pub fn first_key(&self) -> Result<K> where K: Clone {
        let tree = self.tree.borrow();
        cloned_key(&tree, self.window.first(&tree)).ok_or(Error::Empty)
    }

    /// Returns the view's last key, or `Error::Empty` if the view is empty.
    pub fn last_key(&self) -> Result<K> where K: Clone {
        let tree = self.tree.borrow();
        cloned_key(&tree, self.window.last(&tree)).ok_or(Error::Empty)
    }

    /// Removes and returns the view's first entry, or `Error::Empty` if the view is empty.
    pub fn poll_first(&mut self) -> Result<(K, V)> {
        let mut tree = self.tree.borrow_mut();
        let id = self.window.first(&tree).ok_or(Error::Empty)?;
        let removed = tree.delete(id);
        Ok((removed.key, removed.value))
    }

    /// Removes and returns the view's last entry, or `Error::Empty` if the view is empty.
    pub fn poll_last(&mut self) -> Result<(K, V)> {
        let mut tree = self.tree.borrow_mut();
        let id = self.window.last(&tree).ok_or(Error::Empty)?;
        let removed = tree.delete(id);
        Ok((removed.key, removed.value))
    }

    /// Returns the last key in the view that does not come after the given key.
    pub fn floor_key<Q: ?Sized>(&self, key: &Q) -> Option<K> where C: Compare<Q, K>, K: Clone {
        let tree = self.tree.borrow();
        cloned_key(&tree, self.window.floor(&tree, key))
    }

    /// Returns the first key in the view that does not come before the given key.
    pub fn ceiling_key<Q: ?Sized>(&self, key: &Q) -> Option<K>
        where C: Compare<Q, K>, K: Clone {

        let tree = self.tree.borrow();
        cloned_key(&tree, self.window.ceiling(&tree, key))
    }

    /// Returns the last key in the view that comes strictly before the given key.
    pub fn lower_key<Q: ?Sized>(&self, key: &Q) -> Option<K> where C: Compare<Q, K>, K: Clone {
        let tree = self.tree.borrow();
        cloned_key(&tree, self.window.lower(&tree, key))
    }

    /// Returns the first key in the view that comes strictly after the given key.
    pub fn higher_key<Q: ?Sized>(&self, key: &Q) -> Option<K>
        where C: Compare<Q, K>, K: Clone {

        let tree = self.tree.borrow();
        cloned_key(&tree, self.window.higher(&tree, key))
    }

    /// Returns the entry with the last key in the view that does not come after the given key.
    pub fn floor_entry<Q: ?Sized>(&self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K>, K: Clone, V: Clone {

        let tree = self.tree.borrow();
        cloned_entry(&tree, self.window.floor(&tree, key))
    }

    /// Returns the entry with the first key in the view that does not come before the given
    /// key.
    pub fn ceiling_entry<Q: ?Sized>(&self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K>, K: Clone, V: Clone {

        let tree = self.tree.borrow();
        cloned_entry(&tree, self.window.ceiling(&tree, key))
    }

    /// Returns the entry with the last key in the view that comes strictly before the given
    /// key.
    pub fn lower_entry<Q: ?Sized>(&self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K>, K: Clone, V: Clone {

        let tree = self.tree.borrow();
        cloned_entry(&tree, self.window.lower(&tree, key))
    }

    /// Returns the entry with the first key in the view that comes strictly after the given
    /// key.
    pub fn higher_entry<Q: ?Sized>(&self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K>, K: Clone, V: Clone {

        let tree = self.tree.borrow();
        cloned_entry(&tree, self.window.higher(&tree, key))
    }

    fn nested(&self, window: Result<Window<K>>) -> Result<SubMap<K, V, C>> {
        window.map(|window| SubMap::new(self.tree.clone(), window))
    }

    /// Returns a view of the keys between `from` and `to`, in this view's direction.
    ///
    /// Returns `Error::OutOfBounds` if either bound lies outside this view or `from` comes
    /// after `to`.
    pub fn range(&self, from: Bound<K>, to: Bound<K>) -> Result<SubMap<K, V, C>> where K: Clone {
        let window = self.window.restrict_relative(&self.tree.borrow(), from, to);
        self.nested(window)
    }

    /// Returns a view of the keys from `from` to `to`, in this view's direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::Error;
    ///
    /// let map: rbmap::TreeMap<_, _> = (1..=10).map(|k| (k, ())).collect();
    /// let view = map.sub_map(3, true, 8, true).unwrap();
    ///
    /// let inner = view.sub_map(4, true, 6, false).unwrap();
    /// assert_eq!(inner.keys().collect::<Result<Vec<_>, _>>(), Ok(vec![4, 5]));
    ///
    /// assert_eq!(view.sub_map(2, true, 6, true).err(), Some(Error::OutOfBounds));
    /// assert_eq!(view.descending_map().sub_map(7, true, 5, true).unwrap().len(), 3);
    /// ```
    pub fn sub_map(&self, from: K, from_inclusive: bool, to: K, to_inclusive: bool)
        -> Result<SubMap<K, V, C>> where K: Clone {

        self.range(bound(from, from_inclusive), bound(to, to_inclusive))
    }

    /// Returns a view of the keys that come before (or equal to, if `inclusive`) `to` in this
    /// view's direction.
    pub fn head_map(&self, to: K, inclusive: bool) -> Result<SubMap<K, V, C>> where K: Clone {
        self.range(Unbounded, bound(to, inclusive))
    }

    /// Returns a view of the keys that come after (or equal to, if `inclusive`) `from` in
    /// this view's direction.
    pub fn tail_map(&self, from: K, inclusive: bool) -> Result<SubMap<K, V, C>> where K: Clone {
        self.range(bound(from, inclusive), Unbounded)
    }

    /// Returns this view seen in the opposite direction.
    pub fn descending_map(&self) -> SubMap<K, V, C> where K: Clone {
        SubMap::new(self.tree.clone(), self.window.reversed())
    }

    fn walk(&self, reverse: bool) -> Iter<K, V, C> {
        let (start, fence, descending) = self.window.span(&self.tree.borrow(), reverse);
        Iter::new(self.tree.clone(), start, fence, descending)
    }

    /// Returns a fail-fast iterator over the view's entries in the view's direction.
    pub fn iter(&self) -> Iter<K, V, C> { self.walk(false) }

    /// Returns a fail-fast iterator over the view's entries against the view's direction.
    pub fn descending_iter(&self) -> Iter<K, V, C> { self.walk(true) }

    /// Returns a fail-fast iterator over the view's keys.
    pub fn keys(&self) -> Keys<K, V, C> { Keys(self.iter()) }

    /// Returns a fail-fast iterator over the view's values.
    pub fn values(&self) -> Values<K, V, C> { Values(self.iter()) }
}

impl<K, V, C> SubMap<K, V, C> where C: Compare<K> {
    pub(crate) fn fmt_keys(&self, f: &mut fmt::Formatter) -> fmt::Result where K: Debug {
        let tree = self.tree.borrow();
        let (start, fence, descending) = self.window.span(&tree, false);
        f.debug_set().entries(tree.walk(start, fence, descending).map(|e| e.0)).finish()
    }
}

impl<K, V, C> Clone for SubMap<K, V, C> where K: Clone, C: Compare<K> {
    fn clone(&self) -> Self { SubMap::new(self.tree.clone(), self.window.clone()) }
}

impl<K, V, C> Debug for SubMap<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tree = self.tree.borrow();
        let (start, fence, descending) = self.window.span(&tree, false);
        f.debug_map().entries(tree.walk(start, fence, descending)).finish()
    }
}

impl<'a, K, V, C> IntoIterator for &'a SubMap<K, V, C>
    where K: Clone, V: Clone, C: Compare<K> {

    type Item = Result<(K, V)>;
    type IntoIter = Iter<K, V, C>;
    fn into_iter(self) -> Iter<K, V, C> { self.iter() }
}

#[cfg(test)]
mod test {
    use std::ops::Bound::*;
    use crate::{Error, TreeMap};

    fn map() -> TreeMap<u32, ()> { (1..=10).map(|k| (k, ())).collect() }

    #[test]
    fn exclusive_bound_may_sit_on_the_edge_of_a_nested_range() {
        let map = map();
        let view = map.range(Included(3), Excluded(8)).unwrap();

        assert!(view.range(Included(3), Excluded(8)).is_ok());
        assert_eq!(view.range(Included(3), Included(8)).err(), Some(Error::OutOfBounds));
        assert_eq!(view.range(Excluded(2), Unbounded).err(), Some(Error::OutOfBounds));
    }

    #[test]
    fn keyed_access_outside_the_window_is_rejected() {
        let map = map();
        let mut view = map.sub_map(3, true, 7, false).unwrap();

        assert_eq!(view.get(&8), Err(Error::OutOfBounds));
        assert_eq!(view.contains_key(&2), Err(Error::OutOfBounds));
        assert_eq!(view.remove(&8), Err(Error::OutOfBounds));
        assert_eq!(view.remove_entry(&7), Err(Error::OutOfBounds));
        assert_eq!(map.len(), 10);

        assert_eq!(view.get(&4), Ok(Some(())));
        assert_eq!(view.remove_entry(&4), Ok(Some((4, ()))));
        assert_eq!(view.contains_key(&4), Ok(false));
        assert_eq!(view.get(&4), Ok(None));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let map = map();
        assert_eq!(map.sub_map(5, true, 4, true).err(), Some(Error::OutOfBounds));
        assert!(map.sub_map(5, false, 5, false).unwrap().is_empty());
    }

    #[test]
    fn navigation_clamps_to_the_window() {
        let map = map();
        let view = map.sub_map(3, true, 7, true).unwrap();

        assert_eq!(view.ceiling_key(&0), Some(3));
        assert_eq!(view.higher_key(&7), None);
        assert_eq!(view.floor_key(&100), Some(7));
        assert_eq!(view.lower_key(&3), None);
        assert_eq!(view.lower_key(&100), Some(7));
    }

    #[test]
    fn descending_iteration_honors_fences() {
        let map = map();
        let view = map.sub_map(3, false, 7, false).unwrap();

        let desc: Vec<_> = view.descending_iter().map(|e| e.map(|e| e.0)).collect();
        assert_eq!(desc, [Ok(6), Ok(5), Ok(4)]);

        let view = view.descending_map();
        let asc: Vec<_> = view.descending_iter().map(|e| e.map(|e| e.0)).collect();
        assert_eq!(asc, [Ok(4), Ok(5), Ok(6)]);
    }
}
