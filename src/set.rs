//! An ordered set based on a red-black tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Bound;
use crate::error::Result;
use crate::map::{self, SubMap, TreeMap};

/// An ordered set based on a red-black tree.
///
/// A set is a [`TreeMap`](../map/struct.TreeMap.html) whose values are all `()`, and shares
/// its tree with its views and iterators in the same way.
///
/// The behavior of this set is undefined if an item's ordering relative to any other item
/// changes while the item is in the set. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
pub struct TreeSet<T, C = Natural<T>> where C: Compare<T> {
    map: TreeMap<T, (), C>,
}

impl<T> TreeSet<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbmap::TreeSet::new();
    ///
    /// set.insert(2).unwrap();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(Ok(1)));
    /// assert_eq!(it.next(), Some(Ok(2)));
    /// assert_eq!(it.next(), Some(Ok(3)));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { TreeSet::from_map(TreeMap::new()) }

    /// Creates a set from items already sorted in strictly ascending order, in linear time.
    ///
    /// Returns `Error::Unordered` if the items are not sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// let set = rbmap::TreeSet::from_sorted(0..1000).unwrap();
    ///
    /// assert_eq!(set.len(), 1000);
    /// assert_eq!(set.floor(&2000), Some(999));
    /// assert!(rbmap::TreeSet::from_sorted(vec![1, 1]).is_err());
    /// ```
    pub fn from_sorted<I>(items: I) -> Result<Self> where I: IntoIterator<Item = T> {
        TreeSet::from_sorted_with_cmp(compare::natural(), items)
    }
}

impl<T, C> TreeSet<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = rbmap::TreeSet::with_cmp(natural().rev());
    ///
    /// set.insert(2).unwrap();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    ///
    /// assert_eq!(set.first(), Ok(3));
    /// ```
    pub fn with_cmp(cmp: C) -> Self { TreeSet::from_map(TreeMap::with_cmp(cmp)) }

    /// Creates a set ordered by the given comparator from items already sorted by it.
    pub fn from_sorted_with_cmp<I>(cmp: C, items: I) -> Result<Self>
        where I: IntoIterator<Item = T> {

        TreeMap::from_sorted_with_cmp(cmp, items.into_iter().map(|item| (item, ())))
            .map(TreeSet::from_map)
    }

    pub(crate) fn from_map(map: TreeMap<T, (), C>) -> Self { TreeSet { map: map } }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Returns the number of items in the set.
    pub fn len(&self) -> usize { self.map.len() }

    /// Returns a copy of the set's comparator.
    pub fn cmp(&self) -> C where C: Clone { self.map.cmp() }

    /// Removes all items from the set.
    pub fn clear(&mut self) { self.map.clear(); }

    /// Inserts an item into the set, returning `true` if the set did not already contain it.
    ///
    /// Returns `Error::NullKey` if the item is rejected by the set's key policy.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbmap::TreeSet::new();
    ///
    /// assert_eq!(set.insert(1), Ok(true));
    /// assert_eq!(set.insert(1), Ok(false));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> Result<bool> {
        self.map.insert(item, ()).map(|old| old.is_none())
    }

    /// Removes the given item from the set, returning `true` if it was present.
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.remove(item).is_some()
    }

    /// Checks if the set contains the given item.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.contains_key(item)
    }

    /// Returns the least item, or `Error::Empty` if the set is empty.
    pub fn first(&self) -> Result<T> where T: Clone { self.map.first_key() }

    /// Returns the greatest item, or `Error::Empty` if the set is empty.
    pub fn last(&self) -> Result<T> where T: Clone { self.map.last_key() }

    /// Removes and returns the least item, or `Error::Empty` if the set is empty.
    pub fn poll_first(&mut self) -> Result<T> { self.map.poll_first().map(|e| e.0) }

    /// Removes and returns the greatest item, or `Error::Empty` if the set is empty.
    pub fn poll_last(&mut self) -> Result<T> { self.map.poll_last().map(|e| e.0) }

    /// Returns the greatest item less than or equal to the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: rbmap::TreeSet<_> = [1, 3, 5].iter().cloned().collect();
    ///
    /// assert_eq!(set.floor(&4), Some(3));
    /// assert_eq!(set.ceiling(&4), Some(5));
    /// assert_eq!(set.lower(&1), None);
    /// assert_eq!(set.higher(&5), None);
    /// ```
    pub fn floor<Q: ?Sized>(&self, item: &Q) -> Option<T> where C: Compare<Q, T>, T: Clone {
        self.map.floor_key(item)
    }

    /// Returns the least item greater than or equal to the given item.
    pub fn ceiling<Q: ?Sized>(&self, item: &Q) -> Option<T> where C: Compare<Q, T>, T: Clone {
        self.map.ceiling_key(item)
    }

    /// Returns the greatest item strictly less than the given item.
    pub fn lower<Q: ?Sized>(&self, item: &Q) -> Option<T> where C: Compare<Q, T>, T: Clone {
        self.map.lower_key(item)
    }

    /// Returns the least item strictly greater than the given item.
    pub fn higher<Q: ?Sized>(&self, item: &Q) -> Option<T> where C: Compare<Q, T>, T: Clone {
        self.map.higher_key(item)
    }

    /// Returns a live view of the items between `lo` and `hi`.
    pub fn range(&self, lo: Bound<T>, hi: Bound<T>) -> Result<SubSet<T, C>> where T: Clone {
        self.map.range(lo, hi).map(SubSet)
    }

    /// Returns a live view of the items from `from` to `to`.
    ///
    /// Returns `Error::OutOfBounds` if `from` lies above `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set: rbmap::TreeSet<_> = (1..=10).collect();
    /// let view = set.sub_set(3, true, 6, true).unwrap();
    ///
    /// set.remove(&4);
    /// assert_eq!(view.iter().collect::<Result<Vec<_>, _>>(), Ok(vec![3, 5, 6]));
    /// ```
    pub fn sub_set(&self, from: T, from_inclusive: bool, to: T, to_inclusive: bool)
        -> Result<SubSet<T, C>> where T: Clone {

        self.map.sub_map(from, from_inclusive, to, to_inclusive).map(SubSet)
    }

    /// Returns a live view of the items less than (or equal to, if `inclusive`) `to`.
    pub fn head_set(&self, to: T, inclusive: bool) -> SubSet<T, C> where T: Clone {
        SubSet(self.map.head_map(to, inclusive))
    }

    /// Returns a live view of the items greater than (or equal to, if `inclusive`) `from`.
    pub fn tail_set(&self, from: T, inclusive: bool) -> SubSet<T, C> where T: Clone {
        SubSet(self.map.tail_map(from, inclusive))
    }

    /// Returns a live view of the whole set in descending order.
    pub fn descending_set(&self) -> SubSet<T, C> where T: Clone {
        SubSet(self.map.descending_map())
    }

    /// Returns a fail-fast iterator over the set's items in ascending order.
    pub fn iter(&self) -> Iter<T, C> { Iter(self.map.keys()) }

    /// Returns a fail-fast iterator over the set's items in descending order.
    pub fn descending_iter(&self) -> Iter<T, C> { Iter(map::Keys(self.map.descending_iter())) }

    /// Inserts items already sorted in strictly ascending order, building in linear time if
    /// the set is empty.
    pub fn extend_sorted<I>(&mut self, items: I) -> Result<()> where I: IntoIterator<Item = T> {
        self.map.extend_sorted(items.into_iter().map(|item| (item, ())))
    }

    /// Inserts every item, or none of them if any is rejected by the set's key policy, in
    /// which case `Error::NullKey` is returned.
    pub fn try_extend<I>(&mut self, items: I) -> Result<()> where I: IntoIterator<Item = T> {
        self.map.try_extend(items.into_iter().map(|item| (item, ())))
    }
}

impl<T, C> Clone for TreeSet<T, C> where T: Clone, C: Compare<T> + Clone {
    fn clone(&self) -> Self { TreeSet::from_map(self.map.clone()) }
}

impl<T, C> Debug for TreeSet<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.map.fmt_keys(f)
    }
}

impl<T, C> Default for TreeSet<T, C> where C: Compare<T> + Default {
    fn default() -> Self { TreeSet::with_cmp(Default::default()) }
}

/// Items rejected by the set's key policy are skipped and logged at `debug` level. Use
/// [`TreeSet::try_extend`] to have them reported instead.
impl<T, C> Extend<T> for TreeSet<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        self.map.extend(it.into_iter().map(|item| (item, ())));
    }
}

impl<T, C> FromIterator<T> for TreeSet<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
        let mut set: Self = Default::default();
        set.extend(it);
        set
    }
}

impl<T, C> Hash for TreeSet<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: Hasher>(&self, h: &mut H) { self.map.hash(h); }
}

impl<'a, T, C> IntoIterator for &'a TreeSet<T, C> where T: Clone, C: Compare<T> {
    type Item = Result<T>;
    type IntoIter = Iter<T, C>;
    fn into_iter(self) -> Iter<T, C> { self.iter() }
}

impl<T, C> IntoIterator for TreeSet<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.map.into_iter()) }
}

impl<T, C> PartialEq for TreeSet<T, C> where C: Compare<T> {
    fn eq(&self, other: &Self) -> bool { self.map == other.map }
}

impl<T, C> Eq for TreeSet<T, C> where C: Compare<T> {}

impl<T> PartialOrd for TreeSet<T> where T: Ord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.map.partial_cmp(&other.map)
    }
}

impl<T> Ord for TreeSet<T> where T: Ord {
    fn cmp(&self, other: &Self) -> Ordering { Ord::cmp(&self.map, &other.map) }
}

/// A live view of the items of a [`TreeSet`](struct.TreeSet.html) that lie in a range,
/// possibly seen in descending order.
///
/// See [`SubMap`](../map/struct.SubMap.html) for how views behave.
pub struct SubSet<T, C>(SubMap<T, (), C>) where C: Compare<T>;

impl<T, C> SubSet<T, C> where C: Compare<T> {
    /// Returns the number of items in the view.
    pub fn len(&self) -> usize { self.0.len() }

    /// Checks if the view is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Checks if the view contains the given item.
    ///
    /// Returns `Error::OutOfBounds` if the item lies outside the view.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> Result<bool> where C: Compare<Q, T> {
        self.0.contains_key(item)
    }

    /// Inserts an item into the backing set, returning `true` if it was not already present.
    ///
    /// Returns `Error::OutOfBounds` if the item lies outside the view.
    pub fn insert(&mut self, item: T) -> Result<bool> {
        self.0.insert(item, ()).map(|old| old.is_none())
    }

    /// Removes the given item from the backing set, returning `true` if it was present.
    ///
    /// Returns `Error::OutOfBounds` if the item lies outside the view, in which case the set is
    /// unchanged.
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> Result<bool> where C: Compare<Q, T> {
        self.0.remove(item).map(|old| old.is_some())
    }

    /// Removes the view's items from the backing set.
    pub fn clear(&mut self) { self.0.clear(); }

    /// Returns the view's first item, or `Error::Empty` if the view is empty.
    pub fn first(&self) -> Result<T> where T: Clone { self.0.first_key() }

    /// Returns the view's last item, or `Error::Empty` if the view is empty.
    pub fn last(&self) -> Result<T> where T: Clone { self.0.last_key() }

    /// Removes and returns the view's first item, or `Error::Empty` if the view is empty.
    pub fn poll_first(&mut self) -> Result<T> { self.0.poll_first().map(|e| e.0) }

    /// Removes and returns the view's last item, or `Error::Empty` if the view is empty.
    pub fn poll_last(&mut self) -> Result<T> { self.0.poll_last().map(|e| e.0) }

    /// Returns the last item in the view that does not come after the given item.
    pub fn floor<Q: ?Sized>(&self, item: &Q) -> Option<T> where C: Compare<Q, T>, T: Clone {
        self.0.floor_key(item)
    }

    /// Returns the first item in the view that does not come before the given item.
    pub fn ceiling<Q: ?Sized>(&self, item: &Q) -> Option<T> where C: Compare<Q, T>, T: Clone {
        self.0.ceiling_key(item)
    }

    /// Returns the last item in the view that comes strictly before the given item.
    pub fn lower<Q: ?Sized>(&self, item: &Q) -> Option<T> where C: Compare<Q, T>, T: Clone {
        self.0.lower_key(item)
    }

    /// Returns the first item in the view that comes strictly after the given item.
    pub fn higher<Q: ?Sized>(&self, item: &Q) -> Option<T> where C: Compare<Q, T>, T: Clone {
        self.0.higher_key(item)
    }

    /// Returns a view of the items between `from` and `to`, in this view's direction.
    pub fn range(&self, from: Bound<T>, to: Bound<T>) -> Result<SubSet<T, C>> where T: Clone {
        self.0.range(from, to).map(SubSet)
    }

    /// Returns a view of the items from `from` to `to`, in this view's direction.
    ///
    /// Returns `Error::OutOfBounds` if either bound lies outside this view or `from` comes
    /// after `to`.
    pub fn sub_set(&self, from: T, from_inclusive: bool, to: T, to_inclusive: bool)
        -> Result<SubSet<T, C>> where T: Clone {

        self.0.sub_map(from, from_inclusive, to, to_inclusive).map(SubSet)
    }

    /// Returns a view of the items that come before (or equal to, if `inclusive`) `to` in this
    /// view's direction.
    pub fn head_set(&self, to: T, inclusive: bool) -> Result<SubSet<T, C>> where T: Clone {
        self.0.head_map(to, inclusive).map(SubSet)
    }

    /// Returns a view of the items that come after (or equal to, if `inclusive`) `from` in
    /// this view's direction.
    pub fn tail_set(&self, from: T, inclusive: bool) -> Result<SubSet<T, C>> where T: Clone {
        self.0.tail_map(from, inclusive).map(SubSet)
    }

    /// Returns this view seen in the opposite direction.
    pub fn descending_set(&self) -> SubSet<T, C> where T: Clone { SubSet(self.0.descending_map()) }

    /// Returns a fail-fast iterator over the view's items in the view's direction.
    pub fn iter(&self) -> Iter<T, C> { Iter(self.0.keys()) }

    /// Returns a fail-fast iterator over the view's items against the view's direction.
    pub fn descending_iter(&self) -> Iter<T, C> { Iter(map::Keys(self.0.descending_iter())) }
}

impl<T, C> Clone for SubSet<T, C> where T: Clone, C: Compare<T> {
    fn clone(&self) -> Self { SubSet(self.0.clone()) }
}

impl<T, C> Debug for SubSet<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { self.0.fmt_keys(f) }
}

impl<'a, T, C> IntoIterator for &'a SubSet<T, C> where T: Clone, C: Compare<T> {
    type Item = Result<T>;
    type IntoIter = Iter<T, C>;
    fn into_iter(self) -> Iter<T, C> { self.iter() }
}

/// A fail-fast iterator over a set's items.
///
/// # Examples
///
/// Acquire through [`TreeSet::iter`](struct.TreeSet.html#method.iter) or the `IntoIterator`
/// trait:
///
/// ```
/// let set: rbmap::TreeSet<_> = (1..=3).collect();
///
/// for item in &set {
///     println!("{:?}", item.unwrap());
/// }
/// ```
pub struct Iter<T, C>(map::Keys<T, (), C>) where C: Compare<T>;

impl<T, C> Iter<T, C> where C: Compare<T> {
    /// Removes the item most recently returned by `next` from the set.
    ///
    /// See [`map::Iter::remove`](../map/struct.Iter.html#method.remove).
    pub fn remove(&mut self) -> Result<T> { self.0.remove() }
}

impl<T, C> Clone for Iter<T, C> where C: Compare<T> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<T, C> Iterator for Iter<T, C> where T: Clone, C: Compare<T> {
    type Item = Result<T>;
    fn next(&mut self) -> Option<Result<T>> { self.0.next() }
}

/// An iterator that consumes the set.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let set: rbmap::TreeSet<_> = vec![2, 1, 3].into_iter().collect();
/// let items: Vec<_> = set.into_iter().collect();
///
/// assert_eq!(items, [1, 2, 3]);
/// ```
pub struct IntoIter<T>(map::IntoIter<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back().map(|e| e.0) }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
