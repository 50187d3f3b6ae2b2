//! An ordered map based on a red-black tree.

mod builder;
mod iter;
mod view;

use compare::{Compare, Natural};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Bound;
use std::rc::Rc;
use crate::error::{Error, Result};
use crate::node::{Link, Tree};
use crate::policy::Policy;

pub use self::builder::Builder;
pub use self::iter::{Iter, Keys, Values};
pub use self::view::SubMap;
pub use crate::node::IntoIter;

use self::view::Window;

/// The tree behind a map, shared with its views and iterators.
type Shared<K, V, C> = Rc<RefCell<Tree<K, V, C>>>;

fn cloned_key<K, V, C>(tree: &Tree<K, V, C>, link: Link) -> Option<K> where K: Clone {
    link.map(|id| tree.node(id).key().clone())
}

fn cloned_entry<K, V, C>(tree: &Tree<K, V, C>, link: Link) -> Option<(K, V)>
    where K: Clone, V: Clone {

    link.map(|id| {
        let node = tree.node(id);
        (node.key().clone(), node.value().clone())
    })
}

fn bound<K>(key: K, inclusive: bool) -> Bound<K> {
    if inclusive { Bound::Included(key) } else { Bound::Excluded(key) }
}

/// An ordered map based on a red-black tree.
///
/// A `TreeMap` is a handle to a tree that it shares with the views returned by
/// [`sub_map`](#method.sub_map) and friends and with its iterators. Mutations through any
/// of them are seen by all of them. Lookups return clones of keys and values, so values that
/// are expensive to clone are best stored behind an `Rc`.
///
/// The map is single-threaded: it is neither `Send` nor `Sync`.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct TreeMap<K, V, C = Natural<K>> where C: Compare<K> {
    tree: Shared<K, V, C>,
}

impl<K, V> TreeMap<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// let entries: Vec<_> = map.iter().collect::<Result<_, _>>().unwrap();
    /// assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    pub fn new() -> Self { TreeMap::with_cmp(compare::natural()) }

    /// Creates a map from entries already sorted in strictly ascending order of their keys.
    ///
    /// This runs in linear time. Returns `Error::Unordered` if the entries are not sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, TreeMap};
    ///
    /// let map = TreeMap::from_sorted(vec![(1, "a"), (2, "b"), (3, "c")]).unwrap();
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.get(&2), Some("b"));
    ///
    /// assert_eq!(TreeMap::from_sorted(vec![(2, "b"), (1, "a")]).err(), Some(Error::Unordered));
    /// ```
    pub fn from_sorted<I>(entries: I) -> Result<Self> where I: IntoIterator<Item = (K, V)> {
        TreeMap::from_sorted_with_cmp(compare::natural(), entries)
    }
}

// The value type is chosen by `Builder::build`, not here.
impl<K> TreeMap<K, ()> where K: Ord {
    /// Returns a builder for configuring the map's comparator and key policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, TreeMap};
    ///
    /// let mut map = TreeMap::builder().reject_null_keys().build();
    ///
    /// assert_eq!(map.insert(Some(1), "a"), Ok(None));
    /// assert_eq!(map.insert(None, "b"), Err(Error::NullKey));
    /// ```
    pub fn builder() -> Builder<K> { Builder::new() }
}

impl<K, V, C> TreeMap<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use rbmap::TreeMap;
    ///
    /// let mut map = TreeMap::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// assert_eq!(map.first_key(), Ok(3));
    /// assert_eq!(map.last_key(), Ok(1));
    /// ```
    pub fn with_cmp(cmp: C) -> Self { TreeMap::from_tree(Tree::new(Policy::new(cmp))) }

    /// Creates a map ordered by the given comparator from entries already sorted by it.
    ///
    /// This runs in linear time. Returns `Error::Unordered` if the entries are not sorted.
    pub fn from_sorted_with_cmp<I>(cmp: C, entries: I) -> Result<Self>
        where I: IntoIterator<Item = (K, V)> {

        Tree::from_sorted(Policy::new(cmp), entries).map(TreeMap::from_tree)
    }

    fn from_tree(tree: Tree<K, V, C>) -> Self { TreeMap { tree: Rc::new(RefCell::new(tree)) } }

    /// Checks if the map is empty.
    pub fn is_empty(&self) -> bool { self.tree.borrow().is_empty() }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbmap::TreeMap::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b").unwrap();
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.tree.borrow().len() }

    /// Returns a copy of the map's comparator.
    pub fn cmp(&self) -> C where C: Clone { self.tree.borrow().policy().cmp().clone() }

    /// Removes all entries from the map, including those seen through its views.
    pub fn clear(&mut self) { self.tree.borrow_mut().clear(); }

    /// Inserts an entry into the map, returning the previous value, if any, for the key.
    ///
    /// Replacing the value of an existing key keeps the stored key and does not count as a
    /// structural modification. Returns `Error::NullKey` if the key is rejected by the
    /// map's key policy.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbmap::TreeMap::new();
    ///
    /// assert_eq!(map.insert(1, "a"), Ok(None));
    /// assert_eq!(map.insert(1, "b"), Ok(Some("a")));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&1), Some("b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let mut tree = self.tree.borrow_mut();
        tree.policy().admit(&key)?;
        Ok(tree.insert(key, value))
    }

    /// Removes the given key from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbmap::TreeMap::new();
    /// map.insert(1, "a").unwrap();
    ///
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V> where C: Compare<Q, K> {
        self.remove_entry(key).map(|e| e.1)
    }

    /// Removes the given key from the map, returning the stored key and its value.
    pub fn remove_entry<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K> {

        self.tree.borrow_mut().remove(key)
    }

    /// Checks if the map contains the given key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.tree.borrow().find(key).is_some()
    }

    /// Returns a copy of the value associated with the given key, if any.
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<V> where C: Compare<Q, K>, V: Clone {
        let tree = self.tree.borrow();
        tree.find(key).map(|id| tree.node(id).value().clone())
    }

    /// Applies `f` to the value associated with the given key, if any, and returns its
    /// result.
    ///
    /// This is not a structural modification.
    ///
    /// # Panics
    ///
    /// `f` runs while the map's tree is mutably borrowed, so it panics if `f` reads or
    /// changes this map through a view, an iterator, or any other handle to the same tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbmap::TreeMap::new();
    /// map.insert("a", 1).unwrap();
    ///
    /// assert_eq!(map.update(&"a", |v| { *v += 1; *v }), Some(2));
    /// assert_eq!(map.update(&"b", |v| { *v += 1; *v }), None);
    /// ```
    pub fn update<Q: ?Sized, F, R>(&mut self, key: &Q, f: F) -> Option<R>
        where C: Compare<Q, K>, F: FnOnce(&mut V) -> R {

        let mut tree = self.tree.borrow_mut();
        let id = tree.find(key)?;
        Some(f(tree.value_mut(id)))
    }

    /// Returns the entry with the least key, or `None` if the map is empty.
    pub fn first_entry(&self) -> Option<(K, V)> where K: Clone, V: Clone {
        let tree = self.tree.borrow();
        cloned_entry(&tree, tree.first())
    }

    /// Returns the entry with the greatest key, or `None` if the map is empty.
    pub fn last_entry(&self) -> Option<(K, V)> where K: Clone, V: Clone {
        let tree = self.tree.borrow();
        cloned_entry(&tree, tree.last())
    }

    /// Returns the least key, or `Error::Empty` if the map is empty.
    pub fn first_key(&self) -> Result<K> where K: Clone {
        let tree = self.tree.borrow();
        cloned_key(&tree, tree.first()).ok_or(Error::Empty)
    }

    /// Returns the greatest key, or `Error::Empty` if the map is empty.
    pub fn last_key(&self) -> Result<K> where K: Clone {
        let tree = self.tree.borrow();
        cloned_key(&tree, tree.last()).ok_or(Error::Empty)
    }

    /// Removes and returns the entry with the least key, or `Error::Empty` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, TreeMap};
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.poll_first(), Err(Error::Empty));
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    ///
    /// assert_eq!(map.poll_first(), Ok((1, "a")));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn poll_first(&mut self) -> Result<(K, V)> {
        let mut tree = self.tree.borrow_mut();
        let id = tree.first().ok_or(Error::Empty)?;
        let removed = tree.delete(id);
        Ok((removed.key, removed.value))
    }

    /// Removes and returns the entry with the greatest key, or `Error::Empty` if the map is
    /// empty.
    pub fn poll_last(&mut self) -> Result<(K, V)> {
        let mut tree = self.tree.borrow_mut();
        let id = tree.last().ok_or(Error::Empty)?;
        let removed = tree.delete(id);
        Ok((removed.key, removed.value))
    }

    /// Returns the greatest key less than or equal to the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: rbmap::TreeMap<_, _> = [1, 3, 5, 7, 9].iter().map(|&k| (k, ())).collect();
    ///
    /// assert_eq!(map.floor_key(&6), Some(5));
    /// assert_eq!(map.floor_key(&5), Some(5));
    /// assert_eq!(map.floor_key(&0), None);
    /// ```
    pub fn floor_key<Q: ?Sized>(&self, key: &Q) -> Option<K> where C: Compare<Q, K>, K: Clone {
        let tree = self.tree.borrow();
        cloned_key(&tree, tree.floor(key))
    }

    /// Returns the least key greater than or equal to the given key.
    pub fn ceiling_key<Q: ?Sized>(&self, key: &Q) -> Option<K>
        where C: Compare<Q, K>, K: Clone {

        let tree = self.tree.borrow();
        cloned_key(&tree, tree.ceiling(key))
    }

    /// Returns the greatest key strictly less than the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: rbmap::TreeMap<_, _> = [1, 3, 5, 7, 9].iter().map(|&k| (k, ())).collect();
    ///
    /// assert_eq!(map.lower_key(&5), Some(3));
    /// assert_eq!(map.lower_key(&1), None);
    /// ```
    pub fn lower_key<Q: ?Sized>(&self, key: &Q) -> Option<K> where C: Compare<Q, K>, K: Clone {
        let tree = self.tree.borrow();
        cloned_key(&tree, tree.lower(key))
    }

    /// Returns the least key strictly greater than the given key.
    pub fn higher_key<Q: ?Sized>(&self, key: &Q) -> Option<K>
        where C: Compare<Q, K>, K: Clone {

        let tree = self.tree.borrow();
        cloned_key(&tree, tree.higher(key))
    }

    /// Returns the entry with the greatest key less than or equal to the given key.
    pub fn floor_entry<Q: ?Sized>(&self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K>, K: Clone, V: Clone {

        let tree = self.tree.borrow();
        cloned_entry(&tree, tree.floor(key))
    }

    /// Returns the entry with the least key greater than or equal to the given key.
    pub fn ceiling_entry<Q: ?Sized>(&self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K>, K: Clone, V: Clone {

        let tree = self.tree.borrow();
        cloned_entry(&tree, tree.ceiling(key))
    }

    /// Returns the entry with the greatest key strictly less than the given key.
    pub fn lower_entry<Q: ?Sized>(&self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K>, K: Clone, V: Clone {

        let tree = self.tree.borrow();
        cloned_entry(&tree, tree.lower(key))
    }

    /// Returns the entry with the least key strictly greater than the given key.
    pub fn higher_entry<Q: ?Sized>(&self, key: &Q) -> Option<(K, V)>
        where C: Compare<Q, K>, K: Clone, V: Clone {

        let tree = self.tree.borrow();
        cloned_entry(&tree, tree.higher(key))
    }

    /// Returns a live view of the entries whose keys lie between `lo` and `hi`.
    ///
    /// Returns `Error::OutOfBounds` if `lo` lies above `hi`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::Bound::*;
    ///
    /// let mut map: rbmap::TreeMap<_, _> = (1..10).map(|k| (k, ())).collect();
    /// let view = map.range(Excluded(3), Included(6)).unwrap();
    ///
    /// assert_eq!(view.keys().collect::<Result<Vec<_>, _>>(), Ok(vec![4, 5, 6]));
    ///
    /// map.remove(&5);
    /// assert_eq!(view.keys().collect::<Result<Vec<_>, _>>(), Ok(vec![4, 6]));
    /// ```
    pub fn range(&self, lo: Bound<K>, hi: Bound<K>) -> Result<SubMap<K, V, C>> where K: Clone {
        let window = Window::full().restrict(&self.tree.borrow(), lo, hi)?;
        Ok(SubMap::new(self.tree.clone(), window))
    }

    /// Returns a live view of the entries with keys from `from` to `to`.
    ///
    /// Returns `Error::OutOfBounds` if `from` lies above `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: rbmap::TreeMap<_, _> = (1..=10).map(|k| (k, k * 10)).collect();
    /// let mut view = map.sub_map(3, true, 10, false).unwrap();
    ///
    /// assert_eq!(view.first_key(), Ok(3));
    /// assert_eq!(view.last_key(), Ok(9));
    /// assert_eq!(view.len(), 7);
    ///
    /// assert!(view.insert(10, 100).is_err());
    /// ```
    pub fn sub_map(&self, from: K, from_inclusive: bool, to: K, to_inclusive: bool)
        -> Result<SubMap<K, V, C>> where K: Clone {

        self.range(bound(from, from_inclusive), bound(to, to_inclusive))
    }

    /// Returns a live view of the entries with keys less than (or equal to, if `inclusive`)
    /// `to`.
    pub fn head_map(&self, to: K, inclusive: bool) -> SubMap<K, V, C> where K: Clone {
        SubMap::new(self.tree.clone(), Window::new(Bound::Unbounded, bound(to, inclusive), false))
    }

    /// Returns a live view of the entries with keys greater than (or equal to, if `inclusive`)
    /// `from`.
    pub fn tail_map(&self, from: K, inclusive: bool) -> SubMap<K, V, C> where K: Clone {
        SubMap::new(self.tree.clone(), Window::new(bound(from, inclusive), Bound::Unbounded, false))
    }

    /// Returns a live view of the whole map in descending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: rbmap::TreeMap<_, _> = (1..=5).map(|k| (k, ())).collect();
    /// let desc = map.descending_map();
    ///
    /// assert_eq!(desc.first_key(), Ok(5));
    /// assert_eq!(desc.ceiling_key(&3), Some(3));
    /// assert_eq!(desc.higher_key(&3), Some(2));
    /// ```
    pub fn descending_map(&self) -> SubMap<K, V, C> where K: Clone {
        SubMap::new(self.tree.clone(), Window::new(Bound::Unbounded, Bound::Unbounded, true))
    }

    /// Returns a fail-fast iterator over the map's entries in ascending key order.
    ///
    /// The iterator yields `Err(Error::ConcurrentModification)` if the map is structurally
    /// modified after its creation other than through [`Iter::remove`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, TreeMap};
    ///
    /// let mut map: TreeMap<_, _> = (1..=3).map(|k| (k, ())).collect();
    /// let mut it = map.iter();
    ///
    /// assert_eq!(it.next(), Some(Ok((1, ()))));
    /// map.remove(&2);
    /// assert_eq!(it.next(), Some(Err(Error::ConcurrentModification)));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V, C> {
        let start = self.tree.borrow().first();
        Iter::new(self.tree.clone(), start, None, false)
    }

    /// Returns a fail-fast iterator over the map's entries in descending key order.
    pub fn descending_iter(&self) -> Iter<K, V, C> {
        let start = self.tree.borrow().last();
        Iter::new(self.tree.clone(), start, None, true)
    }

    /// Returns a fail-fast iterator over the map's keys in ascending order.
    pub fn keys(&self) -> Keys<K, V, C> { Keys(self.iter()) }

    /// Returns a fail-fast iterator over the map's values in ascending key order.
    pub fn values(&self) -> Values<K, V, C> { Values(self.iter()) }

    /// Inserts entries already sorted in strictly ascending key order.
    ///
    /// When the map is empty this builds the tree in linear time. Otherwise each entry is
    /// inserted in turn. Returns `Error::Unordered` if the entries are not sorted, in which
    /// case the map is unchanged.
    pub fn extend_sorted<I>(&mut self, entries: I) -> Result<()>
        where I: IntoIterator<Item = (K, V)> {

        self.tree.borrow_mut().extend_sorted(entries)
    }

    /// Inserts every entry, or none of them if any key is rejected by the map's key policy.
    ///
    /// Unlike `Extend::extend`, which skips rejected keys, this returns `Error::NullKey` and
    /// leaves the map unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbmap::{Error, TreeMap};
    ///
    /// let mut map = TreeMap::builder().reject_null_keys().build();
    ///
    /// assert_eq!(map.try_extend(vec![(Some(1), "a"), (None, "b")]), Err(Error::NullKey));
    /// assert!(map.is_empty());
    ///
    /// assert_eq!(map.try_extend(vec![(Some(2), "b"), (Some(1), "a")]), Ok(()));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn try_extend<I>(&mut self, entries: I) -> Result<()>
        where I: IntoIterator<Item = (K, V)> {

        let entries: Vec<(K, V)> = entries.into_iter().collect();
        let mut tree = self.tree.borrow_mut();

        for (key, _) in &entries { tree.policy().admit(key)?; }
        for (key, value) in entries { tree.insert(key, value); }
        Ok(())
    }
}

impl<K, V, C> TreeMap<K, V, C> where C: Compare<K> {
    pub(crate) fn fmt_keys(&self, f: &mut fmt::Formatter) -> fmt::Result where K: Debug {
        f.debug_set().entries(self.tree.borrow().iter().map(|e| e.0)).finish()
    }
}

impl<K, V, C> Clone for TreeMap<K, V, C> where K: Clone, V: Clone, C: Compare<K> + Clone {
    fn clone(&self) -> Self { TreeMap::from_tree(self.tree.borrow().clone()) }
}

impl<K, V, C> Debug for TreeMap<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.tree.borrow().iter()).finish()
    }
}

impl<K, V, C> Default for TreeMap<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { TreeMap::with_cmp(Default::default()) }
}

/// Keys rejected by the map's key policy are skipped and logged at `debug` level. Use
/// [`TreeMap::try_extend`] to have them reported instead.
impl<K, V, C> Extend<(K, V)> for TreeMap<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, it: I) {
        for (k, v) in it {
            if let Err(error) = self.insert(k, v) {
                tracing::debug!(%error, "skipping entry during extend");
            }
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for TreeMap<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> IntoIterator for TreeMap<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Moves the entries out of the map in ascending key order. Any views of the map see
    /// it as empty afterwards.
    fn into_iter(self) -> IntoIter<K, V> {
        let entries = self.tree.borrow_mut().take_entries();
        entries
    }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C>
    where K: Clone, V: Clone, C: Compare<K> {

    type Item = Result<(K, V)>;
    type IntoIter = Iter<K, V, C>;
    fn into_iter(self) -> Iter<K, V, C> { self.iter() }
}

impl<K, V, C> PartialEq for TreeMap<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        let (l, r) = (self.tree.borrow(), other.tree.borrow());
        l.len() == r.len() && l.iter().zip(r.iter()).all(|(a, b)| {
            l.policy().cmp().compares_eq(a.0, b.0) && a.1 == b.1
        })
    }
}

impl<K, V, C> Eq for TreeMap<K, V, C> where V: Eq, C: Compare<K> {}

impl<K, V> PartialOrd for TreeMap<K, V> where K: Ord, V: PartialOrd {
    fn partial_cmp(&self, other: &TreeMap<K, V>) -> Option<Ordering> {
        self.tree.borrow().iter().partial_cmp(other.tree.borrow().iter())
    }
}

impl<K, V> Ord for TreeMap<K, V> where K: Ord, V: Ord {
    fn cmp(&self, other: &TreeMap<K, V>) -> Ordering {
        self.tree.borrow().iter().cmp(other.tree.borrow().iter())
    }
}

impl<K, V, C> Hash for TreeMap<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: Hasher>(&self, h: &mut H) {
        for e in self.tree.borrow().iter() { e.hash(h); }
    }
}
