use compare::{Compare, Natural};
use crate::error::Result;
use crate::node::Tree;
use crate::policy::{Nullable, Policy};
use crate::set::TreeSet;
use super::TreeMap;

/// Configures the ordering and key policy of a new map or set.
///
/// Acquire through [`TreeMap::builder`](struct.TreeMap.html#method.builder).
///
/// # Examples
///
/// ```
/// use compare::{Compare, natural};
/// use rbmap::{Error, TreeMap};
///
/// let set = TreeMap::builder()
///     .cmp(natural().rev())
///     .reject_null_keys()
///     .build_sorted_set(vec![Some(3), Some(2), Some(1)])
///     .unwrap();
///
/// assert_eq!(set.first(), Ok(Some(3)));
///
/// let map = TreeMap::builder().reject_null_keys().build_sorted(vec![(None::<i32>, "a")]);
/// assert_eq!(map.err(), Some(Error::NullKey));
/// ```
pub struct Builder<K, C = Natural<K>> {
    policy: Policy<K, C>,
}

impl<K> Builder<K> where K: Ord {
    /// Creates a builder for maps in the natural order of their keys, accepting every key.
    pub fn new() -> Self { Builder { policy: Policy::new(compare::natural()) } }
}

impl<K> Default for Builder<K> where K: Ord {
    fn default() -> Self { Builder::new() }
}

impl<K, C> Builder<K, C> where C: Compare<K> {
    /// Orders keys with the given comparator instead.
    pub fn cmp<D>(self, cmp: D) -> Builder<K, D> where D: Compare<K> {
        Builder { policy: self.policy.with_cmp(cmp) }
    }

    /// Makes insertions of null keys fail with `Error::NullKey` instead of storing them.
    ///
    /// `Extend` and `FromIterator` cannot fail, so they skip null keys, logging each at
    /// `debug` level. `try_extend` on maps and sets reports them instead.
    pub fn reject_null_keys(self) -> Self where K: Nullable {
        Builder { policy: self.policy.reject_null_keys() }
    }

    /// Creates an empty map.
    pub fn build<V>(self) -> TreeMap<K, V, C> { TreeMap::from_tree(Tree::new(self.policy)) }

    /// Creates a map from entries sorted in strictly ascending key order, in linear time.
    pub fn build_sorted<V, I>(self, entries: I) -> Result<TreeMap<K, V, C>>
        where I: IntoIterator<Item = (K, V)> {

        Tree::from_sorted(self.policy, entries).map(TreeMap::from_tree)
    }

    /// Creates an empty set.
    pub fn build_set(self) -> TreeSet<K, C> { TreeSet::from_map(self.build()) }

    /// Creates a set from items sorted in strictly ascending order, in linear time.
    pub fn build_sorted_set<I>(self, items: I) -> Result<TreeSet<K, C>>
        where I: IntoIterator<Item = K> {

        self.build_sorted(items.into_iter().map(|item| (item, ()))).map(TreeSet::from_map)
    }
}
