//! The ordering policy shared by a tree and all of its views.

use compare::Compare;
use std::cmp::Ordering;
use std::fmt;
use crate::error::{Error, Result};

/// Keys with a distinguished "null" value.
///
/// Only keys of such types can be used with
/// [`Builder::reject_null_keys`](crate::map::Builder::reject_null_keys).
pub trait Nullable {
    /// Returns `true` if this key is the null value.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool { self.is_none() }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool { <*const T>::is_null(*self) }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool { <*mut T>::is_null(*self) }
}

/// A comparator plus the key admission rule, fixed when the map is constructed.
pub struct Policy<K, C> {
    cmp: C,
    null_check: Option<fn(&K) -> bool>,
}

impl<K, C> Policy<K, C> {
    pub fn new(cmp: C) -> Self { Policy { cmp: cmp, null_check: None } }

    /// Replaces the comparator, keeping the admission rule.
    pub fn with_cmp<D>(self, cmp: D) -> Policy<K, D> {
        Policy { cmp: cmp, null_check: self.null_check }
    }

    pub fn reject_null_keys(mut self) -> Self where K: Nullable {
        self.null_check = Some(<K as Nullable>::is_null);
        self
    }

    pub fn rejects_null_keys(&self) -> bool { self.null_check.is_some() }

    pub fn cmp(&self) -> &C { &self.cmp }

    pub fn compare<L: ?Sized, R: ?Sized>(&self, l: &L, r: &R) -> Ordering
        where C: Compare<L, R> {

        self.cmp.compare(l, r)
    }

    /// Checks that the key may be stored under this policy.
    pub fn admit(&self, key: &K) -> Result<()> {
        match self.null_check {
            Some(is_null) if is_null(key) => Err(Error::NullKey),
            _ => Ok(()),
        }
    }
}

impl<K, C> Clone for Policy<K, C> where C: Clone {
    fn clone(&self) -> Self { Policy { cmp: self.cmp.clone(), null_check: self.null_check } }
}

impl<K, C> fmt::Debug for Policy<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Policy").field("rejects_null_keys", &self.rejects_null_keys()).finish()
    }
}
