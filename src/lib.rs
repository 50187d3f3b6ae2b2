//! Ordered maps and sets based on a red-black tree, with navigation by key, live range views
//! and fail-fast iteration.
//!
//! A [`TreeMap`] and every view or iterator taken from it share one tree. Views see every
//! later change to the map, and iterators detect structural changes made behind their back.
//! Keys are ordered by a [`compare::Compare`] comparator chosen when the map is built, which
//! defaults to the keys' natural order.
//!
//! # Examples
//!
//! ```
//! use rbmap::{Error, TreeMap};
//!
//! let mut map: TreeMap<_, _> = (1..=10).map(|k| (k, k * 10)).collect();
//! let view = map.sub_map(3, true, 10, true).unwrap();
//!
//! map.remove(&4);
//! assert_eq!(view.first_key(), Ok(3));
//! assert_eq!(view.higher_key(&3), Some(5));
//!
//! map.insert(4, 40).unwrap();
//! assert_eq!(view.higher_key(&3), Some(4));
//!
//! let mut it = map.iter();
//! it.next();
//! map.remove(&5);
//! assert_eq!(it.next(), Some(Err(Error::ConcurrentModification)));
//! ```

mod error;
mod node;
mod policy;

pub mod map;
pub mod set;

#[cfg(feature = "ordered_iter")] mod ordered_iter;
#[cfg(feature = "quickcheck")] mod quickcheck;

pub use error::{Error, Result};
pub use map::{Builder, SubMap, TreeMap};
pub use policy::Nullable;
pub use set::{SubSet, TreeSet};
