//! Errors reported by maps, sets, views and their iterators.

use thiserror::Error;

/// A specialized `Result` type for map and set operations.
pub type Result<T> = ::std::result::Result<T, Error>;

/// The ways an operation on a map, set, view or iterator can fail.
///
/// Every error is reported before the tree is touched, so a failed operation leaves the
/// container exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Entries handed to a bulk build were not in strictly ascending order under the
    /// map's comparator.
    #[error("entries are not in strictly ascending order")]
    Unordered,

    /// The key was rejected by the map's null-key policy.
    ///
    /// See [`Builder::reject_null_keys`](crate::map::Builder::reject_null_keys).
    #[error("null key rejected by the map's key policy")]
    NullKey,

    /// A key lies outside a view's window, or a requested range is inverted or not
    /// contained in the view it is taken from.
    #[error("key out of range")]
    OutOfBounds,

    /// The backing tree was structurally modified after the iterator was created, other
    /// than through the iterator's own `remove`.
    #[error("map was structurally modified during iteration")]
    ConcurrentModification,

    /// The map, set or view is empty.
    #[error("container is empty")]
    Empty,

    /// An iterator's `remove` was called before `next`, or twice for the same entry.
    #[error("no entry to remove")]
    IllegalState,
}
