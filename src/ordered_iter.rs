use ::ordered_iter::{OrderedMapIterator, OrderedSetIterator};
use crate::{map, set};

impl<K, V> OrderedMapIterator for map::IntoIter<K, V> where K: Ord {
    type Key = K;
    type Val = V;
}

impl<T> OrderedSetIterator for set::IntoIter<T> where T: Ord {}
