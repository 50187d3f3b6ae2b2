#![cfg(feature = "quickcheck")]

use compare::Compare;
use quickcheck::{Arbitrary, Gen};
use rbmap::TreeMap;

pub fn entries<K, V, C>(map: &TreeMap<K, V, C>) -> Vec<(K, V)>
    where K: Clone, V: Clone, C: Compare<K> {

    map.iter().collect::<Result<_, _>>().unwrap()
}

pub trait Remove<K, C> where C: Compare<K> {
    fn remove<V: Clone>(&self, map: &mut TreeMap<K, V, C>) -> Option<(K, V)>;
}

macro_rules! remove {
    ($K:ty, $V:ty, $R:ty) => {
        mod remove {
            use crate::{Remove, entries};
            use quickcheck::{TestResult, quickcheck};
            use rbmap::TreeMap;

            #[test]
            fn removes_key() {
                fn test(mut map: TreeMap<$K, $V>, removal: $R) -> TestResult {
                    match removal.remove(&mut map) {
                        None => TestResult::discard(),
                        Some((key, _)) => TestResult::from_bool(
                            !map.contains_key(&key) &&
                            map.get(&key).is_none() &&
                            map.keys().all(|k| k != Ok(key))
                        ),
                    }
                }

                quickcheck(test as fn(TreeMap<$K, $V>, $R) -> TestResult);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut map: TreeMap<$K, $V>, removal: $R) -> bool {
                    let old_map = map.clone();

                    match removal.remove(&mut map) {
                        None => map == old_map,
                        Some((key, _)) =>
                            entries(&map) ==
                                entries(&old_map).into_iter().filter(|e| e.0 != key)
                                    .collect::<Vec<_>>(),
                    }
                }

                quickcheck(test as fn(TreeMap<$K, $V>, $R) -> bool);
            }

            #[test]
            fn sets_len() {
                fn test(mut map: TreeMap<$K, $V>, removal: $R) -> bool {
                    let old_len = map.len();

                    match removal.remove(&mut map) {
                        None => map.len() == old_len,
                        Some(_) => map.len() == old_len - 1,
                    }
                }

                quickcheck(test as fn(TreeMap<$K, $V>, $R) -> bool);
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Find<Q>(Q);

impl<Q> Arbitrary for Find<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { Find(Q::arbitrary(gen)) }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> { Box::new(self.0.shrink().map(Find)) }
}

impl<Q, K, C> Remove<K, C> for Find<Q> where C: Compare<K> + Compare<Q, K> {
    fn remove<V: Clone>(&self, map: &mut TreeMap<K, V, C>) -> Option<(K, V)> {
        map.remove_entry(&self.0)
    }
}

pub trait Insert<K> {
    fn key(&self) -> K;
    fn insert<V, C>(self, map: &mut TreeMap<K, V, C>, value: V) -> Option<V> where C: Compare<K>;
}

impl<K> Insert<K> for Find<K> where K: Clone {
    fn key(&self) -> K { self.0.clone() }

    fn insert<V, C>(self, map: &mut TreeMap<K, V, C>, value: V) -> Option<V> where C: Compare<K> {
        map.insert(self.0, value).unwrap()
    }
}

macro_rules! insert {
    ($K:ty, $V:ty, $R:ty) => {
        mod insert {
            use crate::{Insert, entries};
            use quickcheck::quickcheck;
            use rbmap::TreeMap;

            #[test]
            fn sets_len() {
                fn test(mut map: TreeMap<$K, $V>, r: $R, value: $V) -> bool {
                    let old_len = map.len();

                    if r.insert(&mut map, value).is_some() {
                        map.len() == old_len
                    } else {
                        map.len() == old_len + 1
                    }
                }

                quickcheck(test as fn(TreeMap<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn inserts_key() {
                fn test(mut map: TreeMap<$K, $V>, r: $R, value: $V) -> bool {
                    let key = r.key();
                    r.insert(&mut map, value);

                    map.contains_key(&key) &&
                    map.get(&key) == Some(value) &&
                    entries(&map).into_iter().filter(|e| e.0 == key).collect::<Vec<_>>() ==
                        [(key, value)]
                }

                quickcheck(test as fn(TreeMap<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut map: TreeMap<$K, $V>, r: $R, value: $V) -> bool {
                    let old_map = map.clone();
                    let key = r.key();
                    r.insert(&mut map, value);

                    entries(&map).into_iter().filter(|e| e.0 != key).collect::<Vec<_>>() ==
                        entries(&old_map).into_iter().filter(|e| e.0 != key).collect::<Vec<_>>()
                }

                quickcheck(test as fn(TreeMap<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn returns_old_value() {
                fn test(mut map: TreeMap<$K, $V>, r: $R, value: $V) -> bool {
                    let key = r.key();
                    map.get(&key) == r.insert(&mut map, value)
                }

                quickcheck(test as fn(TreeMap<$K, $V>, $R, $V) -> bool);
            }
        }
    }
}

mod find {
    insert!{u32, u16, crate::Find<u32>}
    remove!{u32, u16, crate::Find<u32>}
}

#[derive(Clone, Debug)]
pub struct Last;

impl Arbitrary for Last { fn arbitrary(_gen: &mut Gen) -> Self { Last } }

impl<K, C> Remove<K, C> for Last where C: Compare<K> {
    fn remove<V: Clone>(&self, map: &mut TreeMap<K, V, C>) -> Option<(K, V)> {
        map.poll_last().ok()
    }
}

mod last {
    use crate::entries;
    use quickcheck::quickcheck;
    use rbmap::TreeMap;

    #[test]
    fn agrees_with_iter() {
        fn test(map: TreeMap<u32, u16>) -> bool {
            map.last_entry() == entries(&map).last().cloned() &&
            map.last_key().ok() == map.descending_iter().next().map(|e| e.unwrap().0)
        }

        quickcheck(test as fn(TreeMap<u32, u16>) -> bool);
    }

    remove!{u32, u16, crate::Last}
}

#[derive(Clone, Debug)]
pub struct First;

impl Arbitrary for First { fn arbitrary(_gen: &mut Gen) -> Self { First } }

impl<K, C> Remove<K, C> for First where C: Compare<K> {
    fn remove<V: Clone>(&self, map: &mut TreeMap<K, V, C>) -> Option<(K, V)> {
        map.poll_first().ok()
    }
}

mod first {
    use crate::entries;
    use quickcheck::quickcheck;
    use rbmap::TreeMap;

    #[test]
    fn agrees_with_iter() {
        fn test(map: TreeMap<u32, u16>) -> bool {
            map.first_entry() == entries(&map).first().cloned() &&
            map.first_key().ok() == map.keys().next().map(Result::unwrap)
        }

        quickcheck(test as fn(TreeMap<u32, u16>) -> bool);
    }

    remove!{u32, u16, crate::First}
}

/// Removes the ceiling (if inclusive) or higher entry of a key.
#[derive(Clone, Debug)]
pub struct Succ<Q>(Q, bool);

impl<Q> Arbitrary for Succ<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { Succ(Q::arbitrary(gen), bool::arbitrary(gen)) }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((self.0.clone(), self.1).shrink().map(|(key, inc)| Succ(key, inc)))
    }
}

impl<Q, K, C> Remove<K, C> for Succ<Q> where K: Clone, C: Compare<K> + Compare<Q, K> {
    fn remove<V: Clone>(&self, map: &mut TreeMap<K, V, C>) -> Option<(K, V)> {
        let key = if self.1 { map.ceiling_key(&self.0) } else { map.higher_key(&self.0) };
        map.remove_entry(&key?)
    }
}

mod succ {
    use crate::entries;
    use quickcheck::quickcheck;
    use rbmap::TreeMap;

    #[test]
    fn exclusive_agrees_with_iter() {
        fn test(map: TreeMap<u32, u16>, key: u32) -> bool {
            map.higher_entry(&key) == entries(&map).into_iter().find(|e| e.0 > key)
        }

        quickcheck(test as fn(TreeMap<u32, u16>, u32) -> bool);
    }

    #[test]
    fn inclusive_agrees_with_iter() {
        fn test(map: TreeMap<u32, u16>, key: u32) -> bool {
            map.ceiling_entry(&key) == entries(&map).into_iter().find(|e| e.0 >= key)
        }

        quickcheck(test as fn(TreeMap<u32, u16>, u32) -> bool);
    }

    remove!{u32, u16, crate::Succ<u32>}
}

/// Removes the floor (if inclusive) or lower entry of a key.
#[derive(Clone, Debug)]
pub struct Pred<Q>(Q, bool);

impl<Q> Arbitrary for Pred<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { Pred(Q::arbitrary(gen), bool::arbitrary(gen)) }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((self.0.clone(), self.1).shrink().map(|(key, inc)| Pred(key, inc)))
    }
}

impl<Q, K, C> Remove<K, C> for Pred<Q> where K: Clone, C: Compare<K> + Compare<Q, K> {
    fn remove<V: Clone>(&self, map: &mut TreeMap<K, V, C>) -> Option<(K, V)> {
        let key = if self.1 { map.floor_key(&self.0) } else { map.lower_key(&self.0) };
        map.remove_entry(&key?)
    }
}

mod pred {
    use crate::entries;
    use quickcheck::quickcheck;
    use rbmap::TreeMap;

    #[test]
    fn exclusive_agrees_with_iter() {
        fn test(map: TreeMap<u32, u16>, key: u32) -> bool {
            map.lower_entry(&key) == entries(&map).into_iter().rev().find(|e| e.0 < key)
        }

        quickcheck(test as fn(TreeMap<u32, u16>, u32) -> bool);
    }

    #[test]
    fn inclusive_agrees_with_iter() {
        fn test(map: TreeMap<u32, u16>, key: u32) -> bool {
            map.floor_entry(&key) == entries(&map).into_iter().rev().find(|e| e.0 <= key)
        }

        quickcheck(test as fn(TreeMap<u32, u16>, u32) -> bool);
    }

    remove!{u32, u16, crate::Pred<u32>}
}

/// Removes the `n`th entry (modulo the map's length) through an iterator.
#[derive(Clone, Debug)]
pub struct IterRemove(usize, bool);

impl Arbitrary for IterRemove {
    fn arbitrary(gen: &mut Gen) -> Self { IterRemove(usize::arbitrary(gen), bool::arbitrary(gen)) }
}

impl<K, C> Remove<K, C> for IterRemove where K: Clone, C: Compare<K> {
    fn remove<V: Clone>(&self, map: &mut TreeMap<K, V, C>) -> Option<(K, V)> {
        if map.is_empty() { return None; }

        let mut it = if self.1 { map.descending_iter() } else { map.iter() };
        for _ in 0..=self.0 % map.len() { it.next(); }
        it.remove().ok()
    }
}

mod iter_remove {
    remove!{u32, u16, crate::IterRemove}
}

mod iter {
    use crate::entries;
    use quickcheck::quickcheck;
    use rbmap::TreeMap;

    #[test]
    fn ascends() {
        fn test(map: TreeMap<u32, u16>) -> bool {
            let entries = entries(&map);
            entries.len() == map.len() && entries.windows(2).all(|e| e[0].0 < e[1].0)
        }

        quickcheck(test as fn(TreeMap<u32, u16>) -> bool);
    }

    #[test]
    fn descending_reverses() {
        fn test(map: TreeMap<u32, u16>) -> bool {
            let desc: Vec<_> = map.descending_iter().collect::<Result<_, _>>().unwrap();
            desc.into_iter().eq(entries(&map).into_iter().rev())
        }

        quickcheck(test as fn(TreeMap<u32, u16>) -> bool);
    }

    #[test]
    fn into_iter_agrees() {
        fn test(map: TreeMap<u32, u16>) -> bool {
            let entries = entries(&map);
            map.into_iter().eq(entries)
        }

        quickcheck(test as fn(TreeMap<u32, u16>) -> bool);
    }

    #[test]
    fn fails_fast_on_structural_change() {
        fn test(mut map: TreeMap<u32, u16>, key: u32) -> bool {
            let mut it = map.iter();
            let structural = !map.contains_key(&key);
            map.insert(key, 0).unwrap();

            match it.next() {
                Some(Err(_)) => structural && it.next().is_none(),
                Some(Ok(_)) => !structural,
                None => structural && map.len() == 1,
            }
        }

        quickcheck(test as fn(TreeMap<u32, u16>, u32) -> bool);
    }
}

mod sorted {
    use crate::entries;
    use quickcheck::quickcheck;
    use rbmap::TreeMap;

    #[test]
    fn bulk_build_agrees_with_inserts() {
        fn test(map: TreeMap<u32, u16>) -> bool {
            let built = TreeMap::from_sorted(entries(&map)).unwrap();
            built == map && entries(&built) == entries(&map)
        }

        quickcheck(test as fn(TreeMap<u32, u16>) -> bool);
    }

    #[test]
    fn extend_sorted_agrees_with_extend() {
        fn test(mut map: TreeMap<u32, u16>, other: TreeMap<u32, u16>) -> bool {
            let mut expected = map.clone();
            expected.extend(entries(&other));
            map.extend_sorted(entries(&other)).unwrap();
            map == expected
        }

        quickcheck(test as fn(TreeMap<u32, u16>, TreeMap<u32, u16>) -> bool);
    }
}

mod range {
    use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};
    use rbmap::{Error, TreeMap};
    use std::ops::Bound::*;
    use crate::entries;

    #[derive(Clone, Debug)]
    struct Bound<T>(std::ops::Bound<T>);

    impl<T> Bound<T> {
        fn admits(&self, key: &T, above: bool) -> bool where T: Ord {
            match self.0 {
                Included(ref t) => if above { key >= t } else { key <= t },
                Excluded(ref t) => if above { key > t } else { key < t },
                Unbounded => true,
            }
        }

        fn key(&self) -> Option<&T> {
            match self.0 {
                Included(ref t) | Excluded(ref t) => Some(t),
                Unbounded => None,
            }
        }
    }

    impl<T> Arbitrary for Bound<T> where T: Arbitrary {
        fn arbitrary(gen: &mut Gen) -> Self {
            Bound(match u8::arbitrary(gen) % 3 {
                0 => Included(T::arbitrary(gen)),
                1 => Excluded(T::arbitrary(gen)),
                _ => Unbounded,
            })
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            match self.0 {
                Included(ref t) => Box::new(t.shrink().map(|t| Bound(Included(t)))),
                Excluded(ref t) => Box::new(t.shrink().map(|t| Bound(Excluded(t)))),
                Unbounded => Box::new(None.into_iter()),
            }
        }
    }

    fn inverted(lo: &Bound<u32>, hi: &Bound<u32>) -> bool {
        match (lo.key(), hi.key()) {
            (Some(l), Some(h)) => l > h,
            _ => false,
        }
    }

    #[test]
    fn range() {
        fn test(map: TreeMap<u32, u16>, lo: Bound<u32>, hi: Bound<u32>) -> bool {
            let expected: Vec<_> = entries(&map).into_iter()
                .filter(|e| lo.admits(&e.0, true) && hi.admits(&e.0, false))
                .collect();

            match map.range(lo.0.clone(), hi.0.clone()) {
                Err(error) => error == Error::OutOfBounds && inverted(&lo, &hi),
                Ok(view) => {
                    let asc: Vec<_> = view.iter().collect::<Result<_, _>>().unwrap();
                    let desc: Vec<_> = view.descending_iter().collect::<Result<_, _>>().unwrap();

                    !inverted(&lo, &hi) &&
                    view.len() == expected.len() &&
                    asc == expected &&
                    desc.into_iter().eq(expected.into_iter().rev())
                }
            }
        }

        quickcheck(test as fn(TreeMap<u32, u16>, Bound<u32>, Bound<u32>) -> bool);
    }

    #[test]
    fn navigation_stays_in_view() {
        fn test(map: TreeMap<u32, u16>, lo: Bound<u32>, hi: Bound<u32>, key: u32) -> TestResult {
            let view = match map.range(lo.0.clone(), hi.0.clone()) {
                Ok(view) => view,
                Err(_) => return TestResult::discard(),
            };

            let keys: Vec<u32> = entries(&map).into_iter().map(|e| e.0)
                .filter(|k| lo.admits(k, true) && hi.admits(k, false))
                .collect();

            let desc = view.descending_map();

            TestResult::from_bool(
                view.floor_key(&key) == keys.iter().rev().find(|&&k| k <= key).cloned() &&
                view.lower_key(&key) == keys.iter().rev().find(|&&k| k < key).cloned() &&
                view.ceiling_key(&key) == keys.iter().find(|&&k| k >= key).cloned() &&
                view.higher_key(&key) == keys.iter().find(|&&k| k > key).cloned() &&
                desc.floor_key(&key) == view.ceiling_key(&key) &&
                desc.higher_key(&key) == view.lower_key(&key) &&
                desc.first_key().ok() == keys.last().cloned() &&
                view.first_key().ok() == keys.first().cloned()
            )
        }

        quickcheck(test as fn(TreeMap<u32, u16>, Bound<u32>, Bound<u32>, u32) -> TestResult);
    }

    #[test]
    fn clear_removes_only_the_view() {
        fn test(map: TreeMap<u32, u16>, lo: Bound<u32>, hi: Bound<u32>) -> TestResult {
            let mut view = match map.range(lo.0.clone(), hi.0.clone()) {
                Ok(view) => view,
                Err(_) => return TestResult::discard(),
            };

            let expected: Vec<_> = entries(&map).into_iter()
                .filter(|e| !(lo.admits(&e.0, true) && hi.admits(&e.0, false)))
                .collect();

            view.clear();
            TestResult::from_bool(view.is_empty() && entries(&map) == expected)
        }

        quickcheck(test as fn(TreeMap<u32, u16>, Bound<u32>, Bound<u32>) -> TestResult);
    }
}
