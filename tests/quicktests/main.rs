use std::collections::BTreeSet;

use avl_bst::SearchTree;
use quickcheck::{Arbitrary, Gen};

mod balanced;
mod unbalanced;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Delete the K from the tree
    Delete(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Delete(K::arbitrary(g))
        }
    }
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
pub(crate) fn do_ops<K, T>(ops: &[Op<K>], tree: &mut T, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
    T: SearchTree<K>,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                tree.delete(k);
                set.remove(k);
            }
        }
    }
}

/// Checks every key in `-128..=127` against the set, so keys that were
/// never touched are covered as well.
pub(crate) fn matches_set<T: SearchTree<i8>>(tree: &T, set: &BTreeSet<i8>) -> bool {
    tree.len() == set.len() && (i8::MIN..=i8::MAX).all(|k| tree.search(&k) == set.contains(&k))
}

/// Inserts every key, deletes every key in `deletes`, and checks that exactly
/// the survivors remain and that each delete shrank the tree by one at most.
pub(crate) fn with_deletions<T: SearchTree<i8>>(mut tree: T, xs: &[i8], deletes: &[i8]) -> bool {
    for x in xs {
        tree.insert(*x);
    }

    let mut still_present: BTreeSet<_> = xs.iter().copied().collect();
    for delete in deletes {
        let before = tree.len();
        tree.delete(delete);
        let expected = before - usize::from(still_present.remove(delete));
        if tree.len() != expected || tree.search(delete) {
            return false;
        }
    }

    still_present.iter().all(|x| tree.search(x))
}
