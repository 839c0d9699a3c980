use std::collections::{BTreeSet, HashSet};

use avl_bst::{BalancedTree, UnbalancedTree};
use quickcheck_macros::quickcheck;

use crate::{do_ops, matches_set, with_deletions, Op};

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = UnbalancedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    matches_set(&tree, &set) && tree.in_order().into_iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: UnbalancedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: UnbalancedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    with_deletions(UnbalancedTree::new(), &xs, &deletes)
}

#[quickcheck]
fn same_keys_as_balanced(ops: Vec<Op<i16>>) -> bool {
    let mut unbalanced = UnbalancedTree::new();
    let mut balanced = BalancedTree::new();
    do_ops(&ops, &mut unbalanced, &mut BTreeSet::new());
    do_ops(&ops, &mut balanced, &mut BTreeSet::new());

    unbalanced.in_order() == balanced.in_order() && unbalanced.len() == balanced.len()
}
