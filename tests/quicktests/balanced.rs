use std::collections::{BTreeSet, HashSet};

use avl_bst::BalancedTree;
use quickcheck_macros::quickcheck;

use crate::{do_ops, matches_set, with_deletions, Op};

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BalancedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    matches_set(&tree, &set) && tree.in_order().into_iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BalancedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BalancedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    with_deletions(BalancedTree::new(), &xs, &deletes)
}

#[quickcheck]
fn in_order_is_strictly_increasing(ops: Vec<Op<i16>>) -> bool {
    let mut tree = BalancedTree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    tree.in_order().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<u32>) -> bool {
    let tree: BalancedTree<_> = xs.into_iter().collect();

    tree.height() as f64 <= 1.44 * ((tree.len() + 2) as f64).log2()
}
