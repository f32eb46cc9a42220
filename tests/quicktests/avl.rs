use dendrology::avl::Tree;

use std::collections::BTreeSet;

/// Builds a tree from `xs` checking the invariants after every insert.
fn checked_tree(xs: &[i16]) -> Tree<i16> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
        assert_eq!(tree.check_invariants(), Ok(()));
    }
    tree
}

#[quickcheck]
fn invariants_hold_after_every_insert(xs: Vec<i16>) -> bool {
    let tree = checked_tree(&xs);
    let distinct: BTreeSet<_> = xs.iter().collect();

    tree.size() == distinct.len()
}

#[quickcheck]
fn invariants_hold_after_every_remove(xs: Vec<i16>, removes: Vec<i16>) -> bool {
    let mut tree = checked_tree(&xs);
    let mut set: BTreeSet<_> = xs.into_iter().collect();
    for x in &removes {
        if tree.remove(x) != set.remove(x) {
            return false;
        }
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    tree.iter().eq(set.iter())
}

#[quickcheck]
fn removing_everything_empties_the_tree(xs: Vec<i16>, shuffle: Vec<u16>) -> bool {
    let mut tree = checked_tree(&xs);

    // Remove in an arbitrary order: sort the distinct values by the keys quickcheck gave us.
    let values: BTreeSet<_> = xs.iter().copied().collect();
    let keys = shuffle.iter().copied().chain(std::iter::repeat(0));
    let mut keyed: Vec<(u16, i16)> = keys.zip(values).collect();
    keyed.sort_by_key(|(key, _)| *key);

    for (_, x) in keyed {
        if !tree.remove(&x) {
            return false;
        }
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    tree.is_empty() && tree.size() == 0 && tree.height() == 0
}

#[quickcheck]
fn range_report_matches_a_filtered_walk(xs: Vec<i16>, k1: i16, k2: i16) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let expected: Vec<&i16> = tree.iter().filter(|x| k1 <= **x && **x <= k2).collect();

    tree.range_report(&k1, &k2) == expected
}

#[quickcheck]
fn height_stays_within_avl_bounds(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let n = tree.size();
    let height = tree.height();

    // ceil(lg(n + 1)) is the number of bits in n.
    let lower = (usize::BITS - n.leading_zeros()) as usize;
    let upper = 1.44 * ((n + 2) as f64).log2();

    lower <= height && height as f64 <= upper
}

#[quickcheck]
fn traverse_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut visited = Vec::new();
    tree.traverse(|x| visited.push(*x));

    visited.len() == tree.size() && visited.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn paths_start_at_the_root_and_end_at_ascending_leaves(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let paths = tree.gen_paths();

    let leaves: Vec<_> = paths.iter().filter_map(|path| path.last()).collect();
    paths.iter().all(|path| path.first().copied() == tree.root())
        && paths.iter().all(|path| path.len() <= tree.height())
        && leaves.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn full_count_never_exceeds_half(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    2 * tree.full_count() < tree.size().max(1)
}

/// Appends `(depth, key)` for every node of a Fibonacci tree of the given height, keys assigned
/// in order.
fn fibonacci_keys(height: usize, depth: usize, next_key: &mut i32, out: &mut Vec<(usize, i32)>) {
    if height == 0 {
        return;
    }
    fibonacci_keys(height - 1, depth + 1, next_key, out);
    out.push((depth, *next_key));
    *next_key += 1;
    if height >= 2 {
        fibonacci_keys(height - 2, depth + 1, next_key, out);
    }
}

#[test]
fn fibonacci_trees_are_recognised() {
    let expected_sizes = [0, 1, 2, 4, 7, 12, 20, 33, 54, 88, 143];
    for (height, expected_size) in expected_sizes.iter().enumerate() {
        let mut keys = Vec::new();
        fibonacci_keys(height, 0, &mut 0, &mut keys);

        // Level by level, so no insert ever unbalances the tree.
        keys.sort_by_key(|(depth, _)| *depth);
        let mut tree = Tree::new();
        for (_, key) in &keys {
            tree.insert(*key);
        }

        assert_eq!(tree.size(), *expected_size);
        assert_eq!(tree.height(), height);
        assert!(tree.is_fibonacci(), "height {}", height);

        if height >= 2 {
            tree.insert(-1);
            assert!(!tree.is_fibonacci(), "height {} plus one", height);
        }
    }
}

#[test]
fn documented_example_paths() {
    let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert_eq!(tree.root(), Some(&5));
    let paths = tree.gen_paths();
    assert_eq!(paths.len(), 4);
    assert!(paths.iter().all(|path| path[0] == &5));
    assert_eq!(
        paths.iter().map(|path| *path[path.len() - 1]).collect::<Vec<_>>(),
        [1, 4, 7, 9]
    );
}
