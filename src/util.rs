/// The number of nodes in a Fibonacci tree of the given height. That is, the fewest nodes an AVL
/// tree of that height can hold: `F(0) = 0`, `F(1) = 1` and `F(h) = 1 + F(h - 1) + F(h - 2)`.
pub(crate) fn fibonacci_tree_size(height: usize) -> usize {
    let (mut shorter, mut taller) = (0usize, 1usize);
    if height == 0 {
        return shorter;
    }

    for _ in 1..height {
        let next = taller.saturating_add(shorter).saturating_add(1);
        shorter = taller;
        taller = next;
    }
    taller
}
