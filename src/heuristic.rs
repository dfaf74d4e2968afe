use crate::prelude::*;

// Implementations must be admissible: never above the true remaining cost.
// Nothing checks this at runtime; the tests of each model do.
pub trait Heuristic<S> {
    fn estimate(&self, node: &Node<S>) -> Cost;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&Node<S>) -> Cost,
{
    fn estimate(&self, node: &Node<S>) -> Cost {
        (self)(node)
    }
}

/// Uninformed estimate. A* with it degenerates to uniform-cost search.
pub fn zero<S>(_node: &Node<S>) -> Cost {
    0
}
