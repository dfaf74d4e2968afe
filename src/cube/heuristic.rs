use crate::prelude::*;

/// Most facelets any single turn could be imagined to fix.
pub const GENEROUS_TURN_FOOTPRINT: Cost = 24;

/// Facelets a quarter turn actually relocates: 8 on the face, 12 around it.
pub const TURN_FOOTPRINT: Cost = 20;

pub fn misplaced_facelets(cube: &Cube) -> Cost {
    cube.facelets()
        .iter()
        .zip(SOLVED.facelets())
        .filter(|(have, want)| have != want)
        .count() as Cost
}

/// Misplaced facelets over 24, rounded up.
pub fn generous_footprint(node: &Node<Cube>) -> Cost {
    misplaced_facelets(&node.state).div_ceil(GENEROUS_TURN_FOOTPRINT)
}

/// Misplaced facelets over 20, rounded up. A turn fixes at most the 20
/// facelets it moves, so this is a lower bound and never below
/// [`generous_footprint`].
pub fn turn_footprint(node: &Node<Cube>) -> Cost {
    misplaced_facelets(&node.state).div_ceil(TURN_FOOTPRINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(moves: &str) -> Node<Cube> {
        Node::root(cube_with_moves(moves))
    }

    #[test]
    fn solved_estimates_zero() {
        assert_eq!(misplaced_facelets(&Cube::solved()), 0);
        assert_eq!(generous_footprint(&Node::root(Cube::solved())), 0);
        assert_eq!(turn_footprint(&Node::root(Cube::solved())), 0);
    }

    #[test]
    fn one_turn_misplaces_the_twelve_strip_facelets() {
        for m in Move::all() {
            assert_eq!(misplaced_facelets(&Cube::solved().apply(m)), 12);
        }
    }

    #[test]
    fn up_then_right() {
        let n = node("U R");
        assert_eq!(misplaced_facelets(&n.state), 22);
        assert_eq!(generous_footprint(&n), 1);
        assert_eq!(turn_footprint(&n), 2);
    }

    #[test]
    fn admissible_within_three_turns() {
        let distances = cube_distances(3);
        assert!(distances.len() > 1000);
        for (cube, distance) in distances {
            let n = Node::root(cube);
            let loose = generous_footprint(&n);
            let tight = turn_footprint(&n);
            assert!(loose <= tight, "{:?}", cube);
            assert!(tight <= distance, "{:?} is {} away, estimated {}", cube, distance, tight);
        }
    }

    #[quickcheck]
    fn turn_footprint_dominates(scramble: Vec<Move>) -> bool {
        let n = Node::root(Cube::solved().apply_all(scramble));
        generous_footprint(&n) <= turn_footprint(&n)
    }

    #[quickcheck]
    fn one_turn_changes_estimate_by_at_most_one(scramble: Vec<Move>, m: Move) -> bool {
        let before = Node::root(Cube::solved().apply_all(scramble));
        let after = Node::root(before.state.apply(m));
        turn_footprint(&before) <= turn_footprint(&after) + 1
    }
}
