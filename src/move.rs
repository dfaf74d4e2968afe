use crate::cube::*;

/// Faces in the order their turns are offered as actions.
const TURN_ORDER: [Face; 6] = [
    Face::Up,
    Face::Down,
    Face::Left,
    Face::Right,
    Face::Front,
    Face::Back,
];

/// A quarter turn of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Move {
    /// All twelve quarter turns: clockwise `U D L R F B`, then their primes.
    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all::<Direction>().flat_map(|direction| {
            TURN_ORDER
                .into_iter()
                .map(move |face| Move { face, direction })
        })
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    #[cfg(test)]
    pub fn reverse(self) -> Move {
        let direction = match self.direction {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        };
        Move { direction, ..self }
    }

    /// How many clockwise quarter turns this move amounts to.
    pub fn quarter_turns(self) -> usize {
        match self.direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => 3,
        }
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.face)?;
        if let Direction::CounterClockwise = self.direction {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face = match chars.next() {
            Some(c) => Face::from_char(c)?,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let direction = match chars.next() {
            None => Direction::Clockwise,
            Some('\'') => Direction::CounterClockwise,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        if let Some(c) = chars.next() {
            return Err(anyhow::anyhow!("Trailing {} after move {}", c, s));
        }

        Ok(Move { face, direction })
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        use rand::Rng;

        let all = Move::all().collect::<Vec<_>>();
        all[g.gen_range(0, all.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_distinct_moves_in_action_order() {
        let labels = Move::all().map(|m| m.to_string()).collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["U", "D", "L", "R", "F", "B", "U'", "D'", "L'", "R'", "F'", "B'"]
        );
    }

    #[test]
    fn parses_what_it_prints() {
        for m in Move::all() {
            assert_eq!(m.to_string().parse::<Move>().unwrap(), m);
        }
    }

    #[test]
    fn parses_lowercase_faces() {
        assert_eq!("r'".parse::<Move>().unwrap().to_string(), "R'");
    }

    #[test]
    fn parse_sequence_splits_on_whitespace() {
        let moves = Move::parse_sequence(" U  R'\tF ").unwrap();
        assert_eq!(
            moves.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
            ["U", "R'", "F"]
        );
    }

    #[test]
    fn rejects_half_turns_and_junk() {
        assert!("U2".parse::<Move>().is_err());
        assert!("X".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
        assert!("U''".parse::<Move>().is_err());
    }

    #[test]
    fn reverse_flips_direction() {
        let m: Move = "F".parse().unwrap();
        assert_eq!(m.reverse().to_string(), "F'");
        assert_eq!(m.reverse().reverse(), m);
    }
}
