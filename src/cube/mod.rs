use crate::prelude::*;

mod heuristic;
mod surface;

pub use heuristic::*;

pub const STICKERS_PER_FACE: usize = 9;
pub const FACELETS: usize = 6 * STICKERS_PER_FACE;

/// Color code of every facelet, face by face in [`Face`] order, each face
/// row-major as seen in the unfolded net.
pub type Facelets = [u8; FACELETS];

/// The solved cube: facelet `i` shows color `i / 9`.
pub const SOLVED: Cube = Cube(solved_facelets());

const fn solved_facelets() -> Facelets {
    let mut facelets = [0; FACELETS];
    let mut i = 0;
    while i < FACELETS {
        facelets[i] = (i / STICKERS_PER_FACE) as u8;
        i += 1;
    }
    facelets
}

/// Faces in facelet order. A face's index is also the color it shows when
/// solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, enum_iterator::Sequence)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl Face {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Facelet indices of this face, row-major.
    pub fn facelets(self) -> core::ops::Range<usize> {
        let start = self.index() * STICKERS_PER_FACE;
        start..start + STICKERS_PER_FACE
    }

    pub fn from_char(c: char) -> anyhow::Result<Face> {
        match c {
            'F' | 'f' => Ok(Face::Front),
            'R' | 'r' => Ok(Face::Right),
            'U' | 'u' => Ok(Face::Up),
            'L' | 'l' => Ok(Face::Left),
            'B' | 'b' => Ok(Face::Back),
            'D' | 'd' => Ok(Face::Down),
            _ => Err(anyhow::anyhow!("Unrecognized face {}", c)),
        }
    }
}

impl core::fmt::Display for Face {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let c = match self {
            Face::Up => 'U',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Down => 'D',
        };
        write!(f, "{}", c)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube(Facelets);

impl Cube {
    pub fn solved() -> Cube {
        SOLVED
    }

    /// Builds a cube from an explicit layout. Every color 0..=5 must appear
    /// exactly nine times.
    #[cfg(test)]
    pub fn from_facelets(facelets: Facelets) -> anyhow::Result<Cube> {
        let mut counts = [0usize; 6];
        for (i, &color) in facelets.iter().enumerate() {
            anyhow::ensure!(color < 6, "facelet {} has color {}, expected 0..=5", i, color);
            counts[color as usize] += 1;
        }
        for (color, &count) in counts.iter().enumerate() {
            anyhow::ensure!(
                count == STICKERS_PER_FACE,
                "color {} appears {} times, expected {}",
                color,
                count,
                STICKERS_PER_FACE
            );
        }
        Ok(Cube(facelets))
    }

    pub fn facelets(&self) -> &Facelets {
        &self.0
    }

    pub fn apply(self, move_: Move) -> Cube {
        let turn = surface::turn(move_.face);
        (0..move_.quarter_turns()).fold(self, |cube, _| Cube(turn.apply(&cube.0)))
    }

    pub fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Cube {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }

    pub fn is_solved(&self) -> bool {
        *self == SOLVED
    }

    fn row(&self, face: Face, row: usize) -> &[u8] {
        let start = face.index() * STICKERS_PER_FACE + row * 3;
        &self.0[start..start + 3]
    }
}

impl core::fmt::Debug for Cube {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Cube(")?;
        for face in enum_iterator::all::<Face>() {
            if face != Face::Up {
                write!(f, " ")?;
            }
            for &color in &self.0[face.facelets()] {
                write!(f, "{}", color)?;
            }
        }
        write!(f, ")")
    }
}

/// The unfolded cross: Up on top, Left Front Right Back across, Down below.
impl core::fmt::Display for Cube {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let slice = |cube: &Cube, face: Face, row: usize| {
            cube.row(face, row)
                .iter()
                .map(|color| color.to_string())
                .collect::<String>()
        };

        for row in 0..3 {
            writeln!(f, "    {}", slice(self, Face::Up, row))?;
        }

        for row in 0..3 {
            let middle = [Face::Left, Face::Front, Face::Right, Face::Back]
                .iter()
                .map(|&face| slice(self, face, row))
                .collect::<Vec<_>>();
            writeln!(f, "{}", middle.join(" "))?;
        }

        for row in 0..3 {
            writeln!(f, "    {}", slice(self, Face::Down, row))?;
        }

        Ok(())
    }
}

/// Rubik's cube as a search problem over facelet layouts. The goal is
/// always [`SOLVED`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RubiksCube;

impl RubiksCube {
    pub fn new() -> Self {
        RubiksCube
    }
}

impl Problem for RubiksCube {
    type State = Cube;
    type Action = Move;

    fn name(&self) -> &'static str {
        "rubik's cube"
    }

    // Every quarter turn is legal from every layout.
    fn actions(&self, _state: &Cube) -> Result<Actions<Move>, ProblemError> {
        Ok(Move::all().collect())
    }

    fn successor(&self, state: &Cube, action: Move) -> Result<(Cube, Cost), ProblemError> {
        self.ensure_legal(state, action)?;
        Ok((state.apply(action), 1))
    }

    fn is_terminal(&self, state: &Cube) -> Result<bool, ProblemError> {
        Ok(state.is_solved())
    }

    fn describe(&self, state: &Cube) -> Result<String, ProblemError> {
        Ok(state.to_string())
    }
}
