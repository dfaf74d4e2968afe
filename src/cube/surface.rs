//! Which facelets a clockwise quarter turn moves, and where to.
//!
//! A turn does two things at once: the eight border stickers of the turned
//! face advance a quarter of the way around it, and one three-sticker strip
//! on each of the four neighbouring faces moves on to the next neighbour.
//! Both are baked into one index table per face.

use super::{Face, Facelets, FACELETS, STICKERS_PER_FACE};

/// Border of a face in clockwise order, starting top-left. Positions are
/// row-major within the face; the center (4) never moves.
const RING: [usize; 8] = [0, 1, 2, 5, 8, 7, 6, 3];

#[derive(Clone, Copy)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    fn positions(self) -> [usize; 3] {
        match self {
            Side::Top => [0, 1, 2],
            Side::Bottom => [6, 7, 8],
            Side::Left => [0, 3, 6],
            Side::Right => [2, 5, 8],
        }
    }
}

/// Three stickers along one side of a face, optionally walked backwards so
/// that the strips of a cycle line up sticker for sticker.
#[derive(Clone, Copy)]
struct Strip {
    face: Face,
    side: Side,
    reversed: bool,
}

impl Strip {
    fn facelets(self) -> [usize; 3] {
        let offset = self.face.index() * STICKERS_PER_FACE;
        let mut positions = self.side.positions();
        if self.reversed {
            positions.reverse();
        }
        positions.map(|p| offset + p)
    }
}

const fn strip(face: Face, side: Side) -> Strip {
    Strip {
        face,
        side,
        reversed: false,
    }
}

const fn reversed(face: Face, side: Side) -> Strip {
    Strip {
        face,
        side,
        reversed: true,
    }
}

/// The strips around `face`. A clockwise turn moves each strip's stickers
/// into the strip before it: `[0] <- [1] <- [2] <- [3] <- [0]`.
fn strips(face: Face) -> [Strip; 4] {
    use Face::*;

    match face {
        Up => [
            strip(Left, Side::Top),
            strip(Front, Side::Top),
            strip(Right, Side::Top),
            strip(Back, Side::Top),
        ],
        Down => [
            strip(Left, Side::Bottom),
            strip(Back, Side::Bottom),
            strip(Right, Side::Bottom),
            strip(Front, Side::Bottom),
        ],
        Front => [
            strip(Up, Side::Bottom),
            reversed(Left, Side::Right),
            reversed(Down, Side::Top),
            strip(Right, Side::Left),
        ],
        Back => [
            strip(Up, Side::Top),
            strip(Right, Side::Right),
            reversed(Down, Side::Bottom),
            reversed(Left, Side::Left),
        ],
        Left => [
            strip(Front, Side::Left),
            strip(Up, Side::Left),
            reversed(Back, Side::Right),
            strip(Down, Side::Left),
        ],
        Right => [
            strip(Up, Side::Right),
            strip(Front, Side::Right),
            strip(Down, Side::Right),
            reversed(Back, Side::Left),
        ],
    }
}

/// An index permutation: facelet `i` of the result is facelet `source[i]`
/// of the input.
pub struct Turn {
    source: [u8; FACELETS],
}

impl Turn {
    fn clockwise(face: Face) -> Turn {
        let mut source = [0u8; FACELETS];
        for (i, s) in source.iter_mut().enumerate() {
            *s = i as u8;
        }

        let offset = face.index() * STICKERS_PER_FACE;
        for k in 0..RING.len() {
            source[offset + RING[k]] = (offset + RING[(k + 6) % 8]) as u8;
        }

        let strips = strips(face).map(Strip::facelets);
        for k in 0..strips.len() {
            for (to, from) in strips[k].iter().zip(strips[(k + 1) % 4]) {
                source[*to] = from as u8;
            }
        }

        Turn { source }
    }

    /// Reads all of `facelets` and writes a fresh layout.
    pub fn apply(&self, facelets: &Facelets) -> Facelets {
        let mut out = [0u8; FACELETS];
        for (o, &s) in out.iter_mut().zip(&self.source) {
            *o = facelets[s as usize];
        }
        out
    }

    /// Facelets this turn relocates.
    #[cfg(test)]
    pub fn moved(&self) -> impl Iterator<Item = usize> + '_ {
        self.source
            .iter()
            .enumerate()
            .filter(|(i, s)| **s as usize != *i)
            .map(|(i, _)| i)
    }
}

lazy_static::lazy_static! {
    static ref TURN_TABLE: Vec<Turn> = {
        log::debug!("Building quarter turn table");
        enum_iterator::all::<Face>().map(Turn::clockwise).collect()
    };
}

pub fn turn(face: Face) -> &'static Turn {
    &TURN_TABLE[face.index()]
}
