use super::super::{Board, Color, Move, MoveKind};
use super::deltas;

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

impl Board {
    pub(super) fn knight_legality(&self, mv: Move, color: Color) -> Option<MoveKind> {
        let delta = deltas(mv.from(), mv.to());
        if !KNIGHT_OFFSETS.contains(&delta) {
            return None;
        }
        self.landing_kind(color, mv.to())
    }
}
