//! Move descriptor and move classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::PromotionPiece;
use super::square::Square;
use super::status::code;

/// Diagonal a promoting pawn captured on.
///
/// Promotion moves use their destination file to pick the new piece, so the
/// square the pawn actually lands on is carried separately by this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CaptureTag {
    /// Straight promotion push, or any non-promotion move
    #[default]
    None,
    /// Capture towards the lower file
    Left,
    /// Capture towards the higher file
    Right,
}

impl CaptureTag {
    pub const ALL: [CaptureTag; 3] = [CaptureTag::None, CaptureTag::Left, CaptureTag::Right];

    /// File offset of the landing square relative to the source file
    #[inline]
    #[must_use]
    pub const fn file_delta(self) -> isize {
        match self {
            CaptureTag::None => 0,
            CaptureTag::Left => -1,
            CaptureTag::Right => 1,
        }
    }

    /// Tag describing a pawn moving from `from_file` onto `to_file`
    #[must_use]
    pub fn between(from_file: usize, to_file: usize) -> Option<CaptureTag> {
        match to_file as isize - from_file as isize {
            0 => Some(CaptureTag::None),
            -1 => Some(CaptureTag::Left),
            1 => Some(CaptureTag::Right),
            _ => None,
        }
    }
}

/// A move request: source, destination and promotion capture tag.
///
/// Ordinary moves name the square the piece ends on. Two encodings are
/// special: castling is the king moving onto its own rook's square, and a
/// promotion names the far rank with the destination file selecting the
/// piece (a rook, b knight, c bishop, d queen).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    tag: CaptureTag,
}

impl Move {
    /// Create a move between two squares
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            tag: CaptureTag::None,
        }
    }

    /// Create a move with an explicit promotion capture tag
    #[inline]
    #[must_use]
    pub const fn with_tag(from: Square, to: Square, tag: CaptureTag) -> Self {
        Move { from, to, tag }
    }

    /// Build the promotion request for a pawn standing on `from`.
    ///
    /// Returns `None` if `from` is not on either penultimate rank.
    #[must_use]
    pub const fn promotion(from: Square, piece: PromotionPiece, tag: CaptureTag) -> Option<Self> {
        let to_rank = match from.rank() {
            6 => 7,
            1 => 0,
            _ => return None,
        };
        Some(Move::with_tag(from, Square(to_rank, piece.file()), tag))
    }

    /// Build the castling request (king onto rook square) for a home rank.
    #[must_use]
    pub const fn castle(back_rank: usize, side: CastleSide) -> Self {
        Move::new(Square(back_rank, 4), Square(back_rank, side.rook_file()))
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the promotion capture tag
    #[inline]
    #[must_use]
    pub const fn tag(self) -> CaptureTag {
        self.tag
    }

    /// Square a promoting pawn lands on: the destination rank, on the source
    /// file shifted by the capture tag.
    #[must_use]
    pub fn promotion_landing(self) -> Option<Square> {
        let landing = Square(self.to.rank(), self.from.file());
        landing.offset(0, self.tag.file_delta())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        match self.tag {
            CaptureTag::None => Ok(()),
            CaptureTag::Left => write!(f, "<"),
            CaptureTag::Right => write!(f, ">"),
        }
    }
}

/// Classification of a legal move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Quiet,
    Capture,
    EnPassant,
    Castle(CastleSide),
    Promotion(PromotionPiece),
}

impl MoveKind {
    /// Literal result code of this classification
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            MoveKind::Quiet => code::QUIET,
            MoveKind::Capture => code::CAPTURE,
            MoveKind::EnPassant => code::EN_PASSANT,
            MoveKind::Castle(CastleSide::Queenside) => code::CASTLE_QUEENSIDE,
            MoveKind::Castle(CastleSide::Kingside) => code::CASTLE_KINGSIDE,
            MoveKind::Promotion(PromotionPiece::Rook) => code::PROMOTE_ROOK,
            MoveKind::Promotion(PromotionPiece::Knight) => code::PROMOTE_KNIGHT,
            MoveKind::Promotion(PromotionPiece::Bishop) => code::PROMOTE_BISHOP,
            MoveKind::Promotion(PromotionPiece::Queen) => code::PROMOTE_QUEEN,
        }
    }

    /// Returns true if this move removes an enemy piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveKind::Castle(_))
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        match self {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }
}
