//! Game status and the literal result-code table.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::moves::MoveKind;
use super::piece::Color;

/// Numeric result codes shared with collaborators (console, GUI, saved logs).
pub mod code {
    pub const ILLEGAL: u8 = 0;
    pub const QUIET: u8 = 1;
    pub const CAPTURE: u8 = 2;
    pub const PIECE_NOT_FOUND: u8 = 3;
    pub const EXPRESSION_ERROR: u8 = 4;
    pub const EN_PASSANT: u8 = 5;
    pub const CASTLE_QUEENSIDE: u8 = 6;
    pub const CASTLE_KINGSIDE: u8 = 7;
    pub const PROMOTE_ROOK: u8 = 8;
    pub const PROMOTE_KNIGHT: u8 = 9;
    pub const PROMOTE_BISHOP: u8 = 10;
    pub const PROMOTE_QUEEN: u8 = 11;
    pub const WHITE_WINS: u8 = 125;
    pub const BLACK_WINS: u8 = 126;
    pub const DRAW: u8 = 127;
}

/// Outcome of the game so far.
///
/// `Draw` is never produced by play (stalemate and the other draw rules are
/// not detected); it only travels through the persisted format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameStatus {
    /// Status after `color` delivers checkmate
    #[inline]
    #[must_use]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WhiteWins,
            Color::Black => GameStatus::BlackWins,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Terminal result code, `None` while the game is ongoing
    #[must_use]
    pub const fn code(self) -> Option<u8> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::WhiteWins => Some(code::WHITE_WINS),
            GameStatus::BlackWins => Some(code::BLACK_WINS),
            GameStatus::Draw => Some(code::DRAW),
        }
    }

    /// Two-bit value used by the persisted format
    #[must_use]
    pub(crate) const fn wire_value(self) -> u8 {
        match self {
            GameStatus::Ongoing => 0,
            GameStatus::WhiteWins => 1,
            GameStatus::BlackWins => 2,
            GameStatus::Draw => 3,
        }
    }

    #[must_use]
    pub(crate) const fn from_wire_value(value: u8) -> Self {
        match value & 0b11 {
            0 => GameStatus::Ongoing,
            1 => GameStatus::WhiteWins,
            2 => GameStatus::BlackWins,
            _ => GameStatus::Draw,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::WhiteWins => write!(f, "white wins"),
            GameStatus::BlackWins => write!(f, "black wins"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// A successfully applied move: what kind of move it was and the game
/// status right after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Applied {
    pub kind: MoveKind,
    pub status: GameStatus,
}

impl Applied {
    /// Result code: the terminal code if the move ended the game, otherwise
    /// the move classification code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self.status.code() {
            Some(terminal) => terminal,
            None => self.kind.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_code_prefers_terminal_status() {
        let quiet = Applied {
            kind: MoveKind::Quiet,
            status: GameStatus::Ongoing,
        };
        assert_eq!(quiet.code(), code::QUIET);

        let mate = Applied {
            kind: MoveKind::Capture,
            status: GameStatus::BlackWins,
        };
        assert_eq!(mate.code(), code::BLACK_WINS);
    }

    #[test]
    fn test_wire_values() {
        for status in [
            GameStatus::Ongoing,
            GameStatus::WhiteWins,
            GameStatus::BlackWins,
            GameStatus::Draw,
        ] {
            assert_eq!(GameStatus::from_wire_value(status.wire_value()), status);
        }
        assert_eq!(GameStatus::win_for(Color::White).code(), Some(125));
        assert!(!GameStatus::Ongoing.is_terminal());
    }
}
