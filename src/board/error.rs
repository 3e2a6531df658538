//! Error types for chess board operations.

use std::fmt;

use super::types::{code, GameStatus, Move, Square};

/// Error type for move application failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game already has a result
    GameOver { status: GameStatus },
    /// Source or destination lies off the board
    OutOfBounds { mv: Move },
    /// No piece on the source square
    EmptySquare { square: Square },
    /// The piece on the source square does not belong to the side to move
    WrongTurn { square: Square },
    /// The move breaks the movement rules of the piece
    Illegal { mv: Move },
    /// A promotion's capture tag does not point at an enemy piece
    PromotionMismatch { mv: Move },
    /// The move would leave the mover's own king in check
    SelfCheck { mv: Move },
}

impl MoveError {
    /// Result code for this failure (always the illegal code)
    #[must_use]
    pub const fn code(&self) -> u8 {
        code::ILLEGAL
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver { status } => write!(f, "Game is over ({status})"),
            MoveError::OutOfBounds { mv } => write!(f, "Move {mv:?} leaves the board"),
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::WrongTurn { square } => {
                write!(f, "Piece on {square} does not belong to the side to move")
            }
            MoveError::Illegal { mv } => write!(f, "Illegal move {mv}"),
            MoveError::PromotionMismatch { mv } => {
                write!(f, "Promotion {mv} does not capture on the tagged diagonal")
            }
            MoveError::SelfCheck { mv } => write!(f, "Move {mv} leaves the king in check"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for move notation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty notation string
    Empty,
    /// Text does not match any known move shape
    Malformed { text: String },
    /// No piece of the required kind and color can make the move
    PieceNotFound { text: String },
    /// More than one piece can make the move
    Ambiguous { text: String },
    /// A capture marker was written but the move does not capture
    CaptureMismatch { text: String },
    /// The notation resolved to a move that is not legal
    Illegal { mv: Move },
    /// The resolved move was refused when applied
    Rejected(MoveError),
}

impl NotationError {
    /// Result code for this failure
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            NotationError::PieceNotFound { .. } => code::PIECE_NOT_FOUND,
            NotationError::Illegal { .. } | NotationError::Rejected(_) => code::ILLEGAL,
            NotationError::Empty
            | NotationError::Malformed { .. }
            | NotationError::Ambiguous { .. }
            | NotationError::CaptureMismatch { .. } => code::EXPRESSION_ERROR,
        }
    }
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Empty move notation"),
            NotationError::Malformed { text } => write!(f, "Unrecognised move notation '{text}'"),
            NotationError::PieceNotFound { text } => {
                write!(f, "No piece can perform '{text}'")
            }
            NotationError::Ambiguous { text } => write!(f, "Ambiguous move '{text}'"),
            NotationError::CaptureMismatch { text } => {
                write!(f, "Move '{text}' is marked as a capture but captures nothing")
            }
            NotationError::Illegal { mv } => write!(f, "Illegal move {mv}"),
            NotationError::Rejected(err) => write!(f, "Move rejected: {err}"),
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for NotationError {
    fn from(err: MoveError) -> Self {
        NotationError::Rejected(err)
    }
}

/// Error type for persisted-board decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Stream does not start with the expected signature
    BadSignature,
    /// Version string is not one this decoder reads
    UnsupportedVersion { version: String },
    /// Stream ends before the metadata is complete
    Truncated { len: usize },
    /// En passant file outside 0-8
    InvalidEnPassantFile { file: u8 },
    /// Piece selector names no known piece kind
    UnknownPiece { id: u8 },
    /// Two records place a piece on the same square
    OccupiedSquare { square: Square },
    /// A zero byte where a record or the terminator was expected
    BadTerminator { offset: usize },
    /// Bytes follow the terminator
    TrailingBytes { offset: usize },
    /// Stream ends without a terminator
    MissingTerminator,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::BadSignature => write!(f, "Missing board signature"),
            DecodeError::UnsupportedVersion { version } => {
                write!(f, "Unsupported board version '{version}'")
            }
            DecodeError::Truncated { len } => {
                write!(f, "Board data truncated after {len} bytes")
            }
            DecodeError::InvalidEnPassantFile { file } => {
                write!(f, "Invalid en passant file {file}")
            }
            DecodeError::UnknownPiece { id } => write!(f, "Unknown piece kind {id}"),
            DecodeError::OccupiedSquare { square } => {
                write!(f, "Square {square} is assigned twice")
            }
            DecodeError::BadTerminator { offset } => {
                write!(f, "Invalid terminator at byte {offset}")
            }
            DecodeError::TrailingBytes { offset } => {
                write!(f, "Unexpected data after terminator at byte {offset}")
            }
            DecodeError::MissingTerminator => write!(f, "Board data has no terminator"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_error_codes() {
        let text = "QH5".to_string();
        assert_eq!(NotationError::PieceNotFound { text: text.clone() }.code(), 3);
        assert_eq!(NotationError::Ambiguous { text: text.clone() }.code(), 4);
        assert_eq!(NotationError::Malformed { text: text.clone() }.code(), 4);
        assert_eq!(NotationError::CaptureMismatch { text }.code(), 4);
        assert_eq!(NotationError::Empty.code(), 4);
        let mv = Move::new(Square(1, 4), Square(4, 4));
        assert_eq!(NotationError::Illegal { mv }.code(), 0);
        assert_eq!(NotationError::from(MoveError::Illegal { mv }).code(), 0);
    }

    #[test]
    fn test_move_error_display() {
        let mv = Move::new(Square(1, 4), Square(4, 4));
        let err = MoveError::Illegal { mv };
        assert!(err.to_string().contains("e2e5"));
        assert_eq!(err.code(), 0);

        let err = MoveError::EmptySquare { square: Square(3, 3) };
        assert!(err.to_string().contains("d4"));
    }

    #[test]
    fn test_rejected_has_source() {
        use std::error::Error;
        let mv = Move::new(Square(0, 4), Square(1, 4));
        let err = NotationError::Rejected(MoveError::SelfCheck { mv });
        assert!(err.source().is_some());
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnsupportedVersion {
            version: "9.9.9".to_string(),
        };
        assert!(err.to_string().contains("9.9.9"));
        let err = DecodeError::OccupiedSquare { square: Square(0, 0) };
        assert!(err.to_string().contains("a1"));
    }

    #[test]
    fn test_square_error_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
        let err = SquareError::FileOutOfBounds { file: 10 };
        assert!(err.to_string().contains("10"));
    }
}
