//! Chess board representation and game rules.
//!
//! A `Board` is a plain 8×8 grid of optional pieces plus the game state
//! needed by the rules: side to move, castling rights, the en passant
//! window, the ply counter and the game result. Supports full chess rules
//! including castling, en passant, promotion and checkmate detection.
//!
//! # Example
//! ```
//! use cheds::board::{Board, GameStatus};
//!
//! let mut board = Board::new();
//! for text in ["f3", "e5", "g4", "Qh4#"] {
//!     board.apply_notation(text).unwrap();
//! }
//! assert_eq!(board.status(), GameStatus::BlackWins);
//! ```

mod apply;
mod attacks;
mod builder;
pub mod codec;
mod error;
mod legality;
mod mate;
mod notation;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attacks::Attackers;
pub use builder::BoardBuilder;
pub use error::{DecodeError, MoveError, NotationError, SquareError};
pub use state::{Board, Cell};
pub use types::{
    code, Applied, CaptureTag, CastleSide, CastlingRights, Color, GameStatus, Move, MoveKind,
    Piece, PromotionPiece, Square,
};
