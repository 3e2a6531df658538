//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece`, `PromotionPiece` and `Color` - chess piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move`, `CaptureTag` and `MoveKind` - move requests and their classification
//! - `CastlingRights` and `CastleSide` - castling state
//! - `GameStatus`, `Applied` and `code` - game outcome and result codes

mod castling;
mod moves;
mod piece;
mod square;
mod status;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{CaptureTag, Move, MoveKind};
pub use piece::{Color, Piece, PromotionPiece};
pub use square::Square;
pub use status::{code, Applied, GameStatus};
