pub mod board;

pub use board::{Applied, Board, Color, GameStatus, Move, MoveKind, Piece, Square};
