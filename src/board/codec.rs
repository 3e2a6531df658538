//! Binary save format.
//!
//! ```text
//! "CHEDS"              signature
//! len, version         length-prefixed ASCII version
//! meta[0]  A BB CC DDD A special moves, BB queenside rights, CC kingside
//! meta[1]  D E FF 0000 rights, DDDD en passant file (8 = none), E side to
//!                      move (0 white), FF result
//! meta[2..4]           ply counter, big-endian (not in 1.0.1)
//! 11PPPPPP             select piece kind P for the following records
//! 01FFFRRR / 10FFFRRR  white / black piece of the selected kind
//! 00xxxxxx             non-zero terminator, last byte of the stream
//! ```
//!
//! Rights fields hold 2 for white and 1 for black.

use log::debug;

use super::error::DecodeError;
use super::{Board, CastleSide, CastlingRights, Color, GameStatus, Piece, Square};

pub const SIGNATURE: &[u8; 5] = b"CHEDS";
/// Version written by `Board::encode`
pub const VERSION: &str = "1.0.2";
/// Older layout without the ply counter, still readable
pub const LEGACY_VERSION: &str = "1.0.1";

const TERMINATOR: u8 = 0x3F;
const NO_EN_PASSANT: u8 = 8;

const TAG_SELECT: u8 = 0b11;
const TAG_WHITE: u8 = 0b01;
const TAG_BLACK: u8 = 0b10;

impl Board {
    /// Serialize the full game state.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(64);
        out.extend_from_slice(SIGNATURE);
        out.push(VERSION.len() as u8);
        out.extend_from_slice(VERSION.as_bytes());

        let ep = self.en_passant_file.map_or(NO_EN_PASSANT, |file| file as u8);
        let rights = self.castling_rights;
        out.push(
            (u8::from(self.special_moves) << 7)
                | (rights.side_field(CastleSide::Queenside) << 5)
                | (rights.side_field(CastleSide::Kingside) << 3)
                | (ep >> 1),
        );
        out.push(
            ((ep & 1) << 7)
                | (u8::from(self.turn == Color::Black) << 6)
                | (self.status.wire_value() << 4),
        );
        out.extend_from_slice(&self.turn_number.to_be_bytes());

        for piece in Piece::ALL {
            let mut records = Square::all()
                .filter_map(|sq| match self.piece_at(sq) {
                    Some((color, p)) if p == piece => Some(piece_record(sq, color)),
                    _ => None,
                })
                .peekable();
            if records.peek().is_some() {
                out.push((TAG_SELECT << 6) | piece.wire_id());
                out.extend(records);
            }
        }

        out.push(TERMINATOR);
        out
    }

    /// Rebuild a board from `encode` output (or a legacy 1.0.1 stream).
    pub fn decode(bytes: &[u8]) -> Result<Board, DecodeError> {
        let result = decode_stream(bytes);
        if let Err(err) = &result {
            debug!("rejected saved board ({} bytes): {err}", bytes.len());
        }
        result
    }

    /// Replace this board with a decoded one. On error the board is untouched.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        *self = Board::decode(bytes)?;
        Ok(())
    }
}

fn piece_record(sq: Square, color: Color) -> u8 {
    let tag = match color {
        Color::White => TAG_WHITE,
        Color::Black => TAG_BLACK,
    };
    (tag << 6) | ((sq.file() as u8) << 3) | sq.rank() as u8
}

fn decode_stream(bytes: &[u8]) -> Result<Board, DecodeError> {
    let truncated = || DecodeError::Truncated { len: bytes.len() };

    let rest = bytes
        .strip_prefix(SIGNATURE.as_slice())
        .ok_or(DecodeError::BadSignature)?;
    let (&version_len, rest) = rest.split_first().ok_or_else(truncated)?;
    let version_len = usize::from(version_len);
    if rest.len() < version_len {
        return Err(truncated());
    }
    let (version, rest) = rest.split_at(version_len);

    let meta_len = match version {
        v if v == VERSION.as_bytes() => 4,
        v if v == LEGACY_VERSION.as_bytes() => 2,
        v => {
            return Err(DecodeError::UnsupportedVersion {
                version: String::from_utf8_lossy(v).into_owned(),
            })
        }
    };
    if rest.len() < meta_len {
        return Err(truncated());
    }
    let (meta, records) = rest.split_at(meta_len);

    let mut board = Board::empty();
    board.special_moves = meta[0] & 0x80 != 0;

    let mut rights = CastlingRights::none();
    rights.set_side_field(CastleSide::Queenside, (meta[0] >> 5) & 0b11);
    rights.set_side_field(CastleSide::Kingside, (meta[0] >> 3) & 0b11);
    board.castling_rights = rights;

    let ep = ((meta[0] & 0b111) << 1) | (meta[1] >> 7);
    board.en_passant_file = match ep {
        NO_EN_PASSANT => None,
        file if file < NO_EN_PASSANT => Some(usize::from(file)),
        file => return Err(DecodeError::InvalidEnPassantFile { file }),
    };

    board.turn = if meta[1] & 0x40 != 0 {
        Color::Black
    } else {
        Color::White
    };
    board.status = GameStatus::from_wire_value(meta[1] >> 4);
    if meta_len == 4 {
        board.turn_number = u16::from_be_bytes([meta[2], meta[3]]);
    }

    let base = bytes.len() - records.len();
    read_records(&mut board, records, base)?;
    Ok(board)
}

/// Place piece records onto `board`. `base` is the offset of `records`
/// within the whole stream, for error reporting.
fn read_records(board: &mut Board, records: &[u8], base: usize) -> Result<(), DecodeError> {
    let mut selected = Piece::King;

    for (idx, &byte) in records.iter().enumerate() {
        let offset = base + idx;
        let tag = byte >> 6;
        match tag {
            TAG_SELECT => {
                let id = byte & 0x3F;
                selected = Piece::from_wire_id(id).ok_or(DecodeError::UnknownPiece { id })?;
            }
            TAG_WHITE | TAG_BLACK => {
                let square = Square(usize::from(byte & 0b111), usize::from((byte >> 3) & 0b111));
                if !board.is_empty(square) {
                    return Err(DecodeError::OccupiedSquare { square });
                }
                let color = if tag == TAG_WHITE {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(square, color, selected);
            }
            _ => {
                if byte == 0 {
                    return Err(DecodeError::BadTerminator { offset });
                }
                if idx + 1 != records.len() {
                    return Err(DecodeError::TrailingBytes { offset: offset + 1 });
                }
                return Ok(());
            }
        }
    }

    Err(DecodeError::MissingTerminator)
}
