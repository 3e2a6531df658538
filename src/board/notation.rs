//! Short move notation.
//!
//! Accepted shapes, case-insensitive, with `f` a file, `r` a rank and `P`
//! one of `K Q R N B`:
//!
//! | shape              | meaning                                        |
//! |--------------------|------------------------------------------------|
//! | `fr`, `fr=P`       | pawn push, pawn found by scanning the file     |
//! | `frfr`, `frfr=P`   | pawn move from a given square                  |
//! | `fxf`, `fxf=P`     | pawn capture, pawn found by scanning the file  |
//! | `frxf`, `frxf=P`   | pawn capture from a given square               |
//! | `Pfr`, `Pxfr`      | piece move, piece found by scanning the board  |
//! | `Pfrfr`, `Pfrxfr`  | piece move from a given square                 |
//! | `0-0`, `0-0-0`     | castling (`O-O`, `O-O-O` also accepted)        |
//!
//! Trailing `+` or `#` is ignored. A written `x` on a piece move requires
//! the move to capture. A pawn move onto the far rank must name its new
//! piece with `=P`, and the suffix is refused on any other pawn move.
//!
//! # Examples
//! ```
//! use cheds::board::{Board, MoveKind, Square};
//!
//! let board = Board::new();
//! let (mv, kind) = board.parse_move("Nf3").unwrap();
//! assert_eq!(mv.from(), Square(0, 6));
//! assert_eq!(kind, MoveKind::Quiet);
//! ```

use super::error::{MoveError, NotationError};
use super::{Board, CaptureTag, CastleSide, Move, MoveKind, Piece, PromotionPiece, Square};

/// A recognised notation shape with its coordinates decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    PawnPush { file: usize, rank: usize, promote: Option<char> },
    PawnMove { from: Square, to: Square, promote: Option<char> },
    PawnCapture { from_file: usize, to_file: usize, promote: Option<char> },
    PawnCaptureFrom { from: Square, to_file: usize, promote: Option<char> },
    PieceMove { piece: Piece, to: Square, capture: bool },
    PieceMoveFrom { piece: Piece, from: Square, to: Square, capture: bool },
    Castle(CastleSide),
}

/// Match text against a shape: `f` file, `r` rank, `p` piece letter, any
/// other character literally.
fn shape_matches(chars: &[char], shape: &str) -> bool {
    chars.len() == shape.len()
        && chars.iter().zip(shape.chars()).all(|(&c, s)| match s {
            'f' => ('A'..='H').contains(&c),
            'r' => ('1'..='8').contains(&c),
            'p' => matches!(c, 'K' | 'Q' | 'R' | 'N' | 'B'),
            literal => c == literal,
        })
}

#[inline]
fn file_of(c: char) -> usize {
    (c as u8 - b'A') as usize
}

#[inline]
fn rank_of(c: char) -> usize {
    (c as u8 - b'1') as usize
}

#[inline]
fn square_of(file: char, rank: char) -> Square {
    Square(rank_of(rank), file_of(file))
}

/// Decode upper-cased text into a shape.
fn classify(c: &[char]) -> Option<Shape> {
    let suffix = |idx: usize| c.get(idx).copied();

    if shape_matches(c, "fr") || shape_matches(c, "fr=p") {
        return Some(Shape::PawnPush {
            file: file_of(c[0]),
            rank: rank_of(c[1]),
            promote: suffix(3),
        });
    }
    if shape_matches(c, "frfr") || shape_matches(c, "frfr=p") {
        return Some(Shape::PawnMove {
            from: square_of(c[0], c[1]),
            to: square_of(c[2], c[3]),
            promote: suffix(5),
        });
    }
    if shape_matches(c, "fXf") || shape_matches(c, "fXf=p") {
        return Some(Shape::PawnCapture {
            from_file: file_of(c[0]),
            to_file: file_of(c[2]),
            promote: suffix(4),
        });
    }
    if shape_matches(c, "frXf") || shape_matches(c, "frXf=p") {
        return Some(Shape::PawnCaptureFrom {
            from: square_of(c[0], c[1]),
            to_file: file_of(c[3]),
            promote: suffix(5),
        });
    }
    if shape_matches(c, "pfr") {
        return Some(Shape::PieceMove {
            piece: Piece::from_char(c[0])?,
            to: square_of(c[1], c[2]),
            capture: false,
        });
    }
    if shape_matches(c, "pXfr") {
        return Some(Shape::PieceMove {
            piece: Piece::from_char(c[0])?,
            to: square_of(c[2], c[3]),
            capture: true,
        });
    }
    if shape_matches(c, "pfrfr") {
        return Some(Shape::PieceMoveFrom {
            piece: Piece::from_char(c[0])?,
            from: square_of(c[1], c[2]),
            to: square_of(c[3], c[4]),
            capture: false,
        });
    }
    if shape_matches(c, "pfrXfr") {
        return Some(Shape::PieceMoveFrom {
            piece: Piece::from_char(c[0])?,
            from: square_of(c[1], c[2]),
            to: square_of(c[4], c[5]),
            capture: true,
        });
    }
    if shape_matches(c, "0-0") || shape_matches(c, "O-O") {
        return Some(Shape::Castle(CastleSide::Kingside));
    }
    if shape_matches(c, "0-0-0") || shape_matches(c, "O-O-O") {
        return Some(Shape::Castle(CastleSide::Queenside));
    }
    None
}

impl Board {
    /// Resolve notation into a move for the side to move.
    ///
    /// The board is not modified. The returned classification is the one
    /// `Board::apply` would report for the move.
    pub fn parse_move(&self, text: &str) -> Result<(Move, MoveKind), NotationError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver {
                status: self.status,
            }
            .into());
        }

        let trimmed = text
            .trim()
            .trim_end_matches(|c| c == '+' || c == '#')
            .trim_end();
        if trimmed.is_empty() {
            return Err(NotationError::Empty);
        }

        let chars: Vec<char> = trimmed.chars().map(|c| c.to_ascii_uppercase()).collect();
        let shape = classify(&chars).ok_or_else(|| NotationError::Malformed {
            text: trimmed.to_string(),
        })?;
        self.resolve_shape(shape, trimmed)
    }

    fn resolve_shape(&self, shape: Shape, text: &str) -> Result<(Move, MoveKind), NotationError> {
        let color = self.turn;
        let far = color.pawn_promotion_rank();
        let malformed = || NotationError::Malformed {
            text: text.to_string(),
        };

        match shape {
            Shape::PawnPush { file, rank, promote } => {
                let promoted = promotion_piece(promote, text)?;
                if promoted.is_some() != (rank == far) {
                    return Err(malformed());
                }
                self.resolve_on_file(file, text, false, |from| match promoted {
                    Some(target) => {
                        Move::with_tag(from, Square(far, target.file()), CaptureTag::None)
                    }
                    None => Move::new(from, Square(rank, file)),
                })
            }

            Shape::PawnMove { from, to, promote } => {
                let promoted = promotion_piece(promote, text)?;
                if promoted.is_some() != (to.rank() == far) {
                    return Err(malformed());
                }
                self.expect_piece(from, Piece::Pawn, text)?;
                let mv = match promoted {
                    Some(target) => {
                        let tag = CaptureTag::between(from.file(), to.file())
                            .ok_or_else(malformed)?;
                        Move::with_tag(from, Square(far, target.file()), tag)
                    }
                    None => Move::new(from, to),
                };
                self.checked(mv)
            }

            Shape::PawnCapture {
                from_file,
                to_file,
                promote,
            } => {
                let tag = capture_tag(from_file, to_file).ok_or_else(malformed)?;
                let promoted = promotion_piece(promote, text)?;
                let forward = color.pawn_direction();
                self.resolve_on_file(from_file, text, promoted.is_none(), |from| match promoted {
                    Some(target) => Move::with_tag(from, Square(far, target.file()), tag),
                    None => {
                        // Only pawns at least two steps short of the far rank get here
                        let rank = (from.rank() as isize + forward) as usize;
                        Move::new(from, Square(rank, to_file))
                    }
                })
            }

            Shape::PawnCaptureFrom {
                from,
                to_file,
                promote,
            } => {
                let promoted = promotion_piece(promote, text)?;
                if promoted.is_some() != (from.rank() == color.pawn_penultimate_rank()) {
                    return Err(malformed());
                }
                self.expect_piece(from, Piece::Pawn, text)?;
                let tag = capture_tag(from.file(), to_file).ok_or_else(malformed)?;
                let mv = match promoted {
                    Some(target) => Move::with_tag(from, Square(far, target.file()), tag),
                    None => {
                        let to = from
                            .offset(color.pawn_direction(), tag.file_delta())
                            .ok_or_else(malformed)?;
                        Move::new(from, to)
                    }
                };
                self.checked(mv)
            }

            Shape::PieceMove { piece, to, capture } => {
                let candidates = self.squares_of(color, piece).map(|from| Move::new(from, to));
                let (mv, kind) = self.resolve_unique(candidates, text)?;
                require_capture(capture, mv, kind, text)
            }

            Shape::PieceMoveFrom {
                piece,
                from,
                to,
                capture,
            } => {
                self.expect_piece(from, piece, text)?;
                let (mv, kind) = self.checked(Move::new(from, to))?;
                require_capture(capture, mv, kind, text)
            }

            Shape::Castle(side) => {
                // Same as writing the king's move onto its own rook
                let back = color.back_rank();
                let king_move = Shape::PieceMoveFrom {
                    piece: Piece::King,
                    from: Square(back, 4),
                    to: Square(back, side.rook_file()),
                    capture: false,
                };
                self.resolve_shape(king_move, text)
            }
        }
    }

    /// Full validation of one move: legal shape and no self-check.
    fn validate(&self, mv: Move) -> Option<MoveKind> {
        self.next_position(mv).ok().map(|(kind, _)| kind)
    }

    fn checked(&self, mv: Move) -> Result<(Move, MoveKind), NotationError> {
        self.validate(mv)
            .map(|kind| (mv, kind))
            .ok_or(NotationError::Illegal { mv })
    }

    fn expect_piece(&self, from: Square, piece: Piece, text: &str) -> Result<(), NotationError> {
        if self.piece_at(from) == Some((self.turn, piece)) {
            Ok(())
        } else {
            Err(NotationError::PieceNotFound {
                text: text.to_string(),
            })
        }
    }

    /// Exactly one candidate must be valid; ties are never guessed.
    fn resolve_unique(
        &self,
        candidates: impl IntoIterator<Item = Move>,
        text: &str,
    ) -> Result<(Move, MoveKind), NotationError> {
        let mut found = None;
        for mv in candidates {
            if let Some(kind) = self.validate(mv) {
                if found.is_some() {
                    return Err(NotationError::Ambiguous {
                        text: text.to_string(),
                    });
                }
                found = Some((mv, kind));
            }
        }
        found.ok_or_else(|| NotationError::PieceNotFound {
            text: text.to_string(),
        })
    }

    /// Scan a file for pawns of the side to move. A lone pawn is reported
    /// as illegal when it cannot make the move; several are disambiguated.
    ///
    /// With `skip_penultimate` set, pawns one step from the far rank are
    /// left out, and a file holding only such pawns is malformed text.
    fn resolve_on_file(
        &self,
        file: usize,
        text: &str,
        skip_penultimate: bool,
        build: impl Fn(Square) -> Move,
    ) -> Result<(Move, MoveKind), NotationError> {
        let color = self.turn;
        let mut pawns: Vec<Square> = (0..8)
            .map(|rank| Square(rank, file))
            .filter(|&sq| {
                self.piece_at(sq) == Some((color, Piece::Pawn))
                    && sq.rank() != color.pawn_promotion_rank()
            })
            .collect();

        if pawns.is_empty() {
            return Err(NotationError::PieceNotFound {
                text: text.to_string(),
            });
        }
        if skip_penultimate {
            pawns.retain(|sq| sq.rank() != color.pawn_penultimate_rank());
            if pawns.is_empty() {
                return Err(NotationError::Malformed {
                    text: text.to_string(),
                });
            }
        }

        match pawns.as_slice() {
            [only] => self.checked(build(*only)),
            _ => self.resolve_unique(pawns.iter().map(|&sq| build(sq)), text),
        }
    }
}

/// Promotion choice named by a suffix.
fn promotion_piece(
    suffix: Option<char>,
    text: &str,
) -> Result<Option<PromotionPiece>, NotationError> {
    let Some(c) = suffix else {
        return Ok(None);
    };
    Piece::from_char(c)
        .and_then(PromotionPiece::from_piece)
        .map(Some)
        .ok_or_else(|| NotationError::Malformed {
            text: text.to_string(),
        })
}

/// Capture direction between adjacent files
fn capture_tag(from_file: usize, to_file: usize) -> Option<CaptureTag> {
    CaptureTag::between(from_file, to_file).filter(|&tag| tag != CaptureTag::None)
}

fn require_capture(
    capture: bool,
    mv: Move,
    kind: MoveKind,
    text: &str,
) -> Result<(Move, MoveKind), NotationError> {
    if capture && kind != MoveKind::Capture {
        return Err(NotationError::CaptureMismatch {
            text: text.to_string(),
        });
    }
    Ok((mv, kind))
}
