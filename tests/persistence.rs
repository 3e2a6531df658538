use cheds::board::{codec, Board, Color, DecodeError, GameStatus};
use std::fs;
use std::path::PathBuf;

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cheds-{}-{name}.bin", std::process::id()))
}

#[test]
fn test_save_and_resume_game() {
    let mut board = Board::new();
    for text in ["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6"] {
        board.apply_notation(text).unwrap();
    }

    let path = scratch_file("resume");
    fs::write(&path, board.encode()).unwrap();
    let bytes = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(bytes.starts_with(codec::SIGNATURE));
    let mut resumed = Board::decode(&bytes).unwrap();
    assert_eq!(resumed, board);
    assert_eq!(resumed.turn(), Color::White);
    assert_eq!(resumed.turn_number(), 6);

    let applied = resumed.apply_notation("Qxf7#").unwrap();
    assert_eq!(applied.status, GameStatus::WhiteWins);
}

#[test]
fn test_truncated_file_is_rejected() {
    let mut board = Board::new();
    board.apply_notation("d4").unwrap();
    let bytes = board.encode();

    let path = scratch_file("truncated");
    fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();
    let truncated = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let mut target = Board::new();
    let before = target.clone();
    assert_eq!(target.load(&truncated), Err(DecodeError::MissingTerminator));
    assert_eq!(
        target.load(&truncated[..8]),
        Err(DecodeError::Truncated { len: 8 })
    );
    assert_eq!(target, before);
}
