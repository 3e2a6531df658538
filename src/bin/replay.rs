use std::env;
use std::fs;
use std::process::ExitCode;

use cheds::board::Board;

fn main() -> ExitCode {
    let mut args = env::args().skip(1).peekable();
    let mut save_path = None;
    if args.peek().map(String::as_str) == Some("--save") {
        args.next();
        match args.next() {
            Some(path) => save_path = Some(path),
            None => {
                eprintln!("--save needs a file name");
                return ExitCode::FAILURE;
            }
        }
    }

    let moves: Vec<String> = args.collect();
    if moves.is_empty() {
        eprintln!("usage: cheds-replay [--save <file>] <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut board = Board::new();
    for text in &moves {
        match board.apply_notation(text) {
            Ok(applied) => println!("{text}: {} ({:?})", applied.code(), applied.kind),
            Err(err) => println!("{text}: {} ({err})", err.code()),
        }
    }

    println!();
    println!("{board}");
    println!("side_to_move: {}", board.turn());
    println!("turn_number: {}", board.turn_number());
    println!("status: {}", board.status());
    println!("legal_moves: {}", board.legal_moves().len());

    if let Some(path) = save_path {
        if let Err(err) = fs::write(&path, board.encode()) {
            eprintln!("failed to write {path}: {err}");
            return ExitCode::FAILURE;
        }
        println!("saved: {path}");
    }
    ExitCode::SUCCESS
}
