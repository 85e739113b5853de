//! Plain terminal output of a finished replay.

use std::io::{self, IsTerminal};

use breakthrough_core::cell::{Cell, Side};
use breakthrough_core::game_state::GameState;
use breakthrough_core::square::{BOARD_SIZE, Square};
use colored::Colorize;

/// Returns a plain text representation of the active grid.
///
/// # Returns
/// A string containing the board followed by the side to move and material
pub fn board_string(game: &GameState) -> String {
    let mut result = String::new();
    let grid = game.grid();

    result.push_str("   a b c d e f g h\n");
    result.push_str("  +-+-+-+-+-+-+-+-+\n");

    for rank in 0..BOARD_SIZE {
        result.push_str(&format!("{} |", BOARD_SIZE - rank));
        for file in 0..BOARD_SIZE {
            let symbol = match grid.cell(Square::from_indices(file, rank)) {
                Cell::WhitePawn => 'W',
                Cell::BlackPawn => 'B',
                Cell::Empty => ' ',
            };
            result.push(symbol);
            result.push('|');
        }
        result.push('\n');
        result.push_str("  +-+-+-+-+-+-+-+-+\n");
    }

    let (white_count, black_count) = game.material();
    result.push_str(&format!("{} to move\n", game.side_to_move().as_str()));
    result.push_str(&format!("White: {white_count} Black: {black_count}\n"));
    if let Some(winner) = game.winner() {
        result.push_str(&format!("{} wins\n", winner.as_str()));
    }
    result
}

/// Prints the game to standard output, colored when it is a terminal.
pub fn print(game: &GameState) {
    if !io::stdout().is_terminal() {
        print!("{}", board_string(game));
        println!("{}", game.transcript());
        return;
    }

    let grid = game.grid();
    let side_to_move = game.side_to_move();
    let last_to = game.moves().last().map(|(mv, _)| mv.to);

    println!("      a   b   c   d   e   f   g   h");
    println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

    for rank in 0..BOARD_SIZE {
        print!("  {} │", BOARD_SIZE - rank);

        for file in 0..BOARD_SIZE {
            let sq = Square::from_indices(file, rank);
            let is_last_move = Some(sq) == last_to;

            let symbol = match grid.cell(sq) {
                Cell::BlackPawn if is_last_move => " ● ".on_bright_black().bright_green(),
                Cell::WhitePawn if is_last_move => " ○ ".on_bright_black().bright_yellow(),
                Cell::BlackPawn => " ● ".bright_green(),
                Cell::WhitePawn => " ○ ".bright_yellow(),
                Cell::Empty => "   ".black(),
            };
            print!("{symbol}│");
        }

        let (white_count, black_count) = game.material();
        match rank {
            2 => {
                let player_info = match side_to_move {
                    Side::White => "White's turn (○)".bright_yellow(),
                    Side::Black => "Black's turn (●)".bright_green(),
                };
                println!("   {player_info}");
            }
            3 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
            4 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
            6 => match game.winner() {
                Some(Side::White) => println!("   {}", "White wins!".bright_yellow()),
                Some(Side::Black) => println!("   {}", "Black wins!".bright_green()),
                None => println!(),
            },
            7 if game.is_over() => println!("   {}", "*** Game Over ***".bright_red()),
            _ => println!(),
        }

        if rank < BOARD_SIZE - 1 {
            println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
        }
    }

    println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    println!();
    println!("{}", game.transcript().bright_cyan());
}
