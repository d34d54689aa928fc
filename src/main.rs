//! Text-mode front end: human versus engine for both games.

use std::io::{self, Write};

use board_games::chess::{find_best_move, Board, Outcome, PlayError};
use board_games::connect_four::{best_column, Grid, Player};

const CHESS_AI_DEPTH: u32 = 2;
const CONNECT_FOUR_AI_DEPTH: u32 = 4;

fn main() {
    let game = std::env::args().nth(1).unwrap_or_else(|| "chess".to_string());
    match game.as_str() {
        "chess" => play_chess(),
        "connect4" | "connect-four" => play_connect_four(),
        other => {
            eprintln!("Unknown game '{other}'. Try 'chess' or 'connect4'.");
            std::process::exit(1);
        }
    }
}

/// Read one trimmed line after showing a prompt; `None` on EOF.
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn play_chess() {
    println!("Chess (Human vs AI)");
    println!("Input moves like e2e4, e7e8q for promotion to queen.");
    println!("Type 'help' to see options, 'quit' to exit.\n");

    let mut board = Board::new();

    loop {
        println!("{board}");
        match board.outcome() {
            Outcome::Checkmate { winner } => {
                println!("Checkmate! {winner} wins.");
                break;
            }
            Outcome::Stalemate => {
                println!("Stalemate. Draw.");
                break;
            }
            Outcome::Ongoing => {}
        }

        if board.white_to_move() {
            println!("White to move.");
            let Some(input) = prompt("Your move (e2e4): ") else {
                break;
            };
            match input.to_lowercase().as_str() {
                "quit" | "exit" => {
                    println!("Goodbye!");
                    break;
                }
                "help" => {
                    println!("- Enter moves like e2e4 or e7e8q for promotion.");
                    println!("- Type 'quit' to exit.");
                    println!("- Moves are validated for legality including check.");
                    continue;
                }
                _ => {}
            }
            match board.play(&input) {
                Ok(_) => {}
                Err(PlayError::Parse(_)) => println!("Invalid format. Use e2e4 or e7e8q."),
                Err(PlayError::Illegal(_)) => println!("Illegal move. Try again."),
            }
        } else {
            println!("Black (AI) thinking...");
            let result = find_best_move(&mut board, CHESS_AI_DEPTH);
            if let Some(mv) = result.best_move {
                board.make_move(&mv);
                println!("Black plays {mv}.");
            }
        }
    }
}

fn play_connect_four() {
    println!("Connect Four (Human vs AI)");
    println!("Enter a column number from 1 to 7, or 'quit' to exit.\n");

    let mut grid = Grid::new();

    loop {
        println!("{grid}");
        if grid.has_connect_four(Player::One) {
            println!("{} wins!", Player::One);
            break;
        }
        if grid.has_connect_four(Player::Two) {
            println!("{} wins!", Player::Two);
            break;
        }
        if grid.is_full() {
            println!("It's a tie!");
            break;
        }

        let Some(input) = prompt("Your column (1-7): ") else {
            break;
        };
        if matches!(input.to_lowercase().as_str(), "quit" | "exit") {
            println!("Goodbye!");
            break;
        }
        let column = match input.parse::<usize>() {
            Ok(n) if (1..=7).contains(&n) => n - 1,
            _ => {
                println!("Enter a number from 1 to 7.");
                continue;
            }
        };
        if grid.drop(column, Player::One).is_err() {
            println!("That column is full. Try another.");
            continue;
        }
        if grid.is_terminal() {
            continue;
        }

        println!("AI is thinking...");
        if let Some(reply) = best_column(&mut grid, CONNECT_FOUR_AI_DEPTH, Player::Two) {
            if grid.drop(reply, Player::Two).is_ok() {
                println!("AI drops in column {}.", reply + 1);
            }
        }
    }
}
