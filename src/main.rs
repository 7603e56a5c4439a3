//! Text-mode session driver.
//!
//! A thin presentation layer over the rules engine: it reads `e2e4`-style
//! input from stdin, asks the engine for legality, and prints the board,
//! notation, and terminal announcements. The promotion prompt is the
//! synchronous external collaborator the engine consults mid-application;
//! a blank or unrecognized answer falls back to a queen.

use std::io::{self, Write};

use arbiter_chess::board_location::{location_from_algebraic, location_to_algebraic, BoardLocation};
use arbiter_chess::game_state::GameState;
use arbiter_chess::game_status::GameStatus;
use arbiter_chess::piece_class::PieceClass;
use arbiter_chess::piece_team::PieceTeam;
use arbiter_chess::promotion::PromotionProvider;

struct StdinPromotion;

impl PromotionProvider for StdinPromotion {
    fn choose_promotion(
        &mut self,
        _team: PieceTeam,
        destination: BoardLocation,
    ) -> Option<PieceClass> {
        print!(
            "promote the pawn reaching {} to [q/r/b/n] (queen default): ",
            location_to_algebraic(destination)
        );
        io::stdout().flush().ok();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return None;
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "queen" => Some(PieceClass::Queen),
            "r" | "rook" => Some(PieceClass::Rook),
            "b" | "bishop" => Some(PieceClass::Bishop),
            "n" | "knight" => Some(PieceClass::Knight),
            _ => None,
        }
    }
}

fn team_name(team: PieceTeam) -> &'static str {
    match team {
        PieceTeam::Light => "white",
        PieceTeam::Dark => "black",
    }
}

fn announce(game: &GameState) {
    match game.status() {
        GameStatus::Check => println!("{} is in check.", team_name(game.turn)),
        GameStatus::Checkmate => println!(
            "Checkmate. {} wins.",
            team_name(game.turn.opposite())
        ),
        GameStatus::Stalemate => println!("Stalemate. Draw."),
        GameStatus::Ongoing => {}
    }
}

fn parse_move(text: &str) -> Option<(BoardLocation, BoardLocation)> {
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }
    let start = location_from_algebraic(&text[0..2]).ok()?;
    let destination = location_from_algebraic(&text[2..4]).ok()?;
    Some((start, destination))
}

fn print_help() {
    println!("commands:");
    println!("  e2e4        apply the move from e2 to e4");
    println!("  moves e2    list legal destinations for the piece on e2");
    println!("  history     print the move log in algebraic notation");
    println!("  fen         print the current position snapshot");
    println!("  board       reprint the board");
    println!("  reset       start a fresh game");
    println!("  quit        leave");
}

fn main() {
    let mut game = GameState::new_game();
    println!("{}", game.piece_register);
    println!("{} to move. Type 'help' for commands.", team_name(game.turn));

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            "quit" | "exit" => break,
            "help" => print_help(),
            "board" => println!("{}", game.piece_register),
            "fen" => println!("{}", game.get_fen()),
            "history" => {
                for (index, record) in game.move_history.iter().enumerate() {
                    println!("{:>3}. {}", index + 1, record.notation());
                }
            }
            "reset" => {
                game.reset();
                println!("{}", game.piece_register);
                println!("{} to move.", team_name(game.turn));
            }
            _ if trimmed.starts_with("moves ") => {
                match location_from_algebraic(trimmed.trim_start_matches("moves ")) {
                    Ok(start) => {
                        let destinations = game.legal_moves(start);
                        if destinations.is_empty() {
                            println!("no legal moves from {}", location_to_algebraic(start));
                        } else {
                            let listed: Vec<String> = destinations
                                .iter()
                                .map(|square| location_to_algebraic(*square))
                                .collect();
                            println!("{}", listed.join(" "));
                        }
                    }
                    Err(error) => println!("{error}"),
                }
            }
            _ => match parse_move(trimmed) {
                Some((start, destination)) => {
                    if game.is_game_over() {
                        println!("the game is over; 'reset' starts a new one");
                        continue;
                    }
                    match game.apply_move(start, destination, &mut StdinPromotion) {
                        Ok(record) => {
                            println!("played {}", record.notation());
                            println!("{}", game.piece_register);
                            announce(&game);
                        }
                        Err(error) => println!("rejected: {error}"),
                    }
                }
                None => println!("unrecognized input; type 'help' for commands"),
            },
        }
    }
}
