use std::io::{self, BufRead, Write};

use mnk_engine::game::{GameState, GameStatus, Mark};
use mnk_engine::log;

use crate::input::{Command, is_yes, parse_command};

/// Plays games on stdin/stdout until the player quits, declines a rematch or
/// input ends.
pub fn run(game: &mut GameState) -> Result<(), String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "You play {}, the engine plays {}. Enter moves as `row col`, `q` quits.",
        game.human_mark(),
        game.engine_mark()
    );

    loop {
        if let Some(pos) = game.play_engine() {
            println!("Engine plays {}", pos);
        }

        print!("{}", game.board());

        if game.status().is_over() {
            println!("{}", result_message(game));
            prompt("Play again? [y/N] ")?;
            let answer = match lines.next() {
                Some(line) => line.map_err(|e| format!("Failed to read input: {}", e))?,
                None => return Ok(()),
            };
            if !is_yes(&answer) {
                return Ok(());
            }
            game.restart();
            log!("Game restarted, human plays {}", game.human_mark());
            continue;
        }

        prompt(&format!("Your move ({}): ", game.human_mark()))?;
        let line = match lines.next() {
            Some(line) => line.map_err(|e| format!("Failed to read input: {}", e))?,
            None => return Ok(()),
        };

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Place(pos)) => match game.play_human(pos) {
                Ok(Some(reply)) => println!("Engine plays {}", reply),
                Ok(None) => {}
                Err(e) => println!("{}", e),
            },
            Err(e) => println!("{}", e),
        }
    }
}

fn prompt(text: &str) -> Result<(), String> {
    print!("{}", text);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to write output: {}", e))
}

fn result_message(game: &GameState) -> String {
    let winner = match game.status() {
        GameStatus::XWon => Mark::X,
        GameStatus::OWon => Mark::O,
        GameStatus::Draw => return "It's a draw!".to_string(),
        GameStatus::InProgress => return String::new(),
    };

    if winner == game.human_mark() {
        format!("'{}' won. Well played!", winner)
    } else {
        format!("'{}' won. The engine takes this one.", winner)
    }
}
