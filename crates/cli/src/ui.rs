//! Interactive command loop and headless autoplay.

use num_format::{Locale, ToFormattedString};
use rustyline::{DefaultEditor, error::ReadlineError};
use tiles_core::board::Direction;
use tiles_core::search::SearchResult;

use crate::EngineParams;
use crate::game::GameView;

fn parse_direction(cmd: &str) -> Option<Direction> {
    match cmd {
        "left" | "l" | "a" => Some(Direction::Left),
        "right" | "r" => Some(Direction::Right),
        "up" | "u" | "w" => Some(Direction::Up),
        "down" | "d" | "s" => Some(Direction::Down),
        _ => None,
    }
}

fn pick_seed(params: &EngineParams) -> u32 {
    params.seed.unwrap_or_else(rand::random)
}

fn print_search_report(label: &str, result: &SearchResult) {
    match result.best_move {
        Some(dir) => println!(
            "{label}: {dir}  (score {}, {} moves tried, {} pruned, {} cache hits)",
            result.score,
            result.nodes.to_formatted_string(&Locale::en),
            result.pruned.to_formatted_string(&Locale::en),
            result.cache_hits.to_formatted_string(&Locale::en),
        ),
        None => println!("{label}: no legal move"),
    }
}

/// Interactive terminal loop.
pub fn ui_loop(params: &EngineParams) -> Result<(), String> {
    let seed = pick_seed(params);
    println!("seed: {seed}");
    let mut game = GameView::new(seed, params.strategy.into(), params.level);

    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    loop {
        game.print();
        println!();

        let readline = rl.readline("> ");
        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.to_string()),
        };
        let _ = rl.add_history_entry(&line);

        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else { continue };
        println!();

        if let Some(dir) = parse_direction(cmd) {
            if !game.apply(dir) {
                println!("Nothing moves {dir}.");
            }
            continue;
        }

        match cmd {
            "undo" | "z" => {
                if !game.undo() {
                    println!("Cannot undo.");
                }
            }
            "redo" | "x" => {
                if !game.redo() {
                    println!("Cannot redo.");
                }
            }
            "new" | "n" => match parts.next() {
                Some(seed_str) => match seed_str.parse::<u32>() {
                    Ok(seed) => {
                        println!("seed: {seed}");
                        game.reseed(seed);
                    }
                    Err(_) => println!("Invalid seed: {seed_str}"),
                },
                None => game.new_game(),
            },
            "hint" => {
                let result = game.hint();
                print_search_report("hint", &result);
            }
            "ai" => {
                let result = game.ai_move();
                print_search_report("engine", &result);
            }
            "auto" => {
                let cap = parts.next().and_then(|s| s.parse::<u64>().ok());
                autoplay(&mut game, cap, true);
            }
            "key" => println!("board key: {:#018x}", game.board_key()),
            "quit" | "q" | "exit" => return Ok(()),
            "help" | "?" => print_help(),
            _ => println!("Unknown command: {cmd} (try 'help')"),
        }
    }
}

fn print_help() {
    println!("  left/right/up/down  move tiles (aliases: l r u d, w a s d)");
    println!("  undo / redo         step through history");
    println!("  new [seed]          new game; with a seed, restart the RNG stream");
    println!("  hint                search and report a move without playing it");
    println!("  ai                  let the engine play one move");
    println!("  auto [n]            autoplay until finished (or n moves)");
    println!("  key                 print the packed board key");
    println!("  quit                leave");
}

/// Runs engine moves until the game finishes or `cap` moves were played.
/// Returns the number of moves made.
fn autoplay(game: &mut GameView, cap: Option<u64>, echo_moves: bool) -> u64 {
    let mut played = 0u64;
    let mut total_nodes = 0u64;
    loop {
        if cap.is_some_and(|cap| played >= cap) {
            break;
        }
        let result = game.ai_move();
        let Some(dir) = result.best_move else { break };
        played += 1;
        total_nodes += result.nodes;
        if echo_moves {
            println!(
                "#{played}: {dir} (score {}, {} moves tried)",
                result.score,
                result.nodes.to_formatted_string(&Locale::en)
            );
        }
    }
    println!(
        "autoplay: {played} moves, {} moves tried in total",
        total_nodes.to_formatted_string(&Locale::en)
    );
    played
}

/// Headless autoplay subcommand.
pub fn run_auto(params: &EngineParams, moves: Option<u64>) {
    let seed = pick_seed(params);
    println!("seed: {seed}");
    let mut game = GameView::new(seed, params.strategy.into(), params.level);

    let played = autoplay(&mut game, moves, false);

    game.print();
    println!(
        "finished: {}  moves: {played}  highest tile: {}  board key: {:#018x}",
        game.finished(),
        game.highest_tile(),
        game.board_key()
    );
}
