//! Terminal presentation of a game session.
//!
//! A thin wrapper around the core `Session` that adds colored board
//! rendering; all rules live in the core.

use colored::{ColoredString, Colorize};
use tiles_core::board::Direction;
use tiles_core::search::{SearchResult, Strategy};
use tiles_core::session::Session;
use tiles_core::types::Rank;

pub struct GameView {
    core: Session,
}

impl GameView {
    pub fn new(seed: u32, strategy: Strategy, level: usize) -> Self {
        GameView {
            core: Session::with_config(seed, strategy, level),
        }
    }

    pub fn apply(&mut self, dir: Direction) -> bool {
        self.core.apply(dir)
    }

    pub fn undo(&mut self) -> bool {
        self.core.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.core.redo()
    }

    pub fn new_game(&mut self) {
        self.core.new_game()
    }

    pub fn reseed(&mut self, seed: u32) {
        self.core.reseed(seed)
    }

    pub fn hint(&mut self) -> SearchResult {
        self.core.hint()
    }

    pub fn ai_move(&mut self) -> SearchResult {
        self.core.ai_move()
    }

    pub fn finished(&self) -> bool {
        self.core.finished()
    }

    /// Largest tile value currently on the board.
    pub fn highest_tile(&self) -> u32 {
        let rank = self.core.board().highest_rank();
        if rank == 0 { 0 } else { 1u32 << rank }
    }

    /// Packed board key, printed so a position can be reported or replayed.
    pub fn board_key(&self) -> u64 {
        self.core.board().pack()
    }

    fn tile_text(rank: Rank) -> ColoredString {
        if rank == 0 {
            return "      ".black();
        }
        let value = format!("{:>6}", 1u32 << rank);
        match rank {
            1 => value.white(),
            2 => value.bright_white(),
            3 => value.bright_cyan(),
            4 => value.cyan(),
            5 => value.bright_yellow(),
            6 => value.yellow(),
            7 => value.bright_magenta(),
            8 => value.magenta(),
            9 => value.bright_green(),
            10 => value.green(),
            _ => value.bright_red(),
        }
    }

    /// Prints the board grid with undo/redo and terminal status alongside.
    pub fn print(&self) {
        let board = self.core.board();
        let history = self.core.history();

        println!("    ┌──────┬──────┬──────┬──────┐");
        for row in 0..4 {
            print!("    │");
            for col in 0..4 {
                let rank = board.cells[row * 4 + col];
                print!("{}│", Self::tile_text(rank));
            }
            match row {
                0 => println!("   highest: {}", self.highest_tile()),
                1 => println!(
                    "   undo: {}  redo: {}",
                    history.undo_available(),
                    history.redo_available()
                ),
                3 => {
                    if self.finished() {
                        println!("   {}", "*** no moves left ***".bright_red());
                    } else {
                        println!();
                    }
                }
                _ => println!(),
            }
            if row < 3 {
                println!("    ├──────┼──────┼──────┼──────┤");
            }
        }
        println!("    └──────┴──────┴──────┴──────┘");
    }
}
