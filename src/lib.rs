//! A single-player grid puzzle - a cat pushes glass blocks onto destination
//! tiles - plus a hint engine that finds an optimal next move by exhaustive
//! breadth-first search.
//!
//! The rule evaluator ([`engine::PuzzleEngine`]) is the only code that
//! mutates puzzle state; the solver ([`solver::find_hint`]) expands search
//! nodes through transient engines so it can never explore an illegal state.

// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

pub mod data;
pub mod engine;
pub mod parser;
pub mod path;
pub mod room;
pub mod rooms;
pub mod solver;
pub mod state;
pub mod vec2d;

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::engine::PuzzleEngine;

/// Loading a room layout from anything path-like.
pub trait LoadRoom {
    fn load_room(&self) -> Result<PuzzleEngine, Box<dyn Error>>;
}

impl<T: AsRef<Path>> LoadRoom for T {
    fn load_room(&self) -> Result<PuzzleEngine, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        Ok(PuzzleEngine::from_layout(&text)?)
    }
}
