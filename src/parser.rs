use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::data::{Pos, Tile};
use crate::room::RoomMap;
use crate::state::PuzzleState;
use crate::vec2d::Vec2d;

/// Rooms larger than this make no sense for hand-authored puzzles and would
/// only blow up the solver.
pub const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    TooLarge,
    NoAgent,
    MultipleAgents,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Empty layout"),
            ParserErr::TooLarge => write!(f, "Layout larger than {} rows/columns", MAX_SIZE),
            ParserErr::NoAgent => write!(f, "No agent start position"),
            ParserErr::MultipleAgents => write!(f, "More than one agent start position"),
        }
    }
}

impl Error for ParserErr {}

/// Parses a textual room layout into its static geometry and initial state.
///
/// Vocabulary: `+` wall, ` ` empty, `0` destination, `C` agent start,
/// `G` block, `X` block already on a destination. Anything else is treated
/// as empty floor. Blocks are collected in row-major scan order which fixes
/// the deterministic ordering the state hash relies on.
pub fn parse(layout: &str) -> Result<(RoomMap, PuzzleState), ParserErr> {
    // trim so rooms can be written as raw strings in tests
    let layout = layout.trim_matches('\n');
    if layout.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut grid = Vec::new();
    let mut destinations = Vec::new();
    let mut blocks = Vec::new();
    let mut agent = None;

    for (r, line) in layout.lines().enumerate() {
        if r >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        let mut row = Vec::new();
        for (c, ch) in line.chars().enumerate() {
            if c >= MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let pos = Pos::new(r, c);
            match ch {
                '+' => row.push(Tile::Wall),
                '0' => {
                    destinations.push(pos);
                    row.push(Tile::Destination);
                }
                'C' => {
                    if agent.is_some() {
                        return Err(ParserErr::MultipleAgents);
                    }
                    agent = Some(pos);
                    row.push(Tile::Empty);
                }
                'G' => {
                    blocks.push(pos);
                    row.push(Tile::Empty);
                }
                'X' => {
                    blocks.push(pos);
                    destinations.push(pos);
                    row.push(Tile::Destination);
                }
                // unrecognized characters (including ' ') are empty floor
                _ => row.push(Tile::Empty),
            }
        }
        grid.push(row);
    }

    let agent = agent.ok_or(ParserErr::NoAgent)?;
    let grid = Vec2d::new(&grid, Tile::Empty);

    Ok((
        RoomMap::new(grid, destinations),
        PuzzleState::new(agent, blocks),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_basic_room() {
        let (map, state) = parse(
            r"
+++
C +
+G+
+0+
+++
",
        )
        .unwrap();
        assert_eq!(map.rows(), 5);
        assert_eq!(map.cols(), 3);
        assert_eq!(state.agent, Pos::new(1, 0));
        assert_eq!(state.blocks, vec![Pos::new(2, 1)]);
        assert_eq!(map.destinations, vec![Pos::new(3, 1)]);
        assert_eq!(map.grid[Pos::new(0, 1)], Tile::Wall);
        assert_eq!(map.grid[Pos::new(1, 1)], Tile::Empty);
        assert_eq!(map.grid[Pos::new(3, 1)], Tile::Destination);
    }

    #[test]
    fn block_on_destination() {
        let (map, state) = parse("+++++\n+CX0+\n+++++").unwrap();
        assert_eq!(state.blocks, vec![Pos::new(1, 2)]);
        assert_eq!(map.destinations, vec![Pos::new(1, 2), Pos::new(1, 3)]);
        assert!(state.block_on_destination(&map, 0));
    }

    #[test]
    fn unrecognized_chars_default_to_empty() {
        let (map, _) = parse("+++\n+C?\n+++").unwrap();
        assert_eq!(map.grid[Pos::new(1, 2)], Tile::Empty);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let (map, _) = parse("++++\n+C\n++++").unwrap();
        assert_eq!(map.cols(), 4);
        assert_eq!(map.grid[Pos::new(1, 3)], Tile::Empty);
    }

    #[test]
    fn rejecting_bad_rooms() {
        assert_eq!(parse("").unwrap_err(), ParserErr::Empty);
        assert_eq!(parse("\n\n").unwrap_err(), ParserErr::Empty);
        assert_eq!(parse("+++\n+ +\n+++").unwrap_err(), ParserErr::NoAgent);
        assert_eq!(parse("CC").unwrap_err(), ParserErr::MultipleAgents);
    }

    #[test]
    fn blocks_keep_scan_order() {
        let (_, state) = parse("G G\n C \nG  ").unwrap();
        assert_eq!(
            state.blocks,
            vec![Pos::new(0, 0), Pos::new(0, 2), Pos::new(2, 0)]
        );
    }
}
