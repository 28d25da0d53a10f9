use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Pos, Tile};
use crate::state::PuzzleState;
use crate::vec2d::Vec2d;

/// Static geometry of a room. Immutable after parsing and shared (behind
/// `Rc`) between the live engine and every search node, so it is never
/// deep-copied during a search.
#[derive(Clone)]
pub struct RoomMap {
    pub grid: Vec2d<Tile>,
    pub destinations: Vec<Pos>,
}

impl RoomMap {
    pub fn new(grid: Vec2d<Tile>, destinations: Vec<Pos>) -> Self {
        RoomMap { grid, destinations }
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.grid.contains(pos)
    }

    pub fn format_with_state<'a>(&'a self, state: &'a PuzzleState) -> RoomFormatter<'a> {
        RoomFormatter { map: self, state }
    }
}

impl Display for RoomMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for RoomMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Renders a map with a state overlaid using the same character vocabulary
/// the parser accepts, so a formatted room parses back to itself.
pub struct RoomFormatter<'a> {
    map: &'a RoomMap,
    state: &'a PuzzleState,
}

impl<'a> Display for RoomFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.map.rows() {
            for c in 0..self.map.cols() {
                let pos = Pos { r, c };
                let tile = self.map.grid[pos];
                if self.state.agent == pos {
                    write!(f, "C")?;
                } else if self.state.block_at(pos).is_some() {
                    if tile == Tile::Destination {
                        write!(f, "X")?;
                    } else {
                        write!(f, "G")?;
                    }
                } else {
                    write!(f, "{}", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> Debug for RoomFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser;

    #[test]
    fn formatting_round_trips() {
        let layout = "\
++++++
+C G0+
+ X  +
++++++
";
        let (map, state) = parser::parse(layout).unwrap();
        assert_eq!(map.format_with_state(&state).to_string(), layout);
    }

    #[test]
    fn formatting_bare_map() {
        let layout = "\
++++
+C0+
++++
";
        let (map, _) = parser::parse(layout).unwrap();
        // without a state overlay the agent cell is just floor
        assert_eq!(map.to_string(), "++++\n+ 0+\n++++\n");
    }
}
