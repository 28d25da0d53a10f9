use crate::data::{Pos, Tile};
use crate::room::RoomMap;

/// Dynamic part of the puzzle - everything a move can change.
///
/// The derived `Hash`/`Eq` over the agent plus the blocks in stored order is
/// the canonical key the solver uses for its visited set and parent map.
/// Blocks keep the order the parser discovered them in and are never
/// reordered, so structurally identical states always hash identically.
/// Whether a block sits on a destination is derived from the tile under it,
/// never stored, so it can not go stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    pub agent: Pos,
    pub blocks: Vec<Pos>,
}

impl PuzzleState {
    pub fn new(agent: Pos, blocks: Vec<Pos>) -> Self {
        PuzzleState { agent, blocks }
    }

    pub fn block_at(&self, pos: Pos) -> Option<usize> {
        self.blocks.iter().position(|&b| b == pos)
    }

    pub fn block_on_destination(&self, map: &RoomMap, index: usize) -> bool {
        map.grid[self.blocks[index]] == Tile::Destination
    }

    /// True iff every block sits on a destination tile. A room without
    /// blocks is vacuously solved.
    pub fn is_solved(&self, map: &RoomMap) -> bool {
        self.blocks.iter().all(|&b| map.grid[b] == Tile::Destination)
    }
}
