use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use log::debug;

use crate::data::{Dir, Tile};
use crate::parser::{self, ParserErr};
use crate::room::{RoomFormatter, RoomMap};
use crate::rooms::RoomCatalog;
use crate::state::PuzzleState;

/// Why a move was rejected. The state is guaranteed unchanged when any of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveBlocked {
    OutOfBounds,
    WallCollision,
    BlockOutOfBounds,
    BlockIntoWall,
    BlockIntoBlock,
}

impl Display for MoveBlocked {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MoveBlocked::OutOfBounds => write!(f, "Agent would leave the room"),
            MoveBlocked::WallCollision => write!(f, "Agent would walk into a wall"),
            MoveBlocked::BlockOutOfBounds => write!(f, "Block would leave the room"),
            MoveBlocked::BlockIntoWall => write!(f, "Block would be pushed into a wall"),
            MoveBlocked::BlockIntoBlock => write!(f, "Block would be pushed into another block"),
        }
    }
}

impl Error for MoveBlocked {}

/// Successful move. `solved` is the win condition evaluated on the
/// resulting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub pushed: bool,
    pub solved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadErr {
    NoSuchRoom(usize),
    Parse(ParserErr),
}

impl Display for LoadErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LoadErr::NoSuchRoom(index) => write!(f, "No room with index {}", index),
            LoadErr::Parse(err) => write!(f, "Bad room layout: {}", err),
        }
    }
}

impl Error for LoadErr {}

impl From<ParserErr> for LoadErr {
    fn from(err: ParserErr) -> Self {
        LoadErr::Parse(err)
    }
}

/// The rule evaluator. Owns one `PuzzleState` and is the only code that
/// mutates it - both live play and search-node expansion go through
/// `apply_move`, so the two can never disagree about which states are
/// reachable.
pub struct PuzzleEngine {
    map: Rc<RoomMap>,
    state: PuzzleState,
    room_index: usize,
}

impl PuzzleEngine {
    /// Parses a standalone layout (not part of any catalog).
    pub fn from_layout(layout: &str) -> Result<Self, ParserErr> {
        let (map, state) = parser::parse(layout)?;
        Ok(PuzzleEngine {
            map: Rc::new(map),
            state,
            room_index: 0,
        })
    }

    pub fn from_catalog(catalog: &RoomCatalog, index: usize) -> Result<Self, LoadErr> {
        let room = catalog.get(index).ok_or(LoadErr::NoSuchRoom(index))?;
        let (map, state) = parser::parse(&room.layout)?;
        Ok(PuzzleEngine {
            map: Rc::new(map),
            state,
            room_index: index,
        })
    }

    /// Cheap engine bound to an existing map and a hypothetical state, used
    /// by the solver to expand search nodes. The map is shared, never
    /// deep-copied.
    pub fn with_state(map: Rc<RoomMap>, state: PuzzleState) -> Self {
        PuzzleEngine {
            map,
            state,
            room_index: 0,
        }
    }

    pub fn map(&self) -> &RoomMap {
        &self.map
    }

    pub fn share_map(&self) -> Rc<RoomMap> {
        Rc::clone(&self.map)
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn into_state(self) -> PuzzleState {
        self.state
    }

    pub fn room_index(&self) -> usize {
        self.room_index
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved(&self.map)
    }

    pub fn format(&self) -> RoomFormatter<'_> {
        self.map.format_with_state(&self.state)
    }

    /// Replaces the current room. Parses first and swaps after, so a bad
    /// layout leaves the engine exactly as it was.
    pub fn load_room(&mut self, catalog: &RoomCatalog, index: usize) -> Result<(), LoadErr> {
        let room = catalog.get(index).ok_or(LoadErr::NoSuchRoom(index))?;
        let (map, state) = parser::parse(&room.layout)?;
        debug!("Loaded room {}: {}", index, room.description);
        self.map = Rc::new(map);
        self.state = state;
        self.room_index = index;
        Ok(())
    }

    /// Moves on to the next room in the catalog after a win. Returns false
    /// when there are no rooms left.
    pub fn advance_room(&mut self, catalog: &RoomCatalog) -> Result<bool, LoadErr> {
        let next = self.room_index + 1;
        if next >= catalog.len() {
            return Ok(false);
        }
        self.load_room(catalog, next)?;
        Ok(true)
    }

    /// Applies one move of the rule set.
    ///
    /// All checks happen before any mutation, so a rejected move leaves the
    /// state structurally identical to what it was - there is no partially
    /// applied move to observe. A push moves exactly one block exactly one
    /// cell in the direction the agent moved; there is no pulling and no
    /// chain-pushing.
    pub fn apply_move(&mut self, dir: Dir) -> Result<MoveOutcome, MoveBlocked> {
        let target = self.state.agent + dir;
        if !self.map.contains(target) {
            return Err(MoveBlocked::OutOfBounds);
        }
        if self.map.grid[target] == Tile::Wall {
            return Err(MoveBlocked::WallCollision);
        }

        let mut pushed = false;
        if let Some(index) = self.state.block_at(target) {
            let block_target = target + dir;
            if !self.map.contains(block_target) {
                return Err(MoveBlocked::BlockOutOfBounds);
            }
            if self.map.grid[block_target] == Tile::Wall {
                return Err(MoveBlocked::BlockIntoWall);
            }
            if self.state.block_at(block_target).is_some() {
                return Err(MoveBlocked::BlockIntoBlock);
            }
            self.state.blocks[index] = block_target;
            pushed = true;
        }
        self.state.agent = target;

        Ok(MoveOutcome {
            pushed,
            solved: self.state.is_solved(&self.map),
        })
    }
}

impl Debug for PuzzleEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "room {}:\n{}", self.room_index, self.format())
    }
}
