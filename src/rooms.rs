use std::error::Error;
use std::fs;
use std::path::Path;

/// One room of a catalog - the textual layout plus a human readable
/// description shown when listing rooms.
#[derive(Debug, Clone)]
pub struct RoomSpec {
    pub description: String,
    pub layout: String,
}

impl RoomSpec {
    pub fn new(description: &str, layout: &str) -> Self {
        RoomSpec {
            description: description.to_string(),
            layout: layout.to_string(),
        }
    }
}

/// Ordered, read-only list of rooms. The engine references rooms by index
/// and never copies the catalog.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<RoomSpec>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<RoomSpec>) -> Self {
        RoomCatalog { rooms }
    }

    /// The rooms shipped with the game.
    pub fn builtin() -> Self {
        RoomCatalog::new(vec![
            RoomSpec::new(
                "Nudge - one glass, one push",
                include_str!("../rooms/01-nudge.txt"),
            ),
            RoomSpec::new(
                "Corner - walk around before pushing",
                include_str!("../rooms/02-corner.txt"),
            ),
            RoomSpec::new(
                "Two glasses - order matters",
                include_str!("../rooms/03-two-glasses.txt"),
            ),
            RoomSpec::new(
                "Wedged - no solution, for testing hints",
                include_str!("../rooms/04-wedged.txt"),
            ),
        ])
    }

    /// Loads a player-supplied directory of room files, in sorted file name
    /// order. The file stem doubles as the description.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, Box<dyn Error>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            paths.push(entry?.path());
        }
        paths.sort();

        let mut rooms = Vec::new();
        for path in paths {
            let layout = fs::read_to_string(&path)?;
            let description = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            rooms.push(RoomSpec {
                description,
                layout,
            });
        }
        Ok(RoomCatalog::new(rooms))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RoomSpec> {
        self.rooms.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoomSpec> {
        self.rooms.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::PuzzleEngine;
    use crate::parser;

    use super::*;

    #[test]
    fn builtin_rooms_parse() {
        let catalog = RoomCatalog::builtin();
        assert!(catalog.len() >= 4);
        for room in catalog.iter() {
            parser::parse(&room.layout).unwrap();
        }
    }

    #[test]
    fn builtin_rooms_start_unsolved() {
        let catalog = RoomCatalog::builtin();
        for index in 0..catalog.len() {
            let engine = PuzzleEngine::from_catalog(&catalog, index).unwrap();
            assert!(!engine.is_solved(), "room {} starts solved", index);
        }
    }
}
