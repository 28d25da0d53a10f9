use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major grid indexed by `Pos`. Callers must bounds-check positions
/// (`contains`) before indexing - stepping off the board is a rule
/// violation, not a panic path.
#[derive(Clone, PartialEq, Eq)]
pub struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Vec2d<T> {
    /// Builds a grid from possibly ragged rows, padding short rows with
    /// `default` so every row has the same length.
    pub fn new(grid: &[Vec<T>], default: T) -> Self {
        assert!(!grid.is_empty() && !grid[0].is_empty());

        let max_cols = grid.iter().map(|row| row.len()).max().unwrap();
        let mut data = Vec::with_capacity(grid.len() * max_cols);
        for row in grid {
            data.extend_from_slice(row);
            for _ in row.len()..max_cols {
                data.push(default);
            }
        }
        Vec2d {
            data,
            rows: grid.len(),
            cols: max_cols,
        }
    }
}

impl<T> Vec2d<T> {
    pub fn rows(&self) -> i32 {
        self.rows as i32
    }

    pub fn cols(&self) -> i32 {
        self.cols as i32
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && pos.r < self.rows() && pos.c < self.cols()
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        assert!(self.contains(index));
        &self.data[index.r as usize * self.cols + index.c as usize]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        assert!(self.contains(index));
        &mut self.data[index.r as usize * self.cols + index.c as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Tile;

    #[test]
    fn padding_ragged_rows() {
        let grid = Vec2d::new(
            &[vec![Tile::Wall, Tile::Wall], vec![Tile::Wall]],
            Tile::Empty,
        );
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid[Pos::new(1, 1)], Tile::Empty);
    }

    #[test]
    fn bounds() {
        let grid = Vec2d::new(&vec![vec![Tile::Empty; 3]; 2], Tile::Empty);
        assert!(grid.contains(Pos { r: 0, c: 0 }));
        assert!(grid.contains(Pos { r: 1, c: 2 }));
        assert!(!grid.contains(Pos { r: -1, c: 0 }));
        assert!(!grid.contains(Pos { r: 0, c: 3 }));
        assert!(!grid.contains(Pos { r: 2, c: 0 }));
    }
}
