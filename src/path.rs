use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// An action sequence returned by the solver, printed as one letter per
/// move (`udlr`).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Dir>);

impl Path {
    pub fn new(dirs: Vec<Dir>) -> Self {
        Path(dirs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<Dir> {
        self.0.first().copied()
    }

    pub fn dirs(&self) -> &[Dir] {
        &self.0
    }
}

impl IntoIterator for Path {
    type Item = Dir;
    type IntoIter = std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Dir;
    type IntoIter = std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in &self.0 {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
