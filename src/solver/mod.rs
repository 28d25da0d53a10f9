mod stats;

pub use self::stats::Stats;

use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use fnv::{FnvHashMap, FnvHashSet};
use log::debug;

use crate::data::{Dir, DIRECTIONS};
use crate::engine::PuzzleEngine;
use crate::path::Path;
use crate::room::RoomMap;
use crate::state::PuzzleState;

/// The three expected outcomes of a hint request. None of these is an
/// error - an unsolvable room is an answer, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// The starting state is already a win - nothing to do.
    AlreadySolved,
    /// A shortest action sequence to a win state. Never empty.
    Solution(Path),
    /// The whole reachable state space contains no win state.
    NoSolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    /// Something panicked inside the search. The hint feature must never
    /// crash the game, so it is reported as a result instead.
    Internal,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::Internal => write!(f, "Internal solver failure"),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    pub hint: Hint,
    pub stats: Stats,
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.hint {
            Hint::AlreadySolved => writeln!(f, "Already solved")?,
            Hint::Solution(ref path) => writeln!(f, "Solution ({} moves): {}", path.len(), path)?,
            Hint::NoSolution => writeln!(f, "No solution")?,
        }
        write!(f, "{:?}", self.stats)
    }
}

/// Finds a shortest action sequence from the engine's current state to a
/// win state. The engine is not mutated - the search works on clones.
pub fn find_hint(engine: &PuzzleEngine, print_status: bool) -> Result<SolverOk, SolverErr> {
    let map = engine.share_map();
    let start = engine.state().clone();
    panic::catch_unwind(AssertUnwindSafe(|| search(&map, &start, print_status)))
        .map_err(|_| SolverErr::Internal)
}

/// Breadth-first search over the implicit state graph.
///
/// Every edge is discovered by applying a move through a transient
/// `PuzzleEngine`, so the gameplay rules are the sole source of truth for
/// reachability. The parent map is written the first time a state is
/// discovered and never overwritten; because BFS discovers states in
/// non-decreasing depth order, the recorded link always lies on a shortest
/// path. States are marked visited when dequeued, not when enqueued.
fn search(map: &Rc<RoomMap>, start: &PuzzleState, print_status: bool) -> SolverOk {
    debug!("Search called");

    let mut stats = Stats::new();
    let mut frontier = VecDeque::new();
    let mut visited = FnvHashSet::default();
    let mut parents: FnvHashMap<PuzzleState, Option<(PuzzleState, Dir)>> = FnvHashMap::default();

    stats.add_created(0);
    parents.insert(start.clone(), None);
    frontier.push_back((start.clone(), 0));

    while let Some((current, depth)) = frontier.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if stats.add_unique_visited(depth) && print_status {
            println!("Visited new depth: {}", depth);
        }

        if current.is_solved(map) {
            debug!("Solved at depth {}, backtracking path", depth);
            let path = backtrack(&parents, &current);
            let hint = if path.is_empty() {
                Hint::AlreadySolved
            } else {
                Hint::Solution(path)
            };
            return SolverOk { hint, stats };
        }

        for &dir in &DIRECTIONS {
            let mut probe = PuzzleEngine::with_state(Rc::clone(map), current.clone());
            if probe.apply_move(dir).is_err() {
                // blocked moves yield no child
                continue;
            }
            let child = probe.into_state();
            if parents.contains_key(&child) {
                stats.add_reached_duplicate(depth + 1);
                continue;
            }
            stats.add_created(depth + 1);
            parents.insert(child.clone(), Some((current.clone(), dir)));
            frontier.push_back((child, depth + 1));
        }
    }

    debug!("Search space exhausted, no solution");
    SolverOk {
        hint: Hint::NoSolution,
        stats,
    }
}

fn backtrack(
    parents: &FnvHashMap<PuzzleState, Option<(PuzzleState, Dir)>>,
    final_state: &PuzzleState,
) -> Path {
    let mut dirs = Vec::new();
    let mut state = final_state;
    while let Some((prev, dir)) = &parents[state] {
        dirs.push(*dir);
        state = prev;
    }
    dirs.reverse();
    Path::new(dirs)
}

#[cfg(test)]
mod tests {
    use crate::data::Dir;
    use crate::engine::MoveBlocked;

    use super::*;

    fn hint_for(layout: &str) -> SolverOk {
        let engine = PuzzleEngine::from_layout(layout).unwrap();
        find_hint(&engine, false).unwrap()
    }

    /// Smallest number of moves to a win, by trying every action sequence
    /// of increasing length. Only usable on tiny rooms but independent of
    /// the BFS, so it can cross-check optimality.
    fn brute_force_min(engine: &PuzzleEngine, max_depth: usize) -> Option<usize> {
        fn solvable_within(map: &Rc<RoomMap>, state: &PuzzleState, depth: usize) -> bool {
            if state.is_solved(map) {
                return true;
            }
            if depth == 0 {
                return false;
            }
            DIRECTIONS.iter().any(|&dir| {
                let mut probe = PuzzleEngine::with_state(Rc::clone(map), state.clone());
                probe.apply_move(dir).is_ok()
                    && solvable_within(map, &probe.into_state(), depth - 1)
            })
        }

        let map = engine.share_map();
        (0..=max_depth).find(|&depth| solvable_within(&map, engine.state(), depth))
    }

    #[test]
    fn already_solved_room() {
        // agent only, no blocks, no destinations
        let ok = hint_for("+++\n+C+\n+++");
        assert_eq!(ok.hint, Hint::AlreadySolved);
        assert_eq!(ok.stats.total_unique_visited(), 1);
    }

    #[test]
    fn one_push_room() {
        let ok = hint_for("++++++\n+C G0+\n++++++");
        assert_eq!(
            ok.hint,
            Hint::Solution(Path::new(vec![Dir::Right, Dir::Right]))
        );
        assert_eq!(ok.stats.total_created(), 3);
        assert_eq!(ok.stats.total_unique_visited(), 3);
        assert_eq!(ok.stats.total_reached_duplicates(), 1);
    }

    #[test]
    fn never_proposes_a_blocked_push() {
        // the block sits against a wall on its right, so pushing right is
        // illegal - the solution has to go around and push down
        let layout = "
+++++++
+C    +
+  G+ +
+  0  +
+++++++";
        let mut engine = PuzzleEngine::from_layout(layout).unwrap();

        // stand left of the block and confirm the push is rejected
        engine.apply_move(Dir::Down).unwrap();
        engine.apply_move(Dir::Right).unwrap();
        assert_eq!(
            engine.apply_move(Dir::Right).unwrap_err(),
            MoveBlocked::BlockIntoWall
        );

        let ok = find_hint(&engine, false).unwrap();
        match ok.hint {
            Hint::Solution(ref path) => assert_ne!(path.first(), Some(Dir::Right)),
            ref other => panic!("expected a solution, got {:?}", other),
        }
    }

    #[test]
    fn no_chain_push_means_no_solution() {
        // two blocks in a line, agent can only approach from the left
        let ok = hint_for("++++++\n+CGG0+\n++++++");
        assert_eq!(ok.hint, Hint::NoSolution);
    }

    #[test]
    fn wedged_block_exhausts_the_search() {
        let ok = hint_for("+++++\n+C G+\n+  0+\n+++++");
        assert_eq!(ok.hint, Hint::NoSolution);
        // the agent can still walk around, so more than one state was seen
        assert!(ok.stats.total_unique_visited() > 1);
    }

    #[test]
    fn hints_are_optimal() {
        let layouts = [
            "++++++\n+C G0+\n++++++",
            "+++++++\n+  0  +\n+ CG  +\n+     +\n+++++++",
            "+++++++\n+C    +\n+  G+ +\n+  0  +\n+++++++",
        ];
        for layout in &layouts {
            let engine = PuzzleEngine::from_layout(layout).unwrap();
            let expected = brute_force_min(&engine, 8).unwrap();
            match find_hint(&engine, false).unwrap().hint {
                Hint::Solution(path) => assert_eq!(path.len(), expected, "layout:\n{}", layout),
                other => panic!("expected a solution, got {:?}", other),
            }
        }
    }

    #[test]
    fn hints_are_deterministic() {
        let layout = "\
++++++++
+  0 0 +
+  G G +
+ C    +
++++++++";
        let a = hint_for(layout);
        let b = hint_for(layout);
        assert_eq!(a.hint, b.hint);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn solving_does_not_mutate_the_engine() {
        let engine = PuzzleEngine::from_layout("++++++\n+C G0+\n++++++").unwrap();
        let before = engine.state().clone();
        find_hint(&engine, false).unwrap();
        assert_eq!(engine.state(), &before);
    }
}
