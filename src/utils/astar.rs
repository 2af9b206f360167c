//! # A* Pathfinding
//!
//! Shortest paths over the 4-connected grid graph.
//!
//! Every step costs 1 and the heuristic is the Manhattan distance to the goal,
//! which never overestimates on a 4-connected grid, so the first time the goal
//! leaves the frontier its path is optimal. Frontier ties on `f` are broken by
//! insertion order, making the returned path fully reproducible.

use crate::grid::{Coordinate, Grid};
use crate::{MazeError, MazeResult};
use log::debug;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Ordered coordinates from start to goal, both inclusive.
pub type Path = Vec<Coordinate>;

/// Node for A* pathfinding algorithm.
#[derive(Debug, Clone)]
pub struct AStarNode {
    pub position: Coordinate,
    pub g_score: u32,
    pub f_score: u32,
    /// Insertion counter, the tie-breaker between equal `f` scores
    pub sequence: u64,
}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AStarNode {}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior in BinaryHeap; earlier insertions win ties
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Finds a shortest path from `start` to `goal`.
///
/// Returns `Ok(None)` when the goal cannot be reached, including when the
/// start or goal cell is blocked.
///
/// # Errors
///
/// Returns [`MazeError::InvalidInput`] if `start` or `goal` lies outside the grid.
///
/// # Examples
///
/// ```
/// use maze_explorer::{find_path, Coordinate, Grid};
///
/// let grid = Grid::from_ascii(&[
///     "#####",
///     "#...#",
///     "###.#",
///     "#...#",
///     "#####",
/// ]).unwrap();
/// let path = find_path(&grid, Coordinate::new(1, 1), Coordinate::new(3, 1))
///     .unwrap()
///     .unwrap();
/// assert_eq!(path.len(), 7);
/// ```
pub fn find_path(grid: &Grid, start: Coordinate, goal: Coordinate) -> MazeResult<Option<Path>> {
    for (name, coordinate) in [("start", start), ("goal", goal)] {
        if !grid.in_bounds(coordinate) {
            return Err(MazeError::InvalidInput(format!(
                "{} {} is outside the {}x{} grid",
                name,
                coordinate,
                grid.rows(),
                grid.cols()
            )));
        }
    }

    if !grid.is_open(start) || !grid.is_open(goal) {
        debug!("No path from {} to {}: endpoint is blocked", start, goal);
        return Ok(None);
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: HashMap<Coordinate, Coordinate> = HashMap::new();
    let mut g_score: HashMap<Coordinate, u32> = HashMap::new();
    let mut sequence = 0u64;

    g_score.insert(start, 0);
    open_set.push(AStarNode {
        position: start,
        g_score: 0,
        f_score: start.manhattan_distance(goal),
        sequence,
    });

    let mut expanded = 0usize;
    while let Some(current_node) = open_set.pop() {
        let current = current_node.position;

        // Skip entries superseded by a cheaper route found after they were queued
        if g_score
            .get(&current)
            .map_or(false, |&best| current_node.g_score > best)
        {
            continue;
        }

        if current == goal {
            let path = reconstruct_path(&came_from, start, goal);
            debug!(
                "Found path {} -> {} of length {} after {} expansions",
                start,
                goal,
                path.len(),
                expanded
            );
            return Ok(Some(path));
        }
        expanded += 1;

        for neighbor in grid.open_neighbors(current) {
            let tentative_g_score = current_node.g_score + 1;

            if g_score
                .get(&neighbor)
                .map_or(true, |&known| tentative_g_score < known)
            {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g_score);
                sequence += 1;
                open_set.push(AStarNode {
                    position: neighbor,
                    g_score: tentative_g_score,
                    f_score: tentative_g_score + neighbor.manhattan_distance(goal),
                    sequence,
                });
            }
        }
    }

    debug!(
        "No path from {} to {} after {} expansions",
        start, goal, expanded
    );
    Ok(None) // No path found
}

fn reconstruct_path(
    came_from: &HashMap<Coordinate, Coordinate>,
    start: Coordinate,
    goal: Coordinate,
) -> Path {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Number of steps on a shortest path, or `None` when unreachable.
pub fn shortest_distance(grid: &Grid, start: Coordinate, goal: Coordinate) -> MazeResult<Option<usize>> {
    Ok(find_path(grid, start, goal)?.map(|path| path.len() - 1))
}

/// Checks whether `goal` can be reached from `start`.
pub fn is_reachable(grid: &Grid, start: Coordinate, goal: Coordinate) -> MazeResult<bool> {
    Ok(find_path(grid, start, goal)?.is_some())
}
