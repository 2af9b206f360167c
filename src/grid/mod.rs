//! # Grid Module
//!
//! The passive grid model shared by maze generation and pathfinding.
//!
//! A [`Grid`] is a fixed-size rectangle of [`Cell`]s. Once built it is never
//! resized; generation produces a complete grid and every other component
//! only reads it.

use crate::{MazeError, MazeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(row, col)` pair used both as a grid index and as a graph node.
///
/// # Examples
///
/// ```
/// use maze_explorer::Coordinate;
///
/// let a = Coordinate::new(1, 1);
/// let b = Coordinate::new(4, 5);
/// assert_eq!(a.manhattan_distance(b), 7);
/// assert_eq!(a.orthogonal_neighbors().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate.
    pub fn manhattan_distance(self, other: Coordinate) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The four orthogonal neighbours: right, left, down, up.
    ///
    /// Neighbours may lie outside any particular grid; callers filter by bounds.
    pub fn orthogonal_neighbors(self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.row, self.col + 1),
            Coordinate::new(self.row, self.col - 1),
            Coordinate::new(self.row + 1, self.col),
            Coordinate::new(self.row - 1, self.col),
        ]
    }

    /// Returns true when `other` differs by exactly one step along one axis.
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl std::ops::Add for Coordinate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }
}

impl std::ops::Sub for Coordinate {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.row - other.row, self.col - other.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Walkable corridor
    Open,
    /// Wall
    Blocked,
}

impl Cell {
    /// ASCII glyph used by [`Grid::from_ascii`] and the `Display` impl.
    pub fn glyph(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Blocked => '#',
        }
    }

    /// Parses a glyph produced by [`Cell::glyph`].
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Blocked),
            _ => None,
        }
    }
}

/// Fixed-size rectangular grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked serialized form of [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = MazeError;

    fn try_from(raw: RawGrid) -> MazeResult<Self> {
        Grid::from_cells(raw.rows, raw.cols, raw.cells)
    }
}

impl Grid {
    /// Creates a grid where every cell is blocked.
    ///
    /// Only generation starts from here; everyone else receives a finished grid.
    pub(crate) fn blocked(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Blocked; rows * cols],
        }
    }

    /// Builds a grid from a complete row-major cell vector.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Configuration`] if either dimension is zero or the
    /// vector length does not equal `rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> MazeResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::Configuration(format!(
                "grid dimensions must be non-zero, got {}x{}",
                rows, cols
            )));
        }
        if cells.len() != rows * cols {
            return Err(MazeError::Configuration(format!(
                "expected {} cells for a {}x{} grid, got {}",
                rows * cols,
                rows,
                cols,
                cells.len()
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Parses a grid from ASCII rows, `#` for blocked and `.` for open.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_explorer::{Cell, Coordinate, Grid};
    ///
    /// let grid = Grid::from_ascii(&["###", "#.#", "###"]).unwrap();
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid.cell(Coordinate::new(1, 1)), Some(Cell::Open));
    /// ```
    pub fn from_ascii(lines: &[&str]) -> MazeResult<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|line| line.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(rows * cols);

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(MazeError::Configuration(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    cols
                )));
            }
            for glyph in line.chars() {
                let cell = Cell::from_glyph(glyph).ok_or_else(|| {
                    MazeError::Configuration(format!("unknown cell glyph '{}' in row {}", glyph, row))
                })?;
                cells.push(cell);
            }
        }

        Self::from_cells(rows, cols, cells)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Checks whether a coordinate lies inside the grid.
    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row >= 0
            && coordinate.col >= 0
            && (coordinate.row as usize) < self.rows
            && (coordinate.col as usize) < self.cols
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        if self.in_bounds(coordinate) {
            Some(coordinate.row as usize * self.cols + coordinate.col as usize)
        } else {
            None
        }
    }

    /// Gets the cell at a coordinate, or `None` when out of bounds.
    pub fn cell(&self, coordinate: Coordinate) -> Option<Cell> {
        self.index(coordinate).map(|index| self.cells[index])
    }

    /// True when the coordinate is in bounds and open.
    pub fn is_open(&self, coordinate: Coordinate) -> bool {
        self.cell(coordinate) == Some(Cell::Open)
    }

    pub(crate) fn set(&mut self, coordinate: Coordinate, cell: Cell) {
        if let Some(index) = self.index(coordinate) {
            self.cells[index] = cell;
        }
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| Coordinate::new(row as i32, col as i32))
        })
    }

    /// Iterates over every open coordinate in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coordinates().filter(move |&c| self.is_open(c))
    }

    /// Open orthogonal neighbours of a coordinate (the edges of the grid graph).
    pub fn open_neighbors(&self, coordinate: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        coordinate
            .orthogonal_neighbors()
            .into_iter()
            .filter(move |&neighbor| self.is_open(neighbor))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.chunks(self.cols).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_deserialize_checks_cell_count() {
        let result = serde_json::from_str::<Grid>(r#"{"rows":3,"cols":3,"cells":[]}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Grid>(r#"{"rows":0,"cols":2,"cells":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_grid_serde_keeps_cells() {
        let grid = Grid::from_ascii(&["###", "#.#", "###"]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);
        assert!(restored.is_open(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_coordinate_distance() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(3, -4);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_coordinate_neighbors_and_adjacency() {
        let c = Coordinate::new(2, 2);
        let neighbors = c.orthogonal_neighbors();
        assert_eq!(
            neighbors,
            [
                Coordinate::new(2, 3),
                Coordinate::new(2, 1),
                Coordinate::new(3, 2),
                Coordinate::new(1, 2),
            ]
        );
        assert!(neighbors.iter().all(|&n| c.is_adjacent(n)));
        assert!(!c.is_adjacent(Coordinate::new(3, 3)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn test_coordinate_arithmetic() {
        let a = Coordinate::new(5, 5);
        let delta = Coordinate::new(-1, 0);
        assert_eq!(a + delta, Coordinate::new(4, 5));
        assert_eq!(Coordinate::new(4, 5) - a, delta);
    }

    #[test]
    fn test_blocked_grid() {
        let grid = Grid::blocked(3, 5);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.open_cells().count(), 0);
        assert_eq!(grid.coordinates().count(), 15);
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::blocked(3, 4);
        assert!(grid.in_bounds(Coordinate::new(0, 0)));
        assert!(grid.in_bounds(Coordinate::new(2, 3)));
        assert!(!grid.in_bounds(Coordinate::new(3, 0)));
        assert!(!grid.in_bounds(Coordinate::new(0, 4)));
        assert!(!grid.in_bounds(Coordinate::new(-1, 0)));
        assert_eq!(grid.cell(Coordinate::new(0, -1)), None);
    }

    #[test]
    fn test_set_and_neighbors() {
        let mut grid = Grid::blocked(3, 3);
        let center = Coordinate::new(1, 1);
        grid.set(center, Cell::Open);
        grid.set(Coordinate::new(1, 2), Cell::Open);
        // Out of bounds writes are ignored
        grid.set(Coordinate::new(5, 5), Cell::Open);

        assert!(grid.is_open(center));
        let neighbors: Vec<_> = grid.open_neighbors(center).collect();
        assert_eq!(neighbors, vec![Coordinate::new(1, 2)]);
        assert_eq!(grid.open_cells().count(), 2);
    }

    #[test]
    fn test_ascii_round_trip() {
        let lines = ["#####", "#...#", "#.#.#", "#####"];
        let grid = Grid::from_ascii(&lines).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.to_string(), lines.join("\n"));
    }

    #[test]
    fn test_ascii_rejects_bad_input() {
        assert!(matches!(
            Grid::from_ascii(&["###", "##"]),
            Err(MazeError::Configuration(_))
        ));
        assert!(matches!(
            Grid::from_ascii(&["#x#"]),
            Err(MazeError::Configuration(_))
        ));
        assert!(matches!(Grid::from_ascii(&[]), Err(MazeError::Configuration(_))));
    }

    #[test]
    fn test_from_cells_length_check() {
        assert!(Grid::from_cells(2, 2, vec![Cell::Open; 4]).is_ok());
        assert!(Grid::from_cells(2, 2, vec![Cell::Open; 3]).is_err());
        assert!(Grid::from_cells(0, 2, Vec::new()).is_err());
    }
}
