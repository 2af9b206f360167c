//! # Maze Carving
//!
//! Randomized depth-first carving (the "recursive backtracker") with an
//! explicit stack.
//!
//! The generator:
//! 1. Starts from a grid where every cell is a wall
//! 2. Pushes the lattice node `(1, 1)` and opens it
//! 3. Repeatedly picks a random unvisited lattice neighbour two cells away
//!    from the top of the stack, opens it and the connector between them
//! 4. Pops the stack when the top has no unvisited neighbours left
//!
//! Because the lattice graph is connected and the walk only stops once the
//! stack is empty, every lattice node ends up open and linked into one tree.

use crate::generation::{utils, validate_dimensions, GenerationConfig, Generator};
use crate::grid::{Cell, Coordinate, Grid};
use crate::MazeResult;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Lattice steps in the order they are considered: up, down, left, right.
const LATTICE_STEPS: [Coordinate; 4] = [
    Coordinate { row: -2, col: 0 },
    Coordinate { row: 2, col: 0 },
    Coordinate { row: 0, col: -2 },
    Coordinate { row: 0, col: 2 },
];

/// Carves a perfect maze of the given size.
///
/// `rows` and `cols` must be odd and at least 3. The random source is passed
/// in so callers control reproducibility.
///
/// # Examples
///
/// ```
/// use maze_explorer::{generate_maze, Coordinate};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let grid = generate_maze(5, 5, &mut rng).unwrap();
/// assert!(grid.is_open(Coordinate::new(1, 1)));
/// assert!(grid.is_open(Coordinate::new(3, 3)));
///
/// assert!(generate_maze(20, 21, &mut rng).is_err());
/// ```
pub fn generate_maze<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> MazeResult<Grid> {
    validate_dimensions(rows, cols)?;

    let mut grid = Grid::blocked(rows, cols);
    let mut visited = vec![false; rows * cols];
    let visit_index = |c: Coordinate| c.row as usize * cols + c.col as usize;

    let start = Coordinate::new(1, 1);
    let mut stack = vec![start];
    visited[visit_index(start)] = true;
    grid.set(start, Cell::Open);

    let mut steps = 0usize;
    while let Some(&current) = stack.last() {
        let candidates: Vec<Coordinate> = LATTICE_STEPS
            .iter()
            .map(|&step| current + step)
            .filter(|&next| {
                next.row > 0
                    && next.col > 0
                    && (next.row as usize) < rows
                    && (next.col as usize) < cols
                    && !visited[visit_index(next)]
            })
            .collect();

        match candidates.choose(rng) {
            Some(&next) => {
                let connector = Coordinate::new(
                    (current.row + next.row) / 2,
                    (current.col + next.col) / 2,
                );
                visited[visit_index(next)] = true;
                grid.set(connector, Cell::Open);
                grid.set(next, Cell::Open);
                stack.push(next);
                steps += 1;
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!("Carved {}x{} maze with {} connectors", rows, cols, steps);
    Ok(grid)
}

/// Depth-first maze generator, usable through the [`Generator`] trait.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstMazeGenerator {
    /// Run [`utils::validate_maze`] on every generated grid
    pub validate_output: bool,
}

impl DepthFirstMazeGenerator {
    /// Creates a new generator that skips post-generation validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_explorer::{generation::utils, DepthFirstMazeGenerator, GenerationConfig, Generator};
    ///
    /// let generator = DepthFirstMazeGenerator::new();
    /// let config = GenerationConfig::for_testing(9);
    /// let mut rng = utils::create_rng(&config);
    /// let grid = generator.generate(&config, &mut rng).unwrap();
    /// assert!(generator.validate(&grid, &config).is_ok());
    /// ```
    pub fn new() -> Self {
        Self {
            validate_output: false,
        }
    }

    /// Creates a generator that validates every maze it carves.
    pub fn for_testing() -> Self {
        Self {
            validate_output: true,
        }
    }
}

impl Generator<Grid> for DepthFirstMazeGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> MazeResult<Grid> {
        let grid = generate_maze(config.rows, config.cols, rng)?;

        if self.validate_output {
            self.validate(&grid, config)?;
        }

        Ok(grid)
    }

    fn validate(&self, grid: &Grid, config: &GenerationConfig) -> MazeResult<()> {
        if grid.rows() != config.rows || grid.cols() != config.cols {
            return Err(crate::MazeError::GenerationFailed(format!(
                "expected a {}x{} grid, got {}x{}",
                config.rows,
                config.cols,
                grid.rows(),
                grid.cols()
            )));
        }
        utils::validate_maze(grid)
    }

    fn generator_type(&self) -> &'static str {
        "DepthFirstMazeGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MazeError;
    use rand::SeedableRng;

    #[test]
    fn test_generator_creation() {
        let generator = DepthFirstMazeGenerator::new();
        assert!(!generator.validate_output);
        assert!(DepthFirstMazeGenerator::for_testing().validate_output);
        assert_eq!(generator.generator_type(), "DepthFirstMazeGenerator");
    }

    #[test]
    fn test_smallest_maze() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = generate_maze(3, 3, &mut rng).unwrap();
        assert_eq!(grid.to_string(), "###\n#.#\n###");
    }

    #[test]
    fn test_single_corridor() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = generate_maze(3, 9, &mut rng).unwrap();
        assert_eq!(grid.to_string(), "#########\n#.......#\n#########");
    }

    #[test]
    fn test_five_by_five_lattice() {
        let mut rng = StdRng::seed_from_u64(2024);
        let grid = generate_maze(5, 5, &mut rng).unwrap();

        for &(row, col) in &[(1, 1), (1, 3), (3, 1), (3, 3)] {
            assert!(grid.is_open(Coordinate::new(row, col)));
        }
        // Three of the four connectors around the centre pillar get carved
        assert_eq!(grid.open_cells().count(), 7);
        assert_eq!(grid.cell(Coordinate::new(2, 2)), Some(Cell::Blocked));
        assert!(utils::validate_maze(&grid).is_ok());
    }

    #[test]
    fn test_generated_mazes_are_perfect() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate_maze(21, 21, &mut rng).unwrap();
            assert!(utils::validate_maze(&grid).is_ok(), "seed {}", seed);
        }
    }

    #[test]
    fn test_non_square_maze() {
        let mut rng = StdRng::seed_from_u64(77);
        let grid = generate_maze(7, 15, &mut rng).unwrap();
        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.cols(), 15);
        assert!(utils::validate_maze(&grid).is_ok());
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = generate_maze(15, 15, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = generate_maze(15, 15, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_maze(20, 21, &mut rng),
            Err(MazeError::Configuration(_))
        ));
        assert!(matches!(
            generate_maze(1, 1, &mut rng),
            Err(MazeError::Configuration(_))
        ));
    }

    #[test]
    fn test_generator_trait_checks_size() {
        let generator = DepthFirstMazeGenerator::for_testing();
        let config = GenerationConfig::for_testing(12345);
        let mut rng = utils::create_rng(&config);

        let grid = generator.generate(&config, &mut rng).unwrap();
        assert_eq!(grid.rows(), config.rows);
        assert_eq!(grid.cols(), config.cols);

        let other = GenerationConfig::with_size(1, 5, 5);
        assert!(generator.validate(&grid, &other).is_err());
    }
}
