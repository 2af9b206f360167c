//! Coarse performance checks for generation and search on large mazes.

use maze_explorer::{find_path, generate_maze, Coordinate, MazeResult};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;

#[test]
fn test_generation_performance() -> MazeResult<()> {
    let mut rng = StdRng::seed_from_u64(12345);
    let iterations = 10;

    let start = Instant::now();
    for _ in 0..iterations {
        let _grid = generate_maze(101, 101, &mut rng)?;
    }
    let avg = start.elapsed() / iterations;

    println!("Average 101x101 generation time: {:?}", avg);
    assert!(avg.as_millis() < 500, "Generation too slow: {:?}", avg);
    Ok(())
}

#[test]
fn test_search_per_tick_performance() -> MazeResult<()> {
    let mut rng = StdRng::seed_from_u64(54321);
    let grid = generate_maze(101, 101, &mut rng)?;
    let start = Coordinate::new(1, 1);
    let goal = Coordinate::new(99, 99);
    let iterations = 20;

    let timer = Instant::now();
    for _ in 0..iterations {
        let path = find_path(&grid, start, goal)?;
        assert!(path.is_some());
    }
    let avg = timer.elapsed() / iterations;

    println!("Average 101x101 search time: {:?}", avg);
    // The autopilot searches once per tick, so a search has to fit well inside one frame
    assert!(avg.as_millis() < 100, "Search too slow: {:?}", avg);
    Ok(())
}
