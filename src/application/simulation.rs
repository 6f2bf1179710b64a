use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use tracing::debug;

use crate::domain::{Cell, Grid, Pattern};
use crate::error::LifeError;

/// Glyph used for a live cell in rendered frames
pub const ALIVE_GLYPH: char = '*';
/// Glyph used for a dead cell in rendered frames
pub const DEAD_GLYPH: char = '-';

/// Simulation owns the generation pair and performs the state transition.
/// `current` always holds the last fully computed generation; `next` is
/// scratch space that becomes visible only through the post-advance swap, so
/// readers never observe a partially computed generation.
pub struct Simulation {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Simulation {
    /// Create a simulation with every cell dead.
    /// Fails when either dimension is zero.
    pub fn empty(width: usize, height: usize) -> Result<Self, LifeError> {
        Ok(Self {
            current: Grid::new(width, height)?,
            next: Grid::new(width, height)?,
            generation: 0,
        })
    }

    /// Create a randomly seeded simulation.
    /// Draws `floor(width * height * seed_fraction)` coordinates; duplicate
    /// draws land on the same cell, so the realized population may be lower.
    pub fn new(width: usize, height: usize, seed_fraction: f64) -> Result<Self, LifeError> {
        Self::with_seed(width, height, seed_fraction, rand::rng().random())
    }

    /// Create a randomly seeded simulation from an explicit RNG seed.
    /// The same seed always reproduces the same initial generation.
    pub fn with_seed(
        width: usize,
        height: usize,
        seed_fraction: f64,
        seed: u64,
    ) -> Result<Self, LifeError> {
        let mut sim = Self::empty(width, height)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let draws = ((width * height) as f64 * seed_fraction).max(0.0).floor() as usize;
        for _ in 0..draws {
            let x = rng.random_range(0..width as i32);
            let y = rng.random_range(0..height as i32);
            sim.current.set(x, y, Cell::Alive);
        }
        debug!(seed, draws, population = sim.population(), "seeded initial generation");
        Ok(sim)
    }

    /// Create a simulation from an explicit set of live cells.
    /// Coordinates wrap like every other cell access.
    pub fn from_cells(
        width: usize,
        height: usize,
        live: impl IntoIterator<Item = (i32, i32)>,
    ) -> Result<Self, LifeError> {
        let mut sim = Self::empty(width, height)?;
        for (x, y) in live {
            sim.current.set(x, y, Cell::Alive);
        }
        Ok(sim)
    }

    /// Grid dimensions shared by both generations
    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    /// Number of generations produced so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the current generation
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Liveness of a cell in the current generation (wrapped coordinate)
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.current.is_alive(x, y)
    }

    /// Set a single cell in the current generation (wrapped coordinate)
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        self.current.set(x, y, Cell::from_alive(alive));
    }

    /// Stamp a pattern's live cells into the current generation with its
    /// origin at the wrapped coordinate
    pub fn place(&mut self, pattern: &Pattern, x: i32, y: i32) {
        for &(dx, dy) in pattern.offsets() {
            self.current.set(x + dx, y + dy, Cell::Alive);
        }
    }

    /// Advance one generation: compute every cell of `next` from `current`,
    /// then swap roles. The old current becomes scratch space and is fully
    /// overwritten on the following call before ever being read.
    pub fn advance(&mut self) {
        let (width, height) = self.current.dimensions();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let neighbors = self.current.count_live_neighbors(x, y);
                self.next.set(x, y, self.current.get(x, y).next(neighbors));
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Row-parallel advance. Equivalent to `advance`; rayon joins every row
    /// before the swap, so the swap still publishes a complete generation.
    pub fn advance_parallel(&mut self) {
        let (width, _) = self.current.dimensions();
        let current = &self.current;
        self.next
            .cells_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    let (x, y) = (x as i32, y as i32);
                    let neighbors = current.count_live_neighbors(x, y);
                    *cell = current.get(x, y).next(neighbors);
                }
            });
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Render the current generation as text: one line per row, one glyph
    /// per column, every line terminated by a newline
    pub fn render(&self) -> String {
        let (width, height) = self.current.dimensions();
        let mut frame = String::with_capacity((width + 1) * height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                frame.push(if self.current.is_alive(x, y) {
                    ALIVE_GLYPH
                } else {
                    DEAD_GLYPH
                });
            }
            frame.push('\n');
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn alive_cells(sim: &Simulation) -> Vec<(i32, i32)> {
        let (width, height) = sim.dimensions();
        let mut cells = Vec::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if sim.is_alive(x, y) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(matches!(
            Simulation::new(0, 10, 0.25),
            Err(LifeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Simulation::empty(10, 0),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        // Horizontal triple centered on a 5x5 torus
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let mut sim = Simulation::from_cells(5, 5, horizontal).unwrap();

        sim.advance();
        assert_eq!(alive_cells(&sim), vec![(2, 1), (2, 2), (2, 3)]);

        sim.advance();
        assert_eq!(alive_cells(&sim), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut sim = Simulation::from_cells(5, 5, block).unwrap();

        sim.advance();
        assert_eq!(alive_cells(&sim), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_lone_cell_goes_extinct() {
        let mut sim = Simulation::from_cells(5, 5, [(2, 2)]).unwrap();
        sim.advance();
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_advance_is_deterministic() {
        let cells = [(0, 0), (1, 0), (2, 1), (0, 2), (3, 3)];
        let mut a = Simulation::from_cells(6, 6, cells).unwrap();
        let mut b = Simulation::from_cells(6, 6, cells).unwrap();

        for _ in 0..10 {
            a.advance();
            b.advance();
            assert_eq!(a.render(), b.render());
        }
    }

    #[test]
    fn test_render_format() {
        let sim = Simulation::from_cells(2, 2, [(0, 0)]).unwrap();
        assert_eq!(sim.render(), "*-\n--\n");
    }

    #[test]
    fn test_render_shape_matches_dimensions() {
        let sim = Simulation::empty(7, 3).unwrap();
        let frame = sim.render();
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.chars().count() == 7));
        assert!(frame.ends_with('\n'));
    }

    #[test]
    fn test_generation_counter_advances() {
        let mut sim = Simulation::empty(4, 4).unwrap();
        assert_eq!(sim.generation(), 0);
        sim.advance();
        sim.advance();
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_same_seed_reproduces_universe() {
        let a = Simulation::with_seed(20, 10, 0.25, 42).unwrap();
        let b = Simulation::with_seed(20, 10, 0.25, 42).unwrap();
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_seed_fraction_bounds_population() {
        let sim = Simulation::with_seed(20, 10, 0.25, 7).unwrap();
        // 50 draws; collisions may reduce the realized population
        assert!(sim.population() <= 50);
        assert!(sim.population() > 0);

        let empty = Simulation::with_seed(20, 10, 0.0, 7).unwrap();
        assert_eq!(empty.population(), 0);
    }

    #[test]
    fn test_place_pattern_wraps_at_edges() {
        let mut sim = Simulation::empty(5, 5).unwrap();
        sim.place(&presets::block(), 4, 4);
        assert_eq!(alive_cells(&sim), vec![(0, 0), (4, 0), (0, 4), (4, 4)]);
    }

    #[test]
    fn test_set_cell_mediates_grid_access() {
        let mut sim = Simulation::empty(3, 3).unwrap();
        sim.set_cell(-1, -1, true);
        assert!(sim.is_alive(2, 2));
        sim.set_cell(2, 2, false);
        assert_eq!(sim.population(), 0);
    }
}
