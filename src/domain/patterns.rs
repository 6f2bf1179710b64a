/// A named pattern that can be stamped onto the current generation
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    cells: Vec<(i32, i32)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) as usize + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) as usize + 1;
        Self { name, description, width, height, cells }
    }

    /// Relative offsets of the pattern's live cells
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.cells
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            r_pentomino(),
        ]
    }

    /// Look up a pattern by name, case-insensitively
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
