mod simulation;

pub use simulation::{ALIVE_GLYPH, DEAD_GLYPH, Simulation};
