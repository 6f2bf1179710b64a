use thiserror::Error;

/// Errors raised while constructing simulation state.
/// All per-tick operations are total; construction is the only fallible path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A grid needs at least one row and one column to host a generation.
    #[error("invalid grid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: usize, height: usize },
}
