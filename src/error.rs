use thiserror::Error;

/// Contract violations reported by the simulation engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SnakeError {
    /// Food was requested on a map without a single free cell.
    #[error("no free fields left on the map")]
    NoFreeFields,

    /// Growth needs two segments to extrapolate the new tail from.
    #[error("snake body has {len} segment(s), growing needs at least 2")]
    BodyTooShort { len: usize },

    /// The snake already died; the requested operation changed nothing.
    #[error("snake is dead")]
    Dead,
}
