/// Errors surfaced by the per-element geometry routines.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeomError {
    /// Normalization of a (near) zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
    /// Collinear or zero-area triangle: a denominator or radicand vanished.
    #[error("degenerate triangle: {reason}")]
    DegenerateTriangle { reason: &'static str },
    /// A curve point was evaluated without any neighbours.
    #[error("curve point has no neighbours")]
    NoNeighbours,
    /// The host has no position for a point index.
    #[error("no position for point {ptnum}")]
    MissingPosition { ptnum: usize },
}

impl GeomError {
    pub(crate) fn degenerate_triangle(reason: &'static str) -> Self {
        Self::DegenerateTriangle { reason }
    }
}
