/// Errors reported by the checked outline and triangulation APIs.
///
/// The rebuild pipeline itself never fails; these only surface through the
/// explicit validation and editing calls.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Fewer than three points, nothing can be triangulated.
    DegenerateOutline { points: usize },

    /// The parallel outline lists disagree in length.
    MismatchedOutline {
        key_points: usize,
        handles: usize,
        curved: usize,
    },

    /// An index does not address a key point.
    IndexOutOfRange { index: usize, len: usize },

    /// An edit would leave the outline with too few points.
    TooFewPoints { remaining: usize, minimum: usize },

    /// Split points must not be neighbours.
    AdjacentSplitPoints { a: usize, b: usize },

    /// Ear clipping ran out of budget before consuming the polygon.
    StalledTriangulation { remaining: usize },

    /// Curve detail outside (0, 1].
    InvalidCurveDetail(f32),
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::DegenerateOutline { points } => {
                write!(f, "Degenerate outline: {} points (at least 3 needed)", points)
            }
            GeometryError::MismatchedOutline {
                key_points,
                handles,
                curved,
            } => write!(
                f,
                "Mismatched outline lists: {} key points, {} handles, {} curve flags",
                key_points, handles, curved
            ),
            GeometryError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range (outline has {} points)", index, len)
            }
            GeometryError::TooFewPoints { remaining, minimum } => write!(
                f,
                "Edit would leave {} points (minimum is {})",
                remaining, minimum
            ),
            GeometryError::AdjacentSplitPoints { a, b } => {
                write!(f, "Cannot split through adjacent points {} and {}", a, b)
            }
            GeometryError::StalledTriangulation { remaining } => write!(
                f,
                "Triangulation stalled with {} vertices left unclipped",
                remaining
            ),
            GeometryError::InvalidCurveDetail(detail) => {
                write!(f, "Invalid curve detail {} (expected 0 < detail <= 1)", detail)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
