//! Error type shared by the builders and the triangulation pipeline.

use std::fmt;

/// Construction failures. Each one affects a single shape; callers decide
/// whether to skip it or retry with different input.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// Collinear/degenerate circle input, circle escaping the disk, or a
    /// geodesic with no real boundary intersections.
    InvalidGeometry { reason: String },
    /// Fewer than 3 vertices after consolidation, or no ear found in a full scan.
    DegeneratePolygon { reason: String },
}

impl GeomError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegeneratePolygon {
            reason: reason.into(),
        }
    }

    /// Human-readable reason without the variant prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidGeometry { reason } | Self::DegeneratePolygon { reason } => reason,
        }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { reason } => write!(f, "invalid geometry: {reason}"),
            Self::DegeneratePolygon { reason } => write!(f, "degenerate polygon: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_variant_and_reason() {
        let e = GeomError::invalid("collinear points");
        assert_eq!(e.to_string(), "invalid geometry: collinear points");
        assert_eq!(e.reason(), "collinear points");
        let d = GeomError::degenerate("2 vertices");
        assert_eq!(d.to_string(), "degenerate polygon: 2 vertices");
    }
}
