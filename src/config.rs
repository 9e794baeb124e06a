use thiserror::Error;

use crate::Rect;

/// Default bucket capacity of a node before it subdivides
pub const DEFAULT_MAX_POINTS: usize = 4;

/// Predicate [`QuadTree::find`](crate::QuadTree::find) uses to decide whether a
/// node's boundary is worth descending into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pruning {
    /// Full area overlap via [`Rect::intersects`]
    #[default]
    Overlap,
    /// Corner containment via [`Rect::corner_intersects`]. Can skip nodes that
    /// do overlap the query and so miss matching entities.
    Corner,
}

impl Pruning {
    pub(crate) fn admits(self, boundary: &Rect, query: &Rect) -> bool {
        match self {
            Self::Overlap => boundary.intersects(query),
            Self::Corner => boundary.corner_intersects(query),
        }
    }
}

/// Settings shared by every node of a [`QuadTree`](crate::QuadTree)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadTreeConfig {
    /// The maximum number of entities a leaf holds before subdividing
    pub max_points: usize,
    /// How range queries skip nodes
    pub pruning: Pruning,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            pruning: Pruning::default(),
        }
    }
}

impl QuadTreeConfig {
    /// Set the bucket capacity of a leaf
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Set how range queries skip nodes
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_points == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

/// Reasons a quadtree cannot be built
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A zero capacity would subdivide on every insert without end
    #[error("max_points must be at least 1")]
    ZeroCapacity,

    /// The boundary is not a finite, non-negative area
    #[error("boundary {0:?} must have finite coordinates and a non-negative size")]
    InvalidBoundary(Rect),
}

#[cfg(test)]
mod tests {
    use crate::util::tests::make_rect;

    use super::*;

    #[test]
    fn default_config() {
        let config = QuadTreeConfig::default();
        assert_eq!(config.max_points, 4, "Default capacity should be 4");
        assert_eq!(config.pruning, Pruning::Overlap);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = QuadTreeConfig::default().with_max_points(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn pruning_predicates() {
        let boundary = make_rect(0.0, 0.0, 10.0, 10.0);
        let crossing = make_rect(5.0, -5.0, 10.0, 10.0);
        assert!(Pruning::Overlap.admits(&boundary, &crossing));
        assert!(!Pruning::Corner.admits(&boundary, &crossing));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_json() {
        let config: QuadTreeConfig =
            serde_json::from_str(r#"{ "max_points": 10, "pruning": "corner" }"#).unwrap();
        assert_eq!(
            config,
            QuadTreeConfig::default()
                .with_max_points(10)
                .with_pruning(Pruning::Corner)
        );

        let config: QuadTreeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(
            config,
            QuadTreeConfig::default(),
            "Missing fields should fall back to defaults"
        );
    }
}
