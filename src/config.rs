//! Tunable thresholds for node splitting.

use serde::{Deserialize, Serialize};

use crate::error::QuadTreeError;

/// Items a node may hold before it tries to split
pub const DEFAULT_MAX_ITEMS: usize = 10;
/// Deepest level at which a node may still split
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Split thresholds, fixed at construction and shared by every node of a tree.
///
/// Can be loaded from TOML; missing keys fall back to the defaults:
///
/// ```
/// use quadtree::QuadTreeConfig;
///
/// let config = QuadTreeConfig::from_toml_str("max_items = 4").unwrap();
/// assert_eq!(config.max_items, 4);
/// assert_eq!(config.max_depth, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadTreeConfig {
    /// A node splits once it directly holds more than this many items
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Nodes at this level or deeper never split
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl QuadTreeConfig {
    /// Returns a copy with a different item threshold
    #[must_use]
    pub const fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Returns a copy with a different depth cap
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks the thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidConfig`] when `max_items` is zero.
    pub fn validate(&self) -> Result<(), QuadTreeError> {
        if self.max_items == 0 {
            return Err(QuadTreeError::InvalidConfig("max_items must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::ConfigParse`] for malformed TOML and
    /// [`QuadTreeError::InvalidConfig`] when the thresholds are unusable.
    pub fn from_toml_str(text: &str) -> Result<Self, QuadTreeError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{QuadTreeConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITEMS};
    use crate::error::QuadTreeError;

    #[test]
    fn test_defaults() {
        let config = QuadTreeConfig::default();
        assert_eq!(config.max_items, DEFAULT_MAX_ITEMS);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = QuadTreeConfig::default().with_max_items(3).with_max_depth(8);
        assert_eq!(config, QuadTreeConfig { max_items: 3, max_depth: 8 });
    }

    #[test]
    fn test_from_toml_full_and_empty() {
        let config = QuadTreeConfig::from_toml_str("max_items = 32\nmax_depth = 7\n").unwrap();
        assert_eq!(config, QuadTreeConfig { max_items: 32, max_depth: 7 });

        let empty = QuadTreeConfig::from_toml_str("").unwrap();
        assert_eq!(empty, QuadTreeConfig::default(), "Empty document should yield defaults");
    }

    #[test]
    fn test_from_toml_rejects_zero_items() {
        let err = QuadTreeConfig::from_toml_str("max_items = 0").unwrap_err();
        assert!(matches!(err, QuadTreeError::InvalidConfig(_)), "Got {err:?}");
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = QuadTreeConfig::from_toml_str("max_items = \"lots\"").unwrap_err();
        assert!(matches!(err, QuadTreeError::ConfigParse(_)), "Got {err:?}");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = QuadTreeConfig::default().with_max_items(6);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(QuadTreeConfig::from_toml_str(&text).unwrap(), config);
    }
}
