//! Scanner configuration.

use crate::cursor::DEFAULT_READ_CAPACITY;

/// Options controlling a [`Scanner`](crate::Scanner).
///
/// # Example
///
/// ```
/// use equilex_lex::ScanConfig;
///
/// let config = ScanConfig::new().max_comment_depth(64).read_buffer_capacity(512);
/// assert_eq!(config.max_comment_depth, Some(64));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanConfig {
    /// Deepest block-comment nesting accepted, counting the outermost
    /// comment as level 1, so `Some(0)` rejects every block comment.
    /// `None` accepts any depth.
    pub max_comment_depth: Option<u32>,

    /// Capacity in bytes of the read buffer placed in front of the source.
    pub read_buffer_capacity: usize,
}

impl ScanConfig {
    /// Default configuration: unbounded nesting, 8 KiB read buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects block comments nested deeper than `depth` levels.
    pub fn max_comment_depth(mut self, depth: u32) -> Self {
        self.max_comment_depth = Some(depth);
        self
    }

    /// Sets the read buffer capacity.
    pub fn read_buffer_capacity(mut self, capacity: usize) -> Self {
        self.read_buffer_capacity = capacity;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_comment_depth: None,
            read_buffer_capacity: DEFAULT_READ_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = ScanConfig::default();
        assert_eq!(config.max_comment_depth, None);
        assert_eq!(config.read_buffer_capacity, DEFAULT_READ_CAPACITY);
    }

    #[test]
    fn test_builder() {
        let config = ScanConfig::new().max_comment_depth(3).read_buffer_capacity(16);
        assert_eq!(config.max_comment_depth, Some(3));
        assert_eq!(config.read_buffer_capacity, 16);
    }
}
