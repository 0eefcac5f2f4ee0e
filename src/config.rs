//! Tree parameters fixed at construction.

use crate::error::{QuadtreeError, QuadtreeResult};

const DEFAULT_MAX_DEPTH: usize = 10;
const DEFAULT_MAX_ENTRIES_PER_LEAF: usize = 10;

/// Subdivision limits of a [`Quadtree`](crate::Quadtree).
///
/// For a maximum depth `D` the bounds are subdivided at most `D` times along each
/// axis, giving a finest cell of `1 / 2^D` of the root extent. Leaves at that depth
/// accept any number of entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadtreeConfig {
    /// Deepest level a node may be created at (root is 0)
    pub max_depth: usize,
    /// Entries a leaf holds before it splits, below `max_depth`
    pub max_entries_per_leaf: usize,
}

impl QuadtreeConfig {
    /// Creates a configuration with explicit limits
    pub const fn new(max_depth: usize, max_entries_per_leaf: usize) -> Self {
        Self { max_depth, max_entries_per_leaf }
    }

    /// Sets the maximum depth
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the leaf capacity
    #[must_use]
    pub const fn with_max_entries_per_leaf(mut self, max_entries_per_leaf: usize) -> Self {
        self.max_entries_per_leaf = max_entries_per_leaf;
        self
    }

    /// Checks that both limits are at least one.
    ///
    /// # Errors
    /// Returns [`QuadtreeError::InvalidConfiguration`] naming the first limit that is zero.
    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.max_depth < 1 {
            return Err(QuadtreeError::InvalidConfiguration(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if self.max_entries_per_leaf < 1 {
            return Err(QuadtreeError::InvalidConfiguration(
                "max_entries_per_leaf must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, DEFAULT_MAX_ENTRIES_PER_LEAF)
    }
}
