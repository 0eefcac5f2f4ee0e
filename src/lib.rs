//! # Quadtree - Dynamic Point Spatial Index
//!
//! A Rust library providing a dynamic quadtree over 2D points for axis-aligned
//! rectangle range queries.
//!
//! ## Features
//!
//! - **Dynamic Insertion**: Entries can be added at any time; no build step
//! - **Opaque Payloads**: Any type can be stored, no trait bounds required
//! - **Range Queries**: Collect all payloads inside a rectangle
//! - **Early Exit**: Visitor queries stop the whole traversal on demand
//! - **Bounded Depth**: A depth cap keeps duplicate-heavy input from splitting forever
//!
//! ## Quick Start
//!
//! ```rust
//! use quadtree::prelude::*;
//!
//! // Bounds are origin (x, y) plus width and height
//! let mut tree = Quadtree::create(Rect::new(0.0, 0.0, 10.0, 10.0), 6, 2)?;
//!
//! tree.insert("spring", Point::new(1.0, 1.0))?;
//! tree.insert("well", Point::new(2.5, 1.5))?;
//! tree.insert("camp", Point::new(8.0, 9.0))?;
//!
//! // Query for payloads inside a region
//! let near_origin = tree.query(&Rect::new(0.0, 0.0, 5.0, 5.0));
//! assert_eq!(near_origin.len(), 2);
//!
//! // Visit with positions, stopping after the first hit
//! let mut first = None;
//! tree.query_visit(&tree.bounds(), |name, pos| {
//!     first = Some((*name, pos));
//!     false
//! });
//! assert!(first.is_some());
//! # Ok::<(), QuadtreeError>(())
//! ```
//!
//! ## How It Works
//!
//! Each node covers a rectangle. A leaf stores entries until it holds
//! `max_entries_per_leaf` of them; the next insert splits it into four equal
//! quadrants and moves every entry into the child covering its position. Once a
//! node sits at `max_depth` it never splits and accepts any number of entries.
//!
//! Rectangles are half-open, `[x, x + width) × [y, y + height)`, for both the tree
//! bounds and query areas, so a point on a shared edge belongs to exactly one side.

pub mod config;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod quadtree;

pub use config::QuadtreeConfig;
pub use error::{QuadtreeError, QuadtreeResult};
pub use geometry::{Point, Rect};
pub use quadtree::Quadtree;

mod integration_test;
