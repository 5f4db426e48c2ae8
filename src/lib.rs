//! # quadtree - Dynamic Quad-Tree Spatial Index
//!
//! A Rust library providing a region quad-tree over axis-aligned rectangles,
//! built for broad-phase collision and proximity queries on items that come
//! and go.
//!
//! ## Features
//!
//! - **Density-Driven Subdivision**: Nodes split into four quadrants only when they overflow
//! - **Broad-Phase Retrieval**: Returns the candidates that may overlap a rectangle
//! - **Incremental Updates**: Insert and remove items without rebuilding
//! - **Any Item Type**: Index ids, handles or references through the [`Bounded`] trait
//! - **Configurable Thresholds**: `max_items` and `max_depth` per tree, loadable from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use quadtree::prelude::*;
//!
//! // Create an index covering the play field (x, y, width, height)
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
//!
//! // Insert some bounding boxes
//! tree.insert(Rect::new(10.0, 10.0, 5.0, 5.0));   // top-left
//! tree.insert(Rect::new(70.0, 10.0, 5.0, 5.0));   // top-right
//! tree.insert(Rect::new(45.0, 45.0, 10.0, 10.0)); // straddles the center
//!
//! // Candidates that might collide with a query rectangle
//! let query = Rect::new(8.0, 8.0, 4.0, 4.0);
//! let candidates = tree.retrieve(&query);
//!
//! // The candidate set is broad: filter with an exact test
//! let hits: Vec<_> = candidates.into_iter().filter(|r| r.intersects(&query)).collect();
//! assert_eq!(hits, vec![&Rect::new(10.0, 10.0, 5.0, 5.0)]);
//! ```
//!
//! ## How It Works
//!
//! Every node covers a rectangle. An item is routed to the child quadrant
//! that holds it entirely; items crossing a node's midlines stay at that
//! node. Once a node directly holds more than `max_items` items, and is
//! shallower than `max_depth`, it splits into four children and pushes down
//! whatever fits. A query walks the same routing path as the query rectangle
//! and gathers everything held along it, deepest node first.
//!
//! The library emits `tracing` events on splits and rebuilds and never
//! installs a subscriber itself.

pub mod config;
pub mod error;
pub mod prelude;
pub mod quadtree;
pub mod rect;

pub use config::QuadTreeConfig;
pub use error::QuadTreeError;
pub use quadtree::{Iter, QuadTree, Quadrant};
pub use rect::{Bounded, Rect};
