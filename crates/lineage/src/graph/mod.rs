//! Graph construction and layout.
//!
//! - [`build_graph`] crawls edges from a root asset into a [`LineageGraph`]
//! - [`assign_positions`] lays nodes out in depth levels for rendering
//!
//! Analyses over a built graph go through a crate-internal petgraph arena
//! keyed by asset ID.
//!
//! [`LineageGraph`]: crate::domain::LineageGraph

mod builder;
mod index;
mod layout;

pub use builder::build_graph;
pub use layout::{HORIZONTAL_SPACING, VERTICAL_SPACING, assign_positions};

pub(crate) use index::GraphIndex;
