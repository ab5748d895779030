#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod graph;
pub mod image;
pub mod overlay;

// --- High-level re-exports -------------------------------------------------

// Classification entry points.
pub use crate::classify::{road_mask, text_candidate_mask, ClassifyError};

// Graph construction: builder + finished dataset.
pub use crate::graph::{Edge, GraphBuilder, GraphError, Node, RoadGraph};

// Diagnostic overlay compositing.
pub use crate::overlay::{overlay_mask, OverlayError, OverlayStyle};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use map_graph::prelude::*;
///
/// let nodes = vec![
///     Node::new(1, "Gate EN", 0, 0),
///     Node::new(2, "Block EN", 3, 4),
/// ];
/// let mut builder = GraphBuilder::new(nodes).unwrap();
/// let edge = builder.add_edge(1, 2).unwrap();
/// assert_eq!(edge.length, 5.0);
/// ```
pub mod prelude {
    pub use crate::classify::{road_mask, text_candidate_mask};
    pub use crate::graph::{Edge, GraphBuilder, Node, RoadGraph};
    pub use crate::image::{Mask, RgbImageU8};
    pub use crate::overlay::overlay_mask;
}
