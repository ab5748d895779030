//! Navigable road graph construction.
//!
//! Overview
//! - A [`GraphBuilder`] owns a curated, immutable node set and accumulates
//!   edges in call order. Edge ids are sequential starting at 1, scoped to
//!   one builder — there is no process-wide counter, so independent
//!   construction runs cannot interfere.
//! - [`GraphBuilder::add_edge`] derives each edge's length (Euclidean,
//!   rounded to 2 decimals) and a sampled straight-line polyline from the
//!   endpoint positions. Referencing an unknown node id fails the call
//!   without touching the edge set; the construction run must then be
//!   treated as failed, since a dangling reference is unsafe to serialize.
//! - [`GraphBuilder::finish`] consumes the builder and hands off an
//!   immutable [`RoadGraph`] for serialization. No removal or update
//!   operations exist anywhere; the graph is write-once per run.
//!
//! Modules
//! - [`geometry`] – distance and polyline sampling helpers.
//! - [`sample`] – the bundled campus node/connection fixture.
mod geometry;
pub mod sample;
mod types;

pub use geometry::{distance, sample_polyline};
pub use types::{Edge, FeatureProperties, LineFeature, LineGeometry, Node};

use log::{debug, info};
use nalgebra::Point2;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Default polyline sample count: 11 coordinates per edge.
pub const DEFAULT_POLYLINE_POINTS: usize = 10;

/// Graph integrity violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge referenced a node id absent from the node set.
    #[error("node id {0} not found in the node set")]
    NodeNotFound(u32),
    /// Two nodes in the curated set share an id.
    #[error("duplicate node id {0} in the node set")]
    DuplicateNodeId(u32),
}

/// Accumulates a node/edge set for one construction run.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_edge_id: u32,
    num_points: usize,
}

impl GraphBuilder {
    /// Start a construction run over `nodes`. Node ids must be unique.
    pub fn new(nodes: Vec<Node>) -> Result<Self, GraphError> {
        let mut seen = HashSet::new();
        for node in &nodes {
            if !seen.insert(node.id) {
                return Err(GraphError::DuplicateNodeId(node.id));
            }
        }
        Ok(Self {
            nodes,
            edges: Vec::new(),
            next_edge_id: 1,
            num_points: DEFAULT_POLYLINE_POINTS,
        })
    }

    /// Override the polyline sample count (minimum 1 interval).
    pub fn with_polyline_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points.max(1);
        self
    }

    /// Nodes in curated-definition order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn node(&self, id: u32) -> Result<&Node, GraphError> {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// Connect two nodes by id, deriving length and polyline from their
    /// positions, and append the edge to the running set.
    ///
    /// A failed lookup leaves the edge set and the id counter untouched.
    pub fn add_edge(&mut self, source_id: u32, target_id: u32) -> Result<&Edge, GraphError> {
        let source = self.node(source_id)?.position();
        let target = self.node(target_id)?.position();

        let length = geometry::round2(distance(
            Point2::new(source[0] as f64, source[1] as f64),
            Point2::new(target[0] as f64, target[1] as f64),
        ));
        let id = self.next_edge_id;
        let coords = sample_polyline(source, target, self.num_points);
        let edge = Edge {
            id,
            source: source_id,
            target: target_id,
            length,
            geom: LineFeature::line_string(coords, id),
        };
        debug!("edge {id}: node {source_id} -> node {target_id}, length {length}");

        self.next_edge_id += 1;
        let idx = self.edges.len();
        self.edges.push(edge);
        Ok(&self.edges[idx])
    }

    /// Hand off the finished node/edge sets for serialization, consuming
    /// the builder.
    pub fn finish(self) -> RoadGraph {
        info!(
            "graph finalized: {} nodes, {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        RoadGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

/// Finished graph: nodes in definition order, edges in creation order.
///
/// Serialized as two separate datasets (`nodes.json`, `edges.json`); order
/// is preserved, never re-sorted.
#[derive(Debug, Clone, Serialize)]
pub struct RoadGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
