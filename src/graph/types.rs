use serde::{Deserialize, Serialize};

/// Entry/landmark ("EN") point on the map.
///
/// Created once from a curated definition and immutable thereafter. The
/// position is a pixel coordinate that must lie within the source image
/// bounds in a correct deployment; the graph core does not enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Positive id, unique within a node set.
    pub id: u32,
    /// Human-readable label; may encode zone/role, never parsed further.
    pub name: String,
    /// Pixel x coordinate.
    pub x: i32,
    /// Pixel y coordinate.
    pub y: i32,
}

impl Node {
    pub fn new(id: u32, name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
        }
    }

    /// Position as an `[x, y]` pair.
    #[inline]
    pub fn position(&self) -> [i32; 2] {
        [self.x, self.y]
    }
}

/// Road segment between two nodes.
///
/// Directed in storage, logically undirected. `length` and `geom` are
/// derived from the endpoint positions at creation time; node immutability
/// keeps them consistent forever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Sequential id assigned in creation order, starting at 1.
    pub id: u32,
    /// Source node id.
    pub source: u32,
    /// Target node id.
    pub target: u32,
    /// Euclidean endpoint distance, rounded to 2 decimal places.
    pub length: f64,
    /// Sampled straight-line polyline as a GeoJSON-shaped LineString feature.
    pub geom: LineFeature,
}

/// GeoJSON-shaped `Feature` envelope around a LineString.
///
/// Hand-rolled rather than built on the `geojson` crate so polyline
/// coordinates serialize as the integers they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: LineGeometry,
    pub properties: FeatureProperties,
}

impl LineFeature {
    /// Wrap a coordinate sequence as a LineString feature tagged with the
    /// owning edge id.
    pub fn line_string(coordinates: Vec<[i32; 2]>, edge_id: u32) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            geometry: LineGeometry {
                geometry_type: "LineString".to_string(),
                coordinates,
            },
            properties: FeatureProperties { id: edge_id },
        }
    }
}

/// LineString geometry with integer pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Vec<[i32; 2]>,
}

/// Feature properties: just the edge id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub id: u32,
}
