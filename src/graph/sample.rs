//! Bundled GLBITM campus sample data.
//!
//! Coordinates are manually estimated placeholders laid out against the
//! 1500×1286 source raster, not measured ground truth. `export_graph`
//! accepts externally supplied node/connection JSON files as the extension
//! point for replacing them with verified coordinates.
use super::{GraphBuilder, GraphError, Node, RoadGraph};

/// Curated EN points of the campus map, in definition order.
pub fn campus_nodes() -> Vec<Node> {
    vec![
        // Gates (main entry points)
        Node::new(1, "Gate No.1 EN", 750, 1200),
        // Top left zone
        Node::new(2, "Guest House & Staff Quarters EN", 120, 180),
        Node::new(3, "Boys Hostel-2 (Juniors) EN", 120, 280),
        // Central top zone, play ground
        Node::new(4, "Play Ground EN (Left)", 400, 200),
        Node::new(5, "Play Ground EN (Right)", 600, 200),
        Node::new(6, "Sports Facilities EN", 500, 120),
        // Top right zone, utilities
        Node::new(7, "Cow Shelter EN", 1100, 200),
        Node::new(8, "Genset EN", 1200, 250),
        Node::new(9, "Meter Room EN", 1300, 300),
        Node::new(10, "Waste Recycling Area EN", 1150, 350),
        Node::new(11, "Gate No.2 EN", 1400, 600),
        Node::new(12, "Security Room EN (Gate 2)", 1380, 580),
        // Central right zone, hostels and workshops
        Node::new(13, "Mess, Cafeteria & Gym EN (Left)", 700, 350),
        Node::new(14, "Mess, Cafeteria & Gym EN (Right)", 850, 350),
        Node::new(15, "Boys Hostel-1 (Seniors) EN (Left)", 700, 450),
        Node::new(16, "Boys Hostel-1 (Seniors) EN (Right)", 850, 450),
        Node::new(17, "Workshop & SHD Hall EN (Left)", 1100, 400),
        Node::new(18, "Workshop & SHD Hall EN (Right)", 1250, 400),
        // Bottom left zone, academic
        Node::new(19, "GLBIMR PGDM Block EN", 200, 950),
        Node::new(20, "Cafeteria EN (near PGDM)", 320, 850),
        // Bottom central zone, academic blocks
        Node::new(21, "GLBITM Academic Block 2 EN", 500, 850),
        Node::new(22, "GLBITM Academic Block 1 EN (North)", 950, 750),
        Node::new(23, "GLBITM Academic Block 1 EN (South)", 950, 950),
        Node::new(24, "GLBITM Academic Block 1 EN (East)", 1100, 850),
        Node::new(25, "GLBITM Academic Block 1 EN (West)", 800, 850),
        // Central junction
        Node::new(26, "Central Junction EN", 750, 750),
        // Bottom right zone
        Node::new(27, "Students Lunch Area EN", 1350, 950),
        // Security room near Gate 1
        Node::new(28, "Security Room EN (Gate 1)", 720, 1180),
    ]
}

/// Road-segment connections between EN points, following the main road
/// network (black paths only), in creation order.
pub const CAMPUS_CONNECTIONS: &[(u32, u32)] = &[
    // Gate 1
    (1, 28),
    (1, 26),
    (1, 23),
    // Central junction
    (26, 22),
    (26, 25),
    (26, 21),
    (26, 13),
    (26, 14),
    // Academic Block 1 perimeter
    (22, 24),
    (24, 23),
    (23, 25),
    (25, 22),
    // Academic Block 2 surroundings
    (21, 20),
    (21, 19),
    (19, 20),
    // Play ground
    (4, 5),
    (4, 6),
    (5, 6),
    (4, 3),
    (3, 2),
    // Hostel area
    (13, 15),
    (14, 16),
    (15, 16),
    // Workshop area
    (17, 18),
    (18, 11),
    (11, 12),
    // Utilities
    (7, 8),
    (8, 9),
    (9, 10),
    // Right side
    (18, 9),
    (24, 27),
    (27, 11),
    // Vertical campus roads
    (26, 5),
    (14, 5),
    (16, 14),
    // Horizontal campus roads
    (21, 25),
    (20, 21),
];

/// Build the bundled campus graph end to end.
pub fn campus_graph() -> Result<RoadGraph, GraphError> {
    let mut builder = GraphBuilder::new(campus_nodes())?;
    for &(source, target) in CAMPUS_CONNECTIONS {
        builder.add_edge(source, target)?;
    }
    Ok(builder.finish())
}
