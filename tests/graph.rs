use map_graph::graph::{sample, GraphBuilder, GraphError, Node};

fn two_nodes() -> Vec<Node> {
    vec![Node::new(1, "A", 0, 0), Node::new(2, "B", 3, 4)]
}

#[test]
fn edge_345_has_expected_length_and_polyline() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut builder = GraphBuilder::new(two_nodes())
        .expect("unique node ids")
        .with_polyline_points(4);

    let edge = builder.add_edge(1, 2).expect("both nodes exist");
    assert_eq!(edge.id, 1);
    assert_eq!(edge.length, 5.0);
    assert_eq!(
        edge.geom.geometry.coordinates,
        vec![[0, 0], [0, 1], [1, 2], [2, 3], [3, 4]]
    );
    assert_eq!(edge.geom.feature_type, "Feature");
    assert_eq!(edge.geom.geometry.geometry_type, "LineString");
    assert_eq!(edge.geom.properties.id, 1);
}

#[test]
fn reversed_edge_is_symmetric() {
    let mut builder = GraphBuilder::new(vec![
        Node::new(1, "A", 120, 180),
        Node::new(2, "B", 851, 447),
    ])
    .expect("unique node ids");

    let forward = builder.add_edge(1, 2).expect("both nodes exist").clone();
    let backward = builder.add_edge(2, 1).expect("both nodes exist").clone();

    assert_eq!(forward.length, backward.length);

    let mut reversed = backward.geom.geometry.coordinates.clone();
    reversed.reverse();
    // Shared endpoints are exact; interior samples may differ by truncation
    // since t and 1-t truncate independently.
    assert_eq!(forward.geom.geometry.coordinates.first(), reversed.first());
    assert_eq!(forward.geom.geometry.coordinates.last(), reversed.last());
    for (a, b) in forward.geom.geometry.coordinates.iter().zip(&reversed) {
        assert!((a[0] - b[0]).abs() <= 1, "x diverged: {a:?} vs {b:?}");
        assert!((a[1] - b[1]).abs() <= 1, "y diverged: {a:?} vs {b:?}");
    }
}

#[test]
fn polyline_endpoints_equal_node_positions() {
    let mut builder = GraphBuilder::new(vec![
        Node::new(7, "Cow Shelter EN", 1100, 200),
        Node::new(9, "Meter Room EN", 1300, 300),
    ])
    .expect("unique node ids");

    let edge = builder.add_edge(7, 9).expect("both nodes exist");
    let coords = &edge.geom.geometry.coordinates;
    assert_eq!(coords.len(), 11); // default num_points = 10
    assert_eq!(coords[0], [1100, 200]);
    assert_eq!(coords[10], [1300, 300]);
}

#[test]
fn edge_ids_increase_sequentially_from_one() {
    let mut builder = GraphBuilder::new(vec![
        Node::new(1, "A", 0, 0),
        Node::new(2, "B", 10, 0),
        Node::new(3, "C", 0, 10),
    ])
    .expect("unique node ids");

    assert_eq!(builder.add_edge(1, 2).unwrap().id, 1);
    assert_eq!(builder.add_edge(2, 3).unwrap().id, 2);
    assert_eq!(builder.add_edge(3, 1).unwrap().id, 3);
}

#[test]
fn unknown_node_fails_without_touching_edge_set() {
    let mut builder = GraphBuilder::new(two_nodes()).expect("unique node ids");
    builder.add_edge(1, 2).expect("both nodes exist");

    let err = builder.add_edge(1, 99).unwrap_err();
    assert_eq!(err, GraphError::NodeNotFound(99));
    let err = builder.add_edge(99, 2).unwrap_err();
    assert_eq!(err, GraphError::NodeNotFound(99));

    assert_eq!(builder.edges().len(), 1);
    // The failed calls must not have consumed ids either.
    assert_eq!(builder.add_edge(2, 1).unwrap().id, 2);
}

#[test]
fn duplicate_node_ids_are_rejected() {
    let nodes = vec![Node::new(1, "A", 0, 0), Node::new(1, "B", 5, 5)];
    assert_eq!(
        GraphBuilder::new(nodes).unwrap_err(),
        GraphError::DuplicateNodeId(1)
    );
}

#[test]
fn edge_record_serializes_to_expected_schema() {
    let mut builder = GraphBuilder::new(two_nodes())
        .expect("unique node ids")
        .with_polyline_points(4);
    builder.add_edge(1, 2).expect("both nodes exist");
    let graph = builder.finish();

    let json = serde_json::to_value(&graph.edges).expect("serializable");
    let record = &json[0];
    assert_eq!(record["id"], 1);
    assert_eq!(record["source"], 1);
    assert_eq!(record["target"], 2);
    assert_eq!(record["length"], 5.0);
    assert_eq!(record["geom"]["type"], "Feature");
    assert_eq!(record["geom"]["geometry"]["type"], "LineString");
    assert_eq!(record["geom"]["properties"]["id"], 1);

    // Coordinates stay integers through serialization.
    let text = serde_json::to_string(&record["geom"]["geometry"]["coordinates"])
        .expect("serializable");
    assert_eq!(text, "[[0,0],[0,1],[1,2],[2,3],[3,4]]");
}

#[test]
fn node_record_serializes_to_expected_schema() {
    let json = serde_json::to_value(Node::new(26, "Central Junction EN", 750, 750))
        .expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({"id": 26, "name": "Central Junction EN", "x": 750, "y": 750})
    );
}

#[test]
fn bundled_campus_graph_builds_cleanly() {
    let graph = sample::campus_graph().expect("sample data is consistent");
    assert_eq!(graph.nodes.len(), 28);
    assert_eq!(graph.edges.len(), sample::CAMPUS_CONNECTIONS.len());

    for (i, edge) in graph.edges.iter().enumerate() {
        assert_eq!(edge.id as usize, i + 1);
        assert!(graph.nodes.iter().any(|n| n.id == edge.source));
        assert!(graph.nodes.iter().any(|n| n.id == edge.target));
        assert_eq!(edge.geom.geometry.coordinates.len(), 11);
    }

    // Spot check against the curated layout: Gate 1 (750, 1200) to the
    // security room (720, 1180).
    let first = &graph.edges[0];
    assert_eq!(first.source, 1);
    assert_eq!(first.target, 28);
    assert_eq!(first.length, 36.06);
}
