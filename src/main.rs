use map_graph::graph::sample::campus_graph;

fn main() {
    // Demo stub: builds the bundled campus graph and prints a summary
    let graph = campus_graph().expect("bundled campus data is internally consistent");
    println!(
        "campus graph: {} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );
    if let Some(edge) = graph.edges.first() {
        println!(
            "edge {}: {} -> {}, length {:.2}",
            edge.id, edge.source, edge.target, edge.length
        );
    }
}
