use map_graph::config::graph::{load_config, ConnectionDef};
use map_graph::config::read_json_config;
use map_graph::graph::{sample, GraphBuilder, Node};
use map_graph::image::io::write_json_file;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let nodes: Vec<Node> = match &config.nodes {
        Some(path) => read_json_config(path)?,
        None => sample::campus_nodes(),
    };
    let connections: Vec<(u32, u32)> = match &config.connections {
        Some(path) => {
            let defs: Vec<ConnectionDef> = read_json_config(path)?;
            defs.iter().map(|c| (c.source, c.target)).collect()
        }
        None => sample::CAMPUS_CONNECTIONS.to_vec(),
    };

    let mut builder = GraphBuilder::new(nodes)
        .map_err(|e| e.to_string())?
        .with_polyline_points(config.num_points);
    for (source, target) in connections {
        builder
            .add_edge(source, target)
            .map_err(|e| format!("connection {source} -> {target}: {e}"))?;
    }
    let graph = builder.finish();

    write_json_file(&config.output.nodes_json, &graph.nodes)?;
    write_json_file(&config.output.edges_json, &graph.edges)?;

    println!(
        "Created {} EN points and {} road connections",
        graph.nodes.len(),
        graph.edges.len()
    );
    println!(
        "Files saved: {} and {}",
        config.output.nodes_json.display(),
        config.output.edges_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: export_graph <config.json>".to_string()
}
