use map_graph::classify::{road_mask, text_candidate_mask};
use map_graph::config::analyze::load_config;
use map_graph::diagnostics::MapAnalysisReport;
use map_graph::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use map_graph::overlay::overlay_mask;
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

    let image = load_rgb_image(&config.input)?;
    println!(
        "Loaded {} ({} x {} pixels)",
        config.input.display(),
        image.w,
        image.h
    );

    let road = road_mask(&image, config.classify.road_threshold);
    let text = text_candidate_mask(&image, config.classify.text_percentile)
        .map_err(|e| e.to_string())?;
    println!(
        "Found {} road pixels ({:.2}% of image)",
        road.count_true(),
        road.coverage() * 100.0
    );

    let composite = overlay_mask(&image, &road, config.overlay.style()).map_err(|e| e.to_string())?;
    save_rgb_image(&composite, &config.output.overlay_image)?;

    let report = MapAnalysisReport::new(
        &image,
        &road,
        &text,
        config.classify.road_threshold,
        config.classify.text_percentile,
    );
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "Saved overlay to {} and report to {}",
        config.output.overlay_image.display(),
        config.output.report_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: analyze_map <config.json>".to_string()
}
