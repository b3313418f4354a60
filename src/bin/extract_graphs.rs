use cell_graphs::config::{load_config, ExtractToolConfig};
use cell_graphs::image::io::{load_label_image, write_json_file};
use cell_graphs::GraphExtractor;
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
    let config: ExtractToolConfig = load_config(Path::new(&config_path))?;

    let labels = load_label_image(&config.input)?;
    let extractor = GraphExtractor::new(config.params.clone());
    let summary = extractor.run_to_dir(&labels, &config.run_id, &config.output_dir)?;

    if let Some(summary_path) = &config.summary_json {
        write_json_file(summary_path, &summary)?;
    }

    println!(
        "Cataloged {} regions, wrote {} files for {} centers to {}",
        summary.region_count,
        summary.files_written,
        summary.center_count,
        config.output_dir.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: extract_graphs <config.json>".to_string()
}
