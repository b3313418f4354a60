use cell_graphs::image::LabelImage;
use cell_graphs::{ExtractParams, GraphExtractor};
use nalgebra::Point2;

fn main() {
    // Demo stub: builds a tiny synthetic label frame and runs the extractor
    let mut labels = LabelImage::new(64, 64);
    labels.set(30, 32, 2);
    labels.set(33, 32, 3);
    labels.set(32, 35, 4);
    labels.set(60, 4, 5);

    let extractor = GraphExtractor::new(ExtractParams {
        adjacency_radius: 10.0,
        subgraph_size: 4,
        dilation_size: 3,
        center_threshold: 8.0,
        image_center: Point2::new(32.0, 32.0),
    });
    match extractor.process(&labels) {
        Ok(report) => println!(
            "regions={} centers={} extraction_ms={:.3}",
            report.region_count,
            report.center_ids.len(),
            report.timing.extraction_ms
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
