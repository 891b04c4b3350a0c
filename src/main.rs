use fid_line_finder::prelude::*;

fn main() {
    env_logger::init();

    // Demo: three collinear dots matching a 0/10/20 mm pattern at 1 mm/px.
    let catalog = match PatternCatalog::new(vec![Pattern::chain(
        "demo",
        vec![Wire::new(0.0, 2.0), Wire::new(10.0, 2.0), Wire::new(20.0, 2.0)],
    )]) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let finder = FidLineFinder::new(
        catalog,
        LineFinderParams::new(1.0, 1.0, AngleWindow::new(-0.1, 0.1)),
    );
    let dots = [
        Dot::new(0.0, 0.0, 10.0),
        Dot::new(10.0, 0.0, 8.0),
        Dot::new(20.0, 0.0, 9.0),
    ];

    let report = finder.find_lines_with_report(&dots);
    println!("{}", report.summary());
    for (size, bucket) in report.buckets.iter().enumerate().skip(LineBuckets::RESERVED) {
        for line in bucket.iter() {
            println!(
                "size={} points={:?} origin={} endpoint={} intensity={:.1} length={:.2} angle_deg={:.2}",
                size,
                line.points,
                line.origin,
                line.endpoint,
                line.intensity,
                line.length,
                line.angle().to_degrees()
            );
        }
    }
}
