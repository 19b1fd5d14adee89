//! Surveys a small block of lots and prints their descriptions.
//!
//! ```text
//! cargo run --example survey
//! RUST_LOG=lotline=debug cargo run --example survey
//! ```

use lotline::math::Point2;
use lotline::model::{AlignmentCurve, ParcelRecord, ParcelStore};
use lotline::operations::narrative::DescribeBoundary;
use lotline::operations::survey::{SurveyBatch, SurveyParams};

fn rect(x0: f64, y0: f64, w: f64, h: f64) -> Vec<Point2> {
    vec![
        Point2::new(x0, y0),
        Point2::new(x0, y0 + h),
        Point2::new(x0 + w, y0 + h),
        Point2::new(x0 + w, y0),
        Point2::new(x0, y0),
    ]
}

fn main() -> lotline::Result<()> {
    // Default: WARN for everything, INFO for lotline.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("lotline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = ParcelStore::new();
    for (i, x0) in [0.0, 12.0, 24.0].into_iter().enumerate() {
        store.insert(ParcelRecord::new(
            format!("Lot {:02}", i + 1),
            "Block 555",
            rect(500_000.0 + x0, 7_400_000.0, 12.0, 30.0),
        ));
    }
    // A degenerate outline to show per-parcel error reporting.
    store.insert(ParcelRecord::new(
        "Lot 04",
        "Block 555",
        vec![Point2::new(500_040.0, 7_400_000.0); 3],
    ));

    let alignments = [AlignmentCurve::from_polyline(
        "Rua das Flores",
        &[
            Point2::new(499_990.0, 7_399_999.5),
            Point2::new(500_050.0, 7_399_999.5),
        ],
        1.0,
    )?];

    let params = SurveyParams::default().with_grid_lookup();
    let unit = params.unit.clone();
    let report = SurveyBatch::new(&store, &alignments)
        .with_params(params)
        .execute()?;

    for surveyed in &report.parcels {
        let parcel = &surveyed.parcel;
        println!("== {} ({}): {:.2} {unit}²", parcel.name, parcel.group, parcel.area);
        for row in &surveyed.summary {
            println!("  {row}");
        }
        for row in parcel.vertex_table() {
            let az = row
                .outgoing_azimuth
                .map_or_else(|| "-".to_owned(), |dms| dms.to_string());
            println!("  {:>4}  E {:.3}  N {:.3}  {az}", row.label, row.east, row.north);
        }
        println!("  {}", surveyed.narrative);
    }

    for warning in &report.warnings {
        println!("skipped {}: {}", warning.name, warning.error);
    }

    // User moves the first lot's frontage to the next side of the ring.
    if let Some(first) = report.parcels.first() {
        let current = first.parcel.frontage_index().unwrap_or(0);
        let index = (current + 1) % first.parcel.sides.len();
        let moved = first.parcel.reclassify(index)?;
        println!(
            "\n{}: frontage moved from side {} to side {}:",
            moved.name,
            current + 1,
            index + 1
        );
        println!("  {}", DescribeBoundary::new(&moved).with_unit(unit).execute());
    }

    Ok(())
}
