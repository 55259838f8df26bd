// File: crates/demo/src/main.rs
// Summary: Demo wires series stats into the axis model and walks through autoscale/freeze/manual modes.

use anyhow::{Context, Result};
use axis_core::{AxisConfig, AxisModel, Range, SeriesCollection, SeriesModel};
use std::path::Path;

fn main() -> Result<()> {
    // Accept a CSV of per-series extents (name,min,max) or fall back to
    // synthetic data.
    let stats = match std::env::args().nth(1) {
        Some(path) => {
            println!("Using input file: {path}");
            load_stats_csv(Path::new(&path))
                .with_context(|| format!("failed to load CSV '{path}'"))?
        }
        None => synthetic_stats(),
    };
    println!("Loaded {} series extents", stats.len());

    let collection = SeriesCollection::new();
    let model = AxisModel::new(AxisConfig::new(Range::new(0.0, 100.0)));

    let _stats_sub = model.on_stats_changed(|extent| {
        println!("  stats         -> {}", fmt(extent));
    });
    let _display_sub = model.on_display_range_changed(|range| {
        println!("  display range -> {}", fmt(range));
    });

    println!("Observing collection (initial aggregation):");
    model.observe(&collection);
    for (name, extent) in &stats {
        println!("Adding series '{name}' with extent {extent}");
        collection.add(SeriesModel::with_stats(name.clone(), *extent));
    }

    println!("Widening the first series:");
    let first = collection.get(0).context("no series loaded")?;
    let widened = first.stats().context("first series has no stats")?.padded(1.0);
    first.set_stats(Some(widened));

    println!("Freezing, then feeding a much wider extent:");
    model.set_frozen(true);
    first.set_stats(Some(Range::new(-1_000.0, 1_000.0)));
    println!("  (display range held at {})", fmt(&model.display_range()));
    println!("Unfreezing re-evaluates:");
    model.set_frozen(false);

    println!("Switching to the manual range:");
    model.set_autoscale(false);
    println!("Adjusting the manual range:");
    model.set_manual_range(Range::new(-10.0, 10.0));

    println!("Back to autoscale with 25% padding:");
    model.set_autoscale_padding(0.25);
    model.set_autoscale(true);

    println!("Removing the first series:");
    collection.remove(&first);

    println!(
        "Done. {} series remain tracked for the label collaborator.",
        model.tracked_series().len()
    );
    Ok(())
}

fn fmt(range: &Option<Range>) -> String {
    match range {
        Some(r) => r.to_string(),
        None => "(no data)".to_string(),
    }
}

fn synthetic_stats() -> Vec<(String, Range)> {
    vec![
        ("pressure".to_string(), Range::new(980.0, 1035.0)),
        ("temperature".to_string(), Range::new(-4.0, 31.5)),
        ("humidity".to_string(), Range::new(22.0, 97.0)),
    ]
}

/// Load `name,min,max` rows. Endpoints may come in either order.
fn load_stats_csv(path: &Path) -> Result<Vec<(String, Range)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut out = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record
            .get(0)
            .context("missing series name column")?
            .to_string();
        let min: f64 = record
            .get(1)
            .context("missing min column")?
            .parse()
            .with_context(|| format!("bad min for series '{name}'"))?;
        let max: f64 = record
            .get(2)
            .context("missing max column")?
            .parse()
            .with_context(|| format!("bad max for series '{name}'"))?;
        out.push((name, Range::new(min, max)));
    }
    Ok(out)
}
