use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;

use crate::tour::{Point, Tour};

fn label(points: &[Point], idx: usize) -> String {
    match points.get(idx).and_then(|p| p.name.as_deref()) {
        Some(name) => format!("{} ({})", idx + 1, name),
        None => (idx + 1).to_string(),
    }
}

/// Human readable listing, one line per leg with 1-based point numbers.
pub fn write_text<W: Write>(out: &mut W, tour: &Tour, points: &[Point]) -> Result<()> {
    writeln!(out, "\nCircular distances using {} formula:", tour.formula)?;
    for edge in &tour.edges {
        writeln!(
            out,
            "Distance {} -> {}: {} units",
            label(points, edge.from),
            label(points, edge.to),
            edge.distance
        )?;
    }
    Ok(())
}

/// Writes `from,to,distance` rows (1-based point numbers) to `out_path`.
pub fn write_csv(out_path: &str, tour: &Tour) -> Result<()> {
    let mut wtr = Writer::from_path(out_path).with_context(|| format!("creating CSV {}", out_path))?;
    write_csv_records(&mut wtr, tour)?;
    wtr.flush()?;
    Ok(())
}

fn write_csv_records<W: Write>(wtr: &mut Writer<W>, tour: &Tour) -> Result<()> {
    wtr.write_record(["from", "to", "distance"])?;
    for edge in &tour.edges {
        wtr.write_record(&[
            (edge.from + 1).to_string(),
            (edge.to + 1).to_string(),
            edge.distance.to_string(),
        ])?;
    }
    Ok(())
}
