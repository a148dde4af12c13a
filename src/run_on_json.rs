use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::io;

mod error;
mod formula;
mod geo;
mod places;
mod report;
mod tour;

#[derive(Parser, Debug)]
#[command(name = "json")]
#[command(about = "Read places from a JSON file and print the great-circle distances around their circular tour.", long_about = None)]
struct Cli {
    /// Path to the places .json file
    #[arg(short, long)]
    json: String,

    /// Formula to use instead of the one named in the file (haversine, vincenty, sloc)
    #[arg(short, long)]
    formula: Option<String>,

    /// Radius to use instead of the file's earthRadius
    #[arg(short, long)]
    radius: Option<f64>,

    /// Output CSV (from, to, distance). If omitted, only prints to stdout.
    #[arg(short, long)]
    out: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut request = places::load(&cli.json)?;
    if let Some(formula) = &cli.formula {
        request.formula = places::normalize_formula(formula);
    }
    if let Some(radius) = cli.radius {
        request.radius = radius;
    }
    info!(
        "Running {} over {} places with radius {}",
        request.formula,
        request.points.len(),
        request.radius
    );

    let tour = match request.run() {
        Ok(tour) => tour,
        Err(err) => {
            warn!("{:?}", err);
            println!("{}", err);
            return Ok(());
        }
    };

    report::write_text(&mut io::stdout(), &tour, &request.points)?;
    if let Some(out_path) = cli.out {
        report::write_csv(&out_path, &tour)?;
        println!("Wrote distances for {} legs to {}", tour.edges.len(), out_path);
    }

    Ok(())
}
