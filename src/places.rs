use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;
use serde::Deserialize;

use crate::tour::{Point, TourRequest};

/// Used when a places file leaves `formula` out or empty.
pub const DEFAULT_FORMULA: &str = "vincenty";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Text(String),
    Number(f64),
}

impl Coordinate {
    fn degrees(&self) -> Result<f64> {
        match self {
            Coordinate::Number(v) => Ok(*v),
            Coordinate::Text(s) => s
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{:?} is not a number", s)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    #[serde(default)]
    name: String,
    latitude: Coordinate,
    longitude: Coordinate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlacesFile {
    places: Vec<Place>,
    #[serde(default)]
    earth_radius: f64,
    #[serde(default)]
    formula: String,
}

/// Maps the formula names a places file may carry onto the selector names.
pub fn normalize_formula(formula: &str) -> String {
    match formula {
        "" => DEFAULT_FORMULA.to_string(),
        "spherical law of cosines" => "sloc".to_string(),
        other => other.to_string(),
    }
}

/// Reads a places JSON file into a [`TourRequest`].
///
/// The formula name is normalized but not validated; an unknown name is
/// reported later when the tour runs.
pub fn load(path: impl AsRef<Path>) -> Result<TourRequest> {
    let path = path.as_ref();
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        bail!("Invalid file format. Please enter a JSON file.");
    }
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let request = parse(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))?;
    info!(
        "Imported {} places from {} (radius {}, formula {})",
        request.points.len(),
        path.display(),
        request.radius,
        request.formula
    );
    Ok(request)
}

pub fn parse(reader: impl std::io::Read) -> Result<TourRequest> {
    let data: PlacesFile = serde_json::from_reader(reader).context("decoding places JSON")?;

    let mut points = Vec::with_capacity(data.places.len());
    for (i, place) in data.places.iter().enumerate() {
        let latitude = place
            .latitude
            .degrees()
            .with_context(|| format!("latitude of place {} ({})", i + 1, place.name))?;
        let longitude = place
            .longitude
            .degrees()
            .with_context(|| format!("longitude of place {} ({})", i + 1, place.name))?;
        points.push(if place.name.is_empty() {
            Point::new(latitude, longitude)
        } else {
            Point::named(place.name.clone(), latitude, longitude)
        });
    }

    Ok(TourRequest {
        points,
        radius: data.earth_radius,
        formula: normalize_formula(&data.formula),
    })
}
