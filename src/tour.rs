use log::debug;

use crate::error::TourError;
use crate::formula::Formula;

/// A place on the sphere, in degrees. Coordinates are taken as given; nothing
/// checks that they fall inside the usual ranges.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            name: None,
            latitude,
            longitude,
        }
    }

    pub fn named(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: Some(name.into()),
            latitude,
            longitude,
        }
    }
}

/// Everything needed to run a tour, as gathered by an input provider.
#[derive(Clone, Debug, PartialEq)]
pub struct TourRequest {
    pub points: Vec<Point>,
    pub radius: f64,
    pub formula: String,
}

/// Distance from point `from` to point `to`, rounded to the nearest integer
/// (halves away from zero). Only built from a finite radius, so `distance`
/// never comes from a NaN or infinite float.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub distance: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    pub formula: Formula,
    pub edges: Vec<Edge>,
}

impl TourRequest {
    pub fn run(&self) -> Result<Tour, TourError> {
        circular_tour(&self.points, self.radius, &self.formula)
    }
}

/// Walks the points in order and back to the first one, measuring every leg
/// with the named formula. Edge `i` runs from point `i` to point
/// `(i + 1) % n`.
pub fn circular_tour(points: &[Point], radius: f64, formula_name: &str) -> Result<Tour, TourError> {
    let n = points.len();
    if n < 2 {
        return Err(TourError::InsufficientPoints(n));
    }
    let formula = Formula::from(formula_name)
        .ok_or_else(|| TourError::InvalidFormula(formula_name.to_string()))?;
    if !radius.is_finite() {
        return Err(TourError::InvalidRadius(radius));
    }

    let edges = (0..n)
        .map(|i| {
            let next = (i + 1) % n;
            let distance = formula.distance(&points[i], &points[next], radius);
            debug!("{} -> {}: {} ({})", i, next, distance, formula);
            Edge {
                from: i,
                to: next,
                distance: distance.round() as i64,
            }
        })
        .collect();
    Ok(Tour { formula, edges })
}

/// [`circular_tour`] without the endpoint labels: entry `i` is the rounded
/// distance from point `i` to point `(i + 1) % n`.
pub fn circular_distances(points: &[Point], radius: f64, formula_name: &str) -> Result<Vec<i64>, TourError> {
    let tour = circular_tour(points, radius, formula_name)?;
    Ok(tour.edges.into_iter().map(|e| e.distance).collect())
}
