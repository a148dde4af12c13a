use std::fmt;

use crate::geo;
use crate::tour::Point;

pub const VALID_FORMULAS: [&str; 3] = ["haversine", "vincenty", "sloc"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    Haversine,
    Vincenty,
    Sloc,
}

impl Formula {
    pub fn from(string: &str) -> Option<Self> {
        match string {
            "haversine" => Some(Formula::Haversine),
            "vincenty" => Some(Formula::Vincenty),
            "sloc" => Some(Formula::Sloc),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Formula::Haversine => "haversine",
            Formula::Vincenty => "vincenty",
            Formula::Sloc => "sloc",
        }
    }

    pub fn distance(&self, from: &Point, to: &Point, radius: f64) -> f64 {
        let f: fn(f64, f64, f64, f64, f64) -> f64 = match self {
            Formula::Haversine => geo::haversine,
            Formula::Vincenty => geo::vincenty,
            Formula::Sloc => geo::spherical_law_of_cosines,
        };
        f(from.latitude, from.longitude, to.latitude, to.longitude, radius)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_valid_name_resolves() {
        for name in VALID_FORMULAS {
            let formula = Formula::from(name).expect(name);
            assert_eq!(formula.name(), name);
            assert_eq!(formula.to_string(), name);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Formula::from("euclidean"), None);
        assert_eq!(Formula::from(""), None);
        assert_eq!(Formula::from("Haversine"), None);
        // The long alias is only understood by the places file reader.
        assert_eq!(Formula::from("spherical law of cosines"), None);
    }

    #[test]
    fn dispatches_to_matching_geo_function() {
        let a = Point::new(40.7128, -74.0060);
        let b = Point::new(34.0522, -118.2437);
        assert_eq!(
            Formula::Haversine.distance(&a, &b, 6371.0),
            geo::haversine(40.7128, -74.0060, 34.0522, -118.2437, 6371.0)
        );
        assert_eq!(
            Formula::Sloc.distance(&a, &b, 6371.0),
            geo::spherical_law_of_cosines(40.7128, -74.0060, 34.0522, -118.2437, 6371.0)
        );
        assert_eq!(
            Formula::Vincenty.distance(&a, &b, 6371.0),
            geo::vincenty(40.7128, -74.0060, 34.0522, -118.2437, 6371.0)
        );
    }
}
