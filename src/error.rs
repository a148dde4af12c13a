use thiserror::Error;

use crate::formula::VALID_FORMULAS;

/// Conditions that stop a tour from being computed. All are reported to the
/// user; none is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourError {
    #[error("At least two points are required to calculate circular distances (got {0}).")]
    InsufficientPoints(usize),

    #[error("Invalid formula {0:?}. Expected one of: {names}.", names = VALID_FORMULAS.join(", "))]
    InvalidFormula(String),

    #[error("Invalid radius {0}. The radius must be a finite number.")]
    InvalidRadius(f64),
}
