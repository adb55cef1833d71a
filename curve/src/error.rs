use core::fmt;

/// Errors raised by field, point, and pairing operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// A point failed its curve-membership check.
    NotOnCurve,
    /// A scalar was outside its ring's canonical range.
    ScalarOutOfRange,
    /// The infinity point was passed where a finite point is required (e.g. pairing input, hashing).
    UnexpectedInfinity,
    /// A Miller-loop evaluation hit a pole; the auxiliary point must be resampled.
    DegeneratePairingInput,
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::NotOnCurve => write!(f, "point is not on the curve"),
            CurveError::ScalarOutOfRange => write!(f, "scalar is out of range for this ring"),
            CurveError::UnexpectedInfinity => write!(f, "infinity point where a finite point was required"),
            CurveError::DegeneratePairingInput => {
                write!(f, "pairing evaluation hit a pole; resample the auxiliary point")
            }
        }
    }
}

impl std::error::Error for CurveError {}
