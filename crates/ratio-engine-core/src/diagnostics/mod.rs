//! Narrative reading of a [`RatioResult`]: comparative matrix, flags and
//! optimal-band interpretation.

pub mod bands;
pub mod flags;
pub mod matrix;

use serde::{Deserialize, Serialize};

use crate::engine::RatioResult;

pub use bands::{BandAssessment, BandPosition};
pub use flags::{DiagnosticFlag, FlagKind, Severity};
pub use matrix::{MatrixRow, Trend};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub matrix: Vec<MatrixRow>,
    pub flags: Vec<DiagnosticFlag>,
    pub bands: Vec<BandAssessment>,
}

impl Diagnostics {
    pub fn has_critical(&self) -> bool {
        self.flags.iter().any(|f| f.severity == Severity::Critical)
    }
}

pub fn diagnose(result: &RatioResult) -> Diagnostics {
    Diagnostics {
        matrix: matrix::comparative_matrix(result),
        flags: flags::raise_flags(result),
        bands: bands::assess_bands(result),
    }
}
