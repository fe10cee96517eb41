//! Input configuration for Hermite interpolation.
//!
//! Provides [`HermiteCfg`], a borrowed view over the three input sequences
//! plus the node coincidence tolerance [`DEFAULT_X_TOL`].
//!
//! [`HermiteCfg`] — fields
//! - `x`     : base nodes
//! - `y`     : function values at the nodes
//! - `dy`    : first derivatives at the nodes
//! - `x_tol` : nodes closer than or equal to this are treated as coincident
//!
//! [`parse_values`] is the text-to-number step for callers collecting raw
//! input from a form or a command line.

use crate::interpolation::errors::InterpolationError;

/// Only exactly equal nodes are coincident by default.
pub const DEFAULT_X_TOL: f64 = 0.0;


/// Hermite interpolation configuration
///
/// # Construction
/// - Use [`HermiteCfg::new`] then the fallible setters.
///
/// # Validation
/// - Each setter rejects empty or non-finite sequences and any length
///   disagreement with a sequence that is already set.
/// - Node coincidence is checked when the table is built, not here.
#[derive(Debug, Copy, Clone)]
pub struct HermiteCfg<'a> {
    pub(crate) x     : &'a [f64],
    pub(crate) y     : &'a [f64],
    pub(crate) dy    : &'a [f64],
    pub(crate) x_tol : f64,
}

impl<'a> Default for HermiteCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> HermiteCfg<'a> {
    pub fn new() -> Self {
        Self {
            x     : &[],
            y     : &[],
            dy    : &[],
            x_tol : DEFAULT_X_TOL,
        }
    }

    /// Checks that all three sequences are present and agree in length.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        if self.x.is_empty() || self.y.is_empty() || self.dy.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        let n = self.x.len();
        for (name, len) in [("y", self.y.len()), ("dy", self.dy.len())] {
            if len != n {
                return Err(InterpolationError::UnequalLength { name, expected: n, got: len });
            }
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn dy(&self) -> &'a [f64] { self.dy }
    pub fn x_tol(&self) -> f64 { self.x_tol }

    // setters
    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        self.check_sequence("x", v)?;
        self.x = v;
        Ok(self)
    }

    pub fn set_y(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        self.check_sequence("y", v)?;
        self.y = v;
        Ok(self)
    }

    pub fn set_dy(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        self.check_sequence("dy", v)?;
        self.dy = v;
        Ok(self)
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v < 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }
        self.x_tol = v;
        Ok(self)
    }

    fn check_sequence(&self, name: &'static str, v: &[f64]) -> Result<(), InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { name, idx });
        }

        // length agreement against the other sequences already set
        let expected = [("x", self.x), ("y", self.y), ("dy", self.dy)]
            .iter()
            .filter(|(other, _)| *other != name)
            .map(|(_, s)| s.len())
            .find(|&len| len != 0);
        match expected {
            Some(expected) if expected != v.len() => {
                Err(InterpolationError::UnequalLength { name, expected, got: v.len() })
            }
            _ => Ok(()),
        }
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}


/// Parses raw text entries into finite reals.
///
/// Entries are trimmed and blank ones are skipped, so a form with an
/// unfilled field yields a shorter sequence that the table build then
/// rejects as [`InterpolationError::UnequalLength`]. `idx` in the returned
/// errors refers to the position in `entries`.
pub fn parse_values(name: &'static str, entries: &[&str]) -> Result<Vec<f64>, InterpolationError> {
    let mut out = Vec::with_capacity(entries.len());

    for (idx, raw) in entries.iter().enumerate() {
        let s = raw.trim();
        if s.is_empty() {
            continue;
        }
        let v: f64 = s.parse().map_err(|_| InterpolationError::NonNumeric {
            name,
            idx,
            raw: (*raw).to_string(),
        })?;
        if !v.is_finite() {
            return Err(InterpolationError::NonFiniteVec { name, idx });
        }
        out.push(v);
    }

    Ok(out)
}
