//! Newton-form representation of the Hermite polynomial.
//!
//! The diagonal of the divided-difference table gives the coefficients;
//! term `i` multiplies `q[i][i]` by the running product of `(x - z[j])`
//! for `j < i`:
//!
//! ```text
//! H(x) = q[0][0] + q[1][1](x - z0) + q[2][2](x - z0)(x - z1) + ...
//! ```

use std::fmt;

/// Integral values at or above this magnitude print in decimal form.
const INTEGRAL_DISPLAY_LIMIT: f64 = 1e15;


/// One Newton term: `coefficient * (x - nodes[0]) * (x - nodes[1]) * ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonTerm {
    pub coefficient: f64,
    pub nodes: Vec<f64>,
}

impl fmt::Display for NewtonTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.coefficient))?;
        for &z in &self.nodes {
            if z < 0.0 {
                write!(f, "*(x+{})", format_number(-z))?;
            } else {
                write!(f, "*(x-{})", format_number(z))?;
            }
        }
        Ok(())
    }
}


/// Hermite interpolating polynomial in Newton form.
///
/// Built from a [`crate::interpolation::hermite::HermiteTable`]; holds
/// exactly `2n` terms for `n` base points. `Display` renders the
/// `+`-joined expression, e.g. `2 + 3*(x-1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct HermitePolynomial {
    terms: Vec<NewtonTerm>,
}

impl HermitePolynomial {
    pub(crate) fn from_table(z: &[f64], q: &[Vec<f64>]) -> Self {
        let terms = (0..z.len())
            .map(|i| NewtonTerm {
                coefficient: q[i][i],
                nodes: z[..i].to_vec(),
            })
            .collect();

        Self { terms }
    }

    pub fn terms(&self) -> &[NewtonTerm] {
        &self.terms
    }

    pub fn coefficients(&self) -> Vec<f64> {
        self.terms.iter().map(|t| t.coefficient).collect()
    }

    /// Degree bound `2n - 1`; the actual degree is lower when trailing
    /// coefficients vanish.
    pub fn degree_bound(&self) -> usize {
        self.terms.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn expression(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HermitePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}


/// Formats a real for display.
///
/// Values without a fractional part print as integers (`3`, not `3.0`),
/// `-0` prints as `0`, everything else uses the shortest decimal that
/// round-trips.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.is_finite() && v.fract() == 0.0 && v.abs() < INTEGRAL_DISPLAY_LIMIT {
        return format!("{}", v as i64);
    }
    format!("{v}")
}
