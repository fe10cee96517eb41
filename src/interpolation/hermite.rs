//! Hermite (Osculating) Interpolation
//!
//! Builds the generalized divided-difference table of
//! [Hermite interpolation](https://en.wikipedia.org/wiki/Hermite_interpolation)
//! over the doubled node sequence `z = [x0, x0, x1, x1, ...]`.
//!
//! Each node is repeated so the pair `(z[2k], z[2k+1])` coincides. The
//! first-order difference across a coincident pair is the limit
//! `f'(x_k)`, so column 1 takes the supplied derivative on odd rows and
//! the ordinary difference quotient on even rows. Higher columns follow
//! the Newton recursion
//!
//! ```text
//! q[i][j] = (q[i][j-1] - q[i-1][j-1]) / (z[i] - z[i-j]),   i >= j
//! ```
//!
//! and the diagonal `q[i][i]` holds the Newton-form coefficients.

use log::{debug, trace, warn};

use crate::interpolation::config::HermiteCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::polynomial::HermitePolynomial;
use crate::interpolation::report::TableReport;


#[derive(Debug, Clone, PartialEq)]
enum TableState {
    Empty,
    Built { z: Vec<f64>, q: Vec<Vec<f64>> },
}


/// Hermite divided-difference table.
///
/// # State
/// - Empty: after [`HermiteTable::new`], [`HermiteTable::set_inputs`], or
///   any failed [`HermiteTable::build`].
/// - Built: after a successful build. Only then are the table,
///   the doubled nodes and the polynomial readable.
///
/// # Example
/// ```
/// use hermite::interpolation::{HermiteCfg, HermiteTable};
///
/// let cfg = HermiteCfg::new()
///     .set_x(&[1.0])?
///     .set_y(&[2.0])?
///     .set_dy(&[3.0])?;
/// let table = HermiteTable::from_cfg(cfg, 1)?;
///
/// assert_eq!(table.polynomial()?.to_string(), "2 + 3*(x-1)");
/// # Ok::<(), hermite::interpolation::InterpolationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HermiteTable {
    x     : Vec<f64>,
    y     : Vec<f64>,
    dy    : Vec<f64>,
    x_tol : f64,
    state : TableState,
}

impl Default for HermiteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HermiteTable {
    pub fn new() -> Self {
        Self {
            x     : Vec::new(),
            y     : Vec::new(),
            dy    : Vec::new(),
            x_tol : crate::interpolation::config::DEFAULT_X_TOL,
            state : TableState::Empty,
        }
    }

    /// Sets inputs from `cfg` and builds the table for `n` base points.
    pub fn from_cfg(cfg: HermiteCfg<'_>, n: usize) -> Result<Self, InterpolationError> {
        let mut table = Self::new();
        table.set_inputs(cfg)?;
        table.build(n)?;
        Ok(table)
    }

    /// Copies the validated input sequences and discards any built table.
    pub fn set_inputs(&mut self, cfg: HermiteCfg<'_>) -> Result<(), InterpolationError> {
        self.state = TableState::Empty;
        cfg.validate()?;

        self.x     = cfg.x().to_vec();
        self.y     = cfg.y().to_vec();
        self.dy    = cfg.dy().to_vec();
        self.x_tol = cfg.x_tol();
        Ok(())
    }

    /// Builds the `2n x 2n` divided-difference table.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `n == 0`.
    /// - [`InterpolationError::UnequalLength`] if any input sequence does not
    ///   hold exactly `n` elements. Checked before any allocation.
    /// - [`InterpolationError::SingularNode`] if two base nodes coincide
    ///   within the configured tolerance.
    /// - [`InterpolationError::NonFiniteDifference`] if a difference overflows.
    ///
    /// On error the table is left Empty.
    pub fn build(&mut self, n: usize) -> Result<(), InterpolationError> {
        self.state = TableState::Empty;
        debug!("building hermite table for n={n}");

        self.check_shape(n)?;
        if let Some((i, j)) = coincident_nodes(&self.x, self.x_tol) {
            warn!("rejecting hermite table: x[{i}] and x[{j}] coincide at {}", self.x[i]);
            return Err(InterpolationError::SingularNode { i, j, x: self.x[i] });
        }

        let (z, q) = divided_differences(&self.x, &self.y, &self.dy)?;

        debug!("hermite table built: {size}x{size}", size = z.len());
        self.state = TableState::Built { z, q };
        Ok(())
    }

    fn check_shape(&self, n: usize) -> Result<(), InterpolationError> {
        if n == 0 {
            return Err(InterpolationError::EmptyInput);
        }
        for (name, len) in [("x", self.x.len()), ("y", self.y.len()), ("dy", self.dy.len())] {
            if len != n {
                return Err(InterpolationError::UnequalLength { name, expected: n, got: len });
            }
        }
        Ok(())
    }

    fn built(&self) -> Result<(&[f64], &[Vec<f64>]), InterpolationError> {
        match &self.state {
            TableState::Built { z, q } => Ok((z.as_slice(), q.as_slice())),
            TableState::Empty => Err(InterpolationError::TableNotBuilt),
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, TableState::Built { .. })
    }

    /// Number of base points of the built table, `0` when Empty.
    pub fn len(&self) -> usize {
        match &self.state {
            TableState::Built { z, .. } => z.len() / 2,
            TableState::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // getters
    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn dy(&self) -> &[f64] { &self.dy }

    /// Doubled node sequence, length `2n`.
    pub fn z(&self) -> Result<&[f64], InterpolationError> {
        self.built().map(|(z, _)| z)
    }

    /// Full `2n x 2n` table; entries with `i < j` are zero.
    pub fn q(&self) -> Result<&[Vec<f64>], InterpolationError> {
        self.built().map(|(_, q)| q)
    }

    /// `q[i][j]` for `j <= i < 2n`, `None` otherwise.
    pub fn entry(&self, i: usize, j: usize) -> Result<Option<f64>, InterpolationError> {
        let (_, q) = self.built()?;
        if j > i {
            return Ok(None);
        }
        Ok(q.get(i).map(|row| row[j]))
    }

    /// Diagonal `q[i][i]`, the Newton-form coefficients.
    pub fn coefficients(&self) -> Result<Vec<f64>, InterpolationError> {
        let (_, q) = self.built()?;
        Ok(q.iter().enumerate().map(|(i, row)| row[i]).collect())
    }

    pub fn polynomial(&self) -> Result<HermitePolynomial, InterpolationError> {
        let (z, q) = self.built()?;
        Ok(HermitePolynomial::from_table(z, q))
    }

    pub fn rows(&self) -> Result<TableReport<'_>, InterpolationError> {
        let (z, q) = self.built()?;
        Ok(TableReport::new(z, q))
    }
}


/// First pair `(i, j)`, `i < j`, with `|x[i] - x[j]| <= tol`.
///
/// All pairs are scanned since the nodes need not be sorted and any
/// coincident pair zeroes a denominator somewhere in the table.
fn coincident_nodes(x: &[f64], tol: f64) -> Option<(usize, usize)> {
    let n = x.len();
    for i in 0..n {
        for j in i + 1..n {
            if (x[i] - x[j]).abs() <= tol {
                return Some((i, j));
            }
        }
    }
    None
}


/// Fills the doubled nodes and the divided-difference table.
///
/// Nodes must be pairwise distinct; the first non-finite entry is
/// reported rather than stored.
fn divided_differences(
    x : &[f64],
    y : &[f64],
    dy: &[f64],
) -> Result<(Vec<f64>, Vec<Vec<f64>>), InterpolationError> {
    let size = 2 * x.len();

    let z: Vec<f64> = x.iter().flat_map(|&xk| [xk, xk]).collect();
    let mut q = vec![vec![0.0; size]; size];

    // column 0: f repeated per pair
    for (i, row) in q.iter_mut().enumerate() {
        row[0] = y[i / 2];
    }

    // column 1: derivative across a coincident pair, difference quotient otherwise
    for i in 1..size {
        q[i][1] = if i % 2 == 1 {
            dy[i / 2]
        } else {
            (q[i][0] - q[i - 1][0]) / (z[i] - z[i - 1])
        };
        check_finite(q[i][1], i, 1)?;
    }
    trace!("column 1: {:?}", (1..size).map(|i| q[i][1]).collect::<Vec<_>>());

    for j in 2..size {
        for i in j..size {
            q[i][j] = (q[i][j - 1] - q[i - 1][j - 1]) / (z[i] - z[i - j]);
            check_finite(q[i][j], i, j)?;
        }
        trace!("column {j}: {:?}", (j..size).map(|i| q[i][j]).collect::<Vec<_>>());
    }

    Ok((z, q))
}

#[inline]
fn check_finite(v: f64, row: usize, col: usize) -> Result<(), InterpolationError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(InterpolationError::NonFiniteDifference { row, col })
    }
}
