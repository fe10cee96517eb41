//! Row-wise view of a built divided-difference table.
//!
//! Defines [`TableReport`], one [`TableRow`] per doubled node, for callers
//! rendering the table as a grid. Row `k` carries `z[k]`, `f(z[k])` and the
//! populated part of the row, `q[k][0..=k]`.

use std::fmt;

use crate::interpolation::polynomial::format_number;

const HEADERS: [&str; 4] = ["k", "z_k", "f(z_k)", "differences"];


/// One row of the divided-difference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow<'a> {
    pub k: usize,
    pub z: f64,
    pub f: f64,
    pub differences: &'a [f64],
}


/// Summary of a built table.
///
/// [`TableReport`]
/// - `n_provided` : number of base points `n`
/// - `rows`       : `2n` rows, in doubled-node order
#[derive(Debug, Clone, PartialEq)]
pub struct TableReport<'a> {
    pub n_provided: usize,
    pub rows: Vec<TableRow<'a>>,
}

impl<'a> TableReport<'a> {
    pub(crate) fn new(z: &[f64], q: &'a [Vec<f64>]) -> Self {
        let rows = z
            .iter()
            .zip(q)
            .enumerate()
            .map(|(k, (&z, row))| TableRow {
                k,
                z,
                f: row[0],
                differences: &row[..=k],
            })
            .collect::<Vec<_>>();

        Self { n_provided: rows.len() / 2, rows }
    }
}

impl fmt::Display for TableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 4]> = self
            .rows
            .iter()
            .map(|r| {
                let diffs = r
                    .differences
                    .iter()
                    .map(|&v| format_number(v))
                    .collect::<Vec<_>>()
                    .join(", ");
                [r.k.to_string(), format_number(r.z), format_number(r.f), diffs]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        write_line(f, &HEADERS, &widths)?;
        for row in &cells {
            writeln!(f)?;
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, cells: &[S], widths: &[usize]) -> fmt::Result {
    let last = cells.len() - 1;
    for (j, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        if j == last {
            // no trailing padding
            write!(f, "{}", cell.as_ref())?;
        } else {
            write!(f, "{:<w$}  ", cell.as_ref(), w = w)?;
        }
    }
    Ok(())
}
