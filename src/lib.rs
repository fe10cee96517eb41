//! Hermite interpolation through generalized divided differences.
//!
//! Given base nodes `x`, values `f(x)` and first derivatives `f'(x)`,
//! [`interpolation::HermiteTable`] builds the divided-difference table over
//! the doubled nodes and exposes the interpolating polynomial in Newton form.

pub mod interpolation;
