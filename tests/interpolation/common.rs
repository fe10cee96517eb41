use hermite::interpolation::errors::InterpolationError;
use hermite::interpolation::hermite::HermiteTable;
use hermite::interpolation::config::HermiteCfg;

pub type HermiteResult = Result<(), InterpolationError>;

pub fn build(x: &[f64], y: &[f64], dy: &[f64]) -> Result<HermiteTable, InterpolationError> {
    let cfg = HermiteCfg::new()
        .set_x(x)?
        .set_y(y)?
        .set_dy(dy)?;
    HermiteTable::from_cfg(cfg, x.len())
}

/// Evaluates the Newton form and its derivative at `t` (Horner).
pub fn newton_eval(coeffs: &[f64], z: &[f64], t: f64) -> (f64, f64) {
    let m = coeffs.len();
    let mut p  = coeffs[m - 1];
    let mut dp = 0.0;
    for j in (0..m - 1).rev() {
        dp = dp * (t - z[j]) + p;
        p  = p * (t - z[j]) + coeffs[j];
    }
    (p, dp)
}
