use hermite::interpolation::config::{parse_values, HermiteCfg, DEFAULT_X_TOL};
use hermite::interpolation::errors::{ErrorKind, InterpolationError};
use hermite::interpolation::hermite::HermiteTable;

use crate::common::HermiteResult;

#[test]
fn defaults() {
    let cfg = HermiteCfg::new();
    assert!(cfg.x().is_empty());
    assert_eq!(cfg.x_tol(), DEFAULT_X_TOL);
    assert_eq!(cfg.validate().unwrap_err(), InterpolationError::EmptyInput);
}

#[test]
fn unequal_length_error() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0];
    let cfg = HermiteCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert_eq!(err, InterpolationError::UnequalLength { name: "y", expected: 3, got: 2 });
    assert_eq!(err.kind(), ErrorKind::InputShape);
}

#[test]
fn length_checked_in_any_order() {
    let dy = [0.0, 1.0];
    let cfg = HermiteCfg::new().set_dy(&dy).unwrap();
    let err = cfg.set_x(&[0.0]).unwrap_err();
    assert_eq!(err, InterpolationError::UnequalLength { name: "x", expected: 2, got: 1 });
}

#[test]
fn resetting_a_sequence_may_change_length() -> HermiteResult {
    let cfg = HermiteCfg::new().set_x(&[0.0, 1.0])?.set_x(&[0.0])?;
    assert_eq!(cfg.x(), &[0.0]);
    Ok(())
}

#[test]
fn non_finite_rejected() {
    let err = HermiteCfg::new().set_dy(&[0.0, f64::NAN]).unwrap_err();
    assert_eq!(err, InterpolationError::NonFiniteVec { name: "dy", idx: 1 });
    assert_eq!(err.kind(), ErrorKind::InputType);

    let err = HermiteCfg::new().set_x(&[f64::INFINITY]).unwrap_err();
    assert_eq!(err, InterpolationError::NonFiniteVec { name: "x", idx: 0 });
}

#[test]
fn empty_sequence_rejected() {
    let err = HermiteCfg::new().set_y(&[]).unwrap_err();
    assert_eq!(err, InterpolationError::EmptyInput);
}

#[test]
fn invalid_tolerance() {
    for bad in [-1e-3, f64::NAN, f64::INFINITY] {
        let err = HermiteCfg::new().set_x_tol(bad).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidXTol { .. }));
    }
    assert!(HermiteCfg::new().set_x_tol(0.0).is_ok());
}

#[test]
fn parses_trimmed_entries() -> HermiteResult {
    let v = parse_values("x", &["1", " 2.5 ", "-3e2", "0"])?;
    assert_eq!(v, vec![1.0, 2.5, -300.0, 0.0]);
    Ok(())
}

#[test]
fn non_numeric_entry() {
    let err = parse_values("f", &["1", "abc"]).unwrap_err();
    assert_eq!(
        err,
        InterpolationError::NonNumeric { name: "f", idx: 1, raw: "abc".to_string() }
    );
    assert_eq!(err.kind(), ErrorKind::InputType);
}

#[test]
fn non_finite_entry() {
    let err = parse_values("x", &["inf"]).unwrap_err();
    assert_eq!(err, InterpolationError::NonFiniteVec { name: "x", idx: 0 });
}

#[test]
fn blank_entry_surfaces_as_shape_error() -> HermiteResult {
    let x  = parse_values("x", &["0", "1", "2"])?;
    let y  = parse_values("f", &["1", "", "3"])?;
    let dy = parse_values("df", &["0", "0", "0"])?;
    assert_eq!(y.len(), 2);

    let err = HermiteCfg::new()
        .set_x(&x)?
        .set_y(&y)
        .unwrap_err();
    assert_eq!(err, InterpolationError::UnequalLength { name: "y", expected: 3, got: 2 });

    let cfg = HermiteCfg::new().set_x(&x)?.set_dy(&dy)?;
    let mut table = HermiteTable::new();
    assert_eq!(table.set_inputs(cfg).unwrap_err(), InterpolationError::EmptyInput);
    Ok(())
}
