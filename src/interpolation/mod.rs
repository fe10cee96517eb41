pub mod config;
pub mod errors;
pub mod hermite;
pub mod polynomial;
pub mod report;

pub use config::{parse_values, HermiteCfg, DEFAULT_X_TOL};
pub use errors::{ErrorKind, InterpolationError};
pub use hermite::HermiteTable;
pub use polynomial::{format_number, HermitePolynomial, NewtonTerm};
pub use report::{TableReport, TableRow};
