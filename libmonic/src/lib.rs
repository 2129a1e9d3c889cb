//! libmonic is a symbolic algebra library for multivariate polynomials with complex
//! (double-precision) coefficients.
//!
//! Polynomials are parsed from a small textual grammar (`"36*X*Y + 6*X + 6*Y + 1"`) into a single
//! canonical form, operated on with pure arithmetic functions, and re-serialized bit-for-bit:
//!
//! ```ignore
//! let dividend: Polynomial = "36*X*Y + 6*X + 6*Y + 1".parse()?;
//! let divisor: Polynomial = "6*X + 1".parse()?;
//! assert_eq!(divide(&dividend, &divisor).to_string(), "6*Y + 1");
//! ```

pub mod errors;

mod indeterminate;
pub use indeterminate::Indeterminate;

mod term;
pub use term::Term;

mod poly;
pub use poly::Polynomial;

mod parser;

mod math;
pub use math::{add, derivative, divide, gcd, multiply, pow, subtract};
