//! The monic app: a command-line front end over [libmonic].
//!
//! monic parses one or two polynomials from the command line, applies a single operation, and
//! prints the canonical result. All of the algebra lives in libmonic; this crate only routes
//! options to it.

#![deny(missing_docs)]

use libmonic::{add, derivative, divide, gcd, multiply, pow, subtract, Polynomial};
use num_complex::Complex64;
use std::collections::HashMap;

/// Options to run monic with.
pub struct Opts {
    /// The (left-hand) polynomial.
    pub program: String,
    /// A binary operation to apply: `add`, `subtract`, `multiply`, `divide`, or `gcd`.
    pub op: Option<String>,
    /// The right-hand polynomial for a binary operation.
    pub with: Option<String>,
    /// An exponent to raise the polynomial to.
    pub pow: Option<i32>,
    /// A variable symbol to differentiate with respect to.
    pub derivative: Option<char>,
    /// Variable bindings (`"x=3,y=4.5"`) to evaluate the polynomial at.
    pub evaluate: Option<String>,
}

/// Output of a monic execution.
#[derive(Default)]
pub struct MonicResult {
    /// Exit code.
    pub code: i32,
    /// Emit for stdout.
    pub stdout: String,
    /// Emit for stderr.
    pub stderr: String,
}

/// Runs monic end-to-end.
pub fn run_monic(opts: Opts) -> MonicResult {
    match run(opts) {
        Ok(stdout) => MonicResult {
            code: 0,
            stdout,
            stderr: String::new(),
        },
        Err(stderr) => MonicResult {
            code: 1,
            stdout: String::new(),
            stderr,
        },
    }
}

fn run(opts: Opts) -> Result<String, String> {
    let lhs = parse_poly(&opts.program)?;

    if let Some(op) = &opts.op {
        let with = opts
            .with
            .as_ref()
            .ok_or_else(|| format!("--op {} requires a --with polynomial", op))?;
        let rhs = parse_poly(with)?;
        let result = match op.as_str() {
            "add" => add(&lhs, &rhs),
            "subtract" => subtract(&lhs, &rhs),
            "multiply" => multiply(&lhs, &rhs),
            "divide" => divide(&lhs, &rhs),
            "gcd" => gcd(&lhs, &rhs),
            other => return Err(format!(r#""{}" is not an operation"#, other)),
        };
        return Ok(result.to_string());
    }

    if let Some(exponent) = opts.pow {
        return pow(&lhs, exponent)
            .map(|p| p.to_string())
            .map_err(|err| err.to_string());
    }

    if let Some(symbol) = opts.derivative {
        return Ok(derivative(&lhs, symbol).to_string());
    }

    if let Some(bindings) = &opts.evaluate {
        let bindings = parse_bindings(bindings)?;
        let value = lhs.evaluate(&bindings).map_err(|err| err.to_string())?;
        return Ok(format_complex(value));
    }

    // No operation: emit the canonical form of the parse.
    Ok(lhs.to_string())
}

fn parse_poly(text: &str) -> Result<Polynomial, String> {
    text.parse().map_err(|err| format!("{}: {}", err, text))
}

/// Parses a bindings list of the form `"x=3,y=4.5"`.
fn parse_bindings(text: &str) -> Result<HashMap<char, Complex64>, String> {
    let mut bindings = HashMap::new();
    for part in text.split(',') {
        let mut kv = part.splitn(2, '=');
        let symbol = kv.next().unwrap_or("").trim();
        let value = kv.next().map(str::trim);

        let mut symbol_chars = symbol.chars();
        let symbol = match (symbol_chars.next(), symbol_chars.next()) {
            (Some(c), None) if c.is_alphabetic() => c,
            _ => return Err(format!(r#""{}" is not a variable binding"#, part)),
        };
        let value = value
            .and_then(|v| v.parse::<f64>().ok())
            .ok_or_else(|| format!(r#""{}" is not a variable binding"#, part))?;

        bindings.insert(symbol, Complex64::new(value, 0.0));
    }
    Ok(bindings)
}

fn format_complex(c: Complex64) -> String {
    if c.im == 0.0 {
        c.re.to_string()
    } else if c.re == 0.0 {
        format!("{}i", c.im)
    } else if c.im < 0.0 {
        format!("{}-{}i", c.re, -c.im)
    } else {
        format!("{}+{}i", c.re, c.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(program: &str) -> Opts {
        Opts {
            program: program.into(),
            op: None,
            with: None,
            pow: None,
            derivative: None,
            evaluate: None,
        }
    }

    #[test]
    fn parse_only_emits_the_canonical_form() {
        let result = run_monic(opts("1 + x"));
        assert_eq!(result.code, 0);
        assert_eq!(result.stdout, "x + 1");
    }

    #[test]
    fn binary_operation() {
        let result = run_monic(Opts {
            op: Some("divide".into()),
            with: Some("6*X + 1".into()),
            ..opts("36*X*Y + 6*X + 6*Y + 1")
        });
        assert_eq!(result.code, 0);
        assert_eq!(result.stdout, "6*Y + 1");
    }

    #[test]
    fn pow_operation() {
        let result = run_monic(Opts {
            pow: Some(2),
            ..opts("2*X*Y^2 - 1")
        });
        assert_eq!(result.code, 0);
        assert_eq!(result.stdout, "4*X^2*Y^4 - 4*X*Y^2 + 1");
    }

    #[test]
    fn derivative_operation() {
        let result = run_monic(Opts {
            derivative: Some('X'),
            ..opts("4*X^2*Y^4 - 4*X*Y^2 + 1")
        });
        assert_eq!(result.code, 0);
        assert_eq!(result.stdout, "8*X*Y^4 - 4*Y^2");
    }

    #[test]
    fn evaluate_operation() {
        let result = run_monic(Opts {
            evaluate: Some("x=45468,y=63570".into()),
            ..opts("36*x*y - 6*x - 6*y + 1")
        });
        assert_eq!(result.code, 0);
        assert_eq!(result.stdout, "104053773133");
    }

    #[test]
    fn malformed_program_fails() {
        let result = run_monic(opts("6*"));
        assert_eq!(result.code, 1);
        assert!(result.stderr.contains("is not a coefficient or a variable"));
    }

    #[test]
    fn negative_pow_fails() {
        let result = run_monic(Opts {
            pow: Some(-1),
            ..opts("x")
        });
        assert_eq!(result.code, 1);
        assert_eq!(
            result.stderr,
            "cannot raise a polynomial to the negative exponent -1"
        );
    }

    #[test]
    fn malformed_bindings_fail() {
        let result = run_monic(Opts {
            evaluate: Some("x=".into()),
            ..opts("x")
        });
        assert_eq!(result.code, 1);
        assert_eq!(result.stderr, r#""x=" is not a variable binding"#);
    }
}
