//! Parsing of the canonical polynomial notation.
//!
//! The grammar, after whitespace is stripped:
//!
//! ```text
//! polynomial   := term ('+' term)*         // '-' is normalized to '+-' first
//! term         := [sign] [coefficient] ('*' symbol ['^' exponent])*
//! coefficient  := decimal number (optional; default magnitude 1)
//! symbol       := single alphabetic character
//! exponent     := positive integer (omitted => 1)
//! ```

use crate::errors::ParseError;
use crate::indeterminate::Indeterminate;
use crate::poly::Polynomial;
use crate::term::Term;

use num_complex::Complex64;

/// Parses a polynomial from text.
///
/// Whitespace is insignificant. Subtractions are normalized into additions of negated terms
/// (`"x - 1"` becomes the chunks `"x"` and `"-1"`), and each '+'-separated chunk is parsed as one
/// [Term].
pub(crate) fn parse_polynomial(input: &str) -> Result<Polynomial, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = stripped.replace('-', "+-");
    // A leading '-' leaves a "+-" artifact at the front; trim the '+'.
    let normalized = match normalized.strip_prefix("+-") {
        Some(rest) => format!("-{}", rest),
        None => normalized,
    };

    let terms = normalized
        .split('+')
        .map(parse_term)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Polynomial::new(terms))
}

/// Parses one monomial chunk, e.g. `"6*X"`, `"X^2"`, `"-1"`, or `"w^2*x*y"`.
///
/// The coefficient defaults to 1, or -1 when the chunk starts with a lone '-' sign. A symbol with
/// no explicit exponent has exponent 1.
pub(crate) fn parse_term(chunk: &str) -> Result<Term, ParseError> {
    let (sign, body) = match chunk.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, chunk),
    };
    if body.is_empty() {
        return Err(ParseError::EmptyTerm);
    }

    let mut coefficient = Complex64::new(sign, 0.0);
    let mut variables = Vec::new();
    for (i, token) in body.split('*').enumerate() {
        if token.is_empty() {
            return Err(ParseError::InvalidToken(token.to_string()));
        }
        if i == 0 {
            if let Ok(re) = token.parse::<f64>() {
                coefficient = Complex64::new(sign * re, 0.0);
                continue;
            }
        }
        variables.push(parse_indeterminate(token)?);
    }

    Ok(Term::new(coefficient, variables))
}

/// Parses one `symbol[^exponent]` group.
fn parse_indeterminate(token: &str) -> Result<Indeterminate, ParseError> {
    let mut parts = token.splitn(2, '^');
    let symbol_str = parts.next().unwrap_or("");
    let exponent_str = parts.next();

    let mut symbol_chars = symbol_str.chars();
    let symbol = match (symbol_chars.next(), symbol_chars.next()) {
        (Some(c), None) if c.is_alphabetic() => c,
        _ => return Err(ParseError::InvalidToken(token.to_string())),
    };

    let exponent = match exponent_str {
        None => 1,
        Some(exp) => exp
            .parse::<u32>()
            .ok()
            .filter(|&e| e >= 1)
            .ok_or_else(|| ParseError::InvalidExponent(token.to_string()))?,
    };

    Ok(Indeterminate::new(symbol, exponent))
}
