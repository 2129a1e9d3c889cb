//! Errors produced by libmonic.
//!
//! There are two error surfaces: [ParseError] for malformed polynomial text, and [OpError] for
//! operations that are undefined over otherwise well-formed operands. Every other operation in the
//! crate is total: it never fails for valid polynomials, including degenerate ones (empty term
//! lists, all-constant polynomials, divisions producing an empty result).

use core::fmt;

/// An error produced when parsing a polynomial or term from text.
///
/// Parse errors are surfaced immediately; no partial polynomial is ever produced.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ParseError {
    /// The input string was empty or contained only whitespace.
    EmptyInput,

    /// A '+'-separated chunk of the input contained no tokens, as in `"x + + y"`.
    EmptyTerm,

    /// A token was neither a leading numeric coefficient nor a `symbol[^exponent]` group.
    InvalidToken(String),

    /// An exponent marker was not followed by a positive integer.
    InvalidExponent(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseError::*;
        match self {
            EmptyInput => write!(f, "cannot parse a polynomial from an empty string"),
            EmptyTerm => write!(f, "polynomial contains an empty term"),
            InvalidToken(tok) => write!(f, r#""{}" is not a coefficient or a variable"#, tok),
            InvalidExponent(tok) => write!(f, r#""{}" does not have a positive integer exponent"#, tok),
        }
    }
}

impl std::error::Error for ParseError {}

/// An error produced by a polynomial operation.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum OpError {
    /// Raising a polynomial to a negative exponent is unsupported.
    NegativeExponent(i32),

    /// A variable had no bound value at evaluation time.
    UnboundVariable(char),
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use OpError::*;
        match self {
            NegativeExponent(exp) => {
                write!(f, "cannot raise a polynomial to the negative exponent {}", exp)
            }
            UnboundVariable(sym) => write!(f, r#"variable "{}" has no bound value"#, sym),
        }
    }
}

impl std::error::Error for OpError {}
