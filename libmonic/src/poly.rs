//! Polynomials: ordered sums of monomial [Term]s.

use crate::errors::{OpError, ParseError};
use crate::parser;
use crate::term::Term;

use core::fmt;
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::collections::HashMap;
use std::str::FromStr;

/// A multivariate polynomial over complex coefficients.
///
/// The term sequence is always kept in canonical monomial order (see [Term::canonical_cmp]), so
/// two polynomials with the same mathematical content serialize identically regardless of the
/// operation sequence that built them. That single canonical form is what makes the structural
/// [PartialEq] and the parse/print round-trip (`poly.to_string().parse() == poly`) hold.
#[derive(Default, PartialEq, Clone, Debug)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates a polynomial from a term collection, canonicalizing the term order.
    pub fn new(terms: Vec<Term>) -> Self {
        let mut poly = Self { terms };
        poly.order_monomials();
        poly
    }

    /// Creates a polynomial with no terms.
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// The multiplicative identity: the constant polynomial 1.
    pub fn one() -> Self {
        Self::new(vec![Term::constant(Complex64::one())])
    }

    /// Whether the polynomial has no terms at all.
    ///
    /// Note that the zero polynomial parsed from `"0"` is *not* empty: it holds one
    /// zero-coefficient constant term so that `"0"` round-trips through the printer. Empty
    /// polynomials only arise from arithmetic, e.g. a difference whose terms all cancel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms of the polynomial, in canonical monomial order.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The degree of the polynomial: the maximum term degree, or 0 for an empty or all-constant
    /// polynomial.
    pub fn degree(&self) -> u32 {
        self.terms.iter().map(Term::degree).max().unwrap_or(0)
    }

    /// Whether any term of the polynomial has variables.
    pub fn has_variables(&self) -> bool {
        self.terms.iter().any(Term::has_variables)
    }

    /// The largest-magnitude coefficient among terms that have variables, or the sentinel -1 if
    /// no term does.
    pub fn max_coefficient(&self) -> Complex64 {
        self.terms
            .iter()
            .filter(|t| t.has_variables())
            .map(|t| t.coefficient)
            .max_by(|a, b| a.norm().total_cmp(&b.norm()))
            .unwrap_or_else(|| Complex64::new(-1.0, 0.0))
    }

    /// Evaluates the polynomial with every variable bound to a complex value, summing every
    /// term's evaluation.
    pub fn evaluate(&self, bindings: &HashMap<char, Complex64>) -> Result<Complex64, OpError> {
        let mut result = Complex64::zero();
        for term in &self.terms {
            result += term.evaluate(bindings)?;
        }
        Ok(result)
    }

    /// Sorts the terms into canonical monomial order. Idempotent, and called by every
    /// construction path.
    fn order_monomials(&mut self) {
        self.terms.sort_by(Term::canonical_cmp);
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::new(vec![term])
    }
}

impl fmt::Display for Polynomial {
    /// Prints the polynomial in canonical notation.
    ///
    /// The leading term keeps the sign of its own coefficient; every subsequent term is joined
    /// with `" + "` or `" - "` depending on the sign of its coefficient's real part, and the term
    /// itself prints signless. An empty polynomial prints as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i == 0 {
                term.write(f, true)?;
            } else if term.coefficient.re < 0.0 {
                write!(f, " - ")?;
                term.write(f, false)?;
            } else if term.coefficient.re > 0.0 {
                write!(f, " + ")?;
                term.write(f, false)?;
            } else {
                // A zero or pure-imaginary real part carries no sign to absorb.
                term.write(f, true)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_polynomial(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(s: &str) -> Polynomial {
        s.parse().unwrap()
    }

    #[test]
    fn canonical_ordering_is_idempotent() {
        let canonical = "4*X^5 + 6*X*Y^4 + 3*X^2*Y^3 + X^3*Y^2 + 3*Y^3 - 6*X^2*Y + 3*X*Y*Z - 5*X^2 + 24*X*Y - 4";
        let reordered = Polynomial::new(poly(canonical).terms().to_vec());
        assert_eq!(reordered.to_string(), canonical);
    }

    #[test]
    fn degree_is_the_max_term_degree() {
        assert_eq!(poly("x").degree(), 1);
        assert_eq!(poly("w^2*x*y + w*x + w*y + 1").degree(), 4);
        assert_eq!(poly("7").degree(), 0);
        assert_eq!(Polynomial::empty().degree(), 0);
    }

    #[test]
    fn structural_equality_is_over_canonical_terms() {
        assert_eq!(poly("x + 1"), poly("1 + x"));
        assert_ne!(poly("x + 1"), poly("x - 1"));
        assert_eq!(Polynomial::empty(), Polynomial::empty());
        assert_ne!(poly("0"), Polynomial::empty());
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let original = poly("6*x*y + 1");
        let copy = original.clone();
        assert_eq!(original, copy);
        assert_eq!(original.to_string(), copy.to_string());
    }

    #[test]
    fn zero_polynomial_retains_its_term() {
        let zero = poly("0");
        assert!(!zero.is_empty());
        assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn empty_polynomial_prints_as_empty_string() {
        assert_eq!(Polynomial::empty().to_string(), "");
    }

    #[test]
    fn max_coefficient_ignores_constant_terms() {
        let p = poly("3*x^2 - 7*x + 100");
        assert_eq!(p.max_coefficient(), Complex64::new(-7.0, 0.0));
    }

    #[test]
    fn max_coefficient_sentinel_without_variables() {
        assert_eq!(poly("100").max_coefficient(), Complex64::new(-1.0, 0.0));
        assert_eq!(
            Polynomial::empty().max_coefficient(),
            Complex64::new(-1.0, 0.0)
        );
    }

    #[test]
    fn evaluate_sums_term_evaluations() {
        let p = poly("36*x*y - 6*x - 6*y + 1");
        let mut bindings = HashMap::new();
        bindings.insert('x', Complex64::new(45_468.0, 0.0));
        bindings.insert('y', Complex64::new(63_570.0, 0.0));

        assert_eq!(
            p.evaluate(&bindings),
            Ok(Complex64::new(104_053_773_133.0, 0.0))
        );
    }

    #[test]
    fn evaluate_unbound_variable_errors() {
        let p = poly("x + y");
        let mut bindings = HashMap::new();
        bindings.insert('x', Complex64::new(1.0, 0.0));

        assert_eq!(p.evaluate(&bindings), Err(OpError::UnboundVariable('y')));
    }
}
