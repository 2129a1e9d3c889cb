//! The arithmetic engine over [Polynomial]s.
//!
//! Every operation here is pure: operands are never mutated, and each result is a freshly
//! constructed polynomial in canonical form. Term combination always goes through the
//! [Term::are_identical] signature test, so like terms are merged (or cancelled) the same way in
//! every operation.

mod derivative;
pub use derivative::*;

mod gcd;
pub use gcd::*;

use crate::errors::OpError;
use crate::poly::Polynomial;
use crate::term::Term;

use num_traits::Zero;

/// Adds two polynomials.
///
/// # Examples:
///
/// ```ignore
/// // (X^2 + 2*X - 1) + (2*X^2 - 3*X + 6) -> 3*X^2 - X + 5
/// ```
pub fn add(left: &Polynomial, right: &Polynomial) -> Polynomial {
    merge_one_to_one(left, right, MergeOp::Add)
}

/// Subtracts the right polynomial from the left.
///
/// # Examples:
///
/// ```ignore
/// // (3*X) - (X + 2) -> 2*X - 2
/// ```
pub fn subtract(left: &Polynomial, right: &Polynomial) -> Polynomial {
    merge_one_to_one(left, right, MergeOp::Subtract)
}

enum MergeOp {
    Add,
    Subtract,
}

/// The one-to-one merge behind [add] and [subtract].
///
/// Each right-hand term is matched against at most one like term of the left operand. A match is
/// combined at the coefficient level, dropping exact-zero results and suppressing duplicates; an
/// unmatched right-hand term is inserted as-is (addition) or negated (subtraction). Left-hand
/// terms that never match pass through unchanged.
///
/// Zero-coefficient operand terms (the parsed polynomial `"0"` carries one) are skipped up front:
/// arithmetic results never retain a zero term, only parsing does.
fn merge_one_to_one(left: &Polynomial, right: &Polynomial, op: MergeOp) -> Polynomial {
    let mut terms: Vec<Term> = left
        .terms()
        .iter()
        .filter(|t| !t.coefficient.is_zero())
        .cloned()
        .collect();

    for right_term in right.terms() {
        if right_term.coefficient.is_zero() {
            continue;
        }
        match terms.iter().position(|t| Term::are_identical(t, right_term)) {
            Some(i) => {
                let matched = terms.remove(i);
                let combined = match op {
                    MergeOp::Add => Term::add(&matched, right_term),
                    MergeOp::Subtract => Term::subtract(&matched, right_term),
                };
                if !combined.coefficient.is_zero() && !terms.contains(&combined) {
                    terms.push(combined);
                }
            }
            None => terms.push(match op {
                MergeOp::Add => right_term.clone(),
                MergeOp::Subtract => Term::negate(right_term),
            }),
        }
    }

    Polynomial::new(terms)
}

/// Multiplies two polynomials by full distribution: every left term times every right term, with
/// like terms merged as each product is formed. Products whose coefficients cancel to exactly
/// zero are dropped, as in [add] and [subtract].
///
/// The merge re-scans the accumulated result list per product, which is quadratic in the result's
/// term count (cubic overall in the worst case). Expected term counts are small; an index keyed by
/// variable signature would make this near-linear if that ever stops holding.
pub fn multiply(left: &Polynomial, right: &Polynomial) -> Polynomial {
    let mut product_terms: Vec<Term> = Vec::new();

    for left_term in left.terms() {
        for right_term in right.terms() {
            let mut product = Term::multiply(left_term, right_term);

            // Fold any like terms already accumulated into the new product.
            let mut i = 0;
            while i < product_terms.len() {
                if Term::are_identical(&product_terms[i], &product) {
                    let like = product_terms.remove(i);
                    product = Term::add(&product, &like);
                } else {
                    i += 1;
                }
            }

            if !product.coefficient.is_zero() {
                product_terms.push(product);
            }
        }
    }

    Polynomial::new(product_terms)
}

/// Raises a polynomial to a non-negative integer exponent by repeated multiplication.
///
/// Exponent 0 yields the multiplicative identity (the constant polynomial 1) and exponent 1
/// yields a clone. Negative exponents are an [OpError::NegativeExponent].
pub fn pow(poly: &Polynomial, exponent: i32) -> Result<Polynomial, OpError> {
    if exponent < 0 {
        return Err(OpError::NegativeExponent(exponent));
    }
    if exponent == 0 {
        return Ok(Polynomial::one());
    }

    let mut result = poly.clone();
    for _ in 1..exponent {
        result = multiply(&result, poly);
    }
    Ok(result)
}

/// Divides the dividend by the divisor, term-wise.
///
/// For each divisor term, every dividend term whose monomial it divides (per
/// [Term::shares_common_factor]) is divided by it; empty results are discarded and duplicates
/// suppressed. This is *pseudo-division*, not polynomial long division: dividend terms sharing no
/// factor with any divisor term are silently dropped, so the quotient is only exact when the
/// divisor evenly term-divides the dividend. There is no remainder.
///
/// # Examples:
///
/// ```ignore
/// // (36*X*Y + 6*X + 6*Y + 1) / (6*X + 1) -> 6*Y + 1
/// ```
pub fn divide(dividend: &Polynomial, divisor: &Polynomial) -> Polynomial {
    let mut dividend_terms: Vec<Term> = dividend.terms().to_vec();
    let mut quotient_terms: Vec<Term> = Vec::new();

    for divisor_term in divisor.terms() {
        let mut i = 0;
        while i < dividend_terms.len() {
            if Term::shares_common_factor(&dividend_terms[i], divisor_term) {
                let matched = dividend_terms.remove(i);
                let quotient = Term::divide(&matched, divisor_term);
                if !quotient.is_empty() && !quotient_terms.contains(&quotient) {
                    quotient_terms.push(quotient);
                }
            } else {
                i += 1;
            }
        }
    }

    Polynomial::new(quotient_terms)
}
