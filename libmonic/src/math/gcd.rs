//! A heuristic GCD over whole polynomials.

use crate::math::subtract;
use crate::poly::Polynomial;

/// The loop bound for the [gcd] heuristic. Operand pairs that make no progress within this many
/// iterations fall through to the final selection.
const GCD_MAX_ITER: u32 = 64;

/// Computes a best-effort greatest common divisor of two polynomials.
///
/// This is an iterative Euclidean-style loop over coefficient magnitudes, not an exact
/// multivariate GCD: it repeatedly subtracts the subtrahend from the minuend, advances or replaces
/// the subtrahend depending on how the max-coefficient magnitudes of minuend, subtrahend, and
/// difference compare, and stops when either operand's max-coefficient reaches 0 or either operand
/// has no variables left. The result is whichever of the two operands has no variables (the
/// presumed constant common factor), or else the subtrahend.
///
/// The heuristic does not converge for many operand pairs, so the loop is additionally bounded by
/// `GCD_MAX_ITER`. Treat the result as best-effort; do not assume general multivariate-GCD
/// correctness.
pub fn gcd(left: &Polynomial, right: &Polynomial) -> Polynomial {
    let mut minuend = left.clone();
    let mut subtrahend = right.clone();

    for _ in 0..GCD_MAX_ITER {
        let minuend_max = minuend.max_coefficient();
        let subtrahend_max = subtrahend.max_coefficient();
        let difference = subtract(&minuend, &subtrahend);
        let difference_max = difference.max_coefficient();

        if minuend_max.norm() > subtrahend_max.norm()
            && subtrahend_max.norm() > difference_max.norm()
        {
            minuend = subtrahend;
            subtrahend = difference;
        } else if difference_max.norm() > subtrahend_max.norm() {
            subtrahend = difference;
        }

        if !(minuend_max.norm() > 0.0
            && subtrahend_max.norm() > 0.0
            && minuend.has_variables()
            && subtrahend.has_variables())
        {
            break;
        }
    }

    if minuend.has_variables() {
        subtrahend
    } else {
        minuend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(s: &str) -> Polynomial {
        s.parse().unwrap()
    }

    // The heuristic is only pinned down on inputs where one operand is already constant; anything
    // richer is best-effort and deliberately untested.

    #[test]
    fn constant_left_operand_is_returned() {
        assert_eq!(gcd(&poly("6"), &poly("3*x")).to_string(), "6");
    }

    #[test]
    fn constant_right_operand_is_returned() {
        assert_eq!(gcd(&poly("x + 1"), &poly("1")).to_string(), "1");
    }

    #[test]
    fn identical_operands_terminate() {
        let p = poly("11*X + 4");
        // The difference p - p is empty, so no branch ever fires; the iteration cap breaks the
        // loop and the subtrahend is selected.
        assert_eq!(gcd(&p, &p), p);
    }
}
