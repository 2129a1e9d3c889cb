//! Partial differentiation of polynomials.

use crate::indeterminate::Indeterminate;
use crate::poly::Polynomial;
use crate::term::Term;

/// Computes the partial derivative of a polynomial with respect to `symbol`.
///
/// Each term containing `symbol` with exponent `e` contributes a term with its coefficient scaled
/// by `e` and the exponent lowered to `e - 1` (the indeterminate is dropped entirely when that
/// reaches 0); all other variables are carried over unchanged. Terms not containing `symbol`
/// contribute nothing, not even a zero term.
///
/// # Examples:
///
/// ```ignore
/// // d/dX (4*X^2*Y^4 - 4*X*Y^2 + 1) -> 8*X*Y^4 - 4*Y^2
/// ```
pub fn derivative(poly: &Polynomial, symbol: char) -> Polynomial {
    let mut terms = Vec::new();

    for term in poly.terms() {
        let var = match term.variables().iter().find(|v| v.symbol == symbol) {
            Some(var) => var,
            None => continue,
        };

        let coefficient = term.coefficient * var.exponent as f64;
        let variables = term
            .variables()
            .iter()
            .filter_map(|v| {
                if v.symbol == symbol {
                    if v.exponent > 1 {
                        Some(Indeterminate::new(symbol, v.exponent - 1))
                    } else {
                        None
                    }
                } else {
                    Some(v.clone())
                }
            })
            .collect();

        terms.push(Term::new(coefficient, variables));
    }

    Polynomial::new(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::add;

    fn poly(s: &str) -> Polynomial {
        s.parse().unwrap()
    }

    macro_rules! derivative_tests {
        ($($name:ident: $input:expr, $symbol:expr => $expected:expr)*) => {
        $(
            #[test]
            fn $name() {
                let result = derivative(&poly($input), $symbol);
                assert_eq!(result.to_string(), $expected);
            }
        )*
        }
    }

    derivative_tests! {
        bilinear: "132*X*Y + 77*X + 55*Y + 1", 'X' => "132*Y + 77"
        power_rule: "4*X^2*Y^4 - 4*X*Y^2 + 1", 'X' => "8*X*Y^4 - 4*Y^2"
        constant_vanishes: "7", 'x' => ""
        absent_symbol_vanishes: "6*y^2 + 1", 'x' => ""
        case_sensitive_symbol: "6*X + 6*x", 'x' => "6"
    }

    #[test]
    fn derivative_is_linear_over_addition() {
        let a = poly("4*X^2*Y^4 - 4*X*Y^2 + 1");
        let b = poly("3*X^2 + 2*X*Z - 5");

        assert_eq!(
            derivative(&add(&a, &b), 'X'),
            add(&derivative(&a, 'X'), &derivative(&b, 'X'))
        );
    }
}
