//! A single variable raised to an integer power, the leaf of the polynomial grammar.

use core::fmt;

/// One `symbol^exponent` pair inside a [Term][crate::Term].
///
/// The symbol is a single case-sensitive character. In canonical form the exponent is at least 1;
/// a variable raised to the 0th power is never materialized, it is simply omitted from its term.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Indeterminate {
    /// The variable symbol.
    pub symbol: char,
    /// The power the symbol is raised to.
    pub exponent: u32,
}

impl Indeterminate {
    /// Creates a new indeterminate.
    pub fn new(symbol: char, exponent: u32) -> Self {
        Self { symbol, exponent }
    }
}

impl fmt::Display for Indeterminate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent >= 2 {
            write!(f, "{}^{}", self.symbol, self.exponent)
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! format_tests {
        ($($name:ident: $symbol:expr, $exponent:expr, $format_str:expr)*) => {
        $(
            #[test]
            fn $name() {
                let indt = Indeterminate::new($symbol, $exponent);
                assert_eq!(indt.to_string(), $format_str);
            }
        )*
        }
    }

    format_tests! {
        linear: 'x', 1, "x"
        squared: 'x', 2, "x^2"
        high_power: 'w', 144, "w^144"
        case_sensitive: 'X', 3, "X^3"
    }

    #[test]
    fn equality_is_by_symbol_and_exponent() {
        assert_eq!(Indeterminate::new('x', 2), Indeterminate::new('x', 2));
        assert_ne!(Indeterminate::new('x', 2), Indeterminate::new('x', 3));
        assert_ne!(Indeterminate::new('x', 2), Indeterminate::new('X', 2));
    }
}
