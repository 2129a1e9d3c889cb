//! Monomial terms: a complex coefficient times a product of [Indeterminate]s.

use crate::errors::{OpError, ParseError};
use crate::indeterminate::Indeterminate;
use crate::parser;

use core::cmp::Ordering;
use core::fmt;
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::collections::HashMap;
use std::str::FromStr;

/// A monomial: `coefficient * symbol_1^exponent_1 * ... * symbol_n^exponent_n`.
///
/// The variable list is kept sorted by symbol and free of duplicate symbols; a repeated symbol at
/// construction has its exponents merged (`x * x^2` becomes `x^3`). This makes the variable
/// signature of a term a plain list comparison and gives the printer its stable variable order.
#[derive(PartialEq, Clone, Debug)]
pub struct Term {
    /// The complex coefficient of the monomial.
    pub coefficient: Complex64,
    variables: Vec<Indeterminate>,
}

impl Term {
    /// Creates a new term, normalizing its variable list.
    ///
    /// Variables with exponent 0 are dropped, duplicate symbols are merged by adding their
    /// exponents, and the list is sorted by symbol. Merged exponents saturate at `u32::MAX`
    /// rather than overflow.
    pub fn new(coefficient: Complex64, variables: Vec<Indeterminate>) -> Self {
        let mut variables = variables;
        variables.retain(|v| v.exponent > 0);
        variables.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        let mut merged: Vec<Indeterminate> = Vec::with_capacity(variables.len());
        for var in variables {
            match merged.last_mut() {
                Some(last) if last.symbol == var.symbol => {
                    last.exponent = last.exponent.saturating_add(var.exponent)
                }
                _ => merged.push(var),
            }
        }

        Self {
            coefficient,
            variables: merged,
        }
    }

    /// Creates a constant term with no variables.
    pub fn constant(coefficient: Complex64) -> Self {
        Self::new(coefficient, vec![])
    }

    /// The canonical empty (zero) term: coefficient 0 and no variables.
    pub fn empty() -> Self {
        Self::constant(Complex64::zero())
    }

    /// Whether this is the canonical empty term.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficient.is_zero() && self.variables.is_empty()
    }

    /// The variables of the term, sorted by symbol.
    #[inline]
    pub fn variables(&self) -> &[Indeterminate] {
        &self.variables
    }

    /// The degree of the term: the sum of all variable exponents, saturating at `u32::MAX`. A
    /// constant term has degree 0.
    #[inline]
    pub fn degree(&self) -> u32 {
        self.variables
            .iter()
            .fold(0u32, |acc, v| acc.saturating_add(v.exponent))
    }

    /// The number of distinct variable symbols in the term.
    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Whether the term has any variables.
    #[inline]
    pub fn has_variables(&self) -> bool {
        !self.variables.is_empty()
    }

    /// Whether two terms have the same variable signature (the same symbols with the same
    /// exponents), ignoring their coefficients.
    ///
    /// This is the "like terms" test every arithmetic operation uses to decide which terms can be
    /// combined at the coefficient level.
    pub fn are_identical(a: &Term, b: &Term) -> bool {
        a.variables == b.variables
    }

    /// Whether `b`'s monomial divides `a`'s monomial: every variable of `b` appears in `a` with an
    /// exponent at least as large.
    ///
    /// Coefficients are not inspected; complex division is total over nonzero divisors.
    pub fn shares_common_factor(a: &Term, b: &Term) -> bool {
        b.variables.iter().all(|bv| {
            a.variables
                .iter()
                .any(|av| av.symbol == bv.symbol && av.exponent >= bv.exponent)
        })
    }

    /// Adds two terms with identical variable signatures.
    ///
    /// Callers must uphold `Term::are_identical(a, b)`; the result keeps the shared signature and
    /// sums the coefficients.
    pub fn add(a: &Term, b: &Term) -> Term {
        debug_assert!(Term::are_identical(a, b));
        Term {
            coefficient: a.coefficient + b.coefficient,
            variables: a.variables.clone(),
        }
    }

    /// Subtracts two terms with identical variable signatures.
    ///
    /// Callers must uphold `Term::are_identical(a, b)`.
    pub fn subtract(a: &Term, b: &Term) -> Term {
        debug_assert!(Term::are_identical(a, b));
        Term {
            coefficient: a.coefficient - b.coefficient,
            variables: a.variables.clone(),
        }
    }

    /// Multiplies two terms: the coefficients multiply and the variable signatures union, adding
    /// the exponents of shared symbols.
    ///
    /// # Examples:
    ///
    /// ```ignore
    /// // 2*x^2*y * 3*x^3 -> 6*x^5*y
    /// ```
    pub fn multiply(a: &Term, b: &Term) -> Term {
        let mut variables = a.variables.clone();
        variables.extend(b.variables.iter().cloned());
        Term::new(a.coefficient * b.coefficient, variables)
    }

    /// Negates a term's coefficient, leaving its variables unchanged.
    pub fn negate(a: &Term) -> Term {
        Term {
            coefficient: -a.coefficient,
            variables: a.variables.clone(),
        }
    }

    /// Divides term `a` by term `b`.
    ///
    /// Callers must uphold `Term::shares_common_factor(a, b)`. The result's coefficient is
    /// `a.coefficient / b.coefficient`; each of `b`'s exponents is subtracted from `a`'s matching
    /// symbol (dropping the symbol when the difference is 0), and symbols of `a` not in `b` are
    /// kept unchanged.
    pub fn divide(a: &Term, b: &Term) -> Term {
        debug_assert!(Term::shares_common_factor(a, b));
        let variables = a
            .variables
            .iter()
            .map(|av| {
                let quot_exponent = match b.variables.iter().find(|bv| bv.symbol == av.symbol) {
                    Some(bv) => av.exponent - bv.exponent,
                    None => av.exponent,
                };
                Indeterminate::new(av.symbol, quot_exponent)
            })
            .collect();
        Term::new(a.coefficient / b.coefficient, variables)
    }

    /// Evaluates the term with every variable bound to a complex value.
    ///
    /// Every variable of the term must appear in `bindings`; an unbound variable is an
    /// [OpError::UnboundVariable].
    pub fn evaluate(&self, bindings: &HashMap<char, Complex64>) -> Result<Complex64, OpError> {
        let mut result = self.coefficient;
        for var in &self.variables {
            let value = bindings
                .get(&var.symbol)
                .ok_or(OpError::UnboundVariable(var.symbol))?;
            result *= value.powu(var.exponent);
        }
        Ok(result)
    }

    /// The canonical monomial order: degree descending, then variable count ascending (fewer
    /// distinct symbols sort earlier among equal degrees), then coefficient magnitude descending
    /// as a final tie-break. Terms equal under all three keys keep their relative order (the sort
    /// is stable).
    pub(crate) fn canonical_cmp(a: &Term, b: &Term) -> Ordering {
        b.degree()
            .cmp(&a.degree())
            .then_with(|| a.variable_count().cmp(&b.variable_count()))
            .then_with(|| b.coefficient.norm().total_cmp(&a.coefficient.norm()))
    }

    /// Writes the term, stripping the sign of a negative real coefficient part when `keep_sign` is
    /// false. The signless form is used for non-leading terms in a polynomial, whose sign is
    /// absorbed into the `" + "`/`" - "` separator.
    pub(crate) fn write(&self, f: &mut fmt::Formatter<'_>, keep_sign: bool) -> fmt::Result {
        let coefficient = if !keep_sign && self.coefficient.re < 0.0 {
            -self.coefficient
        } else {
            self.coefficient
        };

        if self.variables.is_empty() {
            return write_coefficient(f, coefficient);
        }

        if coefficient == -Complex64::one() {
            write!(f, "-")?;
        } else if coefficient != Complex64::one() {
            write_coefficient(f, coefficient)?;
            write!(f, "*")?;
        }

        let mut vars = self.variables.iter();
        if let Some(first) = vars.next() {
            write!(f, "{}", first)?;
        }
        for var in vars {
            write!(f, "*{}", var)?;
        }
        Ok(())
    }
}

/// Writes a complex coefficient. Real coefficients (the only kind the grammar can produce) print
/// as their real part; coefficients with an imaginary part print as `bi` or `(a+bi)`.
fn write_coefficient(f: &mut fmt::Formatter<'_>, c: Complex64) -> fmt::Result {
    if c.im == 0.0 {
        write!(f, "{}", c.re)
    } else if c.re == 0.0 {
        write!(f, "{}i", c.im)
    } else if c.im < 0.0 {
        write!(f, "({}-{}i)", c.re, -c.im)
    } else {
        write!(f, "({}+{}i)", c.re, c.im)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, true)
    }
}

impl FromStr for Term {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_term(s)
    }
}
