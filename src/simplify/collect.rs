use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use num_traits::{One, Zero};

use crate::error::{LieError, Result};
use crate::expr::{Expr, Rational, scale};
use crate::format::pretty;
use crate::lyndon::{LyndonWord, bracket};

pub fn collect(expr: &Expr) -> Result<BTreeMap<LyndonWord, Rational>> {
    let mut coeffs = BTreeMap::new();
    accumulate(expr, &Rational::one(), &mut coeffs)?;
    Ok(coeffs)
}

fn accumulate(
    expr: &Expr,
    factor: &Rational,
    coeffs: &mut BTreeMap<LyndonWord, Rational>,
) -> Result<()> {
    match expr {
        Expr::Constant(c) if c.is_zero() => Ok(()),
        Expr::Constant(_) => Err(LieError::NonLieTerm(pretty(expr))),
        Expr::Word(w) => {
            match coeffs.entry(w.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(factor.clone());
                }
                Entry::Occupied(mut slot) => {
                    *slot.get_mut() += factor;
                    if slot.get().is_zero() {
                        slot.remove();
                    }
                }
            }
            Ok(())
        }
        Expr::Scaled(c, inner) => accumulate(inner, &(factor * c), coeffs),
        Expr::Add(terms) => terms
            .iter()
            .try_for_each(|term| accumulate(term, factor, coeffs)),
        Expr::Bracket(a, b) => accumulate(&bracket(a, b)?, factor, coeffs),
    }
}

pub fn from_coefficients(coeffs: BTreeMap<LyndonWord, Rational>) -> Expr {
    coeffs
        .into_iter()
        .map(|(w, c)| scale(c, Expr::Word(w)))
        .sum()
}

/// Canonical form: words in increasing order, like terms combined, zero
/// coefficients dropped. Two elements are equal iff their normal forms are.
pub fn normalize(expr: &Expr) -> Result<Expr> {
    Ok(from_coefficients(collect(expr)?))
}

pub fn homogeneous_degree(expr: &Expr) -> Result<Option<usize>> {
    let coeffs = collect(expr)?;
    let mut degrees = coeffs.keys().map(LyndonWord::deg);
    let Some(first) = degrees.next() else {
        return Ok(None);
    };
    Ok(degrees.all(|d| d == first).then_some(first))
}
