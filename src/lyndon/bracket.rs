use tracing::trace;

use super::LyndonWord;
use crate::error::{LieError, Result};
use crate::expr::{Expr, add, neg, scale, zero};
use crate::format::pretty;

/// `[w, z]` for two Lyndon words, expanded in the Lyndon basis.
pub fn adjoint(w: &LyndonWord, z: &LyndonWord) -> Result<Expr> {
    if w == z {
        return Ok(zero());
    }
    if z < w {
        return Ok(neg(adjoint(z, w)?));
    }
    let Some((x, y)) = w.standard_factorization() else {
        return Ok(Expr::Word(w.concat(z)?));
    };
    if &y >= z {
        return Ok(Expr::Word(w.concat(z)?));
    }
    trace!(w = w.word(), z = z.word(), x = x.word(), y = y.word(), "expanding bracket");
    // [[x,y],z] = [x,[y,z]] + [[x,z],y]
    let left = bracket(&Expr::Word(x.clone()), &adjoint(&y, z)?)?;
    let right = bracket(&adjoint(&x, z)?, &Expr::Word(y))?;
    Ok(add(left, right))
}

/// The Lie bracket extended bilinearly over sums and scalar multiples.
pub fn bracket(v1: &Expr, v2: &Expr) -> Result<Expr> {
    if let Some((c, term)) = v1.as_scaled() {
        return Ok(scale(c.clone(), bracket(term, v2)?));
    }
    if let Some((c, term)) = v2.as_scaled() {
        return Ok(scale(c.clone(), bracket(v1, term)?));
    }
    if let Some(terms) = v1.as_sum() {
        return terms.iter().map(|t| bracket(t, v2)).sum();
    }
    if let Some(terms) = v2.as_sum() {
        return terms.iter().map(|t| bracket(v1, t)).sum();
    }
    if let Expr::Bracket(a, b) = v1 {
        return bracket(&bracket(a, b)?, v2);
    }
    if let Expr::Bracket(a, b) = v2 {
        return bracket(v1, &bracket(a, b)?);
    }
    if v1.is_zero() || v2.is_zero() {
        return Ok(zero());
    }
    match (v1, v2) {
        (Expr::Word(w), Expr::Word(z)) => adjoint(w, z),
        (Expr::Word(_), other) | (other, _) => {
            Err(LieError::UnsupportedBracketOperand(pretty(other)))
        }
    }
}
