//! Expression tree for linear combinations of Lyndon words.

use std::fmt;
use std::iter::Sum;
use std::ops;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::lyndon::LyndonWord;

pub type Rational = BigRational;

/// A (not necessarily simplified) element of the free Lie algebra.
///
/// `Bracket` is a formal, unevaluated bracket; [`crate::bracket`] expands it
/// into Lyndon words. `Constant` only carries meaning as the additive
/// identity, other constants are rejected wherever a Lie element is expected.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Expr {
    Constant(Rational),
    Word(LyndonWord),
    Scaled(Rational, Box<Expr>),
    Add(Vec<Expr>),
    Bracket(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Expr::Constant(Rational::from_integer(value.into()))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Constant(r) if r.is_zero())
    }

    pub fn as_scaled(&self) -> Option<(&Rational, &Expr)> {
        if let Expr::Scaled(c, term) = self {
            Some((c, term))
        } else {
            None
        }
    }

    pub fn as_sum(&self) -> Option<&[Expr]> {
        if let Expr::Add(terms) = self {
            Some(terms)
        } else {
            None
        }
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty(self))
    }
}

impl From<LyndonWord> for Expr {
    fn from(word: LyndonWord) -> Self {
        Expr::Word(word)
    }
}

pub fn zero() -> Expr {
    Expr::Constant(Rational::zero())
}

pub fn rational(num: i64, den: i64) -> Rational {
    Rational::new(num.into(), den.into())
}

pub fn word(w: LyndonWord) -> Expr {
    Expr::Word(w)
}

/// Scalar product `c * e`, folding nested factors and trivial scalars.
pub fn scale(c: Rational, e: Expr) -> Expr {
    if c.is_zero() || e.is_zero() {
        return zero();
    }
    if c.is_one() {
        return e;
    }
    match e {
        Expr::Constant(k) => Expr::Constant(c * k),
        Expr::Scaled(k, inner) => scale(c * k, *inner),
        other => Expr::Scaled(c, other.boxed()),
    }
}

pub fn add(a: Expr, b: Expr) -> Expr {
    [a, b].into_iter().sum()
}

pub fn neg(a: Expr) -> Expr {
    scale(-Rational::one(), a)
}

pub fn sub(a: Expr, b: Expr) -> Expr {
    add(a, neg(b))
}

pub fn formal_bracket(a: Expr, b: Expr) -> Expr {
    Expr::Bracket(a.boxed(), b.boxed())
}

impl Sum for Expr {
    fn sum<I: Iterator<Item = Expr>>(iter: I) -> Self {
        let mut terms = Vec::new();
        for item in iter {
            match item {
                Expr::Add(inner) => terms.extend(inner),
                e if e.is_zero() => {}
                e => terms.push(e),
            }
        }
        match terms.len() {
            0 => zero(),
            1 => terms.pop().unwrap_or_else(zero),
            _ => Expr::Add(terms),
        }
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        add(self, rhs)
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        sub(self, rhs)
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        neg(self)
    }
}

impl ops::Mul<Expr> for Rational {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        scale(self, rhs)
    }
}
