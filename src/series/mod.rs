//! Lie series: formal power series graded by degree whose coefficients are
//! homogeneous free Lie algebra elements.

mod random;

use std::cell::RefCell;
use std::fmt;
use std::ops;
use std::rc::Rc;

use tracing::debug;

use crate::error::{LieError, Result};
use crate::expr::{Expr, Rational, add, neg, scale, zero};
use crate::format::pretty;
use crate::lyndon::bracket;
use crate::simplify::normalize;

pub use random::RandomSeriesConfig;

const DEFAULT_SHOW_DEGREE: usize = 3;

type Rule = dyn Fn(usize) -> Result<Expr>;

struct SeriesState {
    rule: Box<Rule>,
    // Slot `i` holds the degree `i + 1` term.
    computed: RefCell<Vec<Expr>>,
}

/// A series defined by a rule `degree -> term`, evaluated on demand.
///
/// Materialized terms are normalized and cached for the lifetime of the
/// series; clones share the cache. Derived series (sums, multiples,
/// brackets) start with an empty cache of their own.
#[derive(Clone)]
pub struct LieSeries {
    state: Rc<SeriesState>,
    show_degree: usize,
}

impl LieSeries {
    pub fn new(rule: impl Fn(usize) -> Result<Expr> + 'static) -> Self {
        Self {
            state: Rc::new(SeriesState {
                rule: Box::new(rule),
                computed: RefCell::new(Vec::new()),
            }),
            show_degree: DEFAULT_SHOW_DEGREE,
        }
    }

    pub fn from_terms(terms: Vec<Expr>) -> Self {
        Self::new(move |d| Ok(terms.get(d - 1).cloned().unwrap_or_else(zero)))
    }

    pub fn linear(term: Expr) -> Self {
        Self::new(move |d| Ok(if d == 1 { term.clone() } else { zero() }))
    }

    pub fn with_show_degree(mut self, show_degree: usize) -> Self {
        self.show_degree = show_degree;
        self
    }

    pub fn show_degree(&self) -> usize {
        self.show_degree
    }

    pub fn computed_degrees(&self) -> usize {
        self.state.computed.borrow().len()
    }

    fn rule(&self, d: usize) -> Result<Expr> {
        (self.state.rule)(d)
    }

    pub fn ser(&self, d: usize) -> Result<Expr> {
        if d == 0 {
            return Err(LieError::InvalidDegree(d));
        }
        loop {
            let next = self.computed_degrees() + 1;
            if next > d {
                break;
            }
            // The borrow is released while the rule runs; rules may read other series.
            let term = normalize(&self.rule(next)?)?;
            debug!(degree = next, "materialized Lie series term");
            self.state.computed.borrow_mut().push(term);
        }
        Ok(self.state.computed.borrow()[d - 1].clone())
    }

    pub fn terms(&self, d: usize) -> Result<Vec<Expr>> {
        (1..=d).map(|k| self.ser(k)).collect()
    }

    pub fn add(&self, other: &LieSeries) -> LieSeries {
        let (a, b) = (self.clone(), other.clone());
        LieSeries::new(move |d| Ok(add(a.rule(d)?, b.rule(d)?)))
    }

    pub fn mul(&self, c: Rational) -> LieSeries {
        let a = self.clone();
        LieSeries::new(move |d| Ok(scale(c.clone(), a.rule(d)?)))
    }

    pub fn neg(&self) -> LieSeries {
        let a = self.clone();
        LieSeries::new(move |d| Ok(neg(a.rule(d)?)))
    }

    pub fn sub(&self, other: &LieSeries) -> LieSeries {
        self.add(&other.neg())
    }

    /// Degree-graded bracket: the degree-`d` term is
    /// `sum_{k=1}^{d-1} [self_k, other_{d-k}]`.
    pub fn bracket(&self, other: &LieSeries) -> LieSeries {
        let (a, b) = (self.clone(), other.clone());
        LieSeries::new(move |d| {
            (1..d)
                .map(|k| bracket(&a.ser(k)?, &b.ser(d - k)?))
                .sum::<Result<Expr>>()
        })
    }

    pub fn preview(&self) -> Result<String> {
        let rendered: Vec<String> = self
            .terms(self.show_degree)?
            .iter()
            .map(pretty)
            .collect();
        Ok(format!("[{}]", rendered.join(", ")))
    }
}

impl fmt::Display for LieSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = self.preview().map_err(|_| fmt::Error)?;
        f.write_str(&preview)
    }
}

impl fmt::Debug for LieSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LieSeries")
            .field("computed", &self.state.computed.borrow())
            .field("show_degree", &self.show_degree)
            .finish()
    }
}

impl ops::Add for &LieSeries {
    type Output = LieSeries;

    fn add(self, rhs: &LieSeries) -> LieSeries {
        LieSeries::add(self, rhs)
    }
}

impl ops::Sub for &LieSeries {
    type Output = LieSeries;

    fn sub(self, rhs: &LieSeries) -> LieSeries {
        LieSeries::sub(self, rhs)
    }
}

impl ops::Neg for &LieSeries {
    type Output = LieSeries;

    fn neg(self) -> LieSeries {
        LieSeries::neg(self)
    }
}

impl ops::Mul<Rational> for &LieSeries {
    type Output = LieSeries;

    fn mul(self, c: Rational) -> LieSeries {
        LieSeries::mul(self, c)
    }
}

impl ops::Mul<&LieSeries> for Rational {
    type Output = LieSeries;

    fn mul(self, series: &LieSeries) -> LieSeries {
        series.mul(self)
    }
}
