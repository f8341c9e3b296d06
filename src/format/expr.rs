use crate::expr::{Expr, Rational, scale};
use num_traits::{One, Signed};

pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Constant(r) => show_rational(r),
            Expr::Word(w) => w.bracket_form(),
            Expr::Bracket(a, b) => format!("[{},{}]", pp(0, a), pp(0, b)),

            Expr::Scaled(c, term) => {
                let body = if *c == -Rational::one() {
                    format!("-{}", pp(3, term))
                } else {
                    format!("{}*{}", show_rational(c), pp(3, term))
                };
                bracket(ctx, 2, body)
            }

            Expr::Add(terms) => {
                let mut body = String::new();
                for (i, term) in terms.iter().enumerate() {
                    let (is_neg, inner) = split_neg(term);
                    match (i, is_neg) {
                        (0, true) => body.push('-'),
                        (0, false) => {}
                        (_, true) => body.push_str(" - "),
                        (_, false) => body.push_str(" + "),
                    }
                    body.push_str(&pp(if is_neg { 3 } else { 2 }, &inner));
                }
                bracket(ctx, 1, body)
            }
        }
    }

    pp(0, expr)
}

fn split_neg(expr: &Expr) -> (bool, Expr) {
    match expr {
        Expr::Scaled(c, term) if c.is_negative() => (true, scale(-c.clone(), *term.clone())),
        Expr::Constant(r) if r.is_negative() => (true, Expr::Constant(-r.clone())),
        other => (false, other.clone()),
    }
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}

fn show_rational(r: &Rational) -> String {
    if r.is_integer() {
        format!("{}", r.numer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}
