//! Parser for linear combinations of Lyndon words.
//!
//! Words are runs of letters, `[x,y]` is a formal bracket, and terms may be
//! scaled by integers or fractions: `2*aab - 1/2*[a,b] + (ab + b)`.

use crate::error::{LieError, Result};
use crate::expr::{Expr, Rational, add, formal_bracket, neg, scale, sub};
use crate::lyndon::LyndonWord;
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{alpha1, char, digit1, multispace0};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::error::VerboseError;
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded, separated_pair, terminated};
use num_bigint::BigInt;
use num_traits::{Num, Zero};

#[derive(Clone, Debug)]
enum Syntax {
    Number(Rational),
    Word(String),
    Scaled(Rational, Box<Syntax>),
    Neg(Box<Syntax>),
    Add(Box<Syntax>, Box<Syntax>),
    Sub(Box<Syntax>, Box<Syntax>),
    Bracket(Box<Syntax>, Box<Syntax>),
}

impl Syntax {
    fn lower(self) -> Result<Expr> {
        Ok(match self {
            Syntax::Number(r) => Expr::Constant(r),
            Syntax::Word(w) => Expr::Word(LyndonWord::new(w)?),
            Syntax::Scaled(c, inner) => scale(c, inner.lower()?),
            Syntax::Neg(inner) => neg(inner.lower()?),
            Syntax::Add(a, b) => add(a.lower()?, b.lower()?),
            Syntax::Sub(a, b) => sub(a.lower()?, b.lower()?),
            Syntax::Bracket(a, b) => formal_bracket(a.lower()?, b.lower()?),
        })
    }

    fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, syntax)) => syntax.lower(),
        Err(e) => Err(LieError::Parse(format!("{e:?}"))),
    }
}

pub fn parse_word(input: &str) -> Result<LyndonWord> {
    match all_consuming(ws(alpha1::<&str, VerboseError<&str>>))(input) {
        Ok((_, w)) => LyndonWord::new(w),
        Err(e) => Err(LieError::Parse(format!("{e:?}"))),
    }
}

fn parse_add_sub(input: &str) -> IResult<&str, Syntax, VerboseError<&str>> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_unary),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Syntax::Add(acc.boxed(), rhs.boxed()),
            _ => Syntax::Sub(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_unary(input: &str) -> IResult<&str, Syntax, VerboseError<&str>> {
    if let Ok((rest, inner)) = preceded(ws(char('-')), parse_unary)(input) {
        Ok((rest, Syntax::Neg(inner.boxed())))
    } else {
        parse_scaled(input)
    }
}

fn parse_scaled(input: &str) -> IResult<&str, Syntax, VerboseError<&str>> {
    alt((
        map(
            pair(terminated(parse_coefficient, ws(char('*'))), parse_unary),
            |(c, term)| Syntax::Scaled(c, term.boxed()),
        ),
        parse_primary,
    ))(input)
}

fn parse_primary(input: &str) -> IResult<&str, Syntax, VerboseError<&str>> {
    alt((
        parse_parens,
        parse_bracket,
        map(parse_coefficient, Syntax::Number),
        map(ws(alpha1), |w: &str| Syntax::Word(w.to_string())),
    ))(input)
}

fn parse_parens(input: &str) -> IResult<&str, Syntax, VerboseError<&str>> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_bracket(input: &str) -> IResult<&str, Syntax, VerboseError<&str>> {
    map(
        delimited(
            ws(char('[')),
            separated_pair(parse_add_sub, ws(char(',')), parse_add_sub),
            ws(char(']')),
        ),
        |(a, b)| Syntax::Bracket(a.boxed(), b.boxed()),
    )(input)
}

fn parse_coefficient(input: &str) -> IResult<&str, Rational, VerboseError<&str>> {
    alt((
        map_res(separated_pair(parse_int, ws(char('/')), parse_int), |(n, d)| {
            if d.is_zero() {
                Err("zero denominator")
            } else {
                Ok(Rational::new(n, d))
            }
        }),
        map(parse_int, Rational::from_integer),
    ))(input)
}

fn parse_int(input: &str) -> IResult<&str, BigInt, VerboseError<&str>> {
    map_res(ws(recognize(pair(opt(char('-')), digit1))), |s: &str| {
        BigInt::from_str_radix(s, 10)
    })(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
