/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    self,
    branch::alt,
    character::complete::{digit0, digit1},
    combinator::{opt, recognize, value, verify},
    error::ErrorKind,
    multi::many0,
    sequence::{pair, preceded, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};

use super::{Dimension, Locale, Unit, UnitError};

/// Which parts of a numeric literal are accepted.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct NumberStyles {
    pub allow_leading_sign: bool,
    pub allow_decimal_point: bool,
    pub allow_exponent: bool,
    /// Accept group separators between groups of three digits.
    pub allow_thousands: bool,
}

impl NumberStyles {
    pub const INTEGER: Self = NumberStyles {
        allow_leading_sign: true,
        allow_decimal_point: false,
        allow_exponent: false,
        allow_thousands: false,
    };
    pub const FLOAT: Self = NumberStyles {
        allow_leading_sign: true,
        allow_decimal_point: true,
        allow_exponent: true,
        allow_thousands: false,
    };
    pub const FLOAT_AND_THOUSANDS: Self = NumberStyles {
        allow_thousands: true,
        ..Self::FLOAT
    };
}

impl Default for NumberStyles {
    fn default() -> Self {
        Self::FLOAT_AND_THOUSANDS
    }
}

/// Parse "<number> <symbol>" into the number and the unit it is
/// expressed in. Whitespace around and between the parts is
/// optional.
pub fn parse_quantity<D: Dimension>(
    input: &str,
    styles: &NumberStyles,
    locale: &Locale,
) -> Result<(f64, Unit<D>), UnitError> {
    locale.validate()?;
    let input = input.trim();
    let rest = match numeric_literal(input, styles, locale) {
        Ok((rest, _)) => rest,
        Err(_) => {
            return Err(UnitError::NumericFormat(first_word(input).to_string()))
        }
    };

    let literal = &input[..input.len() - rest.len()];
    let tail = malformed_tail(rest, styles, locale);
    if tail > 0 {
        return Err(UnitError::NumericFormat(
            input[..literal.len() + tail].to_string(),
        ));
    }

    let value = parse_number(literal, locale)?;
    let unit = Unit::parse(rest)?;
    Ok((value, unit))
}

fn parse_number(literal: &str, locale: &Locale) -> Result<f64, UnitError> {
    let normalized: String = literal
        .chars()
        .filter(|c| *c != locale.group_separator)
        .map(|c| match c {
            c if c == locale.decimal_separator => ".".to_string(),
            '∞' => "inf".to_string(),
            c => c.to_string(),
        })
        .collect();
    normalized
        .parse::<f64>()
        .map_err(|_| UnitError::NumericFormat(literal.to_string()))
}

/* Characters that cannot start a unit symbol: when found right
 * after the literal, the literal itself is malformed. */
fn continues_number(c: char, locale: &Locale) -> bool {
    c.is_ascii_digit()
        || c == locale.decimal_separator
        || (c == locale.group_separator && !c.is_whitespace())
}

/* The length of a numeric continuation right after the literal:
 * digits or separators, a whitespace group separator followed by
 * digits, or an exponent when exponents are not allowed. Zero when
 * the rest can be a unit symbol. */
fn malformed_tail(rest: &str, styles: &NumberStyles, locale: &Locale) -> usize {
    let lead = match rest.chars().next() {
        Some(c) if continues_number(c, locale) => 0,
        Some(c) if c == locale.group_separator => c.len_utf8(),
        Some('e' | 'E') if !styles.allow_exponent => {
            match rest[1..].starts_with(&['+', '-'][..]) {
                true => 2,
                false => 1,
            }
        }
        _ => return 0,
    };
    if lead > 0 && !rest[lead..].starts_with(|c: char| c.is_ascii_digit()) {
        return 0;
    }
    lead + rest[lead..]
        .find(|c| !continues_number(c, locale))
        .unwrap_or(rest.len() - lead)
}

fn first_word(input: &str) -> &str {
    input.split_whitespace().next().unwrap_or(input)
}

/* Numeric literal grammar:
 *   [sign] (special | mantissa [exponent])
 *   mantissa := integer [dec digit*] | dec digit+
 *   integer  := digit+ (group digit{3})*     (with allow_thousands) */

fn numeric_literal<'a>(
    input: &'a str,
    styles: &NumberStyles,
    locale: &Locale,
) -> IResult<&'a str, &'a str> {
    recognize(|i: &'a str| -> IResult<&'a str, ()> {
        let (i, _) = match styles.allow_leading_sign {
            true => opt(sign)(i)?,
            false => (i, None),
        };
        alt((special, |i: &'a str| mantissa(i, styles, locale)))(i)
    })(input)
}

fn special(input: &str) -> IResult<&str, ()> {
    value((), alt((tag("NaN"), tag("Infinity"), tag("inf"), tag("∞"))))(
        input,
    )
}

fn mantissa<'a>(
    input: &'a str,
    styles: &NumberStyles,
    locale: &Locale,
) -> IResult<&'a str, ()> {
    let (input, int) = opt(|i: &'a str| integer(i, styles, locale))(input)?;
    let (input, frac) = match styles.allow_decimal_point {
        true => opt(preceded(char(locale.decimal_separator), digits0))(input)?,
        false => (input, None),
    };
    if int.is_none() && frac.map_or(true, str::is_empty) {
        return Err(nom::Err::Error(nom::error::Error {
            input,
            code: ErrorKind::Digit,
        }));
    }
    let (input, _) = match styles.allow_exponent {
        true => opt(exponent)(input)?,
        false => (input, None),
    };
    Ok((input, ()))
}

fn integer<'a>(
    input: &'a str,
    styles: &NumberStyles,
    locale: &Locale,
) -> IResult<&'a str, &'a str> {
    match styles.allow_thousands {
        true => recognize(pair(
            digits,
            many0(preceded(
                char(locale.group_separator),
                verify(digits, |d: &str| d.len() == 3),
            )),
        ))(input),
        false => digits(input),
    }
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((alt((char('e'), char('E'))), opt(sign), digits)))(input)
}

fn sign(input: &str) -> IResult<&str, char> {
    alt((char('-'), char('+')))(input)
}

/* Monomorphised versions of the nom primitives. */

fn digits(input: &str) -> IResult<&str, &str> {
    digit1(input)
}

fn digits0(input: &str) -> IResult<&str, &str> {
    digit0(input)
}

fn char<'r>(t: char) -> impl Fn(&'r str) -> IResult<&'r str, char> {
    nom::character::complete::char(t)
}

fn tag<'r>(t: &'static str) -> impl Fn(&'r str) -> IResult<&'r str, &'r str> {
    nom::bytes::complete::tag(t)
}
