/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Quantity formatting.
//!
//! A format string is `<value-format>[ <unit symbol>]`, a bare unit
//! symbol, or empty:
//!
//! - `""`, `G`, `R`: shortest representation that parses back to the
//!   same value,
//! - `F<n>`: fixed with n decimals (default 2),
//! - `N<n>`: fixed with n decimals and group separators (default 2),
//! - `E<n>`: scientific with n decimals (default 6),
//! - `U`: the unit's preferred precision, if it has one.
//!
//! A value format must be followed by whitespace or the end of the
//! string; anything else is read as a unit symbol (so `N⋅m` is a
//! symbol, and `N` alone is the number format). When the unit
//! symbol does not belong to the quantity's dimension, the format
//! string itself is returned.
//!
//! Parsed format strings and rendered symbols are cached for the
//! lifetime of the process.

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use nom::{
    branch::alt,
    character::complete::{digit0, multispace1},
    combinator::{eof, map_res, opt, peek},
    sequence::{pair, terminated},
    IResult,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::{Dimension, Locale, Quantity, Unit, UnitError};

/// Upper bound on the number of decimals in a value format.
const MAX_DECIMALS: usize = 64;

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ValueFormat {
    RoundTrip,
    Fixed(usize),
    Number(usize),
    Exponential(usize),
    Preferred,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum SymbolStyle {
    /// "m²", "N⋅s", "µm"
    Unicode,
    /// "m^2", "N*s", "um"
    Ascii,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Padding {
    Space,
    None,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum SymbolPlacement {
    After,
    Before,
    Hidden,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct SymbolFormat {
    pub style: SymbolStyle,
    pub padding: Padding,
    pub placement: SymbolPlacement,
}

impl SymbolFormat {
    pub const ASCII: Self = SymbolFormat {
        style: SymbolStyle::Ascii,
        padding: Padding::Space,
        placement: SymbolPlacement::After,
    };
}

impl Default for SymbolFormat {
    fn default() -> Self {
        SymbolFormat {
            style: SymbolStyle::Unicode,
            padding: Padding::Space,
            placement: SymbolPlacement::After,
        }
    }
}

/// A parsed format string.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct FormatDescriptor {
    pub value: ValueFormat,
    pub unit: Option<String>,
}

impl FormatDescriptor {
    pub fn parse(input: &str) -> Result<Self, UnitError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(FormatDescriptor {
                value: ValueFormat::RoundTrip,
                unit: None,
            });
        }
        match value_format(input) {
            Ok((rest, value)) => Ok(FormatDescriptor {
                value,
                unit: match rest.trim_start() {
                    "" => None,
                    symbol => Some(symbol.to_string()),
                },
            }),
            Err(nom::Err::Error(_)) => Ok(FormatDescriptor {
                value: ValueFormat::RoundTrip,
                unit: Some(input.to_string()),
            }),
            Err(_) => Err(UnitError::MalformedFormat(input.to_string())),
        }
    }
}

pub type Descriptor = Result<Arc<FormatDescriptor>, UnitError>;

lazy_static! {
    static ref FORMAT_CACHE: RwLock<HashMap<String, Descriptor>> =
        RwLock::new(HashMap::new());
    static ref SYMBOL_CACHE: RwLock<HashMap<(&'static str, SymbolStyle), Arc<str>>> =
        RwLock::new(HashMap::new());
}

/// Parse a format string, or take it from the cache.
pub fn descriptor(format: &str) -> Descriptor {
    if let Some(desc) = FORMAT_CACHE.read().get(format) {
        return desc.clone();
    }
    let desc = FormatDescriptor::parse(format).map(Arc::new);
    log::debug!("caching format string '{}': {:?}", format, desc);
    FORMAT_CACHE
        .write()
        .entry(format.to_string())
        .or_insert(desc)
        .clone()
}

/// A unit's symbol in the requested style, cached per symbol.
pub fn rendered_symbol<D>(unit: &Unit<D>, style: SymbolStyle) -> Arc<str> {
    let key = (unit.symbol(), style);
    if let Some(symbol) = SYMBOL_CACHE.read().get(&key) {
        return symbol.clone();
    }
    let symbol: Arc<str> = match style {
        SymbolStyle::Unicode => Arc::from(unit.symbol()),
        SymbolStyle::Ascii => Arc::from(ascii_symbol(unit.symbol())),
    };
    SYMBOL_CACHE.write().entry(key).or_insert(symbol).clone()
}

/// Format a quantity according to a format string.
pub fn format_quantity<D: Dimension>(
    quantity: &Quantity<D>,
    format: &str,
    symbol: &SymbolFormat,
    locale: &Locale,
) -> String {
    let desc = match descriptor(format) {
        Ok(desc) => desc,
        Err(e) => {
            log::warn!("{}; printing the format string instead", e);
            return format.to_string();
        }
    };
    let unit = match &desc.unit {
        None => D::SI_UNIT,
        Some(s) => match Unit::<D>::try_parse(s) {
            Some(unit) => unit,
            None => {
                log::warn!(
                    "format string '{}': '{}' is not a {} unit; \
                     printing the format string instead",
                    format,
                    s,
                    D::NAME
                );
                return format.to_string();
            }
        },
    };
    format_in(quantity, unit, desc.value, symbol, locale)
}

/// Format a quantity in the given unit.
pub fn format_in<D>(
    quantity: &Quantity<D>,
    unit: Unit<D>,
    value: ValueFormat,
    symbol: &SymbolFormat,
    locale: &Locale,
) -> String {
    let number = format_number(
        unit.from_si(quantity.si_value()),
        value,
        unit.precision(),
        locale,
    );
    let pad = match symbol.padding {
        Padding::Space => " ",
        Padding::None => "",
    };
    match (symbol.placement, unit.symbol().is_empty()) {
        (SymbolPlacement::Hidden, _) | (_, true) => number,
        (SymbolPlacement::After, false) => {
            format!("{}{}{}", number, pad, rendered_symbol(&unit, symbol.style))
        }
        (SymbolPlacement::Before, false) => {
            format!("{}{}{}", rendered_symbol(&unit, symbol.style), pad, number)
        }
    }
}

pub fn format_number(
    value: f64,
    format: ValueFormat,
    precision: Option<u8>,
    locale: &Locale,
) -> String {
    let text = match format {
        ValueFormat::RoundTrip => value.to_string(),
        ValueFormat::Fixed(n) | ValueFormat::Number(n) => {
            format!("{:.*}", n, value)
        }
        ValueFormat::Exponential(n) => format!("{:.*e}", n, value),
        ValueFormat::Preferred => match precision {
            Some(n) => format!("{:.*}", n as usize, value),
            None => value.to_string(),
        },
    };
    localize(&text, matches!(format, ValueFormat::Number(_)), locale)
}

/* Replace the decimal point and optionally group the integer digits. */
fn localize(text: &str, grouped: bool, locale: &Locale) -> String {
    let (int, frac) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text, None),
    };
    let mut r = match grouped {
        true => group_digits(int, locale.group_separator),
        false => int.to_string(),
    };
    if let Some(frac) = frac {
        r.push(locale.decimal_separator);
        r.push_str(frac);
    }
    r
}

fn group_digits(int: &str, separator: char) -> String {
    let (sign, digits) = match int.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int),
    };
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return int.to_string();
    }
    let mut r = String::from(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            r.push(separator);
        }
        r.push(c);
    }
    r
}

/* Value format parser. */

fn value_format(input: &str) -> IResult<&str, ValueFormat> {
    terminated(
        alt((
            decimals('F', 2, ValueFormat::Fixed),
            decimals('N', 2, ValueFormat::Number),
            decimals('E', 6, ValueFormat::Exponential),
            simple('G', ValueFormat::RoundTrip),
            simple('R', ValueFormat::RoundTrip),
            simple('U', ValueFormat::Preferred),
        )),
        peek(alt((eof, multispace1))),
    )(input)
}

fn simple<'r>(
    c: char,
    format: ValueFormat,
) -> impl FnMut(&'r str) -> IResult<&'r str, ValueFormat> {
    move |input| {
        let (input, _) = letter(c)(input)?;
        Ok((input, format))
    }
}

/* A format letter with an optional decimal count. An oversized
 * count is a failure rather than an error, so that the string is
 * not read as a unit symbol. */
fn decimals<'r>(
    c: char,
    default: usize,
    format: fn(usize) -> ValueFormat,
) -> impl FnMut(&'r str) -> IResult<&'r str, ValueFormat> {
    move |input| {
        let (input, (_, n)) = pair(
            letter(c),
            opt(map_res(digit0, |d: &str| match d {
                "" => Ok(default),
                d => d.parse::<usize>().map_err(|_| ()),
            })),
        )(input)?;
        match n {
            Some(n) if n <= MAX_DECIMALS => Ok((input, format(n))),
            _ => Err(nom::Err::Failure(nom::error::Error {
                input,
                code: nom::error::ErrorKind::TooLarge,
            })),
        }
    }
}

fn letter<'r>(c: char) -> impl Fn(&'r str) -> IResult<&'r str, char> {
    nom::character::complete::char(c)
}

/* ASCII symbols. */

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

fn from_superscript(c: char) -> Option<char> {
    match c {
        '\u{207b}' => Some('-'),
        '\u{207a}' => Some('+'),
        c => SS
            .iter()
            .position(|s| *s == c)
            .and_then(|n| char::from_digit(n as u32, 10)),
    }
}

/// The ASCII spelling of a unit symbol: exponents become `^n`, the
/// middle dot `*`, micro `u`, degree `deg` and ohm `Ohm`.
pub fn ascii_symbol(symbol: &str) -> String {
    let mut r = String::with_capacity(symbol.len());
    let mut chars = symbol.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(d) = from_superscript(c) {
            r.push('^');
            r.push(d);
            while let Some(d) = chars.peek().and_then(|c| from_superscript(*c))
            {
                r.push(d);
                chars.next();
            }
            continue;
        }
        match c {
            '⋅' | '·' => r.push('*'),
            'µ' | 'μ' => r.push('u'),
            '°' => r.push_str("deg"),
            'Ω' => r.push_str("Ohm"),
            c => r.push(c),
        }
    }
    r
}

#[cfg(test)]
mod test {
    use super::{
        ascii_symbol, format_number, group_digits, FormatDescriptor,
        ValueFormat,
    };
    use crate::{Locale, UnitError};

    #[test]
    fn ascii_symbols() {
        assert_eq!(ascii_symbol("m²"), "m^2");
        assert_eq!(ascii_symbol("kg/m³"), "kg/m^3");
        assert_eq!(ascii_symbol("N⋅s"), "N*s");
        assert_eq!(ascii_symbol("µm"), "um");
        assert_eq!(ascii_symbol("°C"), "degC");
        assert_eq!(ascii_symbol("m⁻¹²"), "m^-12");
        assert_eq!(ascii_symbol("Pa"), "Pa");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_digits("1234567", ','), "1,234,567");
        assert_eq!(group_digits("-123456", ','), "-123,456");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("inf", ','), "inf");
    }

    #[test]
    fn numbers() {
        let l = Locale::INVARIANT;
        assert_eq!(format_number(0.1, ValueFormat::RoundTrip, None, &l), "0.1");
        assert_eq!(format_number(2.0, ValueFormat::Fixed(2), None, &l), "2.00");
        assert_eq!(
            format_number(1234.5, ValueFormat::Number(1), None, &Locale::GERMAN),
            "1.234,5"
        );
        assert_eq!(
            format_number(1234.5, ValueFormat::Exponential(2), None, &l),
            "1.23e3"
        );
        assert_eq!(
            format_number(1.23456, ValueFormat::Preferred, Some(3), &l),
            "1.235"
        );
        assert_eq!(format_number(1.5, ValueFormat::Preferred, None, &l), "1.5");
    }

    #[test]
    fn descriptors() {
        let parse = |s| FormatDescriptor::parse(s).unwrap();
        assert_eq!(parse("").value, ValueFormat::RoundTrip);
        assert_eq!(parse("F").value, ValueFormat::Fixed(2));
        assert_eq!(parse("F4").value, ValueFormat::Fixed(4));
        assert_eq!(parse("E").value, ValueFormat::Exponential(6));
        let desc = parse("F2 m²");
        assert_eq!(desc.value, ValueFormat::Fixed(2));
        assert_eq!(desc.unit.as_deref(), Some("m²"));
        let desc = parse("N⋅m");
        assert_eq!(desc.value, ValueFormat::RoundTrip);
        assert_eq!(desc.unit.as_deref(), Some("N⋅m"));
        assert_eq!(parse("kPa").unit.as_deref(), Some("kPa"));
        assert!(matches!(
            FormatDescriptor::parse("F999"),
            Err(UnitError::MalformedFormat(_))
        ));
    }
}
