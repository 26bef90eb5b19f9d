/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Alignment, Debug, Display, Formatter};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::format::{self, SymbolFormat, ValueFormat};
use crate::parser::{parse_quantity, NumberStyles};

use super::{Dimension, Locale, Unit, UnitError};

/// A value of dimension `D`, stored in the dimension's canonical
/// (SI) unit. The unit a quantity was created in is not retained:
/// accessors convert on demand.
pub struct Quantity<D> {
    si: f64,
    dimension: PhantomData<fn() -> D>,
}

impl<D> Quantity<D> {
    pub const ZERO: Self = Self::from_si_value(0.0);

    pub(crate) const fn from_si_value(si: f64) -> Self {
        Quantity {
            si,
            dimension: PhantomData,
        }
    }

    pub fn new(value: f64, unit: Unit<D>) -> Self {
        Self::from_si_value(unit.to_si(value))
    }

    pub const fn si_value(&self) -> f64 {
        self.si
    }

    /// The value expressed in `unit`.
    pub fn value(&self, unit: Unit<D>) -> f64 {
        unit.from_si(self.si)
    }

    pub fn abs(self) -> Self {
        Self::from_si_value(self.si.abs())
    }

    /// Total order on the canonical values (`f64::total_cmp`): NaN
    /// sorts after positive infinity, and -0 before +0.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.si.total_cmp(&other.si)
    }

    /// The culture-invariant text of the "Value" attribute: the
    /// canonical value in its shortest exact representation.
    pub fn value_attribute(&self) -> String {
        self.si.to_string()
    }

    pub fn from_value_attribute(value: &str) -> Result<Self, UnitError> {
        value
            .trim()
            .parse()
            .map(Self::from_si_value)
            .map_err(|_| UnitError::NumericFormat(value.to_string()))
    }
}

impl<D: Dimension> Quantity<D> {
    /// Compare with a maximum allowed difference. The tolerance must
    /// be strictly positive.
    pub fn equals_within(
        &self,
        other: &Self,
        tolerance: &Self,
    ) -> Result<bool, UnitError> {
        if !(tolerance.si > 0.0) {
            return Err(UnitError::NonPositiveTolerance(tolerance.to_string()));
        }
        Ok((self.si - other.si).abs() <= tolerance.si)
    }

    /// Express the quantity in the largest unit of the dimension's
    /// scale in which its magnitude is at least one.
    pub fn autoscale(&self) -> (f64, Unit<D>) {
        if self.si == 0.0 || !self.si.is_finite() {
            return (D::SI_UNIT.from_si(self.si), D::SI_UNIT);
        }
        match D::SCALE.split_first() {
            None => (D::SI_UNIT.from_si(self.si), D::SI_UNIT),
            Some((first, rest)) => rest
                .iter()
                .rev()
                .map(|unit| (unit.from_si(self.si), *unit))
                .find(|(val, _)| val.abs() >= 1.0)
                .unwrap_or_else(|| (first.from_si(self.si), *first)),
        }
    }

    /// Parse "<number> <symbol>" in the current locale.
    pub fn parse(input: &str) -> Result<Self, UnitError> {
        Self::parse_with(input, &NumberStyles::default(), &Locale::current())
    }

    pub fn parse_with(
        input: &str,
        styles: &NumberStyles,
        locale: &Locale,
    ) -> Result<Self, UnitError> {
        let (value, unit) = parse_quantity::<D>(input, styles, locale)?;
        Ok(Self::new(value, unit))
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    pub fn try_parse_with(
        input: &str,
        styles: &NumberStyles,
        locale: &Locale,
    ) -> Option<Self> {
        Self::parse_with(input, styles, locale).ok()
    }

    /// Format according to a format string (see `format`), with
    /// the default symbol format in the current locale.
    pub fn format(&self, format: &str) -> String {
        self.format_with(format, &SymbolFormat::default(), &Locale::current())
    }

    pub fn format_with(
        &self,
        format: &str,
        symbol: &SymbolFormat,
        locale: &Locale,
    ) -> String {
        format::format_quantity(self, format, symbol, locale)
    }

    pub fn to_string_in(&self, unit: Unit<D>) -> String {
        format::format_in(
            self,
            unit,
            ValueFormat::RoundTrip,
            &SymbolFormat::default(),
            &Locale::current(),
        )
    }
}

impl<D> Clone for Quantity<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Quantity<D> {}

impl<D> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool {
        self.si == other.si
    }
}

impl<D> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.si.partial_cmp(&other.si)
    }
}

impl<D> Default for Quantity<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> Debug for Quantity<D> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Quantity({:?} {})", self.si, D::SI_UNIT.symbol())
    }
}

/// Formats in the canonical unit using the current locale. A
/// precision (`{:.3}`) selects fixed-point formatting; width, fill
/// and alignment (left by default) apply to the whole text.
impl<D: Dimension> Display for Quantity<D> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let value = match f.precision() {
            Some(n) => ValueFormat::Fixed(n),
            None => ValueFormat::RoundTrip,
        };
        let text = format::format_in(
            self,
            D::SI_UNIT,
            value,
            &SymbolFormat::default(),
            &Locale::current(),
        );
        /* Not `f.pad`: it would read the precision as a maximum width. */
        let len = text.chars().count();
        let pad = f.width().map_or(0, |w| w.saturating_sub(len));
        let (before, after) = match f.align() {
            Some(Alignment::Right) => (pad, 0),
            Some(Alignment::Center) => (pad / 2, pad - pad / 2),
            Some(Alignment::Left) | None => (0, pad),
        };
        let fill = f.fill();
        for _ in 0..before {
            write!(f, "{}", fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            write!(f, "{}", fill)?;
        }
        Ok(())
    }
}

impl<D: Dimension> FromStr for Quantity<D> {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/* Same-dimension arithmetic. */

impl<D> Add for Quantity<D> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_si_value(self.si + rhs.si)
    }
}

impl<D> Sub for Quantity<D> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_si_value(self.si - rhs.si)
    }
}

impl<D> AddAssign for Quantity<D> {
    fn add_assign(&mut self, rhs: Self) {
        self.si += rhs.si;
    }
}

impl<D> SubAssign for Quantity<D> {
    fn sub_assign(&mut self, rhs: Self) {
        self.si -= rhs.si;
    }
}

impl<D> Neg for Quantity<D> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_si_value(-self.si)
    }
}

/// The ratio of two quantities of the same dimension.
impl<D> Div for Quantity<D> {
    type Output = f64;
    fn div(self, rhs: Self) -> f64 {
        self.si / rhs.si
    }
}

impl<D> Mul<f64> for Quantity<D> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::from_si_value(self.si * rhs)
    }
}

impl<D> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    fn mul(self, rhs: Quantity<D>) -> Quantity<D> {
        Quantity::from_si_value(self * rhs.si)
    }
}

impl<D> Div<f64> for Quantity<D> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::from_si_value(self.si / rhs)
    }
}

impl<D> MulAssign<f64> for Quantity<D> {
    fn mul_assign(&mut self, rhs: f64) {
        self.si *= rhs;
    }
}

impl<D> DivAssign<f64> for Quantity<D> {
    fn div_assign(&mut self, rhs: f64) {
        self.si /= rhs;
    }
}

impl<D> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::from_si_value(iter.map(|q| q.si).sum())
    }
}

impl<'a, D> Sum<&'a Quantity<D>> for Quantity<D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        Self::from_si_value(iter.map(|q| q.si).sum())
    }
}

/* Serialization: an object with the canonical value in "Value". */

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "schemars",
    derive(schemars::JsonSchema),
    schemars(rename = "Quantity")
)]
struct QuantityObject {
    #[serde(rename = "Value")]
    value: f64,
}

impl<D> Serialize for Quantity<D> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        QuantityObject { value: self.si }.serialize(serializer)
    }
}

impl<'de, D> Deserialize<'de> for Quantity<D> {
    fn deserialize<De: Deserializer<'de>>(
        deserializer: De,
    ) -> Result<Self, De::Error> {
        let object = QuantityObject::deserialize(deserializer)?;
        Ok(Self::from_si_value(object.value))
    }
}

#[cfg(feature = "schemars")]
impl<D> schemars::JsonSchema for Quantity<D> {
    fn schema_name() -> String {
        QuantityObject::schema_name()
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        QuantityObject::json_schema(gen)
    }
}
