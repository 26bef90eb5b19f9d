/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::format::ascii_symbol;
use crate::registry;

use super::{Conversion, Dimension, Quantity, UnitError};

/// A named unit of dimension `D`: a conversion to and from the
/// dimension's canonical unit, and a display symbol.
///
/// Units are plain constants (see the associated constants on
/// `Unit<dimensions::Pressure>` etc.). Two units are equal when
/// their symbols are equal, regardless of their conversion: the
/// symbol is the unit's identity for lookup, hashing and caching.
pub struct Unit<D> {
    symbol: &'static str,
    conversion: Conversion,
    precision: Option<u8>,
    dimension: PhantomData<fn() -> D>,
}

impl<D> Unit<D> {
    pub const fn new(symbol: &'static str, conversion: Conversion) -> Self {
        Unit {
            symbol,
            conversion,
            precision: None,
            dimension: PhantomData,
        }
    }

    pub const fn linear(symbol: &'static str, factor: f64) -> Self {
        Self::new(symbol, Conversion::Linear { factor })
    }

    pub const fn affine(symbol: &'static str, factor: f64, offset: f64) -> Self {
        Self::new(symbol, Conversion::Affine { factor, offset })
    }

    /// Set the number of decimals used by the "U" value format.
    pub const fn with_precision(mut self, decimals: u8) -> Self {
        self.precision = Some(decimals);
        self
    }

    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn ascii_symbol(&self) -> String {
        ascii_symbol(self.symbol)
    }

    pub const fn conversion(&self) -> Conversion {
        self.conversion
    }

    pub const fn precision(&self) -> Option<u8> {
        self.precision
    }

    /// Convert a value in this unit to the canonical unit.
    pub fn to_si(&self, value: f64) -> f64 {
        self.conversion.to_si(value)
    }

    /// Convert a canonical value to this unit.
    pub fn from_si(&self, value: f64) -> f64 {
        self.conversion.from_si(value)
    }
}

impl<D: Dimension> Unit<D> {
    /// Look up a registered unit of this dimension by its symbol
    /// (or its ASCII form). Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, UnitError> {
        let symbol = input.trim();
        registry::lookup::<D>(symbol).ok_or_else(|| registry::unknown::<D>(symbol))
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        registry::lookup::<D>(input.trim())
    }

    pub fn is_si(&self) -> bool {
        *self == D::SI_UNIT
    }

    pub fn create_quantity(&self, value: f64) -> Quantity<D> {
        Quantity::new(value, *self)
    }

    pub fn scalar_value(&self, quantity: Quantity<D>) -> f64 {
        self.from_si(quantity.si_value())
    }

    pub fn quantity_from_json(
        &self,
        value: serde_json::Value,
    ) -> Result<Quantity<D>, UnitError> {
        let val: f64 = serde_json::from_value(value)
            .map_err(|e| UnitError::Json(e.to_string()))?;
        Ok(self.create_quantity(val))
    }
}

impl<D> Clone for Unit<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Unit<D> {}

impl<D> PartialEq for Unit<D> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl<D> Eq for Unit<D> {}

impl<D> Hash for Unit<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        /* The default (symbol-less) unit hashes to a fixed value. */
        match self.symbol.is_empty() {
            true => state.write_u64(0),
            false => self.symbol.hash(state),
        }
    }
}

/// The zero-initialized unit: no symbol, identity conversion. It
/// does not belong to any dimension's registry.
impl<D> Default for Unit<D> {
    fn default() -> Self {
        Self::new("", Conversion::IDENTITY)
    }
}

impl<D> Debug for Unit<D> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Unit")
            .field("symbol", &self.symbol)
            .field("conversion", &self.conversion)
            .finish()
    }
}

impl<D> Display for Unit<D> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.symbol)
    }
}

impl<D: Dimension> FromStr for Unit<D> {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<D> From<Unit<D>> for String {
    fn from(val: Unit<D>) -> Self {
        val.symbol.to_string()
    }
}

impl<D> Serialize for Unit<D> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol)
    }
}

impl<'de, D: Dimension> Deserialize<'de> for Unit<D> {
    fn deserialize<De: Deserializer<'de>>(
        deserializer: De,
    ) -> Result<Self, De::Error> {
        let symbol = String::deserialize(deserializer)?;
        Self::parse(&symbol).map_err(De::Error::custom)
    }
}
