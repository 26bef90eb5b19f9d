/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Serialize a quantity as "<number> <symbol>", for use with
//! `#[serde(with = "quantities::quantity_as_string")]`. The number
//! is written in the canonical unit with invariant formatting; any
//! registered unit of the dimension is accepted when reading.

use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::Deserialize;

use crate::format::{format_in, SymbolFormat, ValueFormat};
use crate::{Dimension, Locale, NumberStyles, Quantity};

pub fn serialize<D: Dimension, S: Serializer>(
    quantity: &Quantity<D>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_in(
        quantity,
        D::SI_UNIT,
        ValueFormat::RoundTrip,
        &SymbolFormat::default(),
        &Locale::INVARIANT,
    ))
}

pub fn deserialize<'de, D: Dimension, De: Deserializer<'de>>(
    deserializer: De,
) -> Result<Quantity<D>, De::Error> {
    let text = String::deserialize(deserializer)?;
    Quantity::parse_with(&text, &NumberStyles::FLOAT, &Locale::INVARIANT)
        .map_err(De::Error::custom)
}
