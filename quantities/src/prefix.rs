/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Decimal SI prefixes. Unit tables use these to state their
/// factors, so that `kPa` reads as `SiPrefix::Kilo.multiplier()`
/// pascals.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum SiPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Unit,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

impl SiPrefix {
    pub const SCALE: &'static [Self] = &[
        Self::Yocto,
        Self::Zepto,
        Self::Atto,
        Self::Femto,
        Self::Pico,
        Self::Nano,
        Self::Micro,
        Self::Milli,
        Self::Centi,
        Self::Deci,
        Self::Unit,
        Self::Deca,
        Self::Hecto,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
        Self::Exa,
        Self::Zetta,
        Self::Yotta,
    ];

    pub const fn power(&self) -> i32 {
        match self {
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Deci => -1,
            SiPrefix::Unit => 0,
            SiPrefix::Deca => 1,
            SiPrefix::Hecto => 2,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
        }
    }

    /// Literal powers of ten, so that unit factors are the closest
    /// double to the exact decimal value.
    pub const fn multiplier(&self) -> f64 {
        match self {
            SiPrefix::Yocto => 1e-24,
            SiPrefix::Zepto => 1e-21,
            SiPrefix::Atto => 1e-18,
            SiPrefix::Femto => 1e-15,
            SiPrefix::Pico => 1e-12,
            SiPrefix::Nano => 1e-9,
            SiPrefix::Micro => 1e-6,
            SiPrefix::Milli => 1e-3,
            SiPrefix::Centi => 1e-2,
            SiPrefix::Deci => 1e-1,
            SiPrefix::Unit => 1.0,
            SiPrefix::Deca => 1e1,
            SiPrefix::Hecto => 1e2,
            SiPrefix::Kilo => 1e3,
            SiPrefix::Mega => 1e6,
            SiPrefix::Giga => 1e9,
            SiPrefix::Tera => 1e12,
            SiPrefix::Peta => 1e15,
            SiPrefix::Exa => 1e18,
            SiPrefix::Zetta => 1e21,
            SiPrefix::Yotta => 1e24,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            SiPrefix::Yocto => "y",
            SiPrefix::Zepto => "z",
            SiPrefix::Atto => "a",
            SiPrefix::Femto => "f",
            SiPrefix::Pico => "p",
            SiPrefix::Nano => "n",
            SiPrefix::Micro => "µ",
            SiPrefix::Milli => "m",
            SiPrefix::Centi => "c",
            SiPrefix::Deci => "d",
            SiPrefix::Unit => "",
            SiPrefix::Deca => "da",
            SiPrefix::Hecto => "h",
            SiPrefix::Kilo => "k",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
            SiPrefix::Peta => "P",
            SiPrefix::Exa => "E",
            SiPrefix::Zetta => "Z",
            SiPrefix::Yotta => "Y",
        }
    }

    /// The multiplier of the n-th power of this prefix, e.g. for
    /// square and cubic units (`km²` is `Kilo.multiplier_pow(2)`).
    pub const fn multiplier_pow(&self, n: u32) -> f64 {
        let m = self.multiplier();
        let mut r = 1.0;
        let mut i = 0;
        while i < n {
            r *= m;
            i += 1;
        }
        r
    }
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}
