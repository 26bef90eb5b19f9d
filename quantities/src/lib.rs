/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Typed physical quantities.
//!
//! A `Quantity<D>` holds a single value in the canonical (SI) unit
//! of its dimension `D`. Units (`Unit<D>`) convert to and from the
//! canonical value and carry a display symbol. Arithmetic between
//! dimensions is limited to the relations in `quantities::relations`.
//!
//! ```
//! use quantities::{Acceleration, Force, Mass, Pressure};
//!
//! let f = Acceleration::from_metres_per_second_squared(2.0)
//!     * Mass::from_kilograms(3.0);
//! assert_eq!(f, Force::from_newtons(6.0));
//!
//! let p: Pressure = "101.325 kPa".parse().unwrap();
//! assert_eq!(p.format("F0 hPa"), "1013 hPa");
//! ```

mod dimension;
mod registry;

pub mod conversion;
pub mod dimensions;
pub mod error;
pub mod format;
pub mod locale;
pub mod parser;
pub mod prefix;
pub mod quantities;
pub mod quantity;
pub mod quantity_as_string;
pub mod unit;

pub use conversion::Conversion;
pub use dimension::Dimension;
pub use error::UnitError;
pub use format::{
    FormatDescriptor, Padding, SymbolFormat, SymbolPlacement, SymbolStyle,
    ValueFormat,
};
pub use locale::Locale;
pub use parser::NumberStyles;
pub use prefix::SiPrefix;
pub use quantities::*;
pub use quantity::Quantity;
pub use unit::Unit;
