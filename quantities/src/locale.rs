/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::UnitError;

/// Number formatting conventions used when parsing and formatting
/// quantities. The decimal and group separators must differ.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Locale {
    pub decimal_separator: char,
    pub group_separator: char,
}

lazy_static! {
    static ref CURRENT: RwLock<Locale> = RwLock::new(Locale::INVARIANT);
}

impl Locale {
    /// Culture-invariant conventions: "1,234.5".
    pub const INVARIANT: Self = Self::new('.', ',');
    /// "1.234,5"
    pub const GERMAN: Self = Self::new(',', '.');
    /// "1 234,5" (narrow no-break space).
    pub const FRENCH: Self = Self::new(',', '\u{202f}');

    pub const fn new(decimal_separator: char, group_separator: char) -> Self {
        Locale {
            decimal_separator,
            group_separator,
        }
    }

    /// Check that numbers in this locale can be read back: the
    /// decimal and group separators must differ.
    pub fn validate(&self) -> Result<(), UnitError> {
        match self.decimal_separator == self.group_separator {
            true => Err(UnitError::AmbiguousLocale(self.decimal_separator)),
            false => Ok(()),
        }
    }

    /// The process-wide locale used by `Display`, `FromStr` and the
    /// other entry points that do not take a locale argument.
    pub fn current() -> Self {
        *CURRENT.read()
    }

    pub fn set_current(locale: Self) {
        log::debug!("current locale set to {:?}", locale);
        *CURRENT.write() = locale;
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}
