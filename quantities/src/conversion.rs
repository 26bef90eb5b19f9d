/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

/// Conversion between a unit's scale and the canonical (SI) scale
/// of its dimension.
///
/// Almost every unit is `Linear`: the canonical value is the unit
/// value times a fixed factor. Temperature scales with a shifted
/// zero point (°C, °F) are `Affine`: the offset is added in the
/// unit's own scale before applying the factor, which keeps the
/// factor and offset readable (°F is `5/9` with offset `459.67`).
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
pub enum Conversion {
    Linear { factor: f64 },
    Affine { factor: f64, offset: f64 },
}

impl Conversion {
    pub const IDENTITY: Self = Conversion::Linear { factor: 1.0 };

    pub fn to_si(&self, value: f64) -> f64 {
        match self {
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine { factor, offset } => (value + offset) * factor,
        }
    }

    pub fn from_si(&self, value: f64) -> f64 {
        match self {
            Conversion::Linear { factor } => value / factor,
            Conversion::Affine { factor, offset } => value / factor - offset,
        }
    }

    pub const fn factor(&self) -> f64 {
        match self {
            Conversion::Linear { factor } => *factor,
            Conversion::Affine { factor, .. } => *factor,
        }
    }

    pub const fn offset(&self) -> f64 {
        match self {
            Conversion::Linear { .. } => 0.0,
            Conversion::Affine { offset, .. } => *offset,
        }
    }

    pub const fn is_linear(&self) -> bool {
        matches!(self, Conversion::Linear { .. })
    }
}

impl Default for Conversion {
    fn default() -> Self {
        Self::IDENTITY
    }
}
