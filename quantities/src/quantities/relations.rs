/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Multiplication and division between dimensions.
//!
//! Each relation `A * B => C` provides `A * B`, `B * A`, `C / A`
//! and `C / B`. The result is computed on the canonical values, so
//! no unit conversion takes place. Quantities of the same
//! dimension divide into a bare `f64` (see `Quantity`).
//!
//! Force times length is energy; torque shares the symbol `N⋅m`
//! but has no product relation.

use std::ops::{Div, Mul};

use crate::dimensions;
use crate::Quantity;

macro_rules! relation {
    (square $a:ident => $c:ident) => {
        relation!(@mul $a * $a => $c);
        relation!(@div $c / $a => $a);
    };
    ($a:ident * $b:ident => $c:ident) => {
        relation!(@mul $a * $b => $c);
        relation!(@mul $b * $a => $c);
        relation!(@div $c / $a => $b);
        relation!(@div $c / $b => $a);
    };
    (@mul $a:ident * $b:ident => $c:ident) => {
        impl Mul<Quantity<dimensions::$b>> for Quantity<dimensions::$a> {
            type Output = Quantity<dimensions::$c>;
            fn mul(self, rhs: Quantity<dimensions::$b>) -> Self::Output {
                Quantity::from_si_value(self.si_value() * rhs.si_value())
            }
        }
    };
    (@div $a:ident / $b:ident => $c:ident) => {
        impl Div<Quantity<dimensions::$b>> for Quantity<dimensions::$a> {
            type Output = Quantity<dimensions::$c>;
            fn div(self, rhs: Quantity<dimensions::$b>) -> Self::Output {
                Quantity::from_si_value(self.si_value() / rhs.si_value())
            }
        }
    };
}

/* Geometry. */
relation!(square Length => Area);
relation!(Area * Length => Volume);

/* Kinematics. */
relation!(Speed * Time => Length);
relation!(Acceleration * Time => Speed);
relation!(Frequency * Length => Speed);

/* Mechanics. */
relation!(Mass * Acceleration => Force);
relation!(Mass * Speed => Momentum);
relation!(Force * Time => Momentum);
relation!(Force * Length => Energy);
relation!(Force * Speed => Power);
relation!(Power * Time => Energy);
relation!(Pressure * Area => Force);
relation!(Density * Volume => Mass);
relation!(AreaDensity * Area => Mass);
