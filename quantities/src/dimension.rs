/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::Unit;

/// A physical dimension, used as the type parameter of `Unit` and
/// `Quantity`. Implementors are zero-sized tags (see `dimensions`).
///
/// Every quantity of the dimension is stored in `SI_UNIT`. `UNITS`
/// lists the units recognized by the parser, and `SCALE` the
/// ordered (small to large) units considered by autoscaling.
pub trait Dimension: Sized + 'static {
    const NAME: &'static str;
    const SI_UNIT: Unit<Self>;
    const UNITS: &'static [Unit<Self>];
    const SCALE: &'static [Unit<Self>] = &[];
}

/// Define the units of a dimension, its `Dimension` impl, the
/// `Quantity` and `Unit` aliases and the per-unit constructors and
/// accessors.
macro_rules! quantity {
    (
        $(#[$meta:meta])*
        $name:ident, $unit_name:ident, $label:literal {
            $( $(#[$umeta:meta])*
               $unit:ident : $ctor:ident ( $($arg:expr),* )
               $( . $modifier:ident ( $($marg:expr),* ) )*
               => $from:ident, $get:ident; )+
        }
        si: $si:ident;
        scale: [ $($scale:ident),* ];
    ) => {
        $(#[$meta])*
        pub type $name = $crate::Quantity<$crate::dimensions::$name>;
        pub type $unit_name = $crate::Unit<$crate::dimensions::$name>;

        impl $crate::Unit<$crate::dimensions::$name> {
            $(
                $(#[$umeta])*
                pub const $unit: Self =
                    Self::$ctor($($arg),*) $( .$modifier($($marg),*) )*;
            )+
        }

        impl $crate::Dimension for $crate::dimensions::$name {
            const NAME: &'static str = $label;
            const SI_UNIT: $crate::Unit<Self> = $crate::Unit::<Self>::$si;
            const UNITS: &'static [$crate::Unit<Self>] =
                &[$($crate::Unit::<Self>::$unit),+];
            const SCALE: &'static [$crate::Unit<Self>] =
                &[$($crate::Unit::<Self>::$scale),*];
        }

        impl $crate::Quantity<$crate::dimensions::$name> {
            $(
                pub fn $from(value: f64) -> Self {
                    Self::new(value, $unit_name::$unit)
                }

                pub fn $get(&self) -> f64 {
                    self.value($unit_name::$unit)
                }
            )+
        }
    };
}

pub(crate) use quantity;
