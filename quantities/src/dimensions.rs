/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Dimension tags. These can be considered a quantity's "type":
//! arithmetic between different dimensions is only possible where
//! an operator is defined for the pair (see `quantities::relations`).

macro_rules! dimensions {
    ( $( $(#[$meta:meta])* $name:ident ),+ $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(
                PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default,
                Debug,
            )]
            pub struct $name;
        )+
    };
}

dimensions!(
    /* Geometry. */
    Length,
    Area,
    Volume,
    /* Kinematics. */
    Time,
    Frequency,
    Speed,
    Acceleration,
    /* Mechanics. */
    Mass,
    Force,
    Momentum,
    Torque,
    Energy,
    Power,
    Pressure,
    Density,
    /// Mass per unit area (e.g. paper grammage).
    AreaDensity,
    /* Thermal. */
    /// Thermodynamic temperature. Its °C and °F units are affine.
    Temperature,
    /* Photometry. */
    LuminousFlux,
);
