/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The built-in dimensions and their units.

mod geometry;
mod kinematics;
mod mechanics;
mod photometry;
mod thermal;

pub mod relations;

pub use geometry::{Area, AreaUnit, Length, LengthUnit, Volume, VolumeUnit};
pub use kinematics::{
    Acceleration, AccelerationUnit, Frequency, FrequencyUnit, Speed,
    SpeedUnit, Time, TimeUnit,
};
pub use mechanics::{
    AreaDensity, AreaDensityUnit, Density, DensityUnit, Energy, EnergyUnit,
    Force, ForceUnit, Mass, MassUnit, Momentum, MomentumUnit, Power,
    PowerUnit, Pressure, PressureUnit, Torque, TorqueUnit,
};
pub use photometry::{LuminousFlux, LuminousFluxUnit};
pub use thermal::{Temperature, TemperatureUnit};
