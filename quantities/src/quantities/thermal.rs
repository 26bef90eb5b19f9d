/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::quantity;

/// Kelvin per degree Fahrenheit (and Rankine).
const RANKINE: f64 = 5.0 / 9.0;

quantity! {
    /// Thermodynamic temperature. Adding two temperatures adds their
    /// kelvin values.
    Temperature, TemperatureUnit, "temperature" {
        KELVIN: linear("K", 1.0).with_precision(2) => from_kelvin, kelvin;
        DEGREE_CELSIUS: affine("°C", 1.0, 273.15).with_precision(2)
            => from_degrees_celsius, degrees_celsius;
        DEGREE_FAHRENHEIT: affine("°F", RANKINE, 459.67).with_precision(2)
            => from_degrees_fahrenheit, degrees_fahrenheit;
        DEGREE_RANKINE: linear("°R", RANKINE).with_precision(2)
            => from_degrees_rankine, degrees_rankine;
    }
    si: KELVIN;
    scale: [];
}
