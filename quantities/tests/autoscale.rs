/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use quantities::{
    Energy, EnergyUnit, Pressure, PressureUnit, Speed, SpeedUnit,
    Temperature, TemperatureUnit, Time, TimeUnit,
};

#[test]
fn autoscale_time() {
    assert_eq!(
        Time::from_seconds(1800.0).autoscale(),
        (30.0, TimeUnit::MINUTE)
    );
    assert_eq!(Time::from_seconds(3600.0).autoscale(), (1.0, TimeUnit::HOUR));
    assert_eq!(
        Time::from_seconds(0.001).autoscale(),
        (1.0, TimeUnit::MILLISECOND)
    );
    assert_eq!(
        Time::from_seconds(-1800.0).autoscale(),
        (-30.0, TimeUnit::MINUTE)
    );
    assert_eq!(Time::from_hours(0.0).autoscale(), (0.0, TimeUnit::SECOND));

    /* Below the smallest unit of the scale. */
    let (val, unit) = Time::from_seconds(1e-12).autoscale();
    assert_eq!(unit, TimeUnit::NANOSECOND);
    assert!((val - 0.001).abs() < 1e-15);
}

#[test]
fn autoscale_prefixed() {
    assert_eq!(
        Pressure::from_pascals(101325.0).autoscale().1,
        PressureUnit::KILOPASCAL
    );
    assert_eq!(
        Energy::from_joules(5e9).autoscale(),
        (5.0, EnergyUnit::GIGAJOULE)
    );
    assert_eq!(
        Energy::from_joules(0.25).autoscale().1,
        EnergyUnit::MILLIJOULE
    );
}

#[test]
fn autoscale_without_scale() {
    assert_eq!(
        Speed::from_kilometres_per_hour(36.0).autoscale().1,
        SpeedUnit::METRE_PER_SECOND
    );
    assert_eq!(
        Temperature::from_kelvin(300.0).autoscale(),
        (300.0, TemperatureUnit::KELVIN)
    );
    assert_eq!(
        Time::from_seconds(f64::INFINITY).autoscale(),
        (f64::INFINITY, TimeUnit::SECOND)
    );
}
