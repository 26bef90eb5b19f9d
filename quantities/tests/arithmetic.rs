/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use quantities::{
    Acceleration, Area, Energy, Force, Length, Mass, Momentum, Power,
    Pressure, Speed, Temperature, Time, UnitError, Volume,
};

#[test]
fn same_dimension() {
    let a = Length::from_metres(1.5);
    let b = Length::from_centimetres(25.0);
    assert_eq!((a + b).si_value(), a.si_value() + b.si_value());
    assert_eq!((a - b).si_value(), a.si_value() - b.si_value());
    assert_eq!(a * 2.0, Length::from_metres(3.0));
    assert_eq!(2.0 * a, Length::from_metres(3.0));
    assert_eq!(a / 3.0, Length::from_metres(0.5));

    let quarter = Length::from_metres(0.25);
    let mut c = a;
    c += quarter;
    c -= quarter;
    c *= 4.0;
    c /= 2.0;
    assert_eq!(c, Length::from_metres(3.0));
}

#[test]
fn ratio_is_dimensionless() {
    let r: f64 = Energy::from_joules(10.0) / Energy::from_joules(2.0);
    assert_eq!(r, 5.0);
}

#[test]
fn products() {
    assert_eq!(
        Acceleration::from_metres_per_second_squared(2.0)
            * Mass::from_kilograms(3.0),
        Force::from_newtons(6.0)
    );
    assert_eq!(
        Mass::from_kilograms(3.0)
            * Acceleration::from_metres_per_second_squared(2.0),
        Force::from_newtons(6.0)
    );
    assert_eq!(
        Length::from_metres(2.0) * Length::from_metres(3.0),
        Area::from_square_metres(6.0)
    );
    assert_eq!(
        Area::from_square_metres(6.0) * Length::from_metres(0.5),
        Volume::from_cubic_metres(3.0)
    );
    assert_eq!(
        Force::from_newtons(4.0) * Length::from_metres(2.5),
        Energy::from_joules(10.0)
    );
    assert_eq!(
        Power::from_watts(100.0) * Time::from_seconds(60.0),
        Energy::from_joules(6000.0)
    );
    assert_eq!(
        Force::from_newtons(2.0) * Time::from_seconds(3.0),
        Momentum::from_newton_seconds(6.0)
    );
    assert_eq!(
        Pressure::from_pascals(10.0) * Area::from_square_metres(2.0),
        Force::from_newtons(20.0)
    );
}

#[test]
fn quotients() {
    assert_eq!(
        Energy::from_joules(6000.0) / Time::from_seconds(60.0),
        Power::from_watts(100.0)
    );
    assert_eq!(
        Length::from_metres(100.0) / Time::from_seconds(20.0),
        Speed::from_metres_per_second(5.0)
    );
    assert_eq!(
        Length::from_metres(100.0) / Speed::from_metres_per_second(5.0),
        Time::from_seconds(20.0)
    );
    assert_eq!(
        Area::from_square_metres(6.0) / Length::from_metres(2.0),
        Length::from_metres(3.0)
    );
    assert_eq!(
        Force::from_newtons(6.0) / Mass::from_kilograms(3.0),
        Acceleration::from_metres_per_second_squared(2.0)
    );
}

#[test]
fn negation() {
    let q = Temperature::from_kelvin(12.5);
    assert_eq!(-q, Temperature::from_kelvin(-12.5));
    assert_eq!(-(-q), q);
    assert_eq!((-Length::from_feet(2.0)).feet(), -2.0);
}

#[test]
fn ordering() {
    assert!(Length::from_kilometres(1.0) > Length::from_metres(999.0));
    assert!(Length::from_inches(12.0) < Length::from_feet(2.0));
    assert!(Length::from_metres(1.0) >= Length::from_millimetres(1000.0));
    assert!(
        Length::from_metres(f64::NAN)
            .partial_cmp(&Length::ZERO)
            .is_none()
    );
    assert_ne!(Length::from_metres(f64::NAN), Length::from_metres(f64::NAN));
}

#[test]
fn total_ordering() {
    let mut lengths = vec![
        Length::from_metres(f64::NAN),
        Length::from_kilometres(1.0),
        Length::from_metres(-2.0),
        Length::from_metres(f64::INFINITY),
        Length::from_millimetres(5.0),
    ];
    lengths.sort_by(Length::total_cmp);
    let metres = lengths.iter().map(Length::metres).collect::<Vec<_>>();
    assert_eq!(metres[..4], [-2.0, 0.005, 1000.0, f64::INFINITY]);
    assert!(metres[4].is_nan());

    assert_eq!(
        Length::from_metres(1.0).total_cmp(&Length::from_millimetres(1000.0)),
        Ordering::Equal
    );
    assert_eq!(
        Length::from_metres(-0.0).total_cmp(&Length::ZERO),
        Ordering::Less
    );
}

#[test]
fn sum_and_default() {
    let parts = [
        Energy::from_joules(1.0),
        Energy::from_kilojoules(1.0),
        Energy::from_millijoules(500.0),
    ];
    assert_eq!(parts.iter().sum::<Energy>(), Energy::from_joules(1001.5));
    assert_eq!(parts.into_iter().sum::<Energy>().joules(), 1001.5);
    assert_eq!(Energy::default(), Energy::ZERO);
    assert_eq!(Energy::from_joules(-3.0).abs(), Energy::from_joules(3.0));
}

#[test]
fn tolerance_equality() {
    let a = Energy::from_joules(10.0);
    let b = Energy::from_joules(10.4);
    assert_eq!(a.equals_within(&b, &Energy::from_joules(0.5)), Ok(true));
    assert_eq!(a.equals_within(&b, &Energy::from_joules(0.1)), Ok(false));

    for tolerance in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            a.equals_within(&b, &Energy::from_joules(tolerance)),
            Err(UnitError::NonPositiveTolerance(_))
        ));
    }
    assert!(matches!(
        Temperature::from_kelvin(1.0)
            .equals_within(&Temperature::ZERO, &Temperature::ZERO),
        Err(UnitError::NonPositiveTolerance(_))
    ));
}
