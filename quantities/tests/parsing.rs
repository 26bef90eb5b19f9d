/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use quantities::{
    Area, AreaUnit, Energy, Length, LengthUnit, Locale, Momentum,
    NumberStyles, Pressure, PressureUnit, Temperature, Time, UnitError,
};

#[test]
fn parse_quantities() {
    assert_eq!(
        Pressure::parse("12.5 kPa").unwrap(),
        Pressure::from_pascals(12500.0)
    );
    assert_eq!(
        Pressure::parse("12.5kPa").unwrap(),
        Pressure::from_pascals(12500.0)
    );
    assert_eq!(
        Momentum::parse("  3 N⋅s  ").unwrap(),
        Momentum::from_newton_seconds(3.0)
    );
    assert_eq!(
        "-2 m".parse::<Length>().unwrap(),
        Length::from_metres(-2.0)
    );
    assert_eq!(Length::parse("+2 m").unwrap(), Length::from_metres(2.0));
    assert_eq!(Length::parse("1e3 m").unwrap(), Length::from_metres(1000.0));
    assert_eq!(Time::parse(".5 s").unwrap(), Time::from_seconds(0.5));
    assert_eq!(
        Length::parse("∞ m").unwrap(),
        Length::from_metres(f64::INFINITY)
    );
}

#[test]
fn parse_ascii_symbols() {
    assert_eq!(
        Momentum::parse("3 N*s").unwrap(),
        Momentum::from_newton_seconds(3.0)
    );
    assert_eq!(Area::parse("2 m^2").unwrap(), Area::from_square_metres(2.0));
    assert_eq!(AreaUnit::SQUARE_METRE.ascii_symbol(), "m^2");
    assert_eq!(
        Length::parse("5 um").unwrap(),
        Length::parse("5 µm").unwrap()
    );
    assert_eq!(
        Length::parse("5 μm").unwrap(),
        Length::from_micrometres(5.0)
    );
    assert_eq!(
        Temperature::parse("20 degC").unwrap(),
        Temperature::from_degrees_celsius(20.0)
    );
}

#[test]
fn parse_units() {
    assert_eq!(PressureUnit::parse(" kPa "), Ok(PressureUnit::KILOPASCAL));
    assert_eq!("mi".parse::<LengthUnit>(), Ok(LengthUnit::MILE));
    assert_eq!(LengthUnit::try_parse("furlong"), None);
}

#[test]
fn unknown_units() {
    match Length::parse("5 kPa") {
        Err(UnitError::UnknownUnit {
            dimension,
            symbol,
            expected,
        }) => {
            assert_eq!(dimension, "length");
            assert_eq!(symbol, "kPa");
            assert!(expected.iter().any(|s| s == "km"));
        }
        r => panic!("expected an unknown unit error, got {:?}", r),
    }

    /* Symbols are case-sensitive. */
    assert!(matches!(
        Pressure::parse("1 pa"),
        Err(UnitError::UnknownUnit { .. })
    ));
    assert!(matches!(
        Pressure::parse("1"),
        Err(UnitError::UnknownUnit { .. })
    ));

    let e = PressureUnit::parse("pascal").unwrap_err();
    assert!(e.to_string().starts_with(
        "unknown pressure unit 'pascal' (expected one of: Pa, hPa, kPa"
    ));
}

#[test]
fn malformed_numbers() {
    assert_eq!(
        Pressure::parse("abc Pa"),
        Err(UnitError::NumericFormat("abc".to_string()))
    );
    assert_eq!(
        Pressure::parse("1.2.3 Pa"),
        Err(UnitError::NumericFormat("1.2.3".to_string()))
    );
    assert_eq!(
        Pressure::parse(""),
        Err(UnitError::NumericFormat(String::new()))
    );
    assert_eq!(Pressure::try_parse("abc Pa"), None);
}

#[test]
fn number_styles_and_locales() {
    assert_eq!(
        Pressure::parse("1,234.5 kPa").unwrap(),
        Pressure::from_pascals(1234500.0)
    );
    assert_eq!(
        Pressure::parse_with(
            "1.234,5 kPa",
            &NumberStyles::default(),
            &Locale::GERMAN
        )
        .unwrap(),
        Pressure::from_pascals(1234500.0)
    );
    assert_eq!(
        Length::parse_with("1.5 m", &NumberStyles::INTEGER, &Locale::INVARIANT),
        Err(UnitError::NumericFormat("1.5".to_string()))
    );
    assert_eq!(
        Length::try_parse_with("1e3 m", &NumberStyles::INTEGER, &Locale::INVARIANT),
        None
    );
    assert_eq!(
        Length::try_parse_with("15 m", &NumberStyles::INTEGER, &Locale::INVARIANT),
        Some(Length::from_metres(15.0))
    );
}

#[test]
fn truncated_numbers() {
    /* Exponent rejected by the number styles. */
    assert_eq!(
        Length::parse_with("1e3 m", &NumberStyles::INTEGER, &Locale::INVARIANT),
        Err(UnitError::NumericFormat("1e3".to_string()))
    );
    assert_eq!(
        Length::parse_with("2E-4 m", &NumberStyles::INTEGER, &Locale::INVARIANT),
        Err(UnitError::NumericFormat("2E-4".to_string()))
    );
    /* A unit symbol starting with "e" is still a unit. */
    assert_eq!(
        Energy::parse_with("5eV", &NumberStyles::INTEGER, &Locale::INVARIANT),
        Ok(Energy::from_electronvolts(5.0))
    );

    /* Whitespace group separator followed by a short group. */
    assert_eq!(
        Length::parse_with(
            "1\u{202f}23 m",
            &NumberStyles::default(),
            &Locale::FRENCH
        ),
        Err(UnitError::NumericFormat("1\u{202f}23".to_string()))
    );
    assert_eq!(
        Length::parse_with(
            "1\u{202f}234,5 m",
            &NumberStyles::default(),
            &Locale::FRENCH
        ),
        Ok(Length::from_metres(1234.5))
    );
    assert_eq!(
        Length::parse_with("12 m", &NumberStyles::default(), &Locale::FRENCH),
        Ok(Length::from_metres(12.0))
    );
}

#[test]
fn ambiguous_locale() {
    let locale = Locale::new('.', '.');
    assert_eq!(locale.validate(), Err(UnitError::AmbiguousLocale('.')));
    assert_eq!(
        Length::parse_with("1.5 m", &NumberStyles::default(), &locale),
        Err(UnitError::AmbiguousLocale('.'))
    );
    assert_eq!(Locale::GERMAN.validate(), Ok(()));
}

#[test]
fn parse_format_round_trip() {
    for s in ["101.325 kPa", "-3.5 bar", "1e-9 GPa", "14.7 psi", "760 Torr"] {
        let q = Pressure::parse(s).unwrap();
        assert_eq!(Pressure::parse(&q.to_string()).unwrap(), q, "{}", s);
    }
    for s in ["-40 °C", "98.6 °F", "0 K"] {
        let q = Temperature::parse(s).unwrap();
        assert_eq!(Temperature::parse(&q.to_string()).unwrap(), q, "{}", s);
    }
}
