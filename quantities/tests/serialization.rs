/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use serde_json::json;

use quantities::{
    Length, Pressure, PressureUnit, Temperature, TemperatureUnit, UnitError,
};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Reading {
    #[serde(with = "quantities::quantity_as_string")]
    pressure: Pressure,
    temperature: Temperature,
    unit: PressureUnit,
}

#[test]
fn quantity_as_object() {
    let q = Length::from_metres(0.1);
    assert_eq!(serde_json::to_value(q).unwrap(), json!({ "Value": 0.1 }));
    assert_eq!(
        serde_json::from_value::<Length>(json!({ "Value": 1e-7 })).unwrap(),
        Length::from_metres(1e-7)
    );
    assert!(serde_json::from_value::<Length>(json!(0.1)).is_err());
}

#[test]
fn unit_as_symbol() {
    assert_eq!(
        serde_json::to_value(PressureUnit::KILOPASCAL).unwrap(),
        json!("kPa")
    );
    assert_eq!(
        serde_json::from_value::<TemperatureUnit>(json!("degF")).unwrap(),
        TemperatureUnit::DEGREE_FAHRENHEIT
    );
    assert!(serde_json::from_value::<PressureUnit>(json!("m")).is_err());
}

#[test]
fn quantity_as_string() {
    let reading = Reading {
        pressure: Pressure::from_pascals(101325.0),
        temperature: Temperature::from_kelvin(293.15),
        unit: PressureUnit::BAR,
    };
    let value = serde_json::to_value(&reading).unwrap();
    assert_eq!(
        value,
        json!({
            "pressure": "101325 Pa",
            "temperature": { "Value": 293.15 },
            "unit": "bar"
        })
    );
    assert_eq!(serde_json::from_value::<Reading>(value).unwrap(), reading);

    let other: Reading = serde_json::from_value(json!({
        "pressure": "1.5 bar",
        "temperature": { "Value": 0.0 },
        "unit": "psi"
    }))
    .unwrap();
    assert_eq!(other.pressure, Pressure::from_pascals(150000.0));
}

#[test]
fn value_attribute() {
    for v in [0.1, 1.0 / 3.0, -273.15, 6.02214076e23, 5e-324] {
        let q = Temperature::from_kelvin(v);
        let attr = q.value_attribute();
        let r = Temperature::from_value_attribute(&attr).unwrap();
        assert_eq!(r.si_value().to_bits(), v.to_bits(), "{}", attr);
    }
    assert_eq!(Length::from_metres(0.1).value_attribute(), "0.1");
    assert_eq!(
        Length::from_value_attribute("0,1"),
        Err(UnitError::NumericFormat("0,1".to_string()))
    );
}

#[test]
fn quantity_from_json() {
    assert_eq!(
        PressureUnit::KILOPASCAL.quantity_from_json(json!(2)).unwrap(),
        Pressure::from_pascals(2000.0)
    );
    assert!(matches!(
        PressureUnit::KILOPASCAL.quantity_from_json(json!("2")),
        Err(UnitError::Json(_))
    ));
}

#[test]
fn errors_serialize() {
    let e = Pressure::parse("1 furlong").unwrap_err();
    let v = serde_json::to_value(&e).unwrap();
    assert_eq!(v["UnknownUnit"]["symbol"], json!("furlong"));
    assert_eq!(serde_json::from_value::<UnitError>(v).unwrap(), e);
}
