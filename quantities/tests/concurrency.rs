/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::thread;

use quantities::{Energy, Length, Pressure, PressureUnit};

#[test]
fn concurrent_parsing_and_formatting() {
    let handles = (0..8)
        .map(|i| {
            thread::spawn(move || {
                for j in 0..200 {
                    let v = (i * 1000 + j) as f64;
                    let p = Pressure::parse(&format!("{} kPa", v)).unwrap();
                    assert_eq!(p, Pressure::new(v, PressureUnit::KILOPASCAL));
                    assert_eq!(
                        p.format(&format!("F{} kPa", j % 4)),
                        format!("{:.*} kPa", j % 4, v)
                    );
                    let e = Energy::parse(&format!("{} kJ", v)).unwrap();
                    assert_eq!(e.format("G kJ"), format!("{} kJ", v));
                    assert!(Length::parse(&format!("{} furlong", v)).is_err());
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }
}
