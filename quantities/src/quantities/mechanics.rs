/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::quantity;
use crate::SiPrefix;

const POUND: f64 = 0.45359237;
const FOOT: f64 = 0.3048;
const STANDARD_GRAVITY: f64 = 9.80665;
const POUND_FORCE: f64 = POUND * STANDARD_GRAVITY;

quantity! {
    Mass, MassUnit, "mass" {
        KILOGRAM: linear("kg", 1.0) => from_kilograms, kilograms;
        TONNE: linear("t", 1e3) => from_tonnes, tonnes;
        GRAM: linear("g", 1e-3) => from_grams, grams;
        MILLIGRAM: linear("mg", 1e-6) => from_milligrams, milligrams;
        MICROGRAM: linear("µg", 1e-9) => from_micrograms, micrograms;
        POUND: linear("lb", POUND) => from_pounds, pounds;
        OUNCE: linear("oz", POUND / 16.0) => from_ounces, ounces;
    }
    si: KILOGRAM;
    scale: [MICROGRAM, MILLIGRAM, GRAM, KILOGRAM, TONNE];
}

quantity! {
    Force, ForceUnit, "force" {
        NEWTON: linear("N", 1.0) => from_newtons, newtons;
        MILLINEWTON: linear("mN", SiPrefix::Milli.multiplier())
            => from_millinewtons, millinewtons;
        KILONEWTON: linear("kN", SiPrefix::Kilo.multiplier())
            => from_kilonewtons, kilonewtons;
        MEGANEWTON: linear("MN", SiPrefix::Mega.multiplier())
            => from_meganewtons, meganewtons;
        KILOGRAM_FORCE: linear("kgf", STANDARD_GRAVITY)
            => from_kilograms_force, kilograms_force;
        POUND_FORCE: linear("lbf", POUND_FORCE)
            => from_pounds_force, pounds_force;
        DYNE: linear("dyn", 1e-5) => from_dynes, dynes;
    }
    si: NEWTON;
    scale: [MILLINEWTON, NEWTON, KILONEWTON, MEGANEWTON];
}

quantity! {
    Momentum, MomentumUnit, "momentum" {
        KILOGRAM_METRE_PER_SECOND: linear("kg⋅m/s", 1.0)
            => from_kilogram_metres_per_second, kilogram_metres_per_second;
        NEWTON_SECOND: linear("N⋅s", 1.0)
            => from_newton_seconds, newton_seconds;
        GRAM_CENTIMETRE_PER_SECOND: linear("g⋅cm/s", 1e-5)
            => from_gram_centimetres_per_second, gram_centimetres_per_second;
        POUND_FOOT_PER_SECOND: linear("lb⋅ft/s", POUND * FOOT)
            => from_pound_feet_per_second, pound_feet_per_second;
    }
    si: KILOGRAM_METRE_PER_SECOND;
    scale: [];
}

quantity! {
    Torque, TorqueUnit, "torque" {
        NEWTON_METRE: linear("N⋅m", 1.0)
            => from_newton_metres, newton_metres;
        NEWTON_MILLIMETRE: linear("N⋅mm", SiPrefix::Milli.multiplier())
            => from_newton_millimetres, newton_millimetres;
        KILONEWTON_METRE: linear("kN⋅m", SiPrefix::Kilo.multiplier())
            => from_kilonewton_metres, kilonewton_metres;
        KILOGRAM_FORCE_METRE: linear("kgf⋅m", STANDARD_GRAVITY)
            => from_kilogram_force_metres, kilogram_force_metres;
        POUND_FORCE_FOOT: linear("lbf⋅ft", POUND_FORCE * FOOT)
            => from_pound_force_feet, pound_force_feet;
    }
    si: NEWTON_METRE;
    scale: [NEWTON_MILLIMETRE, NEWTON_METRE, KILONEWTON_METRE];
}

quantity! {
    Energy, EnergyUnit, "energy" {
        JOULE: linear("J", 1.0) => from_joules, joules;
        MILLIJOULE: linear("mJ", SiPrefix::Milli.multiplier())
            => from_millijoules, millijoules;
        KILOJOULE: linear("kJ", SiPrefix::Kilo.multiplier())
            => from_kilojoules, kilojoules;
        MEGAJOULE: linear("MJ", SiPrefix::Mega.multiplier())
            => from_megajoules, megajoules;
        GIGAJOULE: linear("GJ", SiPrefix::Giga.multiplier())
            => from_gigajoules, gigajoules;
        WATT_HOUR: linear("Wh", 3600.0) => from_watt_hours, watt_hours;
        KILOWATT_HOUR: linear("kWh", 3.6e6).with_precision(3)
            => from_kilowatt_hours, kilowatt_hours;
        /// Thermochemical calorie.
        CALORIE: linear("cal", 4.184) => from_calories, calories;
        KILOCALORIE: linear("kcal", 4184.0)
            => from_kilocalories, kilocalories;
        ELECTRONVOLT: linear("eV", 1.602176634e-19)
            => from_electronvolts, electronvolts;
        /// International table BTU.
        BRITISH_THERMAL_UNIT: linear("BTU", 1055.05585262)
            => from_british_thermal_units, british_thermal_units;
    }
    si: JOULE;
    scale: [MILLIJOULE, JOULE, KILOJOULE, MEGAJOULE, GIGAJOULE];
}

quantity! {
    Power, PowerUnit, "power" {
        WATT: linear("W", 1.0) => from_watts, watts;
        MILLIWATT: linear("mW", SiPrefix::Milli.multiplier())
            => from_milliwatts, milliwatts;
        KILOWATT: linear("kW", SiPrefix::Kilo.multiplier())
            => from_kilowatts, kilowatts;
        MEGAWATT: linear("MW", SiPrefix::Mega.multiplier())
            => from_megawatts, megawatts;
        GIGAWATT: linear("GW", SiPrefix::Giga.multiplier())
            => from_gigawatts, gigawatts;
        /// Mechanical horsepower.
        HORSEPOWER: linear("hp", 550.0 * POUND_FORCE * FOOT)
            => from_horsepower, horsepower;
    }
    si: WATT;
    scale: [MILLIWATT, WATT, KILOWATT, MEGAWATT, GIGAWATT];
}

quantity! {
    Pressure, PressureUnit, "pressure" {
        PASCAL: linear("Pa", 1.0) => from_pascals, pascals;
        HECTOPASCAL: linear("hPa", SiPrefix::Hecto.multiplier())
            => from_hectopascals, hectopascals;
        KILOPASCAL: linear("kPa", SiPrefix::Kilo.multiplier())
            .with_precision(3)
            => from_kilopascals, kilopascals;
        MEGAPASCAL: linear("MPa", SiPrefix::Mega.multiplier())
            => from_megapascals, megapascals;
        GIGAPASCAL: linear("GPa", SiPrefix::Giga.multiplier())
            => from_gigapascals, gigapascals;
        MILLIBAR: linear("mbar", 100.0) => from_millibars, millibars;
        BAR: linear("bar", 1e5).with_precision(3) => from_bars, bars;
        /// Standard atmosphere.
        ATMOSPHERE: linear("atm", 101325.0) => from_atmospheres, atmospheres;
        POUND_PER_SQUARE_INCH: linear("psi", POUND_FORCE / (0.0254 * 0.0254))
            => from_pounds_per_square_inch, pounds_per_square_inch;
        TORR: linear("Torr", 101325.0 / 760.0) => from_torrs, torrs;
        MILLIMETRE_OF_MERCURY: linear("mmHg", 133.322387415)
            => from_millimetres_of_mercury, millimetres_of_mercury;
    }
    si: PASCAL;
    scale: [PASCAL, KILOPASCAL, MEGAPASCAL, GIGAPASCAL];
}

quantity! {
    Density, DensityUnit, "density" {
        KILOGRAM_PER_CUBIC_METRE: linear("kg/m³", 1.0)
            => from_kilograms_per_cubic_metre, kilograms_per_cubic_metre;
        GRAM_PER_CUBIC_CENTIMETRE: linear("g/cm³", 1e3)
            => from_grams_per_cubic_centimetre, grams_per_cubic_centimetre;
        GRAM_PER_LITRE: linear("g/L", 1.0)
            => from_grams_per_litre, grams_per_litre;
        KILOGRAM_PER_LITRE: linear("kg/L", 1e3)
            => from_kilograms_per_litre, kilograms_per_litre;
        POUND_PER_CUBIC_FOOT: linear("lb/ft³", POUND / (FOOT * FOOT * FOOT))
            => from_pounds_per_cubic_foot, pounds_per_cubic_foot;
    }
    si: KILOGRAM_PER_CUBIC_METRE;
    scale: [];
}

quantity! {
    /// Mass per unit area.
    AreaDensity, AreaDensityUnit, "area density" {
        KILOGRAM_PER_SQUARE_METRE: linear("kg/m²", 1.0)
            => from_kilograms_per_square_metre, kilograms_per_square_metre;
        GRAM_PER_SQUARE_METRE: linear("g/m²", 1e-3)
            => from_grams_per_square_metre, grams_per_square_metre;
        POUND_PER_SQUARE_FOOT: linear("lb/ft²", POUND / (FOOT * FOOT))
            => from_pounds_per_square_foot, pounds_per_square_foot;
    }
    si: KILOGRAM_PER_SQUARE_METRE;
    scale: [GRAM_PER_SQUARE_METRE, KILOGRAM_PER_SQUARE_METRE];
}
