/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::quantity;
use crate::SiPrefix;

quantity! {
    Length, LengthUnit, "length" {
        METRE: linear("m", 1.0) => from_metres, metres;
        KILOMETRE: linear("km", SiPrefix::Kilo.multiplier())
            => from_kilometres, kilometres;
        CENTIMETRE: linear("cm", SiPrefix::Centi.multiplier())
            => from_centimetres, centimetres;
        MILLIMETRE: linear("mm", SiPrefix::Milli.multiplier())
            => from_millimetres, millimetres;
        MICROMETRE: linear("µm", SiPrefix::Micro.multiplier())
            => from_micrometres, micrometres;
        NANOMETRE: linear("nm", SiPrefix::Nano.multiplier())
            => from_nanometres, nanometres;
        INCH: linear("in", 0.0254) => from_inches, inches;
        FOOT: linear("ft", 0.3048) => from_feet, feet;
        YARD: linear("yd", 0.9144) => from_yards, yards;
        MILE: linear("mi", 1609.344) => from_miles, miles;
        NAUTICAL_MILE: linear("nmi", 1852.0)
            => from_nautical_miles, nautical_miles;
    }
    si: METRE;
    scale: [NANOMETRE, MICROMETRE, MILLIMETRE, METRE, KILOMETRE];
}

quantity! {
    Area, AreaUnit, "area" {
        SQUARE_METRE: linear("m²", 1.0) => from_square_metres, square_metres;
        SQUARE_KILOMETRE: linear("km²", SiPrefix::Kilo.multiplier_pow(2))
            => from_square_kilometres, square_kilometres;
        SQUARE_CENTIMETRE: linear("cm²", 1e-4)
            => from_square_centimetres, square_centimetres;
        SQUARE_MILLIMETRE: linear("mm²", 1e-6)
            => from_square_millimetres, square_millimetres;
        HECTARE: linear("ha", 1e4) => from_hectares, hectares;
        SQUARE_INCH: linear("in²", 0.00064516)
            => from_square_inches, square_inches;
        SQUARE_FOOT: linear("ft²", 0.09290304)
            => from_square_feet, square_feet;
        ACRE: linear("ac", 4046.8564224) => from_acres, acres;
    }
    si: SQUARE_METRE;
    scale: [SQUARE_MILLIMETRE, SQUARE_CENTIMETRE, SQUARE_METRE, SQUARE_KILOMETRE];
}

quantity! {
    Volume, VolumeUnit, "volume" {
        CUBIC_METRE: linear("m³", 1.0) => from_cubic_metres, cubic_metres;
        CUBIC_DECIMETRE: linear("dm³", 1e-3)
            => from_cubic_decimetres, cubic_decimetres;
        CUBIC_CENTIMETRE: linear("cm³", 1e-6)
            => from_cubic_centimetres, cubic_centimetres;
        LITRE: linear("L", SiPrefix::Milli.multiplier()) => from_litres, litres;
        MILLILITRE: linear("mL", SiPrefix::Micro.multiplier())
            => from_millilitres, millilitres;
        /// US liquid gallon.
        GALLON: linear("gal", 0.003785411784) => from_gallons, gallons;
        CUBIC_FOOT: linear("ft³", 0.028316846592)
            => from_cubic_feet, cubic_feet;
    }
    si: CUBIC_METRE;
    scale: [MILLILITRE, LITRE, CUBIC_METRE];
}
