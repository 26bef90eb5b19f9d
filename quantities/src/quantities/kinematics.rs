/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::quantity;
use crate::SiPrefix;

quantity! {
    Time, TimeUnit, "time" {
        SECOND: linear("s", 1.0) => from_seconds, seconds;
        MILLISECOND: linear("ms", SiPrefix::Milli.multiplier())
            => from_milliseconds, milliseconds;
        MICROSECOND: linear("µs", SiPrefix::Micro.multiplier())
            => from_microseconds, microseconds;
        NANOSECOND: linear("ns", SiPrefix::Nano.multiplier())
            => from_nanoseconds, nanoseconds;
        MINUTE: linear("min", 60.0) => from_minutes, minutes;
        HOUR: linear("h", 3600.0) => from_hours, hours;
        DAY: linear("d", 86400.0) => from_days, days;
    }
    si: SECOND;
    scale: [NANOSECOND, MICROSECOND, MILLISECOND, SECOND, MINUTE, HOUR, DAY];
}

quantity! {
    Frequency, FrequencyUnit, "frequency" {
        HERTZ: linear("Hz", 1.0) => from_hertz, hertz;
        KILOHERTZ: linear("kHz", SiPrefix::Kilo.multiplier())
            => from_kilohertz, kilohertz;
        MEGAHERTZ: linear("MHz", SiPrefix::Mega.multiplier())
            => from_megahertz, megahertz;
        GIGAHERTZ: linear("GHz", SiPrefix::Giga.multiplier())
            => from_gigahertz, gigahertz;
        REVOLUTION_PER_MINUTE: linear("rpm", 1.0 / 60.0)
            => from_revolutions_per_minute, revolutions_per_minute;
    }
    si: HERTZ;
    scale: [HERTZ, KILOHERTZ, MEGAHERTZ, GIGAHERTZ];
}

quantity! {
    Speed, SpeedUnit, "speed" {
        METRE_PER_SECOND: linear("m/s", 1.0)
            => from_metres_per_second, metres_per_second;
        KILOMETRE_PER_HOUR: linear("km/h", 1.0 / 3.6).with_precision(1)
            => from_kilometres_per_hour, kilometres_per_hour;
        FOOT_PER_SECOND: linear("ft/s", 0.3048)
            => from_feet_per_second, feet_per_second;
        MILE_PER_HOUR: linear("mph", 0.44704).with_precision(1)
            => from_miles_per_hour, miles_per_hour;
        KNOT: linear("kn", 1852.0 / 3600.0) => from_knots, knots;
    }
    si: METRE_PER_SECOND;
    scale: [];
}

quantity! {
    Acceleration, AccelerationUnit, "acceleration" {
        METRE_PER_SECOND_SQUARED: linear("m/s²", 1.0)
            => from_metres_per_second_squared, metres_per_second_squared;
        FOOT_PER_SECOND_SQUARED: linear("ft/s²", 0.3048)
            => from_feet_per_second_squared, feet_per_second_squared;
        /// Standard gravity.
        STANDARD_GRAVITY: linear("g", 9.80665)
            => from_standard_gravities, standard_gravities;
    }
    si: METRE_PER_SECOND_SQUARED;
    scale: [];
}
