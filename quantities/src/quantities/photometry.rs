/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::dimension::quantity;
use crate::SiPrefix;

quantity! {
    LuminousFlux, LuminousFluxUnit, "luminous flux" {
        LUMEN: linear("lm", 1.0) => from_lumens, lumens;
        MILLILUMEN: linear("mlm", SiPrefix::Milli.multiplier())
            => from_millilumens, millilumens;
        KILOLUMEN: linear("klm", SiPrefix::Kilo.multiplier())
            => from_kilolumens, kilolumens;
    }
    si: LUMEN;
    scale: [MILLILUMEN, LUMEN, KILOLUMEN];
}
