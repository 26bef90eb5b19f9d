/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Process-wide symbol lookup tables, one per dimension, built on
//! first use from the dimension's registered units.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::format::ascii_symbol;
use crate::{Dimension, Unit, UnitError};

lazy_static! {
    static ref REGISTRY: RwLock<HashMap<TypeId, Arc<SymbolTable>>> =
        RwLock::new(HashMap::new());
}

struct SymbolTable {
    /// Accepted spelling -> index in `Dimension::UNITS`.
    symbols: HashMap<String, usize>,
    expected: Vec<String>,
}

impl SymbolTable {
    fn build<D: Dimension>() -> Self {
        let mut symbols = HashMap::new();
        for (i, unit) in D::UNITS.iter().enumerate() {
            if symbols.contains_key(unit.symbol()) {
                log::warn!(
                    "duplicate {} unit symbol '{}': only the first \
                     registration is reachable by symbol",
                    D::NAME,
                    unit.symbol()
                );
                continue;
            }
            symbols.insert(unit.symbol().to_string(), i);
        }
        /* Aliases never shadow a registered symbol. */
        for (i, unit) in D::UNITS.iter().enumerate() {
            for alias in aliases(unit.symbol()) {
                symbols.entry(alias).or_insert(i);
            }
        }
        log::debug!(
            "registered {} spellings for {} {} units",
            symbols.len(),
            D::UNITS.len(),
            D::NAME
        );
        SymbolTable {
            symbols,
            expected: D::UNITS.iter().map(|u| u.symbol().to_string()).collect(),
        }
    }
}

/// Alternative spellings of a symbol: the ASCII form and the
/// greek mu in place of the micro sign.
fn aliases(symbol: &str) -> Vec<String> {
    let mut r = Vec::new();
    let ascii = ascii_symbol(symbol);
    if ascii != symbol {
        r.push(ascii);
    }
    if symbol.contains('µ') {
        r.push(symbol.replace('µ', "μ"));
    }
    r
}

fn table<D: Dimension>() -> Arc<SymbolTable> {
    let key = TypeId::of::<D>();
    if let Some(table) = REGISTRY.read().get(&key) {
        return table.clone();
    }
    let table = Arc::new(SymbolTable::build::<D>());
    REGISTRY.write().entry(key).or_insert(table).clone()
}

pub(crate) fn lookup<D: Dimension>(symbol: &str) -> Option<Unit<D>> {
    table::<D>().symbols.get(symbol).map(|i| D::UNITS[*i])
}

pub(crate) fn unknown<D: Dimension>(symbol: &str) -> UnitError {
    UnitError::UnknownUnit {
        dimension: D::NAME.to_string(),
        symbol: symbol.to_string(),
        expected: table::<D>().expected.clone(),
    }
}
