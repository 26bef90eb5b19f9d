/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error(
        "unknown {dimension} unit '{symbol}' (expected one of: {})",
        .expected.join(", ")
    )]
    UnknownUnit {
        dimension: String,
        symbol: String,
        expected: Vec<String>,
    },
    #[error("malformed numeric literal: '{0}'")]
    NumericFormat(String),
    #[error("tolerance must be positive (got {0})")]
    NonPositiveTolerance(String),
    #[error("malformed format string: '{0}'")]
    MalformedFormat(String),
    #[error("decimal and group separators are both '{0}'")]
    AmbiguousLocale(char),
    #[error("JSON error: {0}")]
    Json(String),
}
