//! Conversion engine
//!
//! Converts a value between two units named by free-form tokens. Length and
//! weight convert linearly through the category base unit; temperature uses
//! a fixed pairwise table. Everything else, including any unknown unit, is
//! an [`ConvertError::Unsupported`] outcome — an ordinary printable value,
//! not a fault.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::{Category, Unit};

/// A successful conversion, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    pub from: Unit,
    pub result: f64,
    pub to: Unit,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is {} {}",
            self.value,
            self.from.name_for(self.value),
            self.result,
            self.to.name_for(self.result),
        )
    }
}

/// A conversion the engine refuses to perform. Both variants are expected
/// interactive outcomes; their `Display` text is shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvertError {
    /// Negative values are rejected for linear categories.
    #[error("{} shouldn't be negative", .category.description())]
    NegativeValue { category: Category },

    /// Categories differ, or a unit did not resolve.
    #[error("Conversion from {} to {} is impossible", .from.plural(), .to.plural())]
    Unsupported { from: Unit, to: Unit },
}

/// Convert `value` from one unit token to another. The tokens may be
/// multi-word phrases ("degrees celsius"); resolution is case-insensitive.
pub fn convert(value: f64, from_token: &str, to_token: &str) -> Result<Conversion, ConvertError> {
    let from = Unit::resolve(from_token);
    let to = Unit::resolve(to_token);

    let result = match (from.category(), to.category()) {
        (Category::Length, Category::Length) | (Category::Weight, Category::Weight) => {
            if value < 0.0 {
                return Err(ConvertError::NegativeValue {
                    category: from.category(),
                });
            }
            linear(value, from, to)
        }
        (Category::Temperature, Category::Temperature) => thermal(value, from, to),
        _ => return Err(ConvertError::Unsupported { from, to }),
    };

    Ok(Conversion {
        value,
        from,
        result,
        to,
    })
}

/// Scale through the category base unit. Only called for units from a
/// linear category, where the factor is always present.
fn linear(value: f64, from: Unit, to: Unit) -> f64 {
    match (from.factor(), to.factor()) {
        (Some(from_factor), Some(to_factor)) => value * from_factor / to_factor,
        _ => value,
    }
}

/// Fixed pairwise temperature table; identity when both sides match.
fn thermal(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Celsius, Unit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Unit::Fahrenheit, Unit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Unit::Kelvin, Unit::Celsius) => value - 273.15,
        (Unit::Celsius, Unit::Kelvin) => value + 273.15,
        (Unit::Fahrenheit, Unit::Kelvin) => (value + 459.67) * 5.0 / 9.0,
        (Unit::Kelvin, Unit::Fahrenheit) => value * 9.0 / 5.0 - 459.67,
        _ => value,
    }
}
