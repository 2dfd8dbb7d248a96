//! Unit catalog
//!
//! A closed table of convertible units. Each unit carries:
//! - A set of accepted alias tokens ("km", "dc", ...)
//! - A singular and a plural display name
//! - A linear factor relative to the category base unit (meter, gram)
//!
//! Lookup never fails: unresolvable tokens map to [`Unit::Unknown`], and
//! callers decide what an unknown unit means for them.

use serde::{Deserialize, Serialize};

/// Unit category, which determines the applicable conversion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Unknown,
}

impl Category {
    /// Human-readable category name used in messages.
    pub fn description(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Unknown => "Unknown type",
        }
    }
}

/// A convertible unit, or the `Unknown` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
    Celsius,
    Fahrenheit,
    Kelvin,
    Unknown,
}

/// Every resolvable unit, in lookup order.
const CATALOG: [Unit; 16] = [
    Unit::Meter,
    Unit::Kilometer,
    Unit::Centimeter,
    Unit::Millimeter,
    Unit::Mile,
    Unit::Yard,
    Unit::Foot,
    Unit::Inch,
    Unit::Gram,
    Unit::Kilogram,
    Unit::Milligram,
    Unit::Pound,
    Unit::Ounce,
    Unit::Celsius,
    Unit::Fahrenheit,
    Unit::Kelvin,
];

impl Unit {
    /// Resolve a token (or a space-joined phrase such as "degrees celsius")
    /// to a unit. Case-insensitive; checks the alias set, then the singular
    /// name, then the plural name. Returns [`Unit::Unknown`] when nothing
    /// matches.
    pub fn resolve(token: &str) -> Unit {
        let token = token.to_lowercase();
        CATALOG
            .into_iter()
            .find(|unit| {
                unit.aliases().contains(&token.as_str())
                    || unit.singular().eq_ignore_ascii_case(&token)
                    || unit.plural().eq_ignore_ascii_case(&token)
            })
            .unwrap_or(Unit::Unknown)
    }

    pub fn category(self) -> Category {
        match self {
            Unit::Meter
            | Unit::Kilometer
            | Unit::Centimeter
            | Unit::Millimeter
            | Unit::Mile
            | Unit::Yard
            | Unit::Foot
            | Unit::Inch => Category::Length,
            Unit::Gram | Unit::Kilogram | Unit::Milligram | Unit::Pound | Unit::Ounce => {
                Category::Weight
            }
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
            Unit::Unknown => Category::Unknown,
        }
    }

    /// Accepted short alias tokens, all lowercase.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Unit::Meter => &["m"],
            Unit::Kilometer => &["km"],
            Unit::Centimeter => &["cm"],
            Unit::Millimeter => &["mm"],
            Unit::Mile => &["mi"],
            Unit::Yard => &["yd"],
            Unit::Foot => &["ft"],
            Unit::Inch => &["in"],
            Unit::Gram => &["g"],
            Unit::Kilogram => &["kg"],
            Unit::Milligram => &["mg"],
            Unit::Pound => &["lb"],
            Unit::Ounce => &["oz"],
            Unit::Celsius => &["celsius", "dc", "c"],
            Unit::Fahrenheit => &["fahrenheit", "df", "f"],
            Unit::Kelvin => &["k"],
            Unit::Unknown => &[],
        }
    }

    /// Display name used when the accompanying value is exactly 1.0.
    pub fn singular(self) -> &'static str {
        match self {
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Centimeter => "centimeter",
            Unit::Millimeter => "millimeter",
            Unit::Mile => "mile",
            Unit::Yard => "yard",
            Unit::Foot => "foot",
            Unit::Inch => "inch",
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Milligram => "milligram",
            Unit::Pound => "pound",
            Unit::Ounce => "ounce",
            Unit::Celsius => "degree Celsius",
            Unit::Fahrenheit => "degree Fahrenheit",
            Unit::Kelvin => "Kelvin",
            Unit::Unknown => "???",
        }
    }

    /// Display name for any other value.
    pub fn plural(self) -> &'static str {
        match self {
            Unit::Meter => "meters",
            Unit::Kilometer => "kilometers",
            Unit::Centimeter => "centimeters",
            Unit::Millimeter => "millimeters",
            Unit::Mile => "miles",
            Unit::Yard => "yards",
            Unit::Foot => "feet",
            Unit::Inch => "inches",
            Unit::Gram => "grams",
            Unit::Kilogram => "kilograms",
            Unit::Milligram => "milligrams",
            Unit::Pound => "pounds",
            Unit::Ounce => "ounces",
            Unit::Celsius => "degrees Celsius",
            Unit::Fahrenheit => "degrees Fahrenheit",
            Unit::Kelvin => "Kelvins",
            Unit::Unknown => "???",
        }
    }

    /// Pick the display name matching a value. The comparison against 1.0 is
    /// exact: 1.5, 0.0, and -1.0 all take the plural form.
    pub fn name_for(self, value: f64) -> &'static str {
        if value == 1.0 {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// Linear factor to the category base unit. `None` for temperature
    /// units, which convert through a pairwise table, and for `Unknown`.
    pub fn factor(self) -> Option<f64> {
        match self {
            Unit::Meter => Some(1.0),
            Unit::Kilometer => Some(1000.0),
            Unit::Centimeter => Some(0.01),
            Unit::Millimeter => Some(0.001),
            Unit::Mile => Some(1609.35),
            Unit::Yard => Some(0.9144),
            Unit::Foot => Some(0.3048),
            Unit::Inch => Some(0.0254),
            Unit::Gram => Some(1.0),
            Unit::Kilogram => Some(1000.0),
            Unit::Milligram => Some(0.001),
            Unit::Pound => Some(453.592),
            Unit::Ounce => Some(28.349),
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin | Unit::Unknown => None,
        }
    }
}
