//! Supply counters
//!
//! Four consumable counters in their native units: water (ml), milk (ml),
//! coffee beans (g), and disposable cups. Restocking adds; consumption goes
//! through [`Supplies::checked_sub`], which reports the first deficient
//! resource without mutating anything.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// One of the four consumable resources, in report priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resource {
    Water,
    Milk,
    Beans,
    Cups,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Water => "water",
            Resource::Milk => "milk",
            Resource::Beans => "beans",
            Resource::Cups => "cups",
        };
        f.write_str(name)
    }
}

/// Supply levels for one machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Supplies {
    pub water: i32,
    pub milk: i32,
    pub beans: i32,
    pub cups: i32,
}

impl Supplies {
    pub const fn new(water: i32, milk: i32, beans: i32, cups: i32) -> Self {
        Supplies {
            water,
            milk,
            beans,
            cups,
        }
    }

    /// Subtract `required`, failing with the FIRST deficient resource in
    /// water → milk → beans → cups order. `self` is never mutated; the
    /// transient negative difference exists only inside this check.
    pub fn checked_sub(self, required: Supplies) -> Result<Supplies, Resource> {
        let remaining = Supplies {
            water: self.water - required.water,
            milk: self.milk - required.milk,
            beans: self.beans - required.beans,
            cups: self.cups - required.cups,
        };
        if remaining.water < 0 {
            Err(Resource::Water)
        } else if remaining.milk < 0 {
            Err(Resource::Milk)
        } else if remaining.beans < 0 {
            Err(Resource::Beans)
        } else if remaining.cups < 0 {
            Err(Resource::Cups)
        } else {
            Ok(remaining)
        }
    }
}

impl Add for Supplies {
    type Output = Supplies;

    fn add(self, other: Supplies) -> Supplies {
        Supplies {
            water: self.water + other.water,
            milk: self.milk + other.milk,
            beans: self.beans + other.beans,
            cups: self.cups + other.cups,
        }
    }
}

impl std::fmt::Display for Supplies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of water\n{} of milk\n{} of coffee beans\n{} of disposable cups",
            self.water, self.milk, self.beans, self.cups
        )
    }
}
