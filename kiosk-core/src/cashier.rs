//! Cash drawer
//!
//! A single accumulated total. Deposits add; withdrawal hands out the whole
//! balance and leaves the drawer at zero.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cashier {
    money: i32,
}

impl Cashier {
    pub const fn new(money: i32) -> Self {
        Cashier { money }
    }

    pub fn deposit(&mut self, amount: i32) {
        self.money += amount;
    }

    /// Return the full balance and reset it to zero.
    pub fn withdraw(&mut self) -> i32 {
        std::mem::take(&mut self.money)
    }

    pub fn balance(&self) -> i32 {
        self.money
    }
}

impl std::fmt::Display for Cashier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${} of money", self.money)
    }
}
