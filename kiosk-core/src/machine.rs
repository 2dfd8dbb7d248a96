//! Coffee machine inventory model
//!
//! The machine owns its supplies and cash drawer and is constructed with
//! explicit initial levels; there is no global instance. A sale is a
//! feasibility check followed by mutation — the check reports the first
//! missing resource and leaves the machine untouched on failure.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cashier::Cashier;
use crate::supplies::{Resource, Supplies};

/// Fixed resource cost and price for one drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub water: i32,
    pub milk: i32,
    pub beans: i32,
    pub price: i32,
}

/// The drinks on offer, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Drink {
    Espresso,
    Latte,
    Cappuccino,
}

impl Drink {
    pub fn recipe(self) -> Recipe {
        match self {
            Drink::Espresso => Recipe {
                water: 250,
                milk: 0,
                beans: 16,
                price: 4,
            },
            Drink::Latte => Recipe {
                water: 350,
                milk: 75,
                beans: 20,
                price: 7,
            },
            Drink::Cappuccino => Recipe {
                water: 200,
                milk: 100,
                beans: 12,
                price: 6,
            },
        }
    }

    /// Supplies consumed by one serving, including the cup.
    pub fn cost(self) -> Supplies {
        let recipe = self.recipe();
        Supplies::new(recipe.water, recipe.milk, recipe.beans, 1)
    }
}

/// A refused operation. `Display` text is shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineError {
    #[error("not enough {0}")]
    OutOf(Resource),
}

/// One coffee machine: supply levels plus the cash drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeMachine {
    supplies: Supplies,
    cashier: Cashier,
}

impl CoffeeMachine {
    pub const fn new(supplies: Supplies, cash: i32) -> Self {
        CoffeeMachine {
            supplies,
            cashier: Cashier::new(cash),
        }
    }

    pub fn supplies(&self) -> Supplies {
        self.supplies
    }

    pub fn cash(&self) -> i32 {
        self.cashier.balance()
    }

    /// Sell one drink: check feasibility, then consume supplies and credit
    /// the price. On failure nothing is consumed.
    pub fn sell(&mut self, drink: Drink) -> Result<(), MachineError> {
        let remaining = self
            .supplies
            .checked_sub(drink.cost())
            .map_err(MachineError::OutOf)?;
        self.supplies = remaining;
        self.cashier.deposit(drink.recipe().price);
        log::debug!("sold {:?}, supplies now {:?}", drink, self.supplies);
        Ok(())
    }

    /// Additive restock; zero entries leave their counter unchanged.
    pub fn restock(&mut self, delta: Supplies) {
        self.supplies = self.supplies + delta;
        log::debug!("restocked {:?}, supplies now {:?}", delta, self.supplies);
    }

    /// Hand out the whole cash balance and reset it to zero.
    pub fn empty_cashier(&mut self) -> i32 {
        self.cashier.withdraw()
    }
}

impl Default for CoffeeMachine {
    /// A fresh machine as shipped: 400 ml water, 540 ml milk, 120 g beans,
    /// 9 cups, $550 in the drawer.
    fn default() -> Self {
        CoffeeMachine::new(Supplies::new(400, 540, 120, 9), 550)
    }
}

impl fmt::Display for CoffeeMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The coffee machine has:\n{}\n{}",
            self.supplies, self.cashier
        )
    }
}
