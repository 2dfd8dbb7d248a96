//! Kiosk Simulator Core
//!
//! This crate provides the I/O-free domain model shared by the kiosk
//! simulators:
//! - Unit catalog with case-insensitive alias resolution
//! - Conversion engine for length, weight, and temperature units
//! - Coffee machine inventory: supplies, cashier, and drink recipes
//!
//! Nothing in this crate reads input or prints output; every outcome,
//! including failed conversions and refused sales, is an ordinary value.
//! This keeps the model usable headlessly for testing.

pub mod cashier;
pub mod convert;
pub mod machine;
pub mod supplies;
pub mod units;

pub use cashier::Cashier;
pub use convert::{convert, Conversion, ConvertError};
pub use machine::{CoffeeMachine, Drink, MachineError, Recipe};
pub use supplies::{Resource, Supplies};
pub use units::{Category, Unit};
