//! Semantic actions produced by the parsers
//!
//! Actions are the parsers' entire output: data describing what the driver
//! should do next, never performed effects. This keeps the transition logic
//! independently testable and the drivers trivial.

use serde::{Deserialize, Serialize};

use kiosk_core::{Drink, Supplies};

/// Action produced by the conversion request parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConvertAction {
    /// A complete request: value plus two unit phrases, ready for the
    /// conversion engine. Phrases are lowercase and space-joined.
    Convert {
        value: f64,
        from: String,
        to: String,
    },

    /// The token stream did not match the grammar.
    ParseError,
}

/// Action produced by the coffee machine command parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineAction {
    /// Print the full supply and cash status.
    ShowStatus,

    /// Empty the cash drawer and report the amount.
    TakeCash,

    /// Add the given quantities to the supplies.
    Restock(Supplies),

    /// Attempt to sell one drink.
    Sell(Drink),

    /// The token was not a recognized command.
    Unrecognized,
}
