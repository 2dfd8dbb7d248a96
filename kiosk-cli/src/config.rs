//! Command-line interface definition
//!
//! One binary, two simulators. The coffee machine's initial inventory is
//! configurable per run; the defaults are the levels of a fresh machine.

use clap::{Parser, Subcommand};

use kiosk_core::{CoffeeMachine, Supplies};

#[derive(Parser, Debug)]
#[command(name = "kiosk")]
#[command(version)]
#[command(about = "Interactive command-line simulators: coffee machine and unit converter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the unit conversion REPL
    Convert,

    /// Run the coffee machine simulator
    Coffee {
        /// Initial water in the tank (ml)
        #[arg(long, default_value_t = 400)]
        water: i32,

        /// Initial milk in the tank (ml)
        #[arg(long, default_value_t = 540)]
        milk: i32,

        /// Initial coffee beans in the hopper (g)
        #[arg(long, default_value_t = 120)]
        beans: i32,

        /// Initial disposable cups
        #[arg(long, default_value_t = 9)]
        cups: i32,

        /// Initial cash in the drawer
        #[arg(long, default_value_t = 550)]
        cash: i32,
    },
}

impl Commands {
    /// Build the machine described by the coffee flags.
    pub fn machine(&self) -> Option<CoffeeMachine> {
        match *self {
            Commands::Coffee {
                water,
                milk,
                beans,
                cups,
                cash,
            } => Some(CoffeeMachine::new(
                Supplies::new(water, milk, beans, cups),
                cash,
            )),
            Commands::Convert => None,
        }
    }
}
