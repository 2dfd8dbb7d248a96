//! Coffee machine command parser
//!
//! A simpler instance of the same token-driven pattern: idle commands
//! dispatch directly, "fill" opens a fixed four-step quantity sequence
//! (water, milk, beans, cups — one numeric token each), and "buy" opens a
//! one-token menu selection.
//!
//! A token that fails numeric parsing mid-fill is a recoverable error, not
//! a fault: the parser reports it and returns to idle.

use kiosk_core::{Drink, Supplies};

use crate::action::MachineAction;

/// Parser state. One token is consumed per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for a command
    Idle,
    /// Fill sequence, step 1 of 4
    FillingWater,
    /// Fill sequence, step 2 of 4
    FillingMilk,
    /// Fill sequence, step 3 of 4
    FillingBeans,
    /// Fill sequence, step 4 of 4
    FillingCups,
    /// Waiting for a menu choice or "back"
    Selling,
    /// Terminal
    Exit,
}

/// The coffee machine command state machine.
#[derive(Debug)]
pub struct MachineParser {
    state: State,
}

impl Default for MachineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineParser {
    pub fn new() -> Self {
        MachineParser { state: State::Idle }
    }

    /// Prompt due before the next token. Every non-terminal state prompts.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.state {
            State::Idle => Some("Write action (buy, fill, take, remaining, exit): > "),
            State::FillingWater => Some("Write how many ml of water do you want to add: > "),
            State::FillingMilk => Some("Write how many ml of milk do you want to add: > "),
            State::FillingBeans => {
                Some("Write how many grams of coffee beans do you want to add: > ")
            }
            State::FillingCups => {
                Some("Write how many disposable cups of coffee do you want to add: > ")
            }
            State::Selling => Some(
                "What do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino, \
                 back - to main menu: > ",
            ),
            State::Exit => None,
        }
    }

    /// True once "exit" has been accepted; no further tokens are consumed.
    pub fn is_done(&self) -> bool {
        self.state == State::Exit
    }

    /// Consume one token. Returns at most one action; `None` means the
    /// token only moved the machine between states.
    pub fn advance(&mut self, token: &str) -> Option<MachineAction> {
        log::trace!("machine parser: {:?} <- {:?}", self.state, token);
        match self.state {
            State::Idle => match token {
                "remaining" => Some(MachineAction::ShowStatus),
                "take" => Some(MachineAction::TakeCash),
                "fill" => {
                    self.state = State::FillingWater;
                    None
                }
                "buy" => {
                    self.state = State::Selling;
                    None
                }
                "exit" => {
                    self.state = State::Exit;
                    None
                }
                _ => Some(MachineAction::Unrecognized),
            },
            State::FillingWater => self.fill(token, State::FillingMilk, |amount| {
                Supplies::new(amount, 0, 0, 0)
            }),
            State::FillingMilk => self.fill(token, State::FillingBeans, |amount| {
                Supplies::new(0, amount, 0, 0)
            }),
            State::FillingBeans => self.fill(token, State::FillingCups, |amount| {
                Supplies::new(0, 0, amount, 0)
            }),
            State::FillingCups => self.fill(token, State::Idle, |amount| {
                Supplies::new(0, 0, 0, amount)
            }),
            State::Selling => {
                self.state = State::Idle;
                match token {
                    "1" => Some(MachineAction::Sell(Drink::Espresso)),
                    "2" => Some(MachineAction::Sell(Drink::Latte)),
                    "3" => Some(MachineAction::Sell(Drink::Cappuccino)),
                    "back" => None,
                    _ => Some(MachineAction::Unrecognized),
                }
            }
            State::Exit => None,
        }
    }

    /// One fill step: a quantity token restocks a single category and
    /// chains to the next step; anything else aborts the sequence.
    fn fill(
        &mut self,
        token: &str,
        next: State,
        delta: fn(i32) -> Supplies,
    ) -> Option<MachineAction> {
        match token.parse::<i32>() {
            Ok(amount) => {
                self.state = next;
                Some(MachineAction::Restock(delta(amount)))
            }
            Err(_) => {
                self.state = State::Idle;
                Some(MachineAction::Unrecognized)
            }
        }
    }
}
