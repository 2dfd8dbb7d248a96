//! Read-eval-print loops
//!
//! One whitespace-delimited token is consumed per iteration and fully
//! resolved — parser transition, any model call, any output — before the
//! next token is read. Prompts are printed only when the parser reports one
//! due. End of input terminates a session as cleanly as "exit".

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use kiosk_core::{convert, CoffeeMachine};
use kiosk_parser::{ConvertAction, ConvertParser, MachineAction, MachineParser};

/// Whitespace tokenizer over buffered input, one token at a time.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading further lines as needed. `None` at end of input.
    fn next(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Run the unit converter session until "exit" or end of input.
pub fn run_converter<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut parser = ConvertParser::new();
    let mut tokens = Tokens::new(input);

    while !parser.is_done() {
        if let Some(prompt) = parser.prompt() {
            writeln!(out, "{}", prompt)?;
            out.flush()?;
        }
        let token = match tokens.next()? {
            Some(token) => token,
            None => break,
        };
        match parser.advance(&token) {
            Some(ConvertAction::Convert { value, from, to }) => match convert(value, &from, &to) {
                Ok(conversion) => writeln!(out, "{}", conversion)?,
                Err(error) => writeln!(out, "{}", error)?,
            },
            Some(ConvertAction::ParseError) => writeln!(out, "Parse error")?,
            None => {}
        }
    }
    Ok(())
}

/// Run the coffee machine session until "exit" or end of input.
pub fn run_machine<R: BufRead, W: Write>(
    machine: &mut CoffeeMachine,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut parser = MachineParser::new();
    let mut tokens = Tokens::new(input);

    while !parser.is_done() {
        if let Some(prompt) = parser.prompt() {
            writeln!(out, "{}", prompt)?;
            out.flush()?;
        }
        let token = match tokens.next()? {
            Some(token) => token,
            None => break,
        };
        match parser.advance(&token) {
            Some(MachineAction::ShowStatus) => writeln!(out, "{}", machine)?,
            Some(MachineAction::TakeCash) => {
                writeln!(out, "I gave you ${}", machine.empty_cashier())?
            }
            Some(MachineAction::Restock(delta)) => machine.restock(delta),
            Some(MachineAction::Sell(drink)) => match machine.sell(drink) {
                Ok(()) => writeln!(out, "I have enough resources, making you a coffee!")?,
                Err(error) => writeln!(out, "Sorry, {}!", error)?,
            },
            Some(MachineAction::Unrecognized) => writeln!(out, "Unrecognised input")?,
            None => {}
        }
    }
    Ok(())
}
