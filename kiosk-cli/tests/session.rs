//! Scripted session tests
//!
//! Each test feeds a full input script through a REPL and compares the
//! complete output transcript — prompts included — against the expected
//! text. This pins down prompt placement, message wording, and state
//! machine recovery end to end.

use kiosk_cli::repl::{run_converter, run_machine};
use kiosk_core::{CoffeeMachine, Supplies};

fn converter_transcript(script: &str) -> String {
    let mut out = Vec::new();
    run_converter(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn machine_transcript(machine: &mut CoffeeMachine, script: &str) -> String {
    let mut out = Vec::new();
    run_machine(machine, script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

const CONVERT_PROMPT: &str = "Enter what you want to convert (or exit): \n";
const ACTION_PROMPT: &str = "Write action (buy, fill, take, remaining, exit): > \n";
const MENU_PROMPT: &str =
    "What do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino, back - to main menu: > \n";

#[test]
fn converter_full_session() {
    let transcript = converter_transcript(
        "10 m in cm\n\
         1 meter in centimeters\n\
         -5 m in ft\n\
         5 m in g\n\
         hello\n\
         exit\n",
    );
    let expected = format!(
        "{p}10 meters is 1000 centimeters\n\
         {p}1 meter is 100 centimeters\n\
         {p}Length shouldn't be negative\n\
         {p}Conversion from meters to grams is impossible\n\
         {p}Parse error\n\
         {p}",
        p = CONVERT_PROMPT
    );
    assert_eq!(transcript, expected);
}

#[test]
fn converter_degree_phrases() {
    let transcript = converter_transcript(
        "10 degrees Celsius in degrees Fahrenheit\n\
         0 celsius in k\n\
         exit\n",
    );
    let expected = format!(
        "{p}10 degrees Celsius is 50 degrees Fahrenheit\n\
         {p}0 degrees Celsius is 273.15 Kelvins\n\
         {p}",
        p = CONVERT_PROMPT
    );
    assert_eq!(transcript, expected);
}

#[test]
fn converter_recovers_between_requests() {
    // A parse error mid-session must not leak into the next request.
    let transcript = converter_transcript(
        "oops\n\
         2 km in m\n\
         exit\n",
    );
    let expected = format!(
        "{p}Parse error\n\
         {p}2 kilometers is 2000 meters\n\
         {p}",
        p = CONVERT_PROMPT
    );
    assert_eq!(transcript, expected);
}

#[test]
fn coffee_buy_and_take_session() {
    let mut machine = CoffeeMachine::default();
    let transcript = machine_transcript(&mut machine, "remaining\nbuy 1\nremaining\ntake\nexit\n");
    let expected = format!(
        "{a}The coffee machine has:\n\
         400 of water\n\
         540 of milk\n\
         120 of coffee beans\n\
         9 of disposable cups\n\
         $550 of money\n\
         {a}{m}I have enough resources, making you a coffee!\n\
         {a}The coffee machine has:\n\
         150 of water\n\
         540 of milk\n\
         104 of coffee beans\n\
         8 of disposable cups\n\
         $554 of money\n\
         {a}I gave you $554\n\
         {a}",
        a = ACTION_PROMPT,
        m = MENU_PROMPT
    );
    assert_eq!(transcript, expected);
    assert_eq!(machine.cash(), 0);
}

#[test]
fn coffee_runs_out_of_water_without_partial_consumption() {
    // A fresh machine's 400 ml of water covers exactly one 350 ml latte.
    let mut machine = CoffeeMachine::default();
    let transcript = machine_transcript(&mut machine, "buy 2 buy 2 buy 2 exit");
    assert_eq!(transcript.matches("making you a coffee!").count(), 1);
    assert_eq!(transcript.matches("Sorry, not enough water!\n").count(), 2);
    // The refused lattes consumed nothing and credited nothing.
    assert_eq!(machine.supplies(), Supplies::new(50, 465, 100, 8));
    assert_eq!(machine.cash(), 557);
}

#[test]
fn coffee_fill_sequence_and_bad_quantity() {
    let mut machine = CoffeeMachine::default();
    let transcript = machine_transcript(
        &mut machine,
        "fill 100 50 20 5\n\
         fill lots\n\
         remaining\n\
         exit\n",
    );
    // Full fill applied...
    assert_eq!(machine.supplies(), Supplies::new(500, 590, 140, 14));
    // ...and the aborted fill changed nothing but printed the error.
    assert!(transcript.contains("Unrecognised input\n"));
    assert!(transcript.contains("500 of water\n590 of milk\n140 of coffee beans\n14 of disposable cups\n"));
    // Prompts walked the whole fill chain.
    assert!(transcript.contains("ml of water"));
    assert!(transcript.contains("ml of milk"));
    assert!(transcript.contains("grams of coffee beans"));
    assert!(transcript.contains("disposable cups of coffee"));
}

#[test]
fn coffee_menu_back_and_unknown_command() {
    let mut machine = CoffeeMachine::default();
    let transcript = machine_transcript(&mut machine, "buy back brew exit");
    let expected = format!(
        "{a}{m}{a}Unrecognised input\n{a}",
        a = ACTION_PROMPT,
        m = MENU_PROMPT
    );
    assert_eq!(transcript, expected);
    // Nothing was sold or taken.
    assert_eq!(machine.supplies(), Supplies::new(400, 540, 120, 9));
    assert_eq!(machine.cash(), 550);
}
