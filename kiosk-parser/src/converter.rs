//! Conversion request parser
//!
//! Assembles `<number> <unit-phrase> <filler> <unit-phrase>` from a token
//! stream, one token per call. Unit phrases span one or two tokens: a
//! leading "degree"/"degrees" marker shifts the machine into two-token
//! mode, so natural phrasings like
//!
//! ```text
//! 10 degrees Celsius in degrees Fahrenheit
//! ```
//!
//! parse the same way as `10 c in f`. The filler token between the phrases
//! ("in", "to", anything) is consumed and discarded.
//!
//! The accumulated request is reset on every terminal transition, success
//! or error, so nothing leaks into the next conversion.

use crate::action::ConvertAction;

/// Parser state. One token is consumed per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for a number or "exit"
    Idle,
    /// Number stored, waiting for the source unit phrase
    ReadNumber,
    /// Source phrase complete, waiting for the filler word
    ReadUnitNameIn,
    /// Source phrase opened with a degree marker, one more token to come
    ReadDegreeUnitNameIn,
    /// Filler consumed, waiting for the destination unit phrase
    ReadFillerWord,
    /// Destination phrase opened with a degree marker
    ReadDegreeUnitNameOut,
    /// Terminal
    Exit,
}

/// The pending conversion request being accumulated.
#[derive(Debug, Clone, PartialEq, Default)]
struct Request {
    value: f64,
    from: String,
    to: String,
}

impl Request {
    fn reset(&mut self) {
        self.value = 0.0;
        self.from.clear();
        self.to.clear();
    }
}

/// The "degree"/"degrees" lookahead marker, case-insensitive.
fn is_degree_marker(token: &str) -> bool {
    token.eq_ignore_ascii_case("degree") || token.eq_ignore_ascii_case("degrees")
}

/// The conversion request state machine.
#[derive(Debug)]
pub struct ConvertParser {
    state: State,
    request: Request,
}

impl Default for ConvertParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvertParser {
    pub fn new() -> Self {
        ConvertParser {
            state: State::Idle,
            request: Request::default(),
        }
    }

    /// Prompt due before the next token, if any. Only the idle state
    /// prompts; mid-request tokens arrive unprompted.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.state {
            State::Idle => Some("Enter what you want to convert (or exit): "),
            _ => None,
        }
    }

    /// True once "exit" has been accepted; no further tokens are consumed.
    pub fn is_done(&self) -> bool {
        self.state == State::Exit
    }

    /// Consume one token. Returns at most one action; `None` means the
    /// token was absorbed into the pending request.
    pub fn advance(&mut self, token: &str) -> Option<ConvertAction> {
        log::trace!("convert parser: {:?} <- {:?}", self.state, token);
        match self.state {
            State::Idle => {
                if let Ok(value) = token.parse::<f64>() {
                    self.request.value = value;
                    self.state = State::ReadNumber;
                    None
                } else if token == "exit" {
                    self.state = State::Exit;
                    None
                } else {
                    self.fail()
                }
            }
            State::ReadNumber => {
                if is_degree_marker(token) {
                    self.push_from(token);
                    self.state = State::ReadDegreeUnitNameIn;
                } else {
                    self.push_from(token);
                    self.state = State::ReadUnitNameIn;
                }
                None
            }
            State::ReadDegreeUnitNameIn => {
                self.push_from(token);
                self.state = State::ReadUnitNameIn;
                None
            }
            State::ReadUnitNameIn => {
                // Filler word: carries no information
                self.state = State::ReadFillerWord;
                None
            }
            State::ReadFillerWord => {
                if is_degree_marker(token) {
                    self.push_to(token);
                    self.state = State::ReadDegreeUnitNameOut;
                    None
                } else {
                    self.push_to(token);
                    Some(self.complete())
                }
            }
            State::ReadDegreeUnitNameOut => {
                self.push_to(token);
                Some(self.complete())
            }
            State::Exit => None,
        }
    }

    fn push_from(&mut self, token: &str) {
        if !self.request.from.is_empty() {
            self.request.from.push(' ');
        }
        self.request.from.push_str(&token.to_lowercase());
    }

    fn push_to(&mut self, token: &str) {
        if !self.request.to.is_empty() {
            self.request.to.push(' ');
        }
        self.request.to.push_str(&token.to_lowercase());
    }

    /// Terminal success transition: hand the request over and reset.
    fn complete(&mut self) -> ConvertAction {
        let action = ConvertAction::Convert {
            value: self.request.value,
            from: std::mem::take(&mut self.request.from),
            to: std::mem::take(&mut self.request.to),
        };
        self.request.reset();
        self.state = State::Idle;
        action
    }

    /// Terminal error transition: report and reset.
    fn fail(&mut self) -> Option<ConvertAction> {
        self.request.reset();
        self.state = State::Idle;
        Some(ConvertAction::ParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed a whitespace-separated script and collect all emitted actions.
    fn run(parser: &mut ConvertParser, script: &str) -> Vec<ConvertAction> {
        script
            .split_whitespace()
            .filter_map(|token| parser.advance(token))
            .collect()
    }

    #[test]
    fn test_simple_request() {
        let mut parser = ConvertParser::new();
        let actions = run(&mut parser, "10 m in cm");
        assert_eq!(
            actions,
            vec![ConvertAction::Convert {
                value: 10.0,
                from: "m".into(),
                to: "cm".into(),
            }]
        );
    }

    #[test]
    fn test_degree_phrases_span_two_tokens() {
        let mut parser = ConvertParser::new();
        let actions = run(&mut parser, "10 degrees Celsius in degrees Fahrenheit");
        assert_eq!(
            actions,
            vec![ConvertAction::Convert {
                value: 10.0,
                from: "degrees celsius".into(),
                to: "degrees fahrenheit".into(),
            }]
        );
    }

    #[test]
    fn test_mixed_phrase_lengths() {
        let mut parser = ConvertParser::new();
        let actions = run(&mut parser, "5 degree Celsius to k");
        assert_eq!(
            actions,
            vec![ConvertAction::Convert {
                value: 5.0,
                from: "degree celsius".into(),
                to: "k".into(),
            }]
        );
    }

    #[test]
    fn test_any_filler_word_is_accepted() {
        let mut parser = ConvertParser::new();
        let actions = run(&mut parser, "1 km convertTo m");
        assert_eq!(
            actions,
            vec![ConvertAction::Convert {
                value: 1.0,
                from: "km".into(),
                to: "m".into(),
            }]
        );
    }

    #[test]
    fn test_non_number_in_idle_is_a_parse_error() {
        let mut parser = ConvertParser::new();
        assert_eq!(parser.advance("banana"), Some(ConvertAction::ParseError));
        // Recovered: prompting again from idle.
        assert!(parser.prompt().is_some());
        assert!(!parser.is_done());
    }

    #[test]
    fn test_negative_and_fractional_numbers_are_accepted() {
        let mut parser = ConvertParser::new();
        let actions = run(&mut parser, "-5.5 m in km");
        assert_eq!(
            actions,
            vec![ConvertAction::Convert {
                value: -5.5,
                from: "m".into(),
                to: "km".into(),
            }]
        );
    }

    #[test]
    fn test_exit_only_from_idle() {
        let mut parser = ConvertParser::new();
        assert_eq!(parser.advance("exit"), None);
        assert!(parser.is_done());

        // Mid-request, "exit" is just a unit token.
        let mut parser = ConvertParser::new();
        let actions = run(&mut parser, "10 exit in m");
        assert_eq!(
            actions,
            vec![ConvertAction::Convert {
                value: 10.0,
                from: "exit".into(),
                to: "m".into(),
            }]
        );
    }

    #[test]
    fn test_request_resets_after_success() {
        let mut parser = ConvertParser::new();
        run(&mut parser, "10 degrees Celsius in Kelvin");
        let actions = run(&mut parser, "2 m in cm");
        // Nothing from the first request may leak into the second.
        assert_eq!(
            actions,
            vec![ConvertAction::Convert {
                value: 2.0,
                from: "m".into(),
                to: "cm".into(),
            }]
        );
    }

    #[test]
    fn test_request_resets_after_error() {
        let mut parser = ConvertParser::new();
        assert_eq!(parser.advance("oops"), Some(ConvertAction::ParseError));
        let actions = run(&mut parser, "3 km in m");
        assert_eq!(
            actions,
            vec![ConvertAction::Convert {
                value: 3.0,
                from: "km".into(),
                to: "m".into(),
            }]
        );
    }

    #[test]
    fn test_one_token_per_transition() {
        let mut parser = ConvertParser::new();
        // Each token individually; only the final one completes.
        assert_eq!(parser.advance("10"), None);
        assert_eq!(parser.advance("m"), None);
        assert_eq!(parser.advance("in"), None);
        assert!(matches!(
            parser.advance("km"),
            Some(ConvertAction::Convert { .. })
        ));
    }

    #[test]
    fn test_prompt_only_in_idle() {
        let mut parser = ConvertParser::new();
        assert!(parser.prompt().is_some());
        parser.advance("10");
        assert!(parser.prompt().is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Arbitrary token streams never panic the parser, and every
            /// parse error lands back in the prompting idle state.
            #[test]
            fn prop_always_continuable(tokens in proptest::collection::vec("[!-~]{1,8}", 0..64)) {
                let mut parser = ConvertParser::new();
                for token in &tokens {
                    if parser.is_done() {
                        break;
                    }
                    if parser.advance(token) == Some(ConvertAction::ParseError) {
                        prop_assert!(parser.prompt().is_some());
                        prop_assert!(!parser.is_done());
                    }
                }
            }

            /// A parse error always returns the machine to the prompting
            /// idle state.
            #[test]
            fn prop_error_recovers_to_idle(token in "[a-z]{2,8}") {
                prop_assume!(token != "exit");
                let mut parser = ConvertParser::new();
                if parser.advance(&token) == Some(ConvertAction::ParseError) {
                    prop_assert!(parser.prompt().is_some());
                    prop_assert!(!parser.is_done());
                }
            }
        }
    }
}
