//! The [`invocation`](self) module contains the call-count policies an
//! expectation may have and the parser for the textual notation of them.
//!
//! The notation accepts
//! - nothing (or `null`) for [`Invocation::Any`]
//! - a number `n`, either as number or as numeric string
//! - one of the words `once`, `any`, `never` and `atLeastOnce`
//! - one of the words `atLeast`, `exactly` and `atMost`, followed by a number

use std::fmt::{Display, Formatter, Result as FmtResult};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};

use crate::error::{Error, Result};
use crate::times::TimesRange;

/// Call-count policy of an expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invocation {
    /// The method may be called any number of times.
    Any,

    /// The method must not be called.
    Never,

    /// The method must be called exactly once.
    Once,

    /// The method must be called at least once.
    AtLeastOnce,

    /// The method must be called at least `n` times.
    AtLeast(usize),

    /// The method must be called exactly `n` times.
    Exactly(usize),

    /// The method may be called at most `n` times.
    AtMost(usize),

    /// The method must be the `n`-th call (zero based) received by the mock.
    At(usize),
}

impl Invocation {
    /// Number of calls this policy expects.
    #[must_use]
    pub fn times_range(&self) -> TimesRange {
        match *self {
            Self::Any => TimesRange::from(..),
            Self::Never => TimesRange::from(0),
            Self::Once | Self::At(_) => TimesRange::from(1),
            Self::AtLeastOnce => TimesRange::from(1..),
            Self::AtLeast(n) => TimesRange::from(n..),
            Self::Exactly(n) => TimesRange::from(n),
            Self::AtMost(n) => TimesRange::from(..=n),
        }
    }

    /// Position in the call sequence of the mock this policy is bound to.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::At(index) => Some(*index),
            _ => None,
        }
    }

    /// Human readable description of the policy.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::At(index) => format!("exactly one time, as call #{index} of the mock"),
            x => x.times_range().to_string(),
        }
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Any => write!(f, "any"),
            Self::Never => write!(f, "never"),
            Self::Once => write!(f, "once"),
            Self::AtLeastOnce => write!(f, "atLeastOnce"),
            Self::AtLeast(n) => write!(f, "atLeast {n}"),
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::AtMost(n) => write!(f, "atMost {n}"),
            Self::At(n) => write!(f, "at {n}"),
        }
    }
}

/// Create an [`Invocation::Any`] policy.
#[must_use]
pub fn any() -> Invocation {
    Invocation::Any
}

/// Create an [`Invocation::Never`] policy.
#[must_use]
pub fn never() -> Invocation {
    Invocation::Never
}

/// Create an [`Invocation::Once`] policy.
#[must_use]
pub fn once() -> Invocation {
    Invocation::Once
}

/// Create an [`Invocation::AtLeastOnce`] policy.
#[must_use]
pub fn at_least_once() -> Invocation {
    Invocation::AtLeastOnce
}

/// Create an [`Invocation::AtLeast`] policy.
#[must_use]
pub fn at_least(n: usize) -> Invocation {
    Invocation::AtLeast(n)
}

/// Create an [`Invocation::Exactly`] policy.
#[must_use]
pub fn exactly(n: usize) -> Invocation {
    Invocation::Exactly(n)
}

/// Create an [`Invocation::AtMost`] policy.
#[must_use]
pub fn at_most(n: usize) -> Invocation {
    Invocation::AtMost(n)
}

/// Create an [`Invocation::At`] policy.
#[must_use]
pub fn at(index: usize) -> Invocation {
    Invocation::At(index)
}

/// The `invoked` field of an expectation literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Invoked {
    /// Textual or numeric notation that still needs to be parsed.
    Literal(Value),

    /// Already constructed policy.
    Policy(Invocation),
}

impl From<Invocation> for Invoked {
    fn from(value: Invocation) -> Self {
        Self::Policy(value)
    }
}

impl From<Value> for Invoked {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for Invoked {
    fn from(value: &str) -> Self {
        Self::Literal(Value::String(value.into()))
    }
}

impl From<usize> for Invoked {
    fn from(value: usize) -> Self {
        Self::Literal(Value::from(value))
    }
}

/// Turns the `invoked` field of an expectation into an [`Invocation`].
#[derive(Default, Debug, Clone, Copy)]
pub struct InvocationParser;

impl InvocationParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse the passed `invoked` field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpec`] if the literal does not match any of the
    /// supported shapes.
    pub fn parse(&self, invoked: Option<&Invoked>) -> Result<Invocation> {
        match invoked {
            None | Some(Invoked::Literal(Value::Null)) => Ok(Invocation::Any),
            Some(Invoked::Policy(policy)) => Ok(*policy),
            Some(Invoked::Literal(Value::Number(n))) => parse_number(n),
            Some(Invoked::Literal(Value::String(s))) => self.parse_str(s),
            Some(Invoked::Literal(other)) => Err(Error::invalid_spec(
                other.to_string(),
                "expected a number or an invocation keyword",
            )),
        }
    }

    /// Parse the textual notation of a policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpec`] if the text is neither numeric nor a
    /// supported keyword.
    pub fn parse_str(&self, literal: &str) -> Result<Invocation> {
        let trimmed = literal.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return Ok(count(n));
        }

        if let Some(x) = numeric(trimmed) {
            return count_from_f64(literal, x);
        }

        let captures = INVOKED
            .captures(literal)
            .ok_or_else(|| Error::invalid_spec(literal, "cannot handle this notation"))?;
        let word = &captures[1];

        match captures.get(2) {
            None => match word {
                "once" => Ok(Invocation::Once),
                "any" => Ok(Invocation::Any),
                "never" => Ok(Invocation::Never),
                "atLeastOnce" => Ok(Invocation::AtLeastOnce),
                _ => Err(Error::invalid_spec(
                    literal,
                    format!("unknown invocation keyword '{word}'"),
                )),
            },
            Some(count) => {
                let n = count
                    .as_str()
                    .parse::<usize>()
                    .map_err(|_| Error::invalid_spec(literal, "count is out of range"))?;

                match word {
                    "atLeast" => Ok(Invocation::AtLeast(n)),
                    "exactly" => Ok(Invocation::Exactly(n)),
                    "atMost" => Ok(Invocation::AtMost(n)),
                    _ => Err(Error::invalid_spec(
                        literal,
                        format!("unknown counted invocation keyword '{word}'"),
                    )),
                }
            }
        }
    }
}

static INVOKED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)(?:\s+([0-9]+))?$").unwrap());

fn numeric(trimmed: &str) -> Option<f64> {
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Largest whole number an `f64` holds without gaps to its neighbours.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

fn parse_number(n: &Number) -> Result<Invocation> {
    if let Some(x) = n.as_u64() {
        let x = usize::try_from(x)
            .map_err(|_| Error::invalid_spec(n.to_string(), "count is out of range"))?;

        return Ok(count(x));
    }

    match n.as_f64() {
        Some(x) => count_from_f64(&n.to_string(), x),
        None => Err(Error::invalid_spec(n.to_string(), "not a number")),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn count_from_f64(literal: &str, x: f64) -> Result<Invocation> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(Error::invalid_spec(
            literal,
            "a call count must be a non-negative whole number",
        ));
    }

    if x >= MAX_EXACT_F64 || x > usize::MAX as f64 {
        return Err(Error::invalid_spec(literal, "count is out of range"));
    }

    Ok(count(x as usize))
}

fn count(n: usize) -> Invocation {
    match n {
        0 => Invocation::Never,
        1 => Invocation::Once,
        n => Invocation::Exactly(n),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::error::Error;

    use super::{Invocation, InvocationParser, Invoked};

    fn parse(value: Value) -> Result<Invocation, Error> {
        InvocationParser::new().parse(Some(&Invoked::Literal(value)))
    }

    #[test]
    fn numbers() {
        assert_eq!(parse(json!(0)).unwrap(), Invocation::Never);
        assert_eq!(parse(json!(1)).unwrap(), Invocation::Once);
        assert_eq!(parse(json!(2)).unwrap(), Invocation::Exactly(2));
        assert_eq!(parse(json!(3)).unwrap(), Invocation::Exactly(3));
        assert_eq!(parse(json!(2.0)).unwrap(), Invocation::Exactly(2));
    }

    #[test]
    fn numeric_strings() {
        assert_eq!(parse(json!("0")).unwrap(), Invocation::Never);
        assert_eq!(parse(json!("1")).unwrap(), Invocation::Once);
        assert_eq!(parse(json!("2")).unwrap(), Invocation::Exactly(2));
        assert_eq!(parse(json!(" 3 ")).unwrap(), Invocation::Exactly(3));
    }

    #[test]
    fn keywords() {
        assert_eq!(parse(json!("once")).unwrap(), Invocation::Once);
        assert_eq!(parse(json!("any")).unwrap(), Invocation::Any);
        assert_eq!(parse(json!("never")).unwrap(), Invocation::Never);
        assert_eq!(
            parse(json!("atLeastOnce")).unwrap(),
            Invocation::AtLeastOnce
        );
        assert_eq!(parse(json!("atLeast 2")).unwrap(), Invocation::AtLeast(2));
        assert_eq!(parse(json!("exactly 2")).unwrap(), Invocation::Exactly(2));
        assert_eq!(parse(json!("atMost 2")).unwrap(), Invocation::AtMost(2));
    }

    #[test]
    fn absent_means_any() {
        let parser = InvocationParser::new();

        assert_eq!(parser.parse(None).unwrap(), Invocation::Any);
        assert_eq!(parse(Value::Null).unwrap(), Invocation::Any);
    }

    #[test]
    fn policies_pass_through() {
        let parser = InvocationParser::new();
        let invoked = Invoked::Policy(Invocation::At(4));

        assert_eq!(parser.parse(Some(&invoked)).unwrap(), Invocation::At(4));
    }

    #[test]
    fn rejected_literals() {
        for literal in ["two times", "maybe", "about 2", "Once", "", "exactly", "-1"] {
            match parse(json!(literal)) {
                Err(Error::InvalidSpec { literal: l, .. }) => assert_eq!(l, literal),
                x => panic!("Expected invalid spec for {literal:?}, got {x:?}"),
            }
        }
    }

    #[test]
    fn rejected_numbers() {
        assert!(matches!(parse(json!(-1)), Err(Error::InvalidSpec { .. })));
        assert!(matches!(parse(json!(1.5)), Err(Error::InvalidSpec { .. })));
        assert!(matches!(parse(json!("2.5")), Err(Error::InvalidSpec { .. })));
        assert!(matches!(parse(json!(true)), Err(Error::InvalidSpec { .. })));
        assert!(matches!(parse(json!([1])), Err(Error::InvalidSpec { .. })));
    }

    #[test]
    fn large_counts() {
        assert_eq!(
            parse(json!("9007199254740993")).unwrap(),
            Invocation::Exactly(9_007_199_254_740_993)
        );
        assert_eq!(
            parse(json!(9_007_199_254_740_993_u64)).unwrap(),
            Invocation::Exactly(9_007_199_254_740_993)
        );
        assert_eq!(
            parse(json!("exactly 9007199254740993")).unwrap(),
            Invocation::Exactly(9_007_199_254_740_993)
        );

        for literal in ["18446744073709551616", "1e300", "9007199254740993.0"] {
            match parse(json!(literal)) {
                Err(Error::InvalidSpec { literal: l, reason }) => {
                    assert_eq!(l, literal);
                    assert_eq!(reason, "count is out of range");
                }
                x => panic!("Expected invalid spec for {literal:?}, got {x:?}"),
            }
        }
        assert!(matches!(parse(json!(1e300)), Err(Error::InvalidSpec { .. })));
    }

    #[test]
    fn counts_are_ascii_digits() {
        match parse(json!("exactly \u{663}")) {
            Err(Error::InvalidSpec { reason, .. }) => {
                assert_eq!(reason, "cannot handle this notation");
            }
            x => panic!("Expected invalid spec, got {x:?}"),
        }
    }

    #[test]
    fn error_names_literal() {
        let err = parse(json!("maybe")).unwrap_err();

        assert!(err.to_string().contains("'maybe'"));
    }

    #[test]
    fn display_round_trips() {
        let parser = InvocationParser::new();

        for policy in [
            Invocation::Any,
            Invocation::Never,
            Invocation::Once,
            Invocation::AtLeastOnce,
            Invocation::AtLeast(3),
            Invocation::Exactly(2),
            Invocation::AtMost(5),
        ] {
            assert_eq!(parser.parse_str(&policy.to_string()).unwrap(), policy);
        }
    }
}
