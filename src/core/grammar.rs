//! # Grammar
//!
//! The closed sets of grammatical number, person and tense the quiz covers.
//!
//! The `ALL` arrays are in page order: the conjugation table on the source
//! site lists rows singular-first → plural-third and columns present → future,
//! and `ConjugationTable::from_tokens` walks the scraped tokens in exactly
//! this order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Preterit,
    Imperfect,
    Conditional,
    Future,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub fn as_str(self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        }
    }
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    pub fn as_str(self) -> &'static str {
        match self {
            Person::First => "first",
            Person::Second => "second",
            Person::Third => "third",
        }
    }
}

impl Tense {
    pub const ALL: [Tense; 5] = [
        Tense::Present,
        Tense::Preterit,
        Tense::Imperfect,
        Tense::Conditional,
        Tense::Future,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Preterit => "preterit",
            Tense::Imperfect => "imperfect",
            Tense::Conditional => "conditional",
            Tense::Future => "future",
        }
    }
}

/// Subject pronoun shown in the quiz prompt.
///
/// Plural second person is "ustedes" (Latin American usage); the "vosotros"
/// forms are never quizzed.
pub fn pronoun_hint(number: Number, person: Person) -> &'static str {
    match (number, person) {
        (Number::Singular, Person::First) => "yo",
        (Number::Singular, Person::Second) => "tú",
        (Number::Singular, Person::Third) => "él/ella/usted",
        (Number::Plural, Person::First) => "nosotros",
        (Number::Plural, Person::Second) => "ustedes",
        (Number::Plural, Person::Third) => "ellos/ellas",
    }
}

// ============================================================================
// Parsing / Display
// ============================================================================

/// A config entry that names no known number, person or tense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownValue {}

fn lookup<T: Copy>(
    kind: &'static str,
    all: &[T],
    name: fn(T) -> &'static str,
    s: &str,
) -> Result<T, UnknownValue> {
    let wanted = s.trim();
    all.iter()
        .copied()
        .find(|v| name(*v) == wanted)
        .ok_or_else(|| UnknownValue {
            kind,
            value: wanted.to_string(),
        })
}

impl FromStr for Number {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("number", &Number::ALL, Number::as_str, s)
    }
}

impl FromStr for Person {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("person", &Person::ALL, Person::as_str, s)
    }
}

impl FromStr for Tense {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup("tense", &Tense::ALL, Tense::as_str, s)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
