//! # Conjugation Table
//!
//! One verb's answers, keyed `number → person → tense`.
//!
//! ```text
//! scraped tokens (36)              ConjugationTable
//! ┌──────────────────────┐        singular ─ first  ─ present..future
//! │ yo   f f f f f       │   →             ├ second ─ ...
//! │ tú   f f f f f       │                 └ third  ─ ...
//! │ ...                  │        plural   ─ first  ─ ...
//! │ vosotros f f f f f   │ (dropped)       ├ second ─ (copy of third)
//! │ ellos    f f f f f   │                 └ third  ─ ...
//! └──────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::grammar::{Number, Person, Tense};

/// Tokens per person row: one pronoun label plus one form per tense.
const ROW_LEN: usize = 1 + Tense::ALL.len();

/// Tokens the source table yields after its header cells are skipped.
pub const SCRAPED_TOKEN_COUNT: usize = 6 * ROW_LEN;

/// Offset of the "vosotros" row in the scraped token list.
const VOSOTROS_ROW: usize = 4 * ROW_LEN;

/// Scraped token list did not have the expected length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected conjugation table shape: expected {} tokens, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for ShapeError {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct ConjugationTable {
    forms: BTreeMap<Number, BTreeMap<Person, BTreeMap<Tense, String>>>,
}

impl ConjugationTable {
    /// Reshape the 36 scraped tokens (header cells already removed) into a table.
    ///
    /// The "vosotros" row is discarded and the "ellos/ellas" row is reused as
    /// the plural second person answer set.
    pub fn from_tokens(mut tokens: Vec<String>) -> Result<Self, ShapeError> {
        if tokens.len() != SCRAPED_TOKEN_COUNT {
            return Err(ShapeError {
                expected: SCRAPED_TOKEN_COUNT,
                found: tokens.len(),
            });
        }

        tokens.drain(VOSOTROS_ROW..VOSOTROS_ROW + ROW_LEN);
        let ellos = tokens[VOSOTROS_ROW..].to_vec();
        tokens.extend(ellos);

        let mut tokens = tokens.into_iter();
        let mut table = ConjugationTable::default();
        for number in Number::ALL {
            for person in Person::ALL {
                // Pronoun label
                tokens.next();
                for tense in Tense::ALL {
                    if let Some(form) = tokens.next() {
                        table.insert(number, person, tense, form);
                    }
                }
            }
        }
        Ok(table)
    }

    pub fn get(&self, number: Number, person: Person, tense: Tense) -> Option<&str> {
        self.forms
            .get(&number)
            .and_then(|persons| persons.get(&person))
            .and_then(|tenses| tenses.get(&tense))
            .map(String::as_str)
    }

    pub fn insert(&mut self, number: Number, person: Person, tense: Tense, form: String) {
        self.forms
            .entry(number)
            .or_default()
            .entry(person)
            .or_default()
            .insert(tense, form);
    }

    /// Number of (number, person, tense) entries.
    pub fn len(&self) -> usize {
        self.forms
            .values()
            .flat_map(|persons| persons.values())
            .map(|tenses| tenses.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
