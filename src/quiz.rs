//! # Quiz
//!
//! The interactive drill. Each round samples a number, person, tense and verb
//! uniformly (with replacement), asks for the form, and grades the answer.
//!
//! ```text
//!          ┌──────────┐  answer / wrong answer
//!    ─────►│ Running  │◄──────────┐
//!          └────┬─────┘───────────┘
//!               │ "q" / "Q" / EOF
//!               ▼
//!          ┌──────────┐
//!          │ Stopped  │
//!          └──────────┘
//! ```
//!
//! The engine is generic over its reader, writer and random source so tests
//! can script a whole session.

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::core::cache::ConjugationCache;
use crate::core::config::ConfigLists;
use crate::core::grammar::{Number, Person, Tense, UnknownValue, pronoun_hint};

#[derive(Debug)]
pub enum QuizError {
    Io(io::Error),
    /// A list entry names no known number, person or tense.
    Config(UnknownValue),
    /// A list has nothing to sample from.
    EmptyList(&'static str),
    /// A configured verb has no cached conjugations.
    NotCached(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Io(e) => write!(f, "quiz I/O error: {e}"),
            QuizError::Config(e) => write!(f, "invalid config: {e}"),
            QuizError::EmptyList(name) => write!(f, "config list '{name}' is empty"),
            QuizError::NotCached(verb) => {
                write!(f, "no conjugations cached for '{verb}' (run update first)")
            }
        }
    }
}

impl std::error::Error for QuizError {}

impl From<io::Error> for QuizError {
    fn from(e: io::Error) -> Self {
        QuizError::Io(e)
    }
}

impl From<UnknownValue> for QuizError {
    fn from(e: UnknownValue) -> Self {
        QuizError::Config(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Running,
    Stopped,
}

/// Tally of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub asked: usize,
    pub correct: usize,
}

/// The lists the quiz samples from, already parsed.
#[derive(Debug, Clone)]
pub struct QuizDeck {
    numbers: Vec<Number>,
    persons: Vec<Person>,
    tenses: Vec<Tense>,
    verbs: Vec<String>,
}

impl QuizDeck {
    pub fn from_lists(lists: &ConfigLists) -> Result<Self, QuizError> {
        let deck = Self {
            numbers: parse_all(&lists.numbers)?,
            persons: parse_all(&lists.persons)?,
            tenses: parse_all(&lists.tenses)?,
            verbs: lists.verbs.clone(),
        };
        for (name, len) in [
            ("numbers", deck.numbers.len()),
            ("persons", deck.persons.len()),
            ("tenses", deck.tenses.len()),
            ("verbs", deck.verbs.len()),
        ] {
            if len == 0 {
                return Err(QuizError::EmptyList(name));
            }
        }
        Ok(deck)
    }
}

fn parse_all<T>(values: &[String]) -> Result<Vec<T>, UnknownValue>
where
    T: std::str::FromStr<Err = UnknownValue>,
{
    values.iter().map(|v| v.parse()).collect()
}

pub struct Quiz<'a, R, W, G> {
    deck: &'a QuizDeck,
    cache: &'a ConjugationCache,
    input: R,
    output: W,
    rng: G,
    state: QuizState,
    score: Score,
}

impl<'a, R: BufRead, W: Write, G: Rng> Quiz<'a, R, W, G> {
    pub fn new(deck: &'a QuizDeck, cache: &'a ConjugationCache, input: R, output: W, rng: G) -> Self {
        Self {
            deck,
            cache,
            input,
            output,
            rng,
            state: QuizState::Running,
            score: Score::default(),
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Run rounds until the user quits or input ends.
    pub fn run(mut self) -> Result<Score, QuizError> {
        writeln!(self.output, "(enter 'q' to quit)\n")?;
        while self.state == QuizState::Running {
            self.step()?;
        }
        info!(
            "Quiz stopped: {}/{} correct",
            self.score.correct, self.score.asked
        );
        Ok(self.score)
    }

    /// Ask one question and grade the reply.
    pub fn step(&mut self) -> Result<QuizState, QuizError> {
        let (number, person, tense, verb) = self.sample()?;

        writeln!(self.output, "{} '{}', {}", pronoun_hint(number, person), verb, tense)?;

        let cache = self.cache;
        let answer = cache
            .get(&verb)
            .ok_or_else(|| QuizError::NotCached(verb.clone()))?
            .get(number, person, tense)
            .ok_or_else(|| QuizError::NotCached(verb.clone()))?;

        write!(self.output, "? ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            writeln!(self.output)?;
            self.state = QuizState::Stopped;
            return Ok(self.state);
        }
        let response = line.trim_end_matches(['\n', '\r']);

        if response == "q" || response == "Q" {
            self.state = QuizState::Stopped;
            return Ok(self.state);
        }

        self.score.asked += 1;
        if response == answer {
            self.score.correct += 1;
            writeln!(self.output, "correct!\n")?;
        } else {
            debug!("Wrong answer for {verb} {number} {person} {tense}: '{response}'");
            writeln!(self.output, "sorry, it's '{answer}'\n")?;
        }
        Ok(self.state)
    }

    fn sample(&mut self) -> Result<(Number, Person, Tense, String), QuizError> {
        let number = *self
            .deck
            .numbers
            .choose(&mut self.rng)
            .ok_or(QuizError::EmptyList("numbers"))?;
        let person = *self
            .deck
            .persons
            .choose(&mut self.rng)
            .ok_or(QuizError::EmptyList("persons"))?;
        let tense = *self
            .deck
            .tenses
            .choose(&mut self.rng)
            .ok_or(QuizError::EmptyList("tenses"))?;
        let verb = self
            .deck
            .verbs
            .choose(&mut self.rng)
            .ok_or(QuizError::EmptyList("verbs"))?
            .clone();
        Ok((number, person, tense, verb))
    }
}

/// Play on stdin/stdout with a thread-local rng.
pub fn play(lists: &ConfigLists, cache: &ConjugationCache) -> Result<Score, QuizError> {
    let deck = QuizDeck::from_lists(lists)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Quiz::new(&deck, cache, stdin.lock(), stdout.lock(), rand::thread_rng()).run()
}
