//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::grammar::{Number, Person, Tense};
use crate::core::table::ConjugationTable;
use crate::fetch::{ConjugationSource, FetchError};

/// A fresh, empty directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hacer_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// A full table whose forms spell out their own key: `<stem>-plural-first-future`.
pub fn sample_table(stem: &str) -> ConjugationTable {
    let mut table = ConjugationTable::default();
    for number in Number::ALL {
        for person in Person::ALL {
            for tense in Tense::ALL {
                table.insert(number, person, tense, format!("{stem}-{number}-{person}-{tense}"));
            }
        }
    }
    table
}

/// A source that serves `sample_table` for every verb and records requests.
pub struct StubSource {
    fail_on: Option<String>,
    requests: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            fail_on: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Like `new`, but answers `verb` with a 404.
    pub fn failing_on(verb: &str) -> Self {
        Self {
            fail_on: Some(verb.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConjugationSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch(&self, verb: &str) -> Result<ConjugationTable, FetchError> {
        self.requests.lock().unwrap().push(verb.to_string());
        if self.fail_on.as_deref() == Some(verb) {
            return Err(FetchError::Api {
                status: 404,
                message: "not found".to_string(),
            });
        }
        Ok(sample_table(verb))
    }
}
