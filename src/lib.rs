//! Hacer library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod fetch;
pub mod quiz;
pub mod update;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Fetch conjugations for verbs missing from the cache
    Update,
    /// Quiz yourself on cached conjugations
    Play,
}

impl Action {
    /// Which phases run for an optional CLI action: none means both, in order.
    pub fn phases(action: Option<Action>) -> (bool, bool) {
        match action {
            None => (true, true),
            Some(Action::Update) => (true, false),
            Some(Action::Play) => (false, true),
        }
    }
}
