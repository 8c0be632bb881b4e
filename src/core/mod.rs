//! # Core
//!
//! Domain types and local storage. Nothing in here touches the network or
//! the terminal.
//!
//! ```text
//!   config/ ──► config ──► lists, settings
//!                              │
//!   grammar (Number, Person, Tense)
//!                              │
//!   table (ConjugationTable) ◄─┘
//!     │
//!     ▼
//!   cache ──► data/conjugations
//! ```
//!
//! ## Modules
//!
//! - [`grammar`]: closed enums for number, person and tense, plus pronoun hints
//! - [`table`]: one verb's conjugations and the scraped-token reindexing
//! - [`cache`]: the on-disk verb → table store
//! - [`config`]: list files and optional settings

pub mod cache;
pub mod config;
pub mod grammar;
pub mod table;
