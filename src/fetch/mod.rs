pub mod parse;
pub mod source;
pub mod spanishdict;

pub use source::{ConjugationSource, FetchError};
pub use spanishdict::SpanishDictSource;
