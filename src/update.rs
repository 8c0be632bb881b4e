//! # Update
//!
//! Fill the cache with every configured verb it does not have yet.
//! Cached verbs are never re-fetched; delete the cache file to refresh.

use log::info;
use std::fmt;

use crate::core::cache::{CacheError, ConjugationCache};
use crate::fetch::{ConjugationSource, FetchError};

#[derive(Debug)]
pub enum UpdateError {
    Fetch { verb: String, source: FetchError },
    Cache(CacheError),
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::Fetch { verb, source } => {
                write!(f, "failed to fetch conjugations for '{verb}': {source}")
            }
            UpdateError::Cache(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for UpdateError {}

impl From<CacheError> for UpdateError {
    fn from(e: CacheError) -> Self {
        UpdateError::Cache(e)
    }
}

/// Fetch each verb missing from `cache`, in list order.
///
/// Stops at the first failed fetch. Returns how many verbs were fetched.
pub async fn update(
    verbs: &[String],
    cache: &mut ConjugationCache,
    source: &dyn ConjugationSource,
) -> Result<usize, UpdateError> {
    let mut fetched = 0;
    for verb in verbs {
        if cache.contains(verb) {
            continue;
        }
        println!("fetching conjugations for: {verb}");
        let table = source.fetch(verb).await.map_err(|e| UpdateError::Fetch {
            verb: verb.clone(),
            source: e,
        })?;
        cache.insert(verb, table);
        fetched += 1;
    }
    info!(
        "Update via {} complete: {} fetched, {} cached",
        source.name(),
        fetched,
        cache.len()
    );
    Ok(fetched)
}
