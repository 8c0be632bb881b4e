//! SpanishDict conjugation pages.
//!
//! `GET <base_url>/<verb>` returns a full HTML page; the first table on it is
//! the indicative grid. No retries and no timeout: a slow server blocks the
//! update, a failing one aborts it.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::parse::table_tokens;
use super::source::{ConjugationSource, FetchError};
use crate::core::config::DEFAULT_BASE_URL;
use crate::core::table::ConjugationTable;

pub struct SpanishDictSource {
    base_url: String,
    client: reqwest::Client,
}

impl SpanishDictSource {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url_for(&self, verb: &str) -> String {
        format!("{}/{}", self.base_url, verb)
    }
}

#[async_trait]
impl ConjugationSource for SpanishDictSource {
    fn name(&self) -> &str {
        "spanishdict"
    }

    async fn fetch(&self, verb: &str) -> Result<ConjugationTable, FetchError> {
        let url = self.url_for(verb);
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Response status for '{}': {}", verb, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Conjugation page error for '{}': {}", verb, status);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Received {} bytes for '{}'", body.len(), verb);

        let tokens = table_tokens(&body)?;
        Ok(ConjugationTable::from_tokens(tokens)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_interpolates_verb() {
        let source = SpanishDictSource::new(Some("http://localhost:9999/conjugate/".to_string()));
        assert_eq!(source.url_for("tener"), "http://localhost:9999/conjugate/tener");
    }

    #[test]
    fn test_default_base_url() {
        let source = SpanishDictSource::new(None);
        assert_eq!(source.url_for("ir"), "https://www.spanishdict.com/conjugate/ir");
        assert_eq!(source.name(), "spanishdict");
    }
}
