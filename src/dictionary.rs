use scraper::Html;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http_client::{FetchError, HttpClient};
use crate::parser;
use crate::selectors::Selectors;
use crate::types::{Entry, WordOfTheDay};

const SEARCH_PATH: &str = "/dictionary/";
const WORD_OF_THE_DAY_PATH: &str = "/dictionary/eb/word-of-the-day";

/// Read-only client for the Britannica dictionary site.
///
/// The plain operations never fail: fetch problems are reported as a
/// `tracing` warning and turned into an empty result. The `try_*` variants
/// return the underlying [`FetchError`] instead and log nothing.
///
/// Warnings only reach stderr once a subscriber is installed, e.g. with
/// [`init_logging`](crate::observability::init_logging).
#[derive(Clone)]
pub struct Dictionary {
    http: HttpClient,
    selectors: Selectors,
    origin: String,
}

impl Dictionary {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let origin = config.normalized_origin()?;
        Ok(Self {
            http: HttpClient::new(&config)?,
            selectors: Selectors::new()?,
            origin,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Search URL for `word`. The word is inserted as-is, without escaping.
    pub fn search_url(&self, word: &str) -> String {
        format!("{}{SEARCH_PATH}{word}", self.origin)
    }

    pub fn word_of_the_day_url(&self) -> String {
        format!("{}{WORD_OF_THE_DAY_PATH}", self.origin)
    }

    /// Fetch and parse a page, logging and swallowing any failure.
    pub async fn fetch(&self, url: &str) -> Option<Html> {
        match self.http.fetch_document(url).await {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to fetch page");
                None
            }
        }
    }

    pub async fn list_entries(&self, word: &str) -> Vec<Entry> {
        let url = self.search_url(word);
        match self.fetch(&url).await {
            Some(document) => self.entries_from(&document),
            None => Vec::new(),
        }
    }

    pub async fn try_list_entries(&self, word: &str) -> std::result::Result<Vec<Entry>, FetchError> {
        let document = self.http.fetch_document(&self.search_url(word)).await?;
        Ok(self.entries_from(&document))
    }

    pub async fn count_entries(&self, word: &str) -> usize {
        self.list_entries(word).await.len()
    }

    pub async fn word_of_the_day(&self) -> Option<WordOfTheDay> {
        let document = self.fetch(&self.word_of_the_day_url()).await?;
        self.word_of_the_day_from(&document)
    }

    pub async fn try_word_of_the_day(
        &self,
    ) -> std::result::Result<Option<WordOfTheDay>, FetchError> {
        let document = self.http.fetch_document(&self.word_of_the_day_url()).await?;
        Ok(self.word_of_the_day_from(&document))
    }

    fn entries_from(&self, document: &Html) -> Vec<Entry> {
        let entries = parser::parse_entries(document, &self.selectors, &self.origin);
        tracing::debug!(count = entries.len(), "extracted dictionary entries");
        entries
    }

    fn word_of_the_day_from(&self, document: &Html) -> Option<WordOfTheDay> {
        let word = parser::parse_word_of_the_day(document, &self.selectors);
        if word.is_none() {
            tracing::debug!("word of the day page has no headword block");
        }
        word
    }
}
