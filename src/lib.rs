//! Read-only client for the Britannica online dictionary.
//!
//! - Search-result entries for a word (`list_entries`, `count_entries`)
//! - The site's word of the day (`word_of_the_day`)
//!
//! Pages are fetched with `reqwest` and read with `scraper`. All structural
//! anchors live in [`selectors`]. Failures never escape the plain API: they
//! are logged through `tracing` and mapped to an empty result. The crate
//! never installs a subscriber itself; call [`observability::init_logging`]
//! to get one diagnostic line on stderr per failure.
//!
//! ```no_run
//! # async fn demo() -> britannica_dict::Result<()> {
//! let dictionary = britannica_dict::Dictionary::new(Default::default())?;
//! for entry in dictionary.list_entries("apple").await {
//!     println!("{} -> {}", entry.text, entry.link);
//! }
//! # Ok(()) }
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod http_client;
pub mod observability;
pub mod parser;
pub mod selectors;
pub mod types;

pub use config::{ClientConfig, DEFAULT_ORIGIN};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use http_client::FetchError;
pub use types::{Entry, Image, Meaning, WordOfTheDay};

fn default_dictionary() -> Option<Dictionary> {
    Dictionary::new(ClientConfig::default())
        .inspect_err(|e| tracing::warn!(error = %e, "failed to set up dictionary client"))
        .ok()
}

/// [`Dictionary::list_entries`] on a default client.
pub async fn list_entries(word: &str) -> Vec<Entry> {
    match default_dictionary() {
        Some(dictionary) => dictionary.list_entries(word).await,
        None => Vec::new(),
    }
}

/// [`Dictionary::count_entries`] on a default client.
pub async fn count_entries(word: &str) -> usize {
    list_entries(word).await.len()
}

/// [`Dictionary::word_of_the_day`] on a default client.
pub async fn word_of_the_day() -> Option<WordOfTheDay> {
    default_dictionary()?.word_of_the_day().await
}
