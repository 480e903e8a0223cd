pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid site origin: {0}")]
    InvalidOrigin(String),
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector {
        selector: &'static str,
        reason: String,
    },
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
