use thiserror::Error;

/// Errors that can occur while fetching the recipe catalog
#[derive(Error, Debug)]
pub enum FetchError {
    /// The configured endpoint is not a valid absolute URL
    #[error("Invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// The server answered with a status outside 200..300
    #[error("Bad server response: HTTP {0}")]
    BadServerResponse(u16),

    /// The response body did not match the expected schema
    #[error("Failed to decode recipes: {0}")]
    Decode(#[from] serde_json::Error),

    /// HTTP client failure: the client could not be built (e.g. an invalid
    /// user agent), or connecting, DNS, timeout or reading the body failed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Top-level errors for the catalog binary
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to fetch the catalog
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Invalid command-line usage
    #[error("Usage error: {0}")]
    Usage(String),
}
