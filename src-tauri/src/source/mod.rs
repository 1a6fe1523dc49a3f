//! Source Layer
//!
//! Where the catalog comes from.

mod http;
mod traits;

use thiserror::Error;

pub use http::FruityviceSource;
pub use traits::FruitSource;

/// Common result type for catalog fetches
pub type FetchResult<T> = Result<T, FetchError>;

/// Catalog fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode catalog: {0}")]
    Decode(String),
}
