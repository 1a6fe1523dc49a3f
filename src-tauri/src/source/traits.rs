//! Fruit Source - Core Trait
//!
//! Abstract catalog provider. The HTTP implementation talks to the fruit
//! API; tests can plug in anything that yields fruits.

use async_trait::async_trait;
use fruit_jar_core::Fruit;

use super::FetchResult;

/// Provider of the full fruit catalog
///
/// Implementations return fruits already normalized (energy value resolved).
#[async_trait]
pub trait FruitSource: Send + Sync {
    /// Fetch every fruit in the catalog
    async fn fetch_all(&self) -> FetchResult<Vec<Fruit>>;
}
