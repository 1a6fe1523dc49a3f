//! Tauri Commands for the fruit catalog
//!
//! Exposes the catalog fetch to the frontend via Tauri IPC.

use fruit_jar_core::Fruit;
use tauri::State;

use crate::source::FruitSource;
use crate::AppState;

/// Fetch the full, normalized catalog
///
/// Every call performs a fresh request; the frontend decides which of
/// several overlapping responses to keep.
#[tauri::command]
pub async fn fetch_fruits(state: State<'_, AppState>) -> Result<Vec<Fruit>, String> {
    load_catalog(state.source.as_ref()).await
}

/// Shared body of `fetch_fruits`, independent of Tauri state
pub async fn load_catalog(source: &dyn FruitSource) -> Result<Vec<Fruit>, String> {
    source.fetch_all().await.map_err(|e| {
        tracing::error!("catalog fetch failed: {}", e);
        e.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FetchError, FetchResult};
    use async_trait::async_trait;

    struct FixedSource(Vec<Fruit>);

    #[async_trait]
    impl FruitSource for FixedSource {
        async fn fetch_all(&self) -> FetchResult<Vec<Fruit>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl FruitSource for FailingSource {
        async fn fetch_all(&self) -> FetchResult<Vec<Fruit>> {
            Err(FetchError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_load_catalog_passes_fruits_through() {
        let apple = Fruit::new(6, "Apple", "Rosaceae", "Rosales", "Malus", Some(52.0));
        let fruits = load_catalog(&FixedSource(vec![apple.clone()])).await.unwrap();
        assert_eq!(fruits, vec![apple]);
    }

    #[tokio::test]
    async fn test_load_catalog_stringifies_errors() {
        let err = load_catalog(&FailingSource).await.unwrap_err();
        assert_eq!(err, "Server returned 500: boom");
    }
}
