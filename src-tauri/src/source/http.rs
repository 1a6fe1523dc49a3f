//! HTTP fruit source
//!
//! Fetches `/fruit/all` from the fruit API. Running the request in the
//! backend keeps the browser's CORS policy out of the picture.

use async_trait::async_trait;
use fruit_jar_core::{Fruit, RawFruit};
use reqwest::Client;

use super::{FetchError, FetchResult, FruitSource};
use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct FruityviceSource {
    base_url: String,
    client: Client,
}

impl FruityviceSource {
    pub fn new(config: &AppConfig) -> FetchResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            base_url: config.api_url.clone(),
            client,
        })
    }

    fn catalog_url(&self) -> String {
        format!("{}/fruit/all", self.base_url)
    }
}

#[async_trait]
impl FruitSource for FruityviceSource {
    async fn fetch_all(&self) -> FetchResult<Vec<Fruit>> {
        let url = self.catalog_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let raw: Vec<RawFruit> =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        let fruits: Vec<Fruit> = raw.into_iter().map(Fruit::from).collect();
        tracing::info!("fetched {} fruits", fruits.len());
        Ok(fruits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn source_for(server: &MockServer) -> FruityviceSource {
        let config = AppConfig {
            api_url: server.uri(),
            timeout: Duration::from_secs(2),
        };
        FruityviceSource::new(&config).expect("Failed to build client")
    }

    #[tokio::test]
    async fn test_fetch_all_normalizes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fruit/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 6, "name": "Apple", "family": "Rosaceae", "order": "Rosales", "genus": "Malus",
                    "nutritions": {"calories": 52, "fat": 0.4, "sugar": 10.3, "carbohydrates": 11.4, "protein": 0.3}
                },
                {
                    "id": 1, "name": "Banana", "family": "Musaceae", "order": "Zingiberales", "genus": "Musa",
                    "calories": 89
                }
            ])))
            .mount(&server)
            .await;

        let fruits = source_for(&server).await.fetch_all().await.expect("Fetch failed");
        assert_eq!(fruits.len(), 2);
        assert_eq!(fruits[0].name, "Apple");
        assert_eq!(fruits[0].calories, Some(52.0));
        assert_eq!(fruits[1].calories, Some(89.0));
        assert!(fruits[1].nutritions.is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fruit/all"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch_all().await.unwrap_err();
        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fruit/all"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
