use multiverse_core::{Location, OneOrMany, Page};

use crate::client::ApiClient;
use crate::query::QueryKey;

impl ApiClient {
    /// Get a page of locations.
    /// GET /location?page={page}
    pub async fn locations(&self, page: u32) -> crate::Result<Page<Location>> {
        self.fetch(&QueryKey::locations(page)).await
    }

    /// Get a single location.
    /// GET /location/{id}
    pub async fn location(&self, id: u32) -> crate::Result<Location> {
        self.fetch(&QueryKey::Location { id }).await
    }

    /// Get several locations at once.
    /// GET /location/{id},{id},...
    pub async fn locations_by_ids(&self, ids: &[u32]) -> crate::Result<Vec<Location>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let key = QueryKey::LocationsByIds { ids: ids.to_vec() };
        let found: OneOrMany<Location> = self.fetch(&key).await?;
        Ok(found.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{serve, test_client};

    #[tokio::test]
    async fn single_location() {
        let body = r#"{
            "id": 20,
            "name": "Earth (Replacement Dimension)",
            "type": "Planet",
            "dimension": "Replacement Dimension",
            "residents": ["https://rickandmortyapi.com/api/character/1"],
            "url": "https://rickandmortyapi.com/api/location/20",
            "created": "2017-11-10T13:08:46.060Z"
        }"#;
        let mut server = serve("200 OK", body).await;
        let client = test_client(&server.base_url);

        let location = client.location(20).await.unwrap();
        assert_eq!(location.dimension, "Replacement Dimension");
        assert_eq!(location.resident_ids(), vec![1]);
        assert_eq!(
            server.requests.recv().await.unwrap(),
            "GET /api/location/20 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn missing_page_is_not_found() {
        let server = serve("404 Not Found", r#"{"error":"There is nothing here"}"#).await;
        let client = test_client(&server.base_url);

        let err = client.locations(99).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
