use multiverse_core::{Episode, OneOrMany, Page};

use crate::client::ApiClient;
use crate::query::QueryKey;

impl ApiClient {
    /// Get a page of episodes, optionally narrowed to a season code prefix.
    /// GET /episode?page={page}&episode={season}
    pub async fn episodes(&self, page: u32, season: &str) -> crate::Result<Page<Episode>> {
        self.fetch(&QueryKey::episodes(page, season)).await
    }

    /// Get a single episode.
    /// GET /episode/{id}
    pub async fn episode(&self, id: u32) -> crate::Result<Episode> {
        self.fetch(&QueryKey::Episode { id }).await
    }

    /// Get several episodes at once.
    /// GET /episode/{id},{id},...
    ///
    /// An empty id list yields an empty list without a request.
    pub async fn episodes_by_ids(&self, ids: &[u32]) -> crate::Result<Vec<Episode>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let key = QueryKey::EpisodesByIds { ids: ids.to_vec() };
        let found: OneOrMany<Episode> = self.fetch(&key).await?;
        Ok(found.into_vec())
    }
}
