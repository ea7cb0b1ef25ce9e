use multiverse_core::{Character, CharacterFilter, OneOrMany, Page};

use crate::client::ApiClient;
use crate::query::QueryKey;

impl ApiClient {
    /// Get a page of characters, filtered server-side by status and gender.
    /// GET /character?page={page}&status={status}&gender={gender}
    pub async fn characters(
        &self,
        page: u32,
        filter: &CharacterFilter,
    ) -> crate::Result<Page<Character>> {
        self.fetch(&QueryKey::characters(page, filter)).await
    }

    /// Get a single character.
    /// GET /character/{id}
    pub async fn character(&self, id: u32) -> crate::Result<Character> {
        self.fetch(&QueryKey::Character { id }).await
    }

    /// Get several characters at once, in the order the API returns them.
    /// GET /character/{id},{id},...
    ///
    /// An empty id list yields an empty list without a request.
    pub async fn characters_by_ids(&self, ids: &[u32]) -> crate::Result<Vec<Character>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let key = QueryKey::CharactersByIds { ids: ids.to_vec() };
        let found: OneOrMany<Character> = self.fetch(&key).await?;
        Ok(found.into_vec())
    }
}
