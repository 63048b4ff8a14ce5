//! Process-local repository backed by an ordered map.
//!
//! Used when no `DATABASE_URL` is configured and as the storage behind the
//! HTTP integration tests. Ids are assigned from a sequence starting at 1, so
//! `find_all` returns entities in insertion order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use coursedesk_core::entity::Entity;
use coursedesk_core::types::DbId;
use tokio::sync::RwLock;

use super::Repository;

pub struct InMemoryRepository<E> {
    rows: RwLock<BTreeMap<DbId, E>>,
    next_id: AtomicI64,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Build a repository pre-populated with `entities`.
    ///
    /// Entities without an id are assigned the next id in sequence; entities
    /// with an id keep it and advance the sequence past it.
    pub fn seeded(entities: impl IntoIterator<Item = E>) -> Self {
        let mut rows = BTreeMap::new();
        let mut next_id = 1;
        for entity in entities {
            let id = entity.id().unwrap_or(next_id);
            next_id = next_id.max(id + 1);
            rows.insert(id, entity.with_id(id));
        }
        Self {
            rows: RwLock::new(rows),
            next_id: AtomicI64::new(next_id),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, entity: E) -> Result<E, sqlx::Error> {
        let mut rows = self.rows.write().await;
        match entity.id() {
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let saved = entity.with_id(id);
                rows.insert(id, saved.clone());
                Ok(saved)
            }
            Some(id) => match rows.get_mut(&id) {
                Some(slot) => {
                    *slot = entity.clone();
                    Ok(entity)
                }
                None => Err(sqlx::Error::RowNotFound),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::models::UcsbOrganization;

    fn org(code: &str) -> UcsbOrganization {
        UcsbOrganization {
            id: None,
            org_code: code.to_string(),
            org_translation_short: format!("{code} short"),
            org_translation: format!("{code} full name"),
            inactive: false,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();

        let first = repo.save(org("ORG1")).await.unwrap();
        let second = repo.save(org("ORG2")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn find_all_returns_insertion_order() {
        let repo = InMemoryRepository::new();
        for code in ["B", "A", "C"] {
            repo.save(org(code)).await.unwrap();
        }

        let codes: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.org_code)
            .collect();
        assert_eq!(codes, ["B", "A", "C"]);
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let repo = InMemoryRepository::new();
        let saved = repo.save(org("ORG1")).await.unwrap();

        let updated = repo
            .save(UcsbOrganization {
                inactive: true,
                ..saved
            })
            .await
            .unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(repo.len().await, 1);
        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert!(stored.inactive);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_row_not_found() {
        let repo = InMemoryRepository::new();
        let ghost = org("GHOST").with_id(42);

        assert_matches!(repo.save(ghost).await, Err(sqlx::Error::RowNotFound));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn find_by_id_reports_absence() {
        let repo = InMemoryRepository::<UcsbOrganization>::new();
        assert_eq!(repo.find_by_id(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn seeded_continues_sequence_after_existing_ids() {
        let repo = InMemoryRepository::seeded([org("A").with_id(5), org("B")]);

        let next = repo.save(org("C")).await.unwrap();

        assert_eq!(next.id, Some(7));
        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|o| o.id)
            .collect();
        assert_eq!(ids, [5, 6, 7]);
    }
}
