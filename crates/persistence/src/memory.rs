use std::sync::Arc;

use async_trait::async_trait;
use domain::{Entity, Repository, RepositoryError, RepositoryResult};
use tokio::sync::RwLock;

/// In-memory repository implementation for testing.
///
/// Stores entities in insertion order and provides the same contract as
/// the SQLite repositories. Clones share the same storage.
pub struct InMemoryRepository<E> {
    entities: Arc<RwLock<Vec<E>>>,
}

impl<E> InMemoryRepository<E> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the number of stored entities.
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }

    /// Removes every entity.
    pub async fn clear(&self) {
        self.entities.write().await.clear();
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            entities: self.entities.clone(),
        }
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + 'static,
    E::Id: PartialEq,
{
    async fn create(&self, entity: &E) -> RepositoryResult<()> {
        let mut entities = self.entities.write().await;
        if entities.iter().any(|e| e.id() == entity.id()) {
            return Err(RepositoryError::already_exists::<E>(entity.id()));
        }
        entities.push(entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &E) -> RepositoryResult<()> {
        let mut entities = self.entities.write().await;
        match entities.iter_mut().find(|e| e.id() == entity.id()) {
            Some(stored) => {
                *stored = entity.clone();
                Ok(())
            }
            None => Err(RepositoryError::update_failed::<E>(entity.id())),
        }
    }

    async fn find(&self, id: &E::Id) -> RepositoryResult<E> {
        let entities = self.entities.read().await;
        entities
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found::<E>(id))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<E>> {
        Ok(self.entities.read().await.clone())
    }
}
