//! In-memory status record store.
//!
//! Backed by a concurrent map keyed by `(character_id, identifier)`: an
//! upsert replaces atomically, so the one-record-per-key invariant holds
//! structurally no matter how writes interleave. The store also exposes the
//! predicate-query surface of the original persistence collaborator, and the
//! `StatusRepo` implementation is written against it.

use async_trait::async_trait;
use dashmap::DashMap;

use statline_domain::{CharacterId, Status};

use crate::infrastructure::ports::{RepoError, StatusRepo};

/// Fields of the status record addressable by predicate queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    CharacterId,
    Identifier,
}

/// An exact-match field condition.
#[derive(Debug, Clone)]
pub struct Predicate {
    field: StatusField,
    equals: String,
}

impl Predicate {
    pub fn new(field: StatusField, equals: impl Into<String>) -> Self {
        Self {
            field,
            equals: equals.into(),
        }
    }

    fn matches(&self, status: &Status) -> bool {
        match self.field {
            StatusField::CharacterId => status.character_id().to_string() == self.equals,
            StatusField::Identifier => status.identifier() == self.equals,
        }
    }
}

/// In-memory keyed store for status records.
pub struct MemoryStatusStore {
    records: DashMap<(CharacterId, String), Status>,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// All records matching every predicate.
    pub fn find_by_predicates(&self, predicates: &[Predicate]) -> Vec<Status> {
        self.records
            .iter()
            .filter(|entry| predicates.iter().all(|p| p.matches(entry.value())))
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MemoryStatusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusRepo for MemoryStatusStore {
    async fn find(
        &self,
        character_id: CharacterId,
        identifier: &str,
    ) -> Result<Option<Status>, RepoError> {
        let matches = self.find_by_predicates(&[
            Predicate::new(StatusField::CharacterId, character_id.to_string()),
            Predicate::new(StatusField::Identifier, identifier),
        ]);
        Ok(matches.into_iter().next())
    }

    async fn upsert(&self, status: &Status) -> Result<Status, RepoError> {
        self.records.insert(
            (status.character_id(), status.identifier().to_string()),
            status.clone(),
        );
        Ok(status.clone())
    }

    async fn delete(
        &self,
        character_id: CharacterId,
        identifier: &str,
    ) -> Result<bool, RepoError> {
        Ok(self
            .records
            .remove(&(character_id, identifier.to_string()))
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statline_domain::Severity;

    fn status(character_id: CharacterId, identifier: &str, value: f64) -> Status {
        Status::new(character_id, identifier, "Steady", Severity::Guarded, value)
            .expect("valid status")
    }

    #[tokio::test]
    async fn test_upsert_replaces_by_key() {
        let store = MemoryStatusStore::new();
        let character_id = CharacterId::new();

        store
            .upsert(&status(character_id, "Status.Magical", 0.5))
            .await
            .expect("upsert");
        store
            .upsert(&status(character_id, "Status.Magical", 0.25))
            .await
            .expect("upsert");

        assert_eq!(store.len(), 1);
        let found = store
            .find(character_id, "Status.Magical")
            .await
            .expect("find")
            .expect("present");
        assert_eq!(found.value(), 0.25);
    }

    #[tokio::test]
    async fn test_find_distinguishes_identifiers() {
        let store = MemoryStatusStore::new();
        let character_id = CharacterId::new();

        store
            .upsert(&status(character_id, "Status.Magical", 0.5))
            .await
            .expect("upsert");

        assert!(store
            .find(character_id, "Status.Tracked")
            .await
            .expect("find")
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_absence() {
        let store = MemoryStatusStore::new();
        let character_id = CharacterId::new();

        assert!(!store
            .delete(character_id, "Status.Magical")
            .await
            .expect("delete"));

        store
            .upsert(&status(character_id, "Status.Magical", 0.5))
            .await
            .expect("upsert");
        assert!(store
            .delete(character_id, "Status.Magical")
            .await
            .expect("delete"));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_predicate_query_filters_on_all_conditions() {
        let store = MemoryStatusStore::new();
        let first = CharacterId::new();
        let second = CharacterId::new();

        store
            .upsert(&status(first, "Status.Magical", 0.5))
            .await
            .expect("upsert");
        store
            .upsert(&status(first, "Status.Tracked", 0.75))
            .await
            .expect("upsert");
        store
            .upsert(&status(second, "Status.Magical", 1.0))
            .await
            .expect("upsert");

        let matches = store.find_by_predicates(&[
            Predicate::new(StatusField::CharacterId, first.to_string()),
            Predicate::new(StatusField::Identifier, "Status.Magical"),
        ]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value(), 0.5);

        let by_identifier =
            store.find_by_predicates(&[Predicate::new(StatusField::Identifier, "Status.Magical")]);
        assert_eq!(by_identifier.len(), 2);
    }
}
