use std::collections::HashMap;
use std::future::Future;
use std::sync::RwLock;

use chrono::NaiveDate;
use thiserror::Error;

use baize_types::ledger::{
    DailyRanking, MonthKey, MonthlyLeaderboard, PlayerAccount, PlayerId, ProfitRecord, Receipt,
    ReceiptId, TransactionLog,
};
use baize_types::LedgerError;

/// Document key. One key maps to one document.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Player(PlayerId),
    PlayerIndex,
    ProfitDay(NaiveDate),
    Ranking(NaiveDate),
    Monthly(MonthKey),
    Log(PlayerId),
    Receipt(ReceiptId),
    ReceiptDay(NaiveDate),
}

/// Document payload, one variant per key kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Player(PlayerAccount),
    PlayerIndex(Vec<PlayerId>),
    ProfitDay(Vec<ProfitRecord>),
    Ranking(DailyRanking),
    Monthly(MonthlyLeaderboard),
    Log(TransactionLog),
    Receipt(Receipt),
    ReceiptDay(Vec<ReceiptId>),
}

/// Per-document revision. An absent document has revision 0; every write
/// bumps the revision by one.
pub type Revision = u64;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("revision conflict on {0:?}")]
    Conflict(Key),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => LedgerError::Conflict { attempts: 1 },
            StoreError::Unavailable(message) => LedgerError::Unavailable(message),
        }
    }
}

/// Versioned document store.
///
/// `commit` must apply all writes as a single atomic batch, and only if
/// every guarded key still has the revision the caller observed; otherwise
/// it fails with [`StoreError::Conflict`] and applies nothing. Request
/// timeouts of a remote store surface as [`StoreError::Unavailable`].
pub trait Store: Send + Sync {
    fn get(
        &self,
        key: &Key,
    ) -> impl Future<Output = Result<Option<(Revision, Value)>, StoreError>> + Send;

    fn commit(
        &self,
        guards: Vec<(Key, Revision)>,
        writes: Vec<(Key, Value)>,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// In-memory store with per-key revisions.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<Key, (Revision, Value)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    async fn get(&self, key: &Key) -> Result<Option<(Revision, Value)>, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        Ok(documents.get(key).cloned())
    }

    async fn commit(
        &self,
        guards: Vec<(Key, Revision)>,
        writes: Vec<(Key, Value)>,
    ) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        for (key, observed) in &guards {
            let current = documents.get(key).map(|(revision, _)| *revision).unwrap_or(0);
            if current != *observed {
                return Err(StoreError::Conflict(key.clone()));
            }
        }
        for (key, value) in writes {
            let next = documents.get(&key).map(|(revision, _)| revision + 1).unwrap_or(1);
            documents.insert(key, (next, value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_doc(name: &str) -> Value {
        Value::Player(PlayerAccount::new(name.to_string()))
    }

    #[tokio::test]
    async fn test_revisions_start_at_one() {
        let store = MemoryStore::new();
        let key = Key::PlayerIndex;

        assert_eq!(store.get(&key).await.unwrap(), None);

        store
            .commit(vec![(key.clone(), 0)], vec![(key.clone(), Value::PlayerIndex(vec![]))])
            .await
            .unwrap();

        let (revision, _) = store.get(&key).await.unwrap().unwrap();
        assert_eq!(revision, 1);
    }

    #[tokio::test]
    async fn test_stale_guard_rejects_whole_batch() {
        let store = MemoryStore::new();
        let guarded = Key::Player(PlayerId::from("p1"));
        let other = Key::Player(PlayerId::from("p2"));

        store
            .commit(vec![], vec![(guarded.clone(), player_doc("Ayane"))])
            .await
            .unwrap();

        // Guard observed the pre-write revision: the batch must fail and
        // neither key may be touched.
        let result = store
            .commit(
                vec![(guarded.clone(), 0)],
                vec![
                    (guarded.clone(), player_doc("Benny")),
                    (other.clone(), player_doc("Chika")),
                ],
            )
            .await;
        assert_eq!(result, Err(StoreError::Conflict(guarded.clone())));
        assert!(store.get(&other).await.unwrap().is_none());

        let (revision, _) = store.get(&guarded).await.unwrap().unwrap();
        assert_eq!(revision, 1);
    }

    #[tokio::test]
    async fn test_absent_key_guards_at_zero() {
        let store = MemoryStore::new();
        let key = Key::PlayerIndex;

        // Two writers race to create the same document.
        store
            .commit(vec![(key.clone(), 0)], vec![(key.clone(), Value::PlayerIndex(vec![]))])
            .await
            .unwrap();
        let result = store
            .commit(vec![(key.clone(), 0)], vec![(key.clone(), Value::PlayerIndex(vec![]))])
            .await;
        assert_eq!(result, Err(StoreError::Conflict(key)));
    }
}
