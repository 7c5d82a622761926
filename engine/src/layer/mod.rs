use std::collections::BTreeMap;

use baize_types::ledger::{Event, VenueConfig};

use crate::store::{Key, Revision, Store, StoreError, Value};

mod handlers;

/// One atomic unit of work over the store.
///
/// The first read of a key records its revision as a commit guard (an
/// absent document guards at revision 0). Writes are staged in a pending
/// overlay, so later reads observe them. `commit` hands the guards and the
/// staged writes to the store as a single conditional batch: if any guarded
/// document moved underneath the unit of work, nothing is applied and the
/// caller may retry from scratch.
pub struct Layer<'a, S: Store> {
    store: &'a S,
    config: &'a VenueConfig,
    guards: BTreeMap<Key, Revision>,
    pending: BTreeMap<Key, Value>,
    events: Vec<Event>,
}

impl<'a, S: Store> Layer<'a, S> {
    pub fn new(store: &'a S, config: &'a VenueConfig) -> Self {
        Self {
            store,
            config,
            guards: BTreeMap::new(),
            pending: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &VenueConfig {
        self.config
    }

    pub(crate) async fn get(&mut self, key: &Key) -> Result<Option<Value>, StoreError> {
        if let Some(value) = self.pending.get(key) {
            return Ok(Some(value.clone()));
        }
        match self.store.get(key).await? {
            Some((revision, value)) => {
                self.guards.entry(key.clone()).or_insert(revision);
                Ok(Some(value))
            }
            None => {
                self.guards.entry(key.clone()).or_insert(0);
                Ok(None)
            }
        }
    }

    pub(crate) fn insert(&mut self, key: Key, value: Value) {
        self.pending.insert(key, value);
    }

    pub(crate) fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Commit every staged write, conditional on all observed revisions.
    /// Returns the events of the unit of work on success.
    pub async fn commit(self) -> Result<Vec<Event>, StoreError> {
        let Self {
            store,
            guards,
            pending,
            events,
            ..
        } = self;
        store
            .commit(guards.into_iter().collect(), pending.into_iter().collect())
            .await?;
        Ok(events)
    }
}
