use crate::ports::outbound::{KvStore, Revertible};
use std::collections::BTreeMap;

/// In-memory implementation of KvStore.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKvStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Revertible for InMemoryKvStore {
    type Checkpoint = BTreeMap<Vec<u8>, Vec<u8>>;

    fn checkpoint(&self) -> Self::Checkpoint {
        self.entries.clone()
    }

    fn revert_to(&mut self, checkpoint: Self::Checkpoint) {
        self.entries = checkpoint;
    }
}

impl KvStore for InMemoryKvStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) {
        self.entries.insert(key.to_vec(), value);
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.entries
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
