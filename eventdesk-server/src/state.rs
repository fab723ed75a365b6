use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Result, bail};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

pub type RecordId = u64;
pub type Record = Map<String, Value>;

/// Shared application state: the records, ordered by id.
#[derive(Clone, Default)]
pub struct Collection {
    inner: Arc<RwLock<Records>>,
}

struct Records {
    by_id: BTreeMap<RecordId, Record>,
    /// Next id to hand out. Only grows, so a deleted id is never reused.
    /// `None` once `RecordId::MAX` has been used.
    next_id: Option<RecordId>,
}

impl Default for Records {
    fn default() -> Self {
        Records {
            by_id: BTreeMap::new(),
            next_id: Some(1),
        }
    }
}

impl Collection {
    /// Build a collection from existing records. Each must be an object with
    /// a unique non-negative integer `id`.
    pub fn from_records(records: Vec<Value>) -> Result<Self> {
        let mut map = BTreeMap::new();

        for record in records {
            let Value::Object(record) = record else {
                bail!("Seed records must be JSON objects");
            };
            let Some(id) = record.get("id").and_then(Value::as_u64) else {
                bail!("Seed record without a numeric id: {}", Value::Object(record));
            };
            if map.insert(id, record).is_some() {
                bail!("Duplicate id in seed records: {id}");
            }
        }

        let next_id = match map.keys().next_back() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };

        Ok(Collection {
            inner: Arc::new(RwLock::new(Records { by_id: map, next_id })),
        })
    }

    pub async fn list(&self) -> Vec<Record> {
        self.inner.read().await.by_id.values().cloned().collect()
    }

    pub async fn get(&self, id: RecordId) -> Option<Record> {
        self.inner.read().await.by_id.get(&id).cloned()
    }

    /// Store `fields` under a fresh id, one past the highest ever handed
    /// out. A client-supplied `id` is ignored. `None` when the id space is
    /// used up.
    pub async fn insert(&self, mut fields: Record) -> Option<Record> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id?;
        inner.next_id = id.checked_add(1);

        fields.insert("id".to_string(), Value::from(id));
        inner.by_id.insert(id, fields.clone());
        Some(fields)
    }

    /// Merge `fields` into an existing record. The id cannot be changed.
    pub async fn merge(&self, id: RecordId, fields: Record) -> Option<Record> {
        let mut inner = self.inner.write().await;
        let record = inner.by_id.get_mut(&id)?;

        for (key, value) in fields {
            if key != "id" {
                record.insert(key, value);
            }
        }
        Some(record.clone())
    }

    pub async fn remove(&self, id: RecordId) -> Option<Record> {
        self.inner.write().await.by_id.remove(&id)
    }
}
