//! Storage of saved content, keyed by element id

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// One saved document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContent {
    /// Row id assigned on first save
    pub id: u64,
    pub element_id: u64,
    pub content: String,
    /// Seconds since the Unix epoch
    pub created_at: u64,
    pub updated_at: u64,
}

/// Whether a save created a new record or replaced one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveAction {
    Insert,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    pub action: SaveAction,
    pub id: u64,
}

/// Backend for the load and save endpoints
pub trait ContentStore {
    fn load(&self, element_id: u64) -> Result<Option<StoredContent>, EditorError>;

    /// Insert or replace the content for `element_id`
    fn save(&mut self, element_id: u64, content: &str) -> Result<SaveOutcome, EditorError>;
}

/// A store held in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<u64, StoredContent>,
    next_id: u64,
    /// When set, every operation fails with this message
    unavailable: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose operations all fail, as when the database is down
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn check_available(&self) -> Result<(), EditorError> {
        match &self.unavailable {
            Some(reason) => Err(EditorError::Storage(reason.clone())),
            None => Ok(()),
        }
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl ContentStore for MemoryStore {
    fn load(&self, element_id: u64) -> Result<Option<StoredContent>, EditorError> {
        self.check_available()?;
        Ok(self.records.get(&element_id).cloned())
    }

    fn save(&mut self, element_id: u64, content: &str) -> Result<SaveOutcome, EditorError> {
        self.check_available()?;
        let now = now_secs();

        if let Some(record) = self.records.get_mut(&element_id) {
            record.content = content.to_string();
            record.updated_at = now;
            return Ok(SaveOutcome {
                action: SaveAction::Update,
                id: record.id,
            });
        }

        self.next_id += 1;
        let id = self.next_id;
        self.records.insert(
            element_id,
            StoredContent {
                id,
                element_id,
                content: content.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
        Ok(SaveOutcome {
            action: SaveAction::Insert,
            id,
        })
    }
}
