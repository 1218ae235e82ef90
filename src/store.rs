use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StoreError;

/// In-memory key-value store
///
/// All entries live behind a single reader/writer lock: `put` and `delete`
/// take it exclusively, `get` shares it with other readers. Every operation
/// on the same key is therefore linearizable.
pub struct Store {
  data: RwLock<HashMap<String, String>>,
}

impl Store {
  /// Create a new empty store
  pub fn new() -> Self {
    Self {
      data: RwLock::new(HashMap::new()),
    }
  }

  /// Insert or overwrite the value for `key`
  pub fn put(&self, key: impl Into<String>, value: impl Into<String>) -> Result<(), StoreError> {
    let (key, value) = (key.into(), value.into());
    if key.is_empty() || value.is_empty() {
      return Err(StoreError::KEY_VALUE_REQUIRED);
    }

    self.write().insert(key, value);
    Ok(())
  }

  /// Get the current value for `key`
  pub fn get(&self, key: &str) -> Result<String, StoreError> {
    if key.is_empty() {
      return Err(StoreError::KEY_REQUIRED);
    }

    self.read().get(key).cloned().ok_or(StoreError::NotFound)
  }

  /// Remove `key`, reporting `NotFound` if it was absent
  pub fn delete(&self, key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
      return Err(StoreError::KEY_REQUIRED);
    }

    match self.write().remove(key) {
      Some(_) => Ok(()),
      None => Err(StoreError::NotFound),
    }
  }

  /// Number of entries currently stored
  pub fn len(&self) -> usize {
    self.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  // Nothing inside a critical section can panic halfway through a mutation,
  // so a poisoned lock still guards a consistent map.
  fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
    self.data.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
    self.data.write().unwrap_or_else(PoisonError::into_inner)
  }
}

impl Default for Store {
  fn default() -> Self {
    Self::new()
  }
}
