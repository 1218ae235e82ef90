use std::collections::HashMap;

use crate::protocol::command::{param, Command};
use crate::protocol::reply::Reply;
use crate::store::Store;

/// PUT command: /put?key=K&value=V
#[derive(Debug, Clone, PartialEq)]
pub struct PutCmd {
  pub key: String,
  pub value: String,
}

impl PutCmd {
  /// Create a new PUT command
  pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      key: key.into(),
      value: value.into(),
    }
  }

  /// Parse PUT command from query parameters
  pub fn parse(params: &HashMap<String, String>) -> Command {
    Command::Put(PutCmd::new(param(params, "key"), param(params, "value")))
  }

  /// Execute the PUT command
  pub fn execute(&self, store: &Store) -> Reply {
    match store.put(self.key.as_str(), self.value.as_str()) {
      Ok(()) => Reply::text(format!("Stored {} -> {}", self.key, self.value)),
      Err(e) => e.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::StoreError;

  #[test]
  fn test_put_cmd_parse() {
    let params = HashMap::from([
      ("key".to_string(), "mykey".to_string()),
      ("value".to_string(), "myvalue".to_string()),
    ]);

    assert_eq!(PutCmd::parse(&params), Command::Put(PutCmd::new("mykey", "myvalue")));
  }

  #[test]
  fn test_put_cmd_execute_success() {
    let store = Store::new();
    let result = PutCmd::new("key", "value").execute(&store);

    assert_eq!(result, Reply::text("Stored key -> value"));
    assert_eq!(store.get("key"), Ok("value".to_string()));
  }

  #[test]
  fn test_put_cmd_missing_value() {
    let store = Store::new();
    let params = HashMap::from([("key".to_string(), "key".to_string())]);
    let result = PutCmd::parse(&params).execute(&store);

    assert_eq!(result, Reply::Error(StoreError::KEY_VALUE_REQUIRED));
    assert!(store.is_empty());
  }
}
