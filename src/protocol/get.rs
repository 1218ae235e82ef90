use std::collections::HashMap;

use crate::protocol::command::{param, Command};
use crate::protocol::reply::Reply;
use crate::store::Store;

/// GET command: /get?key=K
#[derive(Debug, Clone, PartialEq)]
pub struct GetCmd {
  pub key: String,
}

impl GetCmd {
  /// Create a new GET command
  pub fn new(key: impl Into<String>) -> Self {
    Self { key: key.into() }
  }

  /// Parse GET command from query parameters
  pub fn parse(params: &HashMap<String, String>) -> Command {
    Command::Get(GetCmd::new(param(params, "key")))
  }

  /// Execute the GET command
  pub fn execute(&self, store: &Store) -> Reply {
    match store.get(&self.key) {
      Ok(value) => Reply::Entry {
        key: self.key.clone(),
        value,
      },
      Err(e) => e.into(),
    }
  }
}
