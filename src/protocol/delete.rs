use std::collections::HashMap;

use crate::protocol::command::{param, Command};
use crate::protocol::reply::Reply;
use crate::store::Store;

/// DELETE command: /delete?key=K
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCmd {
  pub key: String,
}

impl DeleteCmd {
  pub fn new(key: impl Into<String>) -> Self {
    Self { key: key.into() }
  }

  pub fn parse(params: &HashMap<String, String>) -> Command {
    Command::Delete(DeleteCmd::new(param(params, "key")))
  }

  pub fn execute(&self, store: &Store) -> Reply {
    match store.delete(&self.key) {
      Ok(()) => Reply::text(format!("Deleted {}", self.key)),
      Err(e) => e.into(),
    }
  }
}
