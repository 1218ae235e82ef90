use std::collections::HashMap;

use crate::protocol::delete::DeleteCmd;
use crate::protocol::get::GetCmd;
use crate::protocol::put::PutCmd;
use crate::protocol::reply::Reply;
use crate::store::Store;

/// Store command types
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  /// /put?key=K&value=V
  Put(PutCmd),
  /// /get?key=K
  Get(GetCmd),
  /// /delete?key=K
  Delete(DeleteCmd),
}

impl Command {
  /// Parse a command from its route name and query parameters.
  ///
  /// Returns `None` for an unknown command name. Missing parameters are
  /// parsed as empty strings and rejected when the command executes.
  pub fn parse(name: &str, params: &HashMap<String, String>) -> Option<Self> {
    match name {
      "put" => Some(PutCmd::parse(params)),
      "get" => Some(GetCmd::parse(params)),
      "delete" => Some(DeleteCmd::parse(params)),
      _ => None,
    }
  }

  /// Command name, as used in the route
  pub fn name(&self) -> &'static str {
    match self {
      Command::Put(_) => "put",
      Command::Get(_) => "get",
      Command::Delete(_) => "delete",
    }
  }

  /// Key the command operates on
  pub fn key(&self) -> &str {
    match self {
      Command::Put(cmd) => &cmd.key,
      Command::Get(cmd) => &cmd.key,
      Command::Delete(cmd) => &cmd.key,
    }
  }

  /// Execute the command on the given store and return the reply
  pub fn execute(&self, store: &Store) -> Reply {
    match self {
      Command::Put(cmd) => cmd.execute(store),
      Command::Get(cmd) => cmd.execute(store),
      Command::Delete(cmd) => cmd.execute(store),
    }
  }
}

/// Query parameter value, or an empty string when absent
pub(crate) fn param(params: &HashMap<String, String>, name: &str) -> String {
  params.get(name).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::StoreError;

  fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect()
  }

  #[test]
  fn test_parse_put_command() {
    let cmd = Command::parse("put", &params(&[("key", "mykey"), ("value", "myvalue")])).unwrap();
    match cmd {
      Command::Put(put_cmd) => {
        assert_eq!(put_cmd.key, "mykey");
        assert_eq!(put_cmd.value, "myvalue");
      }
      _ => panic!("Expected PUT command"),
    }
  }

  #[test]
  fn test_parse_get_command() {
    let cmd = Command::parse("get", &params(&[("key", "mykey")])).unwrap();
    assert_eq!(cmd.name(), "get");
    assert_eq!(cmd.key(), "mykey");
  }

  #[test]
  fn test_parse_unknown_command() {
    assert!(Command::parse("list", &params(&[])).is_none());
    assert!(Command::parse("GET", &params(&[("key", "k")])).is_none());
  }

  #[test]
  fn test_user_scenario() {
    let store = Store::new();

    let put = Command::parse("put", &params(&[("key", "user1"), ("value", "alice")])).unwrap();
    assert_eq!(put.execute(&store), Reply::text("Stored user1 -> alice"));

    let get = Command::parse("get", &params(&[("key", "user1")])).unwrap();
    assert_eq!(get.execute(&store).body(), r#"{"user1":"alice"}"#);

    let delete = Command::parse("delete", &params(&[("key", "user1")])).unwrap();
    assert_eq!(delete.execute(&store), Reply::text("Deleted user1"));

    assert_eq!(get.execute(&store), Reply::Error(StoreError::NotFound));
  }
}
