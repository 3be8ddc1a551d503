pub mod hash;
pub mod sorted;

use std::fmt;

pub use hash::KvStore;
pub use sorted::SortedStore;

pub type Result<T> = std::result::Result<T, KvsError>;

#[derive(Debug)]
pub enum KvsError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    UnknownEngine(String),
    UnknownDemo(String),
}

impl fmt::Display for KvsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KvsError::Io(e) => write!(f, "IO error: {e}"),
            KvsError::Serde(e) => write!(f, "Serialization error: {e}"),
            KvsError::UnknownEngine(name) => {
                write!(f, "Invalid engine '{name}'. Must be 'kvs' or 'skiplist'")
            }
            KvsError::UnknownDemo(name) => write!(f, "No such demo: {name}"),
        }
    }
}

impl std::error::Error for KvsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KvsError::Io(e) => Some(e),
            KvsError::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KvsError {
    fn from(e: std::io::Error) -> Self {
        KvsError::Io(e)
    }
}

impl From<serde_json::Error> for KvsError {
    fn from(e: serde_json::Error) -> Self {
        KvsError::Serde(e)
    }
}

/// A mutable mapping from string keys to string values.
///
/// A missing key is never an error: `get` answers `None` and `remove` does
/// nothing. Enumeration order is decided by the engine but stays the same for
/// an instance as long as it is not mutated.
pub trait KvsEngine {
    /// Inserts the pair, overwriting the value if the key is already stored.
    fn put(&mut self, key: String, value: String);
    fn get(&self, key: &str) -> Option<&str>;
    fn remove(&mut self, key: &str);
    fn contains_key(&self, key: &str) -> bool;
    /// Scans every entry, there is no index on values.
    fn contains_value(&self, value: &str) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;
    fn values(&self) -> Box<dyn Iterator<Item = &str> + '_>;
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;

    /// Renders the store as `{k1=v1, k2=v2}` in enumeration order.
    fn to_display_string(&self) -> String {
        let body = self
            .entries()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{body}}}")
    }
}

/// Builds an empty engine by name: "kvs" (hash table) or "skiplist" (sorted).
pub fn open_engine(name: &str) -> Result<Box<dyn KvsEngine>> {
    match name {
        "kvs" => Ok(Box::new(KvStore::new())),
        "skiplist" => Ok(Box::new(SortedStore::new())),
        _ => Err(KvsError::UnknownEngine(name.to_string())),
    }
}
