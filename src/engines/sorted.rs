use crate::engines::KvsEngine;
use log::debug;
use skiplist::SkipMap;
use std::fmt;

/// Skip list engine. Keys are enumerated in ascending order.
pub struct SortedStore {
    kv: SkipMap<String, String>,
}

impl SortedStore {
    pub fn new() -> SortedStore {
        let kv = SkipMap::<String, String>::new();
        SortedStore { kv }
    }
}

impl Default for SortedStore {
    fn default() -> Self {
        SortedStore::new()
    }
}

impl KvsEngine for SortedStore {
    fn put(&mut self, key: String, value: String) {
        debug!("Put: key: {key}, value: {value}");
        self.kv.insert(key, value);
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.kv.get(key).map(String::as_str)
    }

    fn remove(&mut self, key: &str) {
        if self.kv.remove(key).is_some() {
            debug!("Removed: key: {key}");
        }
    }

    fn contains_key(&self, key: &str) -> bool {
        self.kv.contains_key(key)
    }

    fn contains_value(&self, value: &str) -> bool {
        self.kv.iter().any(|(_, v)| v == value)
    }

    fn len(&self) -> usize {
        self.kv.len()
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.kv.iter().map(|(k, _)| k.as_str()))
    }

    fn values(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.kv.iter().map(|(_, v)| v.as_str()))
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.kv.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl fmt::Display for SortedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl Extend<(String, String)> for SortedStore {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl FromIterator<(String, String)> for SortedStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut store = SortedStore::new();
        store.extend(iter);
        store
    }
}
