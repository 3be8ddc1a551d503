use crate::proto::{Command, Record};
use crate::{KvsEngine, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::path::PathBuf;

/// An ordered list of records applied to a store one after another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    records: Vec<Record>,
}

impl Script {
    pub fn from_records(records: Vec<Record>) -> Script {
        Script { records }
    }

    /// Reads a JSON array of records.
    pub fn load(path: impl Into<PathBuf>) -> Result<Script> {
        let path = path.into();
        let value = std::fs::read_to_string(&path)?;
        let records: Vec<Record> = serde_json::from_str(&value)?;
        info!("Loaded {} records from {}", records.len(), path.display());
        Ok(Script { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Applies every record to `store`, writing what each read produces to
    /// `out`, one item per line. Mutations print nothing.
    pub fn run<W: Write>(&self, store: &mut dyn KvsEngine, out: &mut W) -> Result<()> {
        for record in &self.records {
            debug!("{:?}", record);
            match record.cmd {
                Command::Put => store.put(record.key.clone(), record.value.clone()),
                Command::Remove => store.remove(&record.key),
                Command::Get => match store.get(&record.key) {
                    None => {
                        warn!("NO such key in storage: {}", record.key);
                        writeln!(out, "{} doesn't exist!", record.key)?;
                    }
                    Some(value) => writeln!(out, "{value}")?,
                },
                Command::ContainsKey => writeln!(out, "{}", store.contains_key(&record.key))?,
                Command::ContainsValue => {
                    writeln!(out, "{}", store.contains_value(&record.value))?
                }
                Command::Keys => {
                    for key in store.keys() {
                        writeln!(out, "{key}")?;
                    }
                }
                Command::Values => {
                    for value in store.values() {
                        writeln!(out, "{value}")?;
                    }
                }
                Command::Entries => {
                    for (key, value) in store.entries() {
                        writeln!(out, "{key}:\t\t{value}")?;
                    }
                }
                Command::Len => writeln!(out, "{}", store.len())?,
                Command::Print => writeln!(out, "{}", store.to_display_string())?,
            }
        }
        out.flush()?;
        Ok(())
    }
}
