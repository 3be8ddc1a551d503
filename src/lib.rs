pub mod config;
pub mod demos;
pub mod engines;
pub mod proto;
pub mod script;

pub use config::StoreConfig;
pub use engines::{open_engine, KvStore, KvsEngine, KvsError, Result, SortedStore};
pub use proto::Command;
pub use proto::Record;
pub use script::Script;
