use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Put,
    Get,
    Remove,
    ContainsKey,
    ContainsValue,
    Keys,
    Values,
    Entries,
    Len,
    Print,
}

/// One store operation. Fields a command does not use are left empty.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Record {
    pub cmd: Command,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl Record {
    pub fn new(cmd: Command) -> Record {
        Record {
            cmd,
            key: String::new(),
            value: String::new(),
        }
    }

    pub fn put(key: &str, value: &str) -> Record {
        Record {
            cmd: Command::Put,
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }

    pub fn with_key(cmd: Command, key: &str) -> Record {
        Record {
            cmd,
            key: key.to_owned(),
            value: String::new(),
        }
    }

    pub fn with_value(cmd: Command, value: &str) -> Record {
        Record {
            cmd,
            key: String::new(),
            value: value.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let record: Record = serde_json::from_str(r#"{"cmd":"Keys"}"#).unwrap();
        assert_eq!(record, Record::new(Command::Keys));
    }

    #[test]
    fn parse_put() {
        let record: Record =
            serde_json::from_str(r#"{"cmd":"Put","key":"UK","value":"London"}"#).unwrap();
        assert_eq!(record, Record::put("UK", "London"));
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(serde_json::from_str::<Record>(r#"{"cmd":"Seek","key":"UK"}"#).is_err());
    }
}
