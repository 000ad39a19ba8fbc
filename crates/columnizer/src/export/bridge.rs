//! Scripting bridge export.
//!
//! The embedded scripting runtime only ever needs a flat string-keyed
//! mapping of primitives, so the bridge is a capability interface rather
//! than a dependency on any particular runtime's table type: anything that
//! can flatten itself this way can be handed to any scripting or export
//! backend.

use serde_json::{Map, Value};

use crate::record::LogRecord;

/// Timestamp rendering used for bridge values.
const BRIDGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Capability: convertible to a flat name→value mapping.
pub trait ToFlatMap {
    fn to_flat_map(&self) -> Map<String, Value>;
}

impl ToFlatMap for LogRecord {
    /// Base record attributes plus one entry per schema column, keyed by
    /// column name. A column named like a base attribute overwrites it.
    fn to_flat_map(&self) -> Map<String, Value> {
        let mut map = Map::new();

        map.insert("index".to_string(), Value::from(self.index() as u64));
        map.insert(
            "timestamp".to_string(),
            Value::String(
                self.display_timestamp()
                    .format(BRIDGE_TIMESTAMP_FORMAT)
                    .to_string(),
            ),
        );
        map.insert(
            "level".to_string(),
            Value::String(self.level().as_str().to_string()),
        );
        map.insert(
            "message".to_string(),
            Value::String(self.message().to_string()),
        );

        for (column, value) in self.schema().columns().iter().zip(self.fields()) {
            map.insert(column.name.clone(), Value::String(value.clone()));
        }

        map
    }
}
