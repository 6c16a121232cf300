//! Parameter sources - where raw values come from
//!
//! The core never extracts values from a request itself; the collaborating
//! layer hands it a [`ParamSource`] and the orchestrator consults it once
//! per rule evaluation. Values are `serde_json::Value` so query-string
//! strings and decoded JSON body scalars flow through the same interface.

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Source of raw parameter values for one request
pub trait ParamSource {
    /// Look up the raw value for a parameter, `None` when absent
    fn get(&self, name: &str) -> Option<Value>;
}

impl ParamSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<Value> {
        HashMap::get(self, name).map(|s| Value::String(s.clone()))
    }
}

impl ParamSource for HashMap<String, Value> {
    fn get(&self, name: &str) -> Option<Value> {
        HashMap::get(self, name).cloned()
    }
}

impl ParamSource for Map<String, Value> {
    fn get(&self, name: &str) -> Option<Value> {
        Map::get(self, name).cloned()
    }
}

impl ParamSource for Value {
    /// Treats a JSON object as its field map; anything else has no parameters
    fn get(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(name)).cloned()
    }
}
