use std::collections::HashMap;

use crate::Value;

/// Variables the caller exposes to conditions. Flat, the condition
/// language has no scoping of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment {
            values: HashMap::new(),
        }
    }

    pub fn extend(&mut self, vals: HashMap<String, Value>) {
        for (k, v) in vals.iter() {
            self.values.insert(k.to_string(), v.clone());
        }
    }

    pub fn define(&mut self, name: String, value: Value) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }
}
