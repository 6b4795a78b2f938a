//! Connection options.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Driver name option.
pub const DRIVER: &str = "driver";
/// Google Cloud project id option.
pub const PROJECT: &str = "project";
/// Spanner instance id option.
pub const INSTANCE: &str = "instance";
/// Spanner database id option.
pub const DATABASE: &str = "database";

/// String-keyed options describing which database to connect to.
///
/// Options serialize as a flat map, so they can be loaded from any serde
/// format:
///
/// ```json
/// { "driver": "spanner", "project": "my-project", "instance": "main", "database": "orders" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionOptions {
    values: BTreeMap<String, String>,
}

impl ConnectionOptions {
    /// Start building a set of options.
    pub fn builder() -> ConnectionOptionsBuilder {
        ConnectionOptionsBuilder::default()
    }

    /// Get the value of an option.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check if an option is set.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The driver named by these options.
    pub fn driver(&self) -> Option<&str> {
        self.get(DRIVER)
    }

    /// Iterate over all options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Builder for [`ConnectionOptions`].
#[derive(Debug, Default)]
pub struct ConnectionOptionsBuilder {
    values: BTreeMap<String, String>,
}

impl ConnectionOptionsBuilder {
    /// Set an option, replacing any earlier value.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> ConnectionOptions {
        ConnectionOptions {
            values: self.values,
        }
    }
}
