use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single name/value property of an execution platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlatformProperty {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl PlatformProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Platform a spawn ran under (OS, container image, pool, ...).
///
/// The properties form an unordered set. Names are expected to be unique but the
/// format does not enforce it.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PlatformProperty>,
}

impl Platform {
    /// Create an empty platform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no properties are present.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Append a property.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, name: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.properties.push(PlatformProperty::new(name, value));
        self
    }

    /// Get the value of the first property with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Iterate through all properties as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
    }

    /// Property names that appear more than once.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut dups = Vec::new();
        for p in &self.properties {
            if !seen.insert(p.name.as_str()) && !dups.contains(&p.name.as_str()) {
                dups.push(p.name.as_str());
            }
        }
        dups
    }

    /// Set equality: the order of properties is irrelevant.
    pub fn same_properties(&self, other: &Platform) -> bool {
        let a: BTreeSet<_> = self.properties.iter().collect();
        let b: BTreeSet<_> = other.properties.iter().collect();
        a == b
    }
}
