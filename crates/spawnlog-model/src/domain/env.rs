use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::EnvironmentVariable;

/// Environment of a spawn.
///
/// Stored in the order the producer emitted it and serialized as a transparent array.
/// Producers must not emit a name twice; see [`Environment::duplicate_names`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Environment(pub Vec<EnvironmentVariable>);

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all variables in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &EnvironmentVariable> {
        self.0.iter()
    }

    /// Get the value of the first variable with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|var| var.name() == name)
            .map(|var| var.value())
    }

    /// Append a variable.
    pub fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.0.push(EnvironmentVariable::new(name, value));
    }

    /// Names that appear more than once, in order of their second appearance.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut dups = Vec::new();
        for var in &self.0 {
            if !seen.insert(var.name()) && !dups.contains(&var.name()) {
                dups.push(var.name());
            }
        }
        dups
    }

    /// Returns the variables sorted by name and value, skipping the given names.
    ///
    /// Emission order carries no meaning when comparing records. Repeated entries are kept
    /// so that a duplicate still shows up as a difference.
    pub fn sorted_without(&self, ignored: &BTreeSet<String>) -> Vec<&EnvironmentVariable> {
        let mut vars: Vec<_> = self
            .0
            .iter()
            .filter(|var| !ignored.contains(var.name()))
            .collect();
        vars.sort();
        vars
    }
}

impl FromIterator<EnvironmentVariable> for Environment {
    fn from_iter<I: IntoIterator<Item = EnvironmentVariable>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<N, V> FromIterator<(N, V)> for Environment
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, v)| EnvironmentVariable::new(n, v))
                .collect(),
        )
    }
}
