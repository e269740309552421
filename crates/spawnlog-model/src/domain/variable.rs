use serde::{Deserialize, Serialize};

/// Name/value pair of a spawn's environment.
///
/// Both fields are plain UTF-8 strings with no validation applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    /// Name of the variable.
    name: String,
    /// Value associated with the name.
    #[serde(default)]
    value: String,
}

impl EnvironmentVariable {
    /// Create a new variable.
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<(String, String)> for EnvironmentVariable {
    fn from((name, value): (String, String)) -> Self {
        Self { name, value }
    }
}

impl From<(&str, &str)> for EnvironmentVariable {
    fn from((name, value): (&str, &str)) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
