use serde::{Deserialize, Serialize};

use crate::Digest;

/// A path relative to the execution root paired with the digest of its content.
///
/// `is_tool` is only meaningful for spawn inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Path relative to the execution root.
    pub path: String,
    /// Digest of the file content.
    #[serde(default)]
    pub digest: Digest,
    /// Whether the input belongs to a tool rather than the action's own data.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_tool: bool,
}

impl File {
    /// Create a regular (non-tool) file entry.
    pub fn new(path: impl Into<String>, digest: Digest) -> Self {
        Self {
            path: path.into(),
            digest,
            is_tool: false,
        }
    }

    /// Create a tool input entry.
    pub fn tool(path: impl Into<String>, digest: Digest) -> Self {
        Self {
            path: path.into(),
            digest,
            is_tool: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::File;
    use crate::Digest;

    #[test]
    fn constructors_set_tool_flag() {
        let d = Digest::new("aa", 2, "SHA-256");
        assert!(!File::new("a.o", d.clone()).is_tool);
        assert!(File::tool("bin/cc", d).is_tool);
    }

    #[test]
    fn serde_skips_false_tool_flag() {
        let f = File::new("out/a.o", Digest::new("aa", 2, "SHA-256"));
        let json = serde_json::to_string(&f).unwrap();
        assert!(!json.contains("isTool"));

        let back: File = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }
}
