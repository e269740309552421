use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a byte sequence.
///
/// Two digests are equal iff `hash`, `size_bytes` and `hash_function_name` are all equal.
/// The function name is an open tag: new algorithms need no schema change, see
/// [`crate::constants::hash_function`] for the names in common use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Digest {
    /// Algorithm-specific encoding of the hash (usually lowercase hex).
    #[serde(default)]
    pub hash: String,
    /// Size of the digested content in bytes.
    #[serde(default)]
    pub size_bytes: u64,
    /// Name of the hash function that produced `hash`.
    #[serde(default)]
    pub hash_function_name: String,
}

impl Digest {
    /// Create a new digest.
    pub fn new<H, F>(hash: H, size_bytes: u64, hash_function_name: F) -> Self
    where
        H: Into<String>,
        F: Into<String>,
    {
        Self {
            hash: hash.into(),
            size_bytes,
            hash_function_name: hash_function_name.into(),
        }
    }

    /// Returns `true` if both digests were produced by the same hash function.
    ///
    /// Digests from different functions carry no comparable information.
    pub fn is_comparable_with(&self, other: &Digest) -> bool {
        self.hash_function_name == other.hash_function_name
    }

    /// Compare two digests, returning `None` when they are not comparable.
    ///
    /// Consumers must not report a mismatch between digests of different hash functions.
    pub fn matches(&self, other: &Digest) -> Option<bool> {
        if !self.is_comparable_with(other) {
            return None;
        }
        Some(self == other)
    }

    /// Returns `true` if no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty() && self.size_bytes == 0 && self.hash_function_name.is_empty()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hash_function_name.is_empty() {
            write!(f, "{}/{}", self.hash, self.size_bytes)
        } else {
            write!(
                f,
                "{}:{}/{}",
                self.hash_function_name, self.hash, self.size_bytes
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::Digest;
    use crate::constants::hash_function::{SHA1, SHA256};

    #[test]
    fn equal_when_all_fields_equal() {
        let a = Digest::new("abc", 3, SHA256);
        let b = Digest::new("abc", 3, SHA256);
        assert_eq!(a, b);
        assert_eq!(a.matches(&b), Some(true));
    }

    #[test]
    fn hash_function_name_alone_breaks_equality() {
        let a = Digest::new("abc", 3, SHA256);
        let b = Digest::new("abc", 3, SHA1);
        assert_ne!(a, b);
        assert!(!a.is_comparable_with(&b));
        assert_eq!(a.matches(&b), None);
    }

    #[test]
    fn size_mismatch_is_a_real_mismatch() {
        let a = Digest::new("abc", 3, SHA256);
        let b = Digest::new("abc", 4, SHA256);
        assert_eq!(a.matches(&b), Some(false));
    }

    #[test]
    fn display_includes_function_name() {
        assert_eq!(Digest::new("ff", 1, SHA256).to_string(), "SHA-256:ff/1");
        assert_eq!(Digest::new("ff", 1, "").to_string(), "ff/1");
    }

    #[test]
    fn serde_uses_camel_case() {
        let d = Digest::new("ff", 7, SHA256);
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"sizeBytes\":7"));
        assert!(json.contains("\"hashFunctionName\":\"SHA-256\""));

        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn serde_tolerates_missing_and_unknown_fields() {
        let d: Digest = serde_json::from_str(r#"{"hash":"ff","futureField":1}"#).unwrap();
        assert_eq!(d, Digest::new("ff", 0, ""));
    }

    proptest! {
        #[test]
        fn equality_iff_all_fields_equal(
            h1 in "[a-f0-9]{0,4}", h2 in "[a-f0-9]{0,4}",
            s1 in 0u64..4, s2 in 0u64..4,
            f1 in prop::sample::select(vec![SHA256, SHA1]),
            f2 in prop::sample::select(vec![SHA256, SHA1]),
        ) {
            let a = Digest::new(h1.clone(), s1, f1);
            let b = Digest::new(h2.clone(), s2, f2);
            prop_assert_eq!(a == b, h1 == h2 && s1 == s2 && f1 == f2);
        }
    }
}
