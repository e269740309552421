//! Cache-key augmentation.
//!
//! A [`CacheSalt`] is folded into the action-key computation before a spawn is
//! dispatched. It is never part of a [`crate::SpawnExec`] and never logged.
use serde::{Deserialize, Serialize};

/// Extra input to the action key that is not otherwise visible in the action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct CacheSalt {
    /// Separates keys of actions that may run remotely from those that may not,
    /// so toggling a "no remote" tag invalidates stale entries.
    pub may_be_executed_remotely: bool,
    /// Scopes the key to a workspace when cross-workspace sharing is disallowed.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub workspace: String,
    /// Present only for scrubbed actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub_salt: Option<ScrubSalt>,
}

/// Salt applied to scrubbed actions so they never collide with their unscrubbed form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ScrubSalt {
    pub salt: String,
}

impl CacheSalt {
    /// Salt for an action with the given remote-execution permission.
    pub fn new(may_be_executed_remotely: bool) -> Self {
        Self {
            may_be_executed_remotely,
            ..Default::default()
        }
    }

    /// Builder-style helper scoping the salt to a workspace.
    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = workspace.into();
        self
    }

    /// Builder-style helper marking the action as scrubbed.
    pub fn with_scrub_salt(mut self, salt: impl Into<String>) -> Self {
        self.scrub_salt = Some(ScrubSalt { salt: salt.into() });
        self
    }

    /// Returns `true` if the action was scrubbed.
    pub fn is_scrubbed(&self) -> bool {
        self.scrub_salt.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::CacheSalt;

    #[test]
    fn builder_helpers() {
        let salt = CacheSalt::new(true)
            .with_workspace("ws1")
            .with_scrub_salt("s");
        assert!(salt.may_be_executed_remotely);
        assert_eq!(salt.workspace, "ws1");
        assert!(salt.is_scrubbed());
    }

    #[test]
    fn remote_flag_alone_distinguishes_salts() {
        let a = CacheSalt::new(true).with_workspace("ws1");
        let b = CacheSalt::new(false).with_workspace("ws1");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_scrub_salt_differs_from_none() {
        assert_ne!(CacheSalt::new(false).with_scrub_salt(""), CacheSalt::new(false));
    }

    #[test]
    fn serde_roundtrip() {
        let salt = CacheSalt::new(true).with_workspace("ws1");
        let json = serde_json::to_string(&salt).unwrap();
        assert_eq!(json, r#"{"mayBeExecutedRemotely":true,"workspace":"ws1"}"#);

        let back: CacheSalt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, salt);
    }
}
