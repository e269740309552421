//! Capabilities injected from outside the log model.
//!
//! Hashing file content and computing action keys both live outside this crate. The
//! traits here are the seams through which producers hand them in.
use spawnlog_model::{CacheSalt, Digest};
use spawnlog_wire::cache_salt_bytes;

/// Pluggable content digest.
///
/// Implementations must be stable across builds: equal content and algorithm give an
/// equal [`Digest`].
pub trait DigestFunction: Send + Sync {
    /// Name recorded in [`Digest::hash_function_name`].
    fn name(&self) -> &str;

    /// Digest of `content`.
    fn digest(&self, content: &[u8]) -> Digest;
}

/// Computes the opaque action key a spawn is cached under.
pub trait ActionKeyFunction: Send + Sync {
    fn action_key(&self, salt: &CacheSalt, action: &[u8]) -> Digest;
}

/// Action key over the salt followed by the action bytes.
///
/// The salt is length-delimited, so distinct salts never produce the same digest input
/// for the same action. Whether the resulting keys differ is then up to the digest function.
#[derive(Debug, Clone)]
pub struct SaltedActionKey<D> {
    digest_fn: D,
}

impl<D: DigestFunction> SaltedActionKey<D> {
    pub fn new(digest_fn: D) -> Self {
        Self { digest_fn }
    }

    /// Bytes handed to the digest function for the given salt and action.
    pub fn key_input(salt: &CacheSalt, action: &[u8]) -> Vec<u8> {
        let mut buf = cache_salt_bytes(salt);
        buf.extend_from_slice(action);
        buf
    }
}

impl<D: DigestFunction> ActionKeyFunction for SaltedActionKey<D> {
    fn action_key(&self, salt: &CacheSalt, action: &[u8]) -> Digest {
        self.digest_fn.digest(&Self::key_input(salt, action))
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use proptest::prelude::*;
    use spawnlog_model::{CacheSalt, Digest};

    use super::{ActionKeyFunction, DigestFunction, SaltedActionKey};

    /// Injective stand-in for a real hash: the hex of the input itself.
    struct HexDigest;

    impl DigestFunction for HexDigest {
        fn name(&self) -> &str {
            "HEX"
        }

        fn digest(&self, content: &[u8]) -> Digest {
            let mut hash = String::with_capacity(content.len() * 2);
            for b in content {
                let _ = write!(hash, "{b:02x}");
            }
            Digest::new(hash, content.len() as u64, self.name())
        }
    }

    #[test]
    fn remote_flag_changes_action_key() {
        let keys = SaltedActionKey::new(HexDigest);
        let action = b"cc -c a.c";

        let remote = keys.action_key(&CacheSalt::new(true).with_workspace("ws1"), action);
        let local = keys.action_key(&CacheSalt::new(false).with_workspace("ws1"), action);
        assert_ne!(remote, local);
    }

    #[test]
    fn workspace_changes_action_key() {
        let keys = SaltedActionKey::new(HexDigest);
        let a = keys.action_key(&CacheSalt::new(true).with_workspace("ws1"), b"x");
        let b = keys.action_key(&CacheSalt::new(true).with_workspace("ws2"), b"x");
        assert_ne!(a, b);
    }

    #[test]
    fn scrubbed_never_collides_with_unscrubbed() {
        let keys = SaltedActionKey::new(HexDigest);
        let plain = keys.action_key(&CacheSalt::default(), b"x");
        let scrubbed = keys.action_key(&CacheSalt::default().with_scrub_salt(""), b"x");
        assert_ne!(plain, scrubbed);
    }

    #[test]
    fn same_salt_and_action_is_stable() {
        let keys = SaltedActionKey::new(HexDigest);
        let salt = CacheSalt::new(true).with_workspace("ws1");
        assert_eq!(keys.action_key(&salt, b"x"), keys.action_key(&salt, b"x"));
        assert_eq!(keys.action_key(&salt, b"x").hash_function_name, "HEX");
    }

    fn arb_salt() -> impl Strategy<Value = CacheSalt> {
        (any::<bool>(), "[a-z]{0,3}", prop::option::of("[a-z]{0,3}")).prop_map(
            |(remote, workspace, scrub)| {
                let salt = CacheSalt::new(remote).with_workspace(workspace);
                match scrub {
                    Some(s) => salt.with_scrub_salt(s),
                    None => salt,
                }
            },
        )
    }

    proptest! {
        #[test]
        fn key_input_is_injective(
            s1 in arb_salt(), s2 in arb_salt(),
            a1 in prop::collection::vec(any::<u8>(), 0..6),
            a2 in prop::collection::vec(any::<u8>(), 0..6),
        ) {
            let same_input = SaltedActionKey::<HexDigest>::key_input(&s1, &a1)
                == SaltedActionKey::<HexDigest>::key_input(&s2, &a2);
            prop_assert_eq!(same_input, s1 == s2 && a1 == a2);
        }
    }
}
