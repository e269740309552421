//! Comparison of two execution logs.
//!
//! Records are paired by digest. A record present on one side only is an added or
//! removed action. A pair whose identity fields differ despite the equal digest is a
//! digest anomaly: it points at a faulty digest function or at inputs folded into the
//! key but not printed in the log. Anomalies are reported and both records are kept.
mod config;
pub use config::CompareConfig;

mod fields;

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::Serialize;
use spawnlog_model::{Digest, SpawnExec};
use tracing::{debug, instrument, warn};

/// Which of the two logs a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Before,
    After,
}

/// A record identified by its side and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRef {
    pub side: Side,
    pub index: usize,
}

/// Two records paired by digest, with the names of the fields that differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairedDifference {
    pub digest: Digest,
    pub before: usize,
    pub after: usize,
    pub fields: Vec<&'static str>,
}

/// Outcome of [`compare_logs`]. Indices refer to positions in the respective log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDiff {
    /// Records of `after` with no counterpart in `before`.
    pub added: Vec<usize>,
    /// Records of `before` with no counterpart in `after`.
    pub removed: Vec<usize>,
    /// Paired records whose observed fields differ.
    pub changed: Vec<PairedDifference>,
    /// Paired records whose identity fields differ despite equal digests.
    pub anomalies: Vec<PairedDifference>,
    /// Records whose hash function does not occur in the other log, when that log has
    /// digested records at all.
    pub incomparable: Vec<RecordRef>,
    /// Records without a digest.
    pub undigested: Vec<RecordRef>,
    /// Number of pairs with no difference at all.
    pub unchanged: usize,
}

impl LogDiff {
    /// Returns `true` if the two logs describe the same actions with the same results.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.changed.is_empty()
            && self.anomalies.is_empty()
            && self.incomparable.is_empty()
            && self.undigested.is_empty()
    }
}

fn hash_functions(records: &[SpawnExec]) -> BTreeSet<&str> {
    records
        .iter()
        .filter_map(|r| r.digest.as_ref())
        .map(|d| d.hash_function_name.as_str())
        .collect()
}

/// A digest is incomparable only against a log that digests with other functions.
/// A log without any digest gives no evidence either way.
fn is_incomparable(digest: &Digest, other_fns: &BTreeSet<&str>) -> bool {
    !other_fns.is_empty() && !other_fns.contains(digest.hash_function_name.as_str())
}

/// Compare two logs of the same build target set.
///
/// When a digest repeats within a log, its records are paired in log order.
#[instrument(level = "debug", skip_all, fields(before = before.len(), after = after.len()))]
pub fn compare_logs(before: &[SpawnExec], after: &[SpawnExec], cfg: &CompareConfig) -> LogDiff {
    let mut diff = LogDiff::default();
    let before_fns = hash_functions(before);
    let after_fns = hash_functions(after);

    let mut pending: BTreeMap<&Digest, VecDeque<usize>> = BTreeMap::new();
    for (index, record) in before.iter().enumerate() {
        match &record.digest {
            Some(d) => pending.entry(d).or_default().push_back(index),
            None => diff.undigested.push(RecordRef {
                side: Side::Before,
                index,
            }),
        }
    }

    for (index, record) in after.iter().enumerate() {
        let Some(digest) = &record.digest else {
            diff.undigested.push(RecordRef {
                side: Side::After,
                index,
            });
            continue;
        };
        if is_incomparable(digest, &before_fns) {
            diff.incomparable.push(RecordRef {
                side: Side::After,
                index,
            });
            continue;
        }

        let paired = pending.get_mut(digest).and_then(VecDeque::pop_front);
        let Some(before_index) = paired else {
            diff.added.push(index);
            continue;
        };
        compare_pair(&mut diff, digest, before_index, index, before, after, cfg);
    }

    for (digest, indices) in pending {
        let incomparable = is_incomparable(digest, &after_fns);
        for index in indices {
            if !incomparable {
                diff.removed.push(index);
            } else {
                diff.incomparable.push(RecordRef {
                    side: Side::Before,
                    index,
                });
            }
        }
    }

    diff.removed.sort_unstable();
    diff.incomparable.sort_unstable();
    diff.undigested.sort_unstable();

    debug!(
        added = diff.added.len(),
        removed = diff.removed.len(),
        changed = diff.changed.len(),
        anomalies = diff.anomalies.len(),
        unchanged = diff.unchanged,
        "logs compared"
    );
    diff
}

fn compare_pair(
    diff: &mut LogDiff,
    digest: &Digest,
    before_index: usize,
    after_index: usize,
    before: &[SpawnExec],
    after: &[SpawnExec],
    cfg: &CompareConfig,
) {
    let (b, a) = (&before[before_index], &after[after_index]);

    let identity = fields::identity_differences(b, a, cfg);
    let observed = fields::observed_differences(b, a, cfg);

    if identity.is_empty() && observed.is_empty() {
        diff.unchanged += 1;
        return;
    }
    if !identity.is_empty() {
        warn!(
            digest = %digest,
            before = before_index,
            after = after_index,
            fields = ?identity,
            "equal digests with different identity fields"
        );
        diff.anomalies.push(PairedDifference {
            digest: digest.clone(),
            before: before_index,
            after: after_index,
            fields: identity,
        });
    }
    if !observed.is_empty() {
        diff.changed.push(PairedDifference {
            digest: digest.clone(),
            before: before_index,
            after: after_index,
            fields: observed,
        });
    }
}
