//! Consumer-side validation of a whole log.
//!
//! Malformed records are reported with their position and kept as they are.
use std::collections::BTreeMap;

use serde::Serialize;
use spawnlog_model::{Advisory, Digest, SpawnExec, Violation};
use tracing::{debug, warn};

/// Issues found in a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordIssues {
    /// Position of the record in the log.
    pub index: usize,
    pub violations: Vec<Violation>,
    pub advisories: Vec<Advisory>,
}

impl RecordIssues {
    pub fn is_malformed(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Result of checking a log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogReport {
    /// Number of records checked.
    pub records: usize,
    /// Records with at least one violation or advisory, in log order.
    pub issues: Vec<RecordIssues>,
    /// Digests shared by more than one record, with the indices that carry them.
    pub repeated_digests: Vec<(Digest, Vec<usize>)>,
}

impl LogReport {
    /// Returns `true` if no record breaks a contract rule.
    pub fn is_well_formed(&self) -> bool {
        self.issues.iter().all(|i| !i.is_malformed())
    }

    pub fn malformed(&self) -> impl Iterator<Item = &RecordIssues> {
        self.issues.iter().filter(|i| i.is_malformed())
    }
}

/// Check every record of a log against the record contract.
pub fn check_log(records: &[SpawnExec]) -> LogReport {
    let mut issues = Vec::new();
    let mut by_digest: BTreeMap<&Digest, Vec<usize>> = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        let violations = record.violations();
        let advisories = record.advisories();

        if !violations.is_empty() {
            warn!(
                index,
                mnemonic = %record.mnemonic,
                violations = violations.len(),
                "malformed spawn record"
            );
        }
        if !violations.is_empty() || !advisories.is_empty() {
            issues.push(RecordIssues {
                index,
                violations,
                advisories,
            });
        }
        if let Some(digest) = &record.digest {
            by_digest.entry(digest).or_default().push(index);
        }
    }

    let repeated_digests: Vec<_> = by_digest
        .into_iter()
        .filter(|(_, idx)| idx.len() > 1)
        .map(|(d, idx)| (d.clone(), idx))
        .collect();

    debug!(
        records = records.len(),
        issues = issues.len(),
        repeated = repeated_digests.len(),
        "log checked"
    );

    LogReport {
        records: records.len(),
        issues,
        repeated_digests,
    }
}
