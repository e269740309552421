use spawnlog_model::SpawnExec;

use crate::compare::CompareConfig;

/// Identity fields that differ between two records.
///
/// Equal digests are expected to imply equal identity fields.
pub(crate) fn identity_differences(
    before: &SpawnExec,
    after: &SpawnExec,
    cfg: &CompareConfig,
) -> Vec<&'static str> {
    let mut out = Vec::new();
    if before.command_args != after.command_args {
        out.push("command_args");
    }
    if before.sorted_inputs() != after.sorted_inputs() {
        out.push("inputs");
    }
    if before.environment_variables.sorted_without(&cfg.ignored_environment)
        != after.environment_variables.sorted_without(&cfg.ignored_environment)
    {
        out.push("environment_variables");
    }
    if !before.platform.same_properties(&after.platform) {
        out.push("platform");
    }
    out
}

/// Observed fields that differ between two records.
pub(crate) fn observed_differences(
    before: &SpawnExec,
    after: &SpawnExec,
    cfg: &CompareConfig,
) -> Vec<&'static str> {
    let mut out = Vec::new();
    let mut check = |differs: bool, name: &'static str| {
        if differs {
            out.push(name);
        }
    };

    check(before.listed_outputs != after.listed_outputs, "listed_outputs");
    check(
        before.sorted_actual_outputs() != after.sorted_actual_outputs(),
        "actual_outputs",
    );
    check(before.remotable != after.remotable, "remotable");
    check(before.cacheable != after.cacheable, "cacheable");
    check(before.remote_cacheable != after.remote_cacheable, "remote_cacheable");
    check(before.timeout_millis != after.timeout_millis, "timeout_millis");
    check(before.mnemonic != after.mnemonic, "mnemonic");
    check(before.progress_message != after.progress_message, "progress_message");
    check(before.target_label != after.target_label, "target_label");
    check(before.runner != after.runner, "runner");
    check(before.remote_cache_hit != after.remote_cache_hit, "remote_cache_hit");
    check(before.status != after.status, "status");
    check(before.exit_code != after.exit_code, "exit_code");

    if cfg.include_metrics {
        check(before.walltime != after.walltime, "walltime");
        check(before.metrics != after.metrics, "metrics");
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use spawnlog_model::{Digest, File, SpawnExec};

    use super::*;

    fn base() -> SpawnExec {
        SpawnExec {
            command_args: vec!["cc".into(), "a.c".into()],
            runner: "local".into(),
            ..Default::default()
        }
    }

    #[test]
    fn identical_records_have_no_differences() {
        let cfg = CompareConfig::default();
        assert!(identity_differences(&base(), &base(), &cfg).is_empty());
        assert!(observed_differences(&base(), &base(), &cfg).is_empty());
    }

    #[test]
    fn argument_order_matters() {
        let mut other = base();
        other.command_args.reverse();
        assert_eq!(
            identity_differences(&base(), &other, &CompareConfig::default()),
            vec!["command_args"]
        );
    }

    #[test]
    fn environment_order_does_not_matter() {
        let mut a = base();
        a.environment_variables.push("A", "1");
        a.environment_variables.push("B", "2");
        let mut b = base();
        b.environment_variables.push("B", "2");
        b.environment_variables.push("A", "1");
        assert!(identity_differences(&a, &b, &CompareConfig::default()).is_empty());
    }

    #[test]
    fn ignored_environment_is_skipped() {
        let mut a = base();
        a.environment_variables.push("TMPDIR", "/tmp/1");
        let mut b = base();
        b.environment_variables.push("TMPDIR", "/tmp/2");

        let cfg = CompareConfig::default();
        assert_eq!(identity_differences(&a, &b, &cfg), vec!["environment_variables"]);
        assert!(identity_differences(&a, &b, &cfg.ignore_env("TMPDIR")).is_empty());
    }

    #[test]
    fn duplicated_input_is_a_difference() {
        let header = File::new("a.h", Digest::new("1", 4, "SHA-256"));
        let a = SpawnExec {
            inputs: vec![header.clone()],
            ..base()
        };
        let b = SpawnExec {
            inputs: vec![header.clone(), header],
            ..base()
        };
        assert_eq!(
            identity_differences(&a, &b, &CompareConfig::default()),
            vec!["inputs"]
        );
    }

    #[test]
    fn repeated_environment_entry_is_a_difference() {
        let mut a = base();
        a.environment_variables.push("PATH", "/bin");
        let mut b = a.clone();
        b.environment_variables.push("PATH", "/bin");
        assert_eq!(
            identity_differences(&a, &b, &CompareConfig::default()),
            vec!["environment_variables"]
        );
    }

    #[test]
    fn duplicated_actual_output_is_a_difference() {
        let o = File::new("a.o", Digest::new("2", 8, "SHA-256"));
        let a = SpawnExec {
            actual_outputs: vec![o.clone()],
            ..base()
        };
        let b = SpawnExec {
            actual_outputs: vec![o.clone(), o],
            ..base()
        };
        assert_eq!(
            observed_differences(&a, &b, &CompareConfig::default()),
            vec!["actual_outputs"]
        );
    }

    #[test]
    fn metrics_only_when_enabled() {
        let a = base();
        let mut b = base();
        b.walltime = Duration::from_secs(1);

        assert!(observed_differences(&a, &b, &CompareConfig::default()).is_empty());
        assert_eq!(
            observed_differences(&a, &b, &CompareConfig::default().with_metrics()),
            vec!["walltime"]
        );
    }

    #[test]
    fn outcome_fields_reported() {
        let a = base();
        let b = SpawnExec {
            status: "TIMEOUT".into(),
            exit_code: 124,
            ..base()
        };
        assert_eq!(
            observed_differences(&a, &b, &CompareConfig::default()),
            vec!["status", "exit_code"]
        );
    }
}
