use std::time::Duration;

use crate::{
    Digest, Environment, File, ModelResult, Platform, SpawnExec, SpawnMetrics, TimeoutMs,
};

/// Assembles a [`SpawnExec`] from already observed execution facts.
///
/// The builder takes care of the one ordering duty of a producer (sorting
/// `listed_outputs`) and otherwise refuses to build a record that breaks a contract
/// rule, see [`SpawnExec::violations`].
///
/// ```rust
/// # use spawnlog_model::{Digest, File, SpawnExec};
/// let record = SpawnExec::builder(["cc", "-c", "a.c", "-o", "a.o"])
///     .env("PATH", "/usr/bin")
///     .input(File::new("a.c", Digest::new("9f86d0", 4, "SHA-256")))
///     .listed_output("a.o")
///     .actual_output(File::new("a.o", Digest::new("e3b0c4", 0, "SHA-256")))
///     .mnemonic("CppCompile")
///     .runner("linux-sandbox")
///     .build()
///     .unwrap();
/// assert!(record.succeeded());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpawnExecBuilder {
    record: SpawnExec,
}

impl SpawnExecBuilder {
    pub fn new<I, S>(command_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            record: SpawnExec {
                command_args: command_args.into_iter().map(Into::into).collect(),
                ..Default::default()
            },
        }
    }

    pub fn env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.record.environment_variables.push(name, value);
        self
    }

    pub fn environment(mut self, env: Environment) -> Self {
        self.record.environment_variables = env;
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.record.platform = platform;
        self
    }

    pub fn input(mut self, file: File) -> Self {
        self.record.inputs.push(file);
        self
    }

    pub fn inputs(mut self, files: impl IntoIterator<Item = File>) -> Self {
        self.record.inputs.extend(files);
        self
    }

    pub fn listed_output(mut self, path: impl Into<String>) -> Self {
        self.record.listed_outputs.push(path.into());
        self
    }

    pub fn listed_outputs<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record
            .listed_outputs
            .extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn actual_output(mut self, file: File) -> Self {
        self.record.actual_outputs.push(file);
        self
    }

    pub fn remotable(mut self, remotable: bool) -> Self {
        self.record.remotable = remotable;
        self
    }

    pub fn cacheable(mut self, cacheable: bool) -> Self {
        self.record.cacheable = cacheable;
        self
    }

    pub fn remote_cacheable(mut self, remote_cacheable: bool) -> Self {
        self.record.remote_cacheable = remote_cacheable;
        self
    }

    pub fn timeout_millis(mut self, timeout: TimeoutMs) -> Self {
        self.record.timeout_millis = timeout;
        self
    }

    pub fn progress_message(mut self, msg: impl Into<String>) -> Self {
        self.record.progress_message = msg.into();
        self
    }

    pub fn mnemonic(mut self, mnemonic: impl Into<String>) -> Self {
        self.record.mnemonic = mnemonic.into();
        self
    }

    pub fn target_label(mut self, label: impl Into<String>) -> Self {
        self.record.target_label = label.into();
        self
    }

    pub fn runner(mut self, runner: impl Into<String>) -> Self {
        self.record.runner = runner.into();
        self
    }

    pub fn remote_cache_hit(mut self, hit: bool) -> Self {
        self.record.remote_cache_hit = hit;
        self
    }

    /// Execution outcome. An empty status means no execution-layer error.
    pub fn outcome(mut self, status: impl Into<String>, exit_code: i32) -> Self {
        self.record.status = status.into();
        self.record.exit_code = exit_code;
        self
    }

    pub fn walltime(mut self, walltime: Duration) -> Self {
        self.record.walltime = walltime;
        self
    }

    pub fn digest(mut self, digest: Digest) -> Self {
        self.record.digest = Some(digest);
        self
    }

    pub fn metrics(mut self, metrics: SpawnMetrics) -> Self {
        self.record.metrics = metrics;
        self
    }

    /// Finish the record.
    ///
    /// Sorts `listed_outputs`, then fails with [`crate::ModelError::Contract`] if any other
    /// rule is broken.
    pub fn build(self) -> ModelResult<SpawnExec> {
        let mut record = self.record;
        record.listed_outputs.sort();
        record.validate()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{Digest, File, ModelError, SpawnExec, Violation, constants::runner};

    fn digest(h: &str) -> Digest {
        Digest::new(h, 1, "SHA-256")
    }

    #[test]
    fn build_sorts_listed_outputs() {
        let rec = SpawnExec::builder(["tool"])
            .listed_outputs(["z.o", "a.o", "m.o"])
            .runner(runner::LOCAL)
            .build()
            .unwrap();
        assert_eq!(rec.listed_outputs, vec!["a.o", "m.o", "z.o"]);
    }

    #[test]
    fn build_keeps_every_field() {
        let rec = SpawnExec::builder(["cc", "a.c"])
            .env("LANG", "C")
            .input(File::tool("bin/cc", digest("cc")))
            .listed_output("a.o")
            .actual_output(File::new("a.o", digest("ao")))
            .remotable(true)
            .cacheable(true)
            .remote_cacheable(false)
            .timeout_millis(5_000)
            .progress_message("Compiling a.c")
            .mnemonic("CppCompile")
            .target_label("//pkg:a")
            .runner(runner::REMOTE)
            .walltime(Duration::from_millis(12))
            .digest(digest("spawn"))
            .build()
            .unwrap();

        assert_eq!(rec.command_args, vec!["cc", "a.c"]);
        assert_eq!(rec.environment_variables.get("LANG"), Some("C"));
        assert!(rec.inputs[0].is_tool);
        assert!(rec.remotable && rec.cacheable && !rec.remote_cacheable);
        assert_eq!(rec.timeout_millis, 5_000);
        assert_eq!(rec.target_label, "//pkg:a");
        assert_eq!(rec.walltime, Duration::from_millis(12));
        assert_eq!(rec.digest, Some(digest("spawn")));
    }

    #[test]
    fn build_rejects_instead_of_repairing() {
        let err = SpawnExec::builder(["cc"])
            .runner(runner::LOCAL)
            .remote_cache_hit(true)
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            ModelError::Contract(ref v)
                if v == &vec![Violation::RunnerOnRemoteCacheHit { runner: "local".into() }]
        ));
    }

    #[test]
    fn failed_outcome_is_representable() {
        let rec = SpawnExec::builder(["sleep", "100"])
            .runner(runner::LINUX_SANDBOX)
            .outcome("timeout", 124)
            .build()
            .unwrap();
        assert_eq!(rec.exit_code, 124);
        assert!(!rec.succeeded());
    }
}
