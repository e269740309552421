use std::sync::Mutex;

use spawnlog_model::SpawnExec;

use crate::{
    error::{CoreError, CoreResult},
    sink::backend::SpawnSink,
};

/// In-memory log keeping records in append order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SpawnExec>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records appended so far.
    pub fn records(&self) -> Vec<SpawnExec> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.records.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the sink, returning its records.
    pub fn into_records(self) -> Vec<SpawnExec> {
        match self.records.into_inner() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SpawnSink for MemorySink {
    fn append(&self, record: SpawnExec) -> CoreResult<()> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| CoreError::Sink("memory sink lock poisoned".into()))?;
        guard.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    fn record(arg: &str) -> SpawnExec {
        SpawnExec {
            command_args: vec![arg.to_string()],
            runner: "local".into(),
            ..Default::default()
        }
    }

    #[test]
    fn keeps_append_order() {
        let sink = MemorySink::new();
        sink.append(record("a")).unwrap();
        sink.append(record("b")).unwrap();

        let args: Vec<_> = sink
            .records()
            .into_iter()
            .map(|r| r.command_args[0].clone())
            .collect();
        assert_eq!(args, vec!["a", "b"]);
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let sink = Arc::new(MemorySink::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for j in 0..25 {
                        sink.append(record(&format!("{i}-{j}"))).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(sink.len(), 200);
    }

    #[test]
    fn into_records_returns_everything() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.append(record("a")).unwrap();
        assert_eq!(sink.into_records().len(), 1);
    }
}
