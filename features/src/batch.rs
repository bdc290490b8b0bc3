//! Parallel extraction over many battles
//!
//! Battles are independent, so a batch is spread across a rayon pool. The
//! only shared state is the read-only [`ReferenceTables`](kinesis_battle::ReferenceTables)
//! behind the extractor's `Arc`.

use kinesis_battle::Battle;
use kinesis_protocol::{battle_lines, parse_battle_record};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::error::ExtractError;
use crate::extractor::FeatureExtractor;
use crate::record::{FeatureRecord, FeatureTable};

/// Configures how many worker threads are used for batch extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use Rayon default (num_cpus).
    pub workers: usize,
}

impl WorkerPool {
    /// Use exactly `n` worker threads.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Run a closure on a thread pool with this worker count. If
    /// [workers](WorkerPool::workers) is 0, uses the global Rayon pool.
    pub fn install<F, R>(&self, f: F) -> Result<R, ExtractError>
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            return Ok(f());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;
        Ok(pool.install(f))
    }
}

/// A record that couldn't be extracted
#[derive(Debug)]
pub struct BatchFailure {
    /// 1-based line in the source file
    pub line: usize,
    pub error: ExtractError,
}

/// Everything a batch produced: the rows that worked and the lines that didn't
#[derive(Debug)]
pub struct BatchOutcome {
    pub table: FeatureTable,
    pub failures: Vec<BatchFailure>,
}

impl FeatureExtractor {
    /// Extract already-validated battles, keeping input order
    pub fn extract_batch(
        &self,
        battles: &[Battle],
        pool: WorkerPool,
    ) -> Result<FeatureTable, ExtractError> {
        let records: Vec<FeatureRecord> =
            pool.install(|| battles.par_iter().map(|b| self.extract(b)).collect())?;

        let mut table = self.table();
        for record in records {
            table.push(record);
        }

        tracing::info!(battles = table.len(), workers = pool.workers, "Extracted batch");
        Ok(table)
    }

    /// Parse, validate and extract every non-blank line of a JSONL log
    ///
    /// A bad line is logged and reported in [`BatchOutcome::failures`]; it
    /// never stops the rest of the batch.
    pub fn extract_lines(&self, input: &str, pool: WorkerPool) -> Result<BatchOutcome, ExtractError> {
        let lines: Vec<(usize, &str)> = battle_lines(input).collect();

        let results: Vec<(usize, Result<FeatureRecord, ExtractError>)> = pool.install(|| {
            lines
                .par_iter()
                .map(|&(line, text)| (line, self.extract_line(line, text)))
                .collect()
        })?;

        let mut table = self.table();
        let mut failures = Vec::new();
        for (line, result) in results {
            match result {
                Ok(record) => table.push(record),
                Err(error) => {
                    tracing::warn!(line, error = %error, "Skipping battle record");
                    failures.push(BatchFailure { line, error });
                }
            }
        }

        tracing::info!(
            extracted = table.len(),
            failed = failures.len(),
            workers = pool.workers,
            "Extracted batch"
        );

        Ok(BatchOutcome { table, failures })
    }

    fn extract_line(&self, line: usize, text: &str) -> Result<FeatureRecord, ExtractError> {
        let record =
            parse_battle_record(text).map_err(|source| ExtractError::Parse { line, source })?;
        let battle =
            Battle::from_protocol(record).map_err(|source| ExtractError::Invalid { line, source })?;
        Ok(self.extract(&battle))
    }
}
