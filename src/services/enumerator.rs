use color_metrics::QuantizedRgb;

use crate::error::EnumerationError;
use crate::models::{ColorRecord, EnumerationConfig};
use crate::services::batch::{BatchFull, ColorBatch};
use crate::services::batch_writer::BatchWriter;
use crate::services::progress::ProgressObserver;

/// Lifecycle of an [`Enumerator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumeratorState {
    Idle,
    Running,
    Completed,
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub bits_per_channel: u8,
    pub colors: u64,
    pub batches: u64,
}

/// Walks every color of a quantized RGB cube and flushes records in batches.
///
/// Order is lexicographic over (red, green, blue) with blue varying fastest.
/// Memory is bounded by the batch capacity regardless of cube size.
pub struct Enumerator {
    config: EnumerationConfig,
    batch: ColorBatch,
    processed: u64,
    sequence: u64,
    state: EnumeratorState,
}

impl Enumerator {
    /// Create an enumerator; fails if the configuration is invalid.
    ///
    /// The batch buffer never reserves more slots than the cube has colors.
    pub fn new(config: EnumerationConfig) -> Result<Self, EnumerationError> {
        config.validate()?;
        let total = config.total_colors()?;
        let capacity = usize::try_from(total)
            .map_or(config.batch_size, |total| config.batch_size.min(total));
        let batch = ColorBatch::with_capacity(capacity);
        Ok(Self {
            config,
            batch,
            processed: 0,
            sequence: 0,
            state: EnumeratorState::Idle,
        })
    }

    pub fn state(&self) -> EnumeratorState {
        self.state
    }

    /// Colors processed so far
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Batches handed to the writer so far
    pub fn batches_written(&self) -> u64 {
        self.sequence
    }

    pub fn config(&self) -> &EnumerationConfig {
        &self.config
    }

    /// Enumerate the whole cube.
    ///
    /// A persistence failure is fatal: it is logged, the enumerator stays in
    /// `Running` and cannot be restarted.
    pub fn run(
        &mut self,
        writer: &mut dyn BatchWriter,
        progress: &mut dyn ProgressObserver,
    ) -> Result<RunSummary, EnumerationError> {
        if self.state != EnumeratorState::Idle {
            return Err(EnumerationError::NotIdle { state: self.state });
        }

        let bits = self.config.bits_per_channel;
        let limit = self.config.channel_limit()?;
        let total = self.config.total_colors()?;
        let interval = self.config.progress_interval;

        self.state = EnumeratorState::Running;
        tracing::info!(
            bits_per_channel = bits,
            total,
            batch_size = self.batch.capacity(),
            "Starting enumeration"
        );

        for red in 0..limit {
            for green in 0..limit {
                for blue in 0..limit {
                    let color = QuantizedRgb::new(red, green, blue, bits)?;
                    self.batch
                        .push(ColorRecord::from_quantized(color))
                        .map_err(|BatchFull(_)| EnumerationError::BatchOverflow {
                            capacity: self.batch.capacity(),
                        })?;

                    self.processed += 1;
                    if self.processed % interval == 0 {
                        progress.on_progress(self.processed);
                    }

                    if self.batch.is_full() || self.processed == total {
                        self.flush(writer)?;
                    }
                }
            }
        }

        self.state = EnumeratorState::Completed;
        let summary = RunSummary {
            bits_per_channel: bits,
            colors: self.processed,
            batches: self.sequence,
        };
        tracing::info!(
            bits_per_channel = bits,
            colors = summary.colors,
            batches = summary.batches,
            "Enumeration complete"
        );
        Ok(summary)
    }

    fn flush(&mut self, writer: &mut dyn BatchWriter) -> Result<(), EnumerationError> {
        let sequence = self.sequence + 1;
        if let Err(e) = writer.write_batch(self.batch.records(), sequence) {
            tracing::error!(sequence, %e, "Batch write failed, halting enumeration");
            return Err(e.into());
        }

        tracing::debug!(sequence, records = self.batch.len(), "Flushed batch");
        self.sequence = sequence;
        self.batch.clear();
        Ok(())
    }
}
