use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::models::ColorRecord;

/// Persists completed batches.
///
/// Called synchronously by the enumerator; an error halts the run.
pub trait BatchWriter {
    /// Persist one batch. `sequence` starts at 1 and increases per flush.
    fn write_batch(&mut self, records: &[ColorRecord], sequence: u64)
        -> Result<(), PersistenceError>;
}

/// File name for a batch: `{bits}bits-part-{sequence}.json`
pub fn batch_file_name(bits_per_channel: u8, sequence: u64) -> String {
    format!("{bits_per_channel}bits-part-{sequence}.json")
}

/// Writes each batch as a JSON array to its own file
pub struct JsonFileWriter {
    output_dir: PathBuf,
    bits_per_channel: u8,
    pretty: bool,
}

impl JsonFileWriter {
    /// Create a writer, creating `output_dir` if needed
    pub fn new(
        output_dir: impl Into<PathBuf>,
        bits_per_channel: u8,
    ) -> Result<Self, PersistenceError> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|source| PersistenceError::Io {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self {
            output_dir,
            bits_per_channel,
            pretty: false,
        })
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn batch_path(&self, sequence: u64) -> PathBuf {
        self.output_dir
            .join(batch_file_name(self.bits_per_channel, sequence))
    }
}

impl BatchWriter for JsonFileWriter {
    fn write_batch(
        &mut self,
        records: &[ColorRecord],
        sequence: u64,
    ) -> Result<(), PersistenceError> {
        let path = self.batch_path(sequence);
        let pretty = self.pretty;

        write_via_temp(&path, |writer| {
            let result = if pretty {
                serde_json::to_writer_pretty(writer, records)
            } else {
                serde_json::to_writer(writer, records)
            };
            result.map_err(|source| PersistenceError::Serialize {
                path: path.clone(),
                source,
            })
        })?;

        tracing::debug!(
            path = %path.display(),
            records = records.len(),
            "Wrote batch file"
        );
        Ok(())
    }
}

/// Sibling file a batch is written to before being renamed into place
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `path` through a temporary sibling, renamed only after `write` and
/// the flush succeed. On failure the temporary file is removed, so a batch
/// file is either complete or absent.
fn write_via_temp<F>(path: &Path, write: F) -> Result<(), PersistenceError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), PersistenceError>,
{
    let tmp_path = temp_path(path);
    let result = write_and_rename(path, &tmp_path, write);

    if result.is_err() {
        if let Err(e) = std::fs::remove_file(&tmp_path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %tmp_path.display(),
                    %e,
                    "Failed to remove partial batch file"
                );
            }
        }
    }
    result
}

fn write_and_rename<F>(path: &Path, tmp_path: &Path, write: F) -> Result<(), PersistenceError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), PersistenceError>,
{
    let io_error = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(tmp_path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush().map_err(io_error)?;
    drop(writer);

    std::fs::rename(tmp_path, path).map_err(io_error)
}

/// Keeps every batch in memory, tagged with its sequence number
#[derive(Default)]
pub struct MemoryWriter {
    batches: Vec<(u64, Vec<ColorRecord>)>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batches(&self) -> &[(u64, Vec<ColorRecord>)] {
        &self.batches
    }

    /// All records across batches, in flush order
    pub fn records(&self) -> impl Iterator<Item = &ColorRecord> {
        self.batches.iter().flat_map(|(_, records)| records.iter())
    }
}

impl BatchWriter for MemoryWriter {
    fn write_batch(
        &mut self,
        records: &[ColorRecord],
        sequence: u64,
    ) -> Result<(), PersistenceError> {
        self.batches.push((sequence, records.to_vec()));
        Ok(())
    }
}
