pub mod batch;
pub mod batch_writer;
pub mod enumerator;
pub mod progress;

pub use batch::ColorBatch;
pub use batch_writer::{batch_file_name, BatchWriter, JsonFileWriter, MemoryWriter};
pub use enumerator::{Enumerator, EnumeratorState, RunSummary};
pub use progress::{NoProgress, ProgressObserver, TracingProgress};
