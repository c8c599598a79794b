use crate::models::ColorRecord;

/// Returned by [`ColorBatch::push`] when the buffer is already full.
#[derive(Debug)]
pub struct BatchFull(pub ColorRecord);

/// Fixed-capacity, ordered buffer of records awaiting a flush.
///
/// The backing storage is allocated once and reused across flushes, and
/// `push` never grows it past `capacity`.
pub struct ColorBatch {
    records: Vec<ColorRecord>,
    capacity: usize,
}

impl ColorBatch {
    /// Create an empty batch; a capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, handing it back if the batch is full
    pub fn push(&mut self, record: ColorRecord) -> Result<(), BatchFull> {
        if self.is_full() {
            return Err(BatchFull(record));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all records, keeping the allocation
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_metrics::QuantizedRgb;

    fn record(blue: u16) -> ColorRecord {
        ColorRecord::from_quantized(QuantizedRgb::new(0, 0, blue, 8).unwrap())
    }

    #[test]
    fn test_push_until_full() {
        let mut batch = ColorBatch::with_capacity(3);
        assert!(batch.is_empty());

        for blue in 0..3 {
            batch.push(record(blue)).unwrap();
        }

        assert!(batch.is_full());
        assert_eq!(batch.len(), 3);

        let rejected = batch.push(record(9)).unwrap_err();
        assert_eq!(rejected.0.blue, 9);
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut batch = ColorBatch::with_capacity(4);
        for blue in [5, 1, 7] {
            batch.push(record(blue)).unwrap();
        }

        let blues: Vec<u16> = batch.records().iter().map(|r| r.blue).collect();
        assert_eq!(blues, vec![5, 1, 7]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut batch = ColorBatch::with_capacity(2);
        batch.push(record(0)).unwrap();
        batch.push(record(1)).unwrap();
        batch.clear();

        assert!(batch.is_empty());
        assert!(!batch.is_full());
        assert_eq!(batch.capacity(), 2);
        assert!(batch.records.capacity() >= 2);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut batch = ColorBatch::with_capacity(0);
        assert_eq!(batch.capacity(), 1);
        batch.push(record(0)).unwrap();
        assert!(batch.is_full());
    }
}
