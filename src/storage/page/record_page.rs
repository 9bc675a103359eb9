use bytes::{Buf, BufMut};

use crate::common::config::{PAGE_HEADER_SIZE, RECORDS_PER_PAGE};
use crate::common::{JoinError, Result, PAGE_SIZE};
use crate::record::Record;

/// Page wire format:
///
/// | Field        | Offset | Size            |
/// |--------------|--------|-----------------|
/// | record count | 0      | 2               |
/// | padding      | 2      | 6               |
/// | records      | 8      | count * 32      |
///
/// Remaining bytes up to PAGE_SIZE are zero.
///
/// RecordPage is a fixed-capacity ordered container of records. It backs
/// both the relation pages on disk and the in-memory buffer frames; the
/// probe phase's output pages reuse the same layout with matched pairs
/// stored as consecutive records.
#[derive(Debug, Clone, Default)]
pub struct RecordPage {
    records: Vec<Record>,
}

impl RecordPage {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(RECORDS_PER_PAGE),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the page has reached its fixed capacity.
    pub fn is_full(&self) -> bool {
        self.records.len() == RECORDS_PER_PAGE
    }

    /// Appends a record. The caller must check `is_full()` first; appending
    /// into a full page is a precondition violation, not a recoverable state.
    pub fn append(&mut self, record: Record) -> Result<()> {
        if self.is_full() {
            return Err(JoinError::PageFull);
        }
        self.records.push(record);
        Ok(())
    }

    /// Appends a matched pair as two consecutive records. Capacity is even,
    /// so a page that is not full always has room for a whole pair.
    pub fn append_pair(&mut self, left: Record, right: Record) -> Result<()> {
        if self.records.len() + 2 > RECORDS_PER_PAGE {
            return Err(JoinError::PageFull);
        }
        self.records.push(left);
        self.records.push(right);
        Ok(())
    }

    /// Returns the page to the empty state. Idempotent.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Iterates records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Gets the record at `index`, if present.
    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterates the page as matched pairs, for pages written by the probe
    /// phase's output frame.
    pub fn pairs(&self) -> impl Iterator<Item = (&Record, &Record)> {
        debug_assert!(self.records.len() % 2 == 0);
        self.records.chunks_exact(2).map(|c| (&c[0], &c[1]))
    }

    /// Serializes the page into a PAGE_SIZE byte buffer.
    pub fn to_bytes(&self) -> [u8; PAGE_SIZE] {
        let mut data = [0u8; PAGE_SIZE];
        let mut buf = &mut data[..];
        buf.put_u16_le(self.records.len() as u16);
        buf.put_bytes(0, PAGE_HEADER_SIZE - 2);
        for record in &self.records {
            record.encode(&mut buf);
        }
        data
    }

    /// Deserializes a page from a PAGE_SIZE byte buffer.
    pub fn from_bytes(data: &[u8]) -> Self {
        assert_eq!(data.len(), PAGE_SIZE, "Buffer must be PAGE_SIZE bytes");
        let mut buf = data;
        let count = (buf.get_u16_le() as usize).min(RECORDS_PER_PAGE);
        buf.advance(PAGE_HEADER_SIZE - 2);
        let records = (0..count).map(|_| Record::decode(&mut buf)).collect();
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_append_and_iterate() {
        let mut page = RecordPage::new();
        assert!(page.is_empty());

        page.append(Record::new(1, "a")).unwrap();
        page.append(Record::new(2, "b")).unwrap();

        assert_eq!(page.len(), 2);
        let keys: Vec<u64> = page.records().map(|r| r.key()).collect();
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn test_page_full_append_rejected() {
        let mut page = RecordPage::new();
        for i in 0..RECORDS_PER_PAGE {
            page.append(Record::new(i as u64, "r")).unwrap();
        }
        assert!(page.is_full());

        let err = page.append(Record::new(0, "overflow")).unwrap_err();
        assert!(matches!(err, JoinError::PageFull));
    }

    #[test]
    fn test_page_reset_idempotent() {
        let mut page = RecordPage::new();
        page.append(Record::new(1, "a")).unwrap();

        page.reset();
        assert!(page.is_empty());
        page.reset();
        assert!(page.is_empty());
    }

    #[test]
    fn test_page_fullness_after_reset() {
        let mut page = RecordPage::new();
        for i in 0..RECORDS_PER_PAGE {
            page.append(Record::new(i as u64, "r")).unwrap();
        }
        assert!(page.is_full());

        page.reset();
        assert!(!page.is_full());
        page.append(Record::new(0, "r")).unwrap();
        assert!(!page.is_full());
    }

    #[test]
    fn test_page_pairs() {
        let mut page = RecordPage::new();
        page.append_pair(Record::new(1, "l"), Record::new(1, "r"))
            .unwrap();
        page.append_pair(Record::new(2, "l"), Record::new(2, "r"))
            .unwrap();

        let pairs: Vec<(u64, u64)> = page.pairs().map(|(a, b)| (a.key(), b.key())).collect();
        assert_eq!(pairs, vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_page_serialization_round_trip() {
        let mut page = RecordPage::new();
        page.append(Record::new(10, "ten")).unwrap();
        page.append(Record::new(20, "twenty")).unwrap();

        let bytes = page.to_bytes();
        let decoded = RecordPage::from_bytes(&bytes);

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.record(0), page.record(0));
        assert_eq!(decoded.record(1), page.record(1));
    }
}
