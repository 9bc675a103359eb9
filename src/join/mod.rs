mod bucket;
mod partition;
mod probe;

pub use bucket::Bucket;
pub use partition::partition;
pub use probe::{probe, JoinTotals};

use crate::common::{PageId, Result, PAGE_SIZE};
use crate::record::Record;
use crate::storage::disk::DiskManager;
use crate::storage::page::RecordPage;

/// Which relation of the join a page list or record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Reads the output pages produced by [`probe`] back as matched pairs,
/// in page order. Pairs are always (left record, right record).
pub fn read_output(disk: &DiskManager, pages: &[PageId]) -> Result<Vec<(Record, Record)>> {
    let mut pairs = Vec::new();
    let mut data = [0u8; PAGE_SIZE];

    for &page_id in pages {
        disk.read_page(page_id, &mut data)?;
        let page = RecordPage::from_bytes(&data);
        pairs.extend(page.pairs().map(|(l, r)| (*l, *r)));
    }
    Ok(pairs)
}
