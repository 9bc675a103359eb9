use crate::common::config::RECORDS_PER_PAGE;
use crate::common::{PageId, PageIdRange, Result};
use crate::record::Record;
use crate::storage::disk::DiskManager;
use crate::storage::page::RecordPage;

/// Packs a slice of records into full pages and writes them to freshly
/// allocated contiguous disk pages. Returns the half-open page-id range
/// holding the relation.
pub fn bulk_load(disk: &DiskManager, records: &[Record]) -> Result<PageIdRange> {
    if records.is_empty() {
        return Ok(PageIdRange::empty_at(PageId::new(disk.num_pages())));
    }

    let mut start = None;
    let mut end = PageId::new(disk.num_pages());

    for chunk in records.chunks(RECORDS_PER_PAGE) {
        let mut page = RecordPage::new();
        for record in chunk {
            page.append(*record)?;
        }

        let page_id = disk.allocate_page()?;
        disk.write_page(page_id, &page.to_bytes())?;

        start.get_or_insert(page_id);
        end = PageId::new(page_id.as_u32() + 1);
    }

    // Allocation is sequential, so the chunk pages are contiguous.
    let start = start.unwrap_or(end);
    Ok(PageIdRange::new(start, end))
}

/// Reads every record of a relation back in page order.
pub fn scan(disk: &DiskManager, range: PageIdRange) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut data = [0u8; crate::common::PAGE_SIZE];

    for page_id in range.iter() {
        disk.read_page(page_id, &mut data)?;
        let page = RecordPage::from_bytes(&data);
        records.extend(page.records().copied());
    }
    Ok(records)
}
