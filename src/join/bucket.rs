use crate::common::PageId;

use super::Side;

/// One partition of the join: the disk pages holding the left-relation and
/// right-relation records that hashed to this bucket, plus running record
/// counts. Counts accumulate as pages are appended during the partition
/// phase; the probe phase reads buckets but never modifies them.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    left_pages: Vec<PageId>,
    right_pages: Vec<PageId>,
    num_left_records: u64,
    num_right_records: u64,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a flushed page of left-relation records.
    pub fn add_left_page(&mut self, page_id: PageId, records: u64) {
        self.left_pages.push(page_id);
        self.num_left_records += records;
    }

    /// Records a flushed page of right-relation records.
    pub fn add_right_page(&mut self, page_id: PageId, records: u64) {
        self.right_pages.push(page_id);
        self.num_right_records += records;
    }

    pub(crate) fn add_page(&mut self, side: Side, page_id: PageId, records: u64) {
        match side {
            Side::Left => self.add_left_page(page_id, records),
            Side::Right => self.add_right_page(page_id, records),
        }
    }

    /// Page ids holding this bucket's left-relation records, in flush order.
    pub fn left_pages(&self) -> &[PageId] {
        &self.left_pages
    }

    /// Page ids holding this bucket's right-relation records, in flush order.
    pub fn right_pages(&self) -> &[PageId] {
        &self.right_pages
    }

    pub fn pages(&self, side: Side) -> &[PageId] {
        match side {
            Side::Left => &self.left_pages,
            Side::Right => &self.right_pages,
        }
    }

    pub fn num_left_records(&self) -> u64 {
        self.num_left_records
    }

    pub fn num_right_records(&self) -> u64 {
        self.num_right_records
    }

    pub fn num_records(&self, side: Side) -> u64 {
        match side {
            Side::Left => self.num_left_records,
            Side::Right => self.num_right_records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_accumulates_counts() {
        let mut bucket = Bucket::new();
        bucket.add_left_page(PageId::new(3), 100);
        bucket.add_left_page(PageId::new(7), 12);
        bucket.add_right_page(PageId::new(4), 50);

        assert_eq!(bucket.left_pages(), &[PageId::new(3), PageId::new(7)]);
        assert_eq!(bucket.right_pages(), &[PageId::new(4)]);
        assert_eq!(bucket.num_left_records(), 112);
        assert_eq!(bucket.num_right_records(), 50);
        assert_eq!(bucket.num_records(Side::Left), 112);
        assert_eq!(bucket.pages(Side::Right), bucket.right_pages());
    }
}
