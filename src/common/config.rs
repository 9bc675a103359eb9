/// Size of a page in bytes (4 KB)
pub const PAGE_SIZE: usize = 4096;

/// Bytes of each page reserved for the page header (record count + padding)
pub const PAGE_HEADER_SIZE: usize = 8;

/// Size of the join key within a serialized record
pub const RECORD_KEY_SIZE: usize = 8;

/// Fixed width of a record's payload field
pub const RECORD_DATA_SIZE: usize = 24;

/// Serialized size of one record
pub const RECORD_SIZE: usize = RECORD_KEY_SIZE + RECORD_DATA_SIZE;

/// Number of records a page can hold. Rounded down to an even count so a
/// matched pair emitted during probe never has to split across two pages.
pub const RECORDS_PER_PAGE: usize = ((PAGE_SIZE - PAGE_HEADER_SIZE) / RECORD_SIZE) & !1;

/// Minimum frame count the join phases can operate with: probe needs at least
/// one hash-table frame plus an input frame plus an output frame.
pub const MIN_POOL_SIZE: usize = 3;

const _: () = assert!(RECORDS_PER_PAGE % 2 == 0);
const _: () = assert!(PAGE_HEADER_SIZE + RECORDS_PER_PAGE * RECORD_SIZE <= PAGE_SIZE);
