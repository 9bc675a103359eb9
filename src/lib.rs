//! Gracejoin - an external-memory grace hash join in Rust
//!
//! This crate implements the partitioned (grace) hash join: an equi-join for
//! two relations too large to fit in memory, run entirely in terms of
//! fixed-size pages moved between a disk store and a small pool of memory
//! frames.
//!
//! # Architecture
//!
//! The system is organized into several layers:
//!
//! - **Storage Layer** (`storage`): Disk I/O and page organization
//!   - `DiskManager`: Allocates, reads and writes fixed-size pages in a file
//!   - `RecordPage`: Fixed-capacity record container and its wire format
//!   - `relation`: Bulk-loads a record slice as a contiguous page range
//!
//! - **Buffer Pool** (`buffer`): The join's fixed memory budget
//!   - `BufferPool`: `F` directly-addressed frames with load/flush/reset
//!
//! - **Records** (`record`): The row type
//!   - `Record`: Join key plus payload, with two independent hash functions
//!
//! - **Join** (`join`): The two algorithmic phases
//!   - `partition`: Scatters both relations into `F-1` disk-backed buckets
//!   - `probe`: Builds an in-memory table per bucket from the globally
//!     smaller side and streams the other side against it
//!
//! # Example
//!
//! ```rust,no_run
//! use gracejoin::buffer::BufferPool;
//! use gracejoin::join::{partition, probe, read_output};
//! use gracejoin::record::Record;
//! use gracejoin::storage::disk::DiskManager;
//! use gracejoin::storage::relation;
//!
//! let disk = DiskManager::new("join.db").unwrap();
//!
//! let left = relation::bulk_load(&disk, &[Record::new(5, "x")]).unwrap();
//! let right = relation::bulk_load(&disk, &[Record::new(5, "y")]).unwrap();
//!
//! // A pool of 4 frames: fan-out 3 during partition, 2 hash-table frames
//! // plus input and output frames during probe.
//! let mut pool = BufferPool::new(4);
//!
//! let buckets = partition(&disk, &mut pool, left, right).unwrap();
//! let output = probe(&disk, &mut pool, &buckets).unwrap();
//!
//! for (l, r) in read_output(&disk, &output).unwrap() {
//!     println!("{l} joins {r}");
//! }
//! ```

pub mod buffer;
pub mod common;
pub mod join;
pub mod record;
pub mod storage;

// Re-export commonly used types at the crate root
pub use common::{FrameId, JoinError, PageId, PageIdRange, Result};
pub use join::{partition, probe, Bucket};
pub use record::Record;
