use std::fmt;

use bytes::{Buf, BufMut};

use crate::common::config::{RECORD_DATA_SIZE, RECORD_SIZE};

/// A single fixed-size row: a 64-bit join key plus a fixed-width payload.
///
/// The two hash functions drive the two hashing stages of the join and must
/// be statistically independent of each other: if they were correlated, rows
/// that collided into the same partition bucket would also collide into the
/// same in-memory hash-table frame during probe, turning the second stage
/// into a linear scan over the whole bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    key: u64,
    data: [u8; RECORD_DATA_SIZE],
}

impl Record {
    /// Creates a record from a key and a payload string. The payload is
    /// stored in a fixed-width field: longer strings are truncated, shorter
    /// ones zero-padded.
    pub fn new(key: u64, data: &str) -> Self {
        let mut field = [0u8; RECORD_DATA_SIZE];
        let bytes = data.as_bytes();
        let n = bytes.len().min(RECORD_DATA_SIZE);
        field[..n].copy_from_slice(&bytes[..n]);
        Self { key, data: field }
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    /// The payload with trailing zero padding stripped.
    pub fn data(&self) -> &str {
        let end = self
            .data
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(RECORD_DATA_SIZE);
        std::str::from_utf8(&self.data[..end]).unwrap_or("")
    }

    /// Hash used to assign this record to a partition bucket.
    /// FNV-1a over the key bytes.
    pub fn partition_hash(&self) -> u64 {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut h = FNV_OFFSET;
        for b in self.key.to_le_bytes() {
            h ^= b as u64;
            h = h.wrapping_mul(FNV_PRIME);
        }
        h
    }

    /// Hash used to place this record in the in-memory table during probe.
    /// Splitmix64 finalizer over the key; independent of [`partition_hash`].
    ///
    /// [`partition_hash`]: Record::partition_hash
    pub fn probe_hash(&self) -> u64 {
        let mut z = self.key.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Whether this record and `other` form a join match (key equality).
    pub fn joins_with(&self, other: &Record) -> bool {
        self.key == other.key
    }

    /// Serializes the record into `buf` (exactly RECORD_SIZE bytes).
    pub fn encode(&self, buf: &mut impl BufMut) {
        buf.put_u64_le(self.key);
        buf.put_slice(&self.data);
    }

    /// Deserializes a record from `buf` (consumes exactly RECORD_SIZE bytes).
    pub fn decode(buf: &mut impl Buf) -> Self {
        debug_assert!(buf.remaining() >= RECORD_SIZE);
        let key = buf.get_u64_le();
        let mut data = [0u8; RECORD_DATA_SIZE];
        buf.copy_to_slice(&mut data);
        Self { key, data }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.key, self.data())
    }
}
