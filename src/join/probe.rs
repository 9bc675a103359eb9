use crate::buffer::BufferPool;
use crate::common::config::MIN_POOL_SIZE;
use crate::common::{FrameId, JoinError, PageId, Result};
use crate::record::Record;
use crate::storage::disk::DiskManager;

use super::{Bucket, Side};

/// Global record totals of the partitioned join, reduced over every bucket
/// before any probing starts. The build/probe side decision is made once
/// from these totals and applied uniformly to all buckets, even where a
/// bucket's local skew is inverted relative to the global one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinTotals {
    pub left_records: u64,
    pub right_records: u64,
}

impl JoinTotals {
    pub fn compute(buckets: &[Bucket]) -> Self {
        let mut totals = Self {
            left_records: 0,
            right_records: 0,
        };
        for bucket in buckets {
            totals.left_records += bucket.num_left_records();
            totals.right_records += bucket.num_right_records();
        }
        totals
    }

    /// The side loaded into the in-memory hash table: the globally smaller
    /// relation, ties building from the right.
    pub fn build_side(&self) -> Side {
        if self.left_records >= self.right_records {
            Side::Right
        } else {
            Side::Left
        }
    }
}

/// Probe phase of the grace hash join.
///
/// For each bucket, builds an in-memory hash table from the build side's
/// pages across frames `0..F-3` (indexed by `probe_hash % (F-2)`), then
/// streams the probe side's pages against it, emitting matched pairs. Frame
/// `F-2` is the input-scan buffer and frame `F-1` the output buffer. The
/// output frame is not cleared between buckets; it accumulates pairs across
/// the whole probe and is flushed when full, plus a single final flush after
/// the last bucket so no partially filled output page is wasted per bucket.
///
/// Returns the output page ids in flush order. Emitted pairs are always
/// (left record, right record) regardless of which side was built.
pub fn probe(disk: &DiskManager, pool: &mut BufferPool, buckets: &[Bucket]) -> Result<Vec<PageId>> {
    let frames = pool.frame_count();
    if frames < MIN_POOL_SIZE {
        return Err(JoinError::PoolTooSmall { frames });
    }

    let table_frames = frames - 2;
    let input = FrameId::new(table_frames as u32);
    let output = FrameId::new((frames - 1) as u32);

    let totals = JoinTotals::compute(buckets);
    let build_side = totals.build_side();

    pool.reset_all();
    let mut output_pages = Vec::new();

    for (index, bucket) in buckets.iter().enumerate() {
        build_table(disk, pool, bucket.pages(build_side), input, index)?;
        pool.frame_mut(input)?.reset();
        probe_table(
            disk,
            pool,
            bucket.pages(build_side.opposite()),
            input,
            output,
            build_side,
            &mut output_pages,
        )?;

        // Next bucket builds a fresh table; only the output frame survives.
        for i in 0..frames - 1 {
            pool.frame_mut(FrameId::new(i as u32))?.reset();
        }
    }

    // Single finalization site for the carried output frame.
    if !pool.frame(output)?.is_empty() {
        let page_id = pool.flush_to_disk(disk, output)?;
        pool.frame_mut(output)?.reset();
        output_pages.push(page_id);
    }

    Ok(output_pages)
}

/// Loads one bucket's build-side pages into the hash-table frames. A build
/// frame that fills up means the bucket exceeds the in-memory budget; that
/// is surfaced as HashTableOverflow rather than dropping records, since a
/// silently incomplete table would produce a wrong join result.
fn build_table(
    disk: &DiskManager,
    pool: &mut BufferPool,
    build_pages: &[PageId],
    input: FrameId,
    bucket: usize,
) -> Result<()> {
    let table_frames = input.as_usize() as u64;

    for &page_id in build_pages {
        pool.load_from_disk(disk, page_id, input)?;

        let records: Vec<_> = pool.frame(input)?.records().copied().collect();
        for record in records {
            let slot = FrameId::new((record.probe_hash() % table_frames) as u32);
            if pool.frame(slot)?.is_full() {
                return Err(JoinError::HashTableOverflow { bucket });
            }
            pool.frame_mut(slot)?.append(record)?;
        }
    }

    Ok(())
}

/// Streams one bucket's probe-side pages against the in-memory table,
/// appending every key match to the output frame and spilling it whenever
/// it fills.
fn probe_table(
    disk: &DiskManager,
    pool: &mut BufferPool,
    probe_pages: &[PageId],
    input: FrameId,
    output: FrameId,
    build_side: Side,
    output_pages: &mut Vec<PageId>,
) -> Result<()> {
    let table_frames = input.as_usize() as u64;

    for &page_id in probe_pages {
        pool.load_from_disk(disk, page_id, input)?;

        let records: Vec<_> = pool.frame(input)?.records().copied().collect();
        for record in records {
            let slot = FrameId::new((record.probe_hash() % table_frames) as u32);
            let matches: Vec<Record> = pool
                .frame(slot)?
                .records()
                .filter(|built| built.joins_with(&record))
                .copied()
                .collect();

            for built in matches {
                let (left, right) = match build_side {
                    Side::Right => (record, built),
                    Side::Left => (built, record),
                };
                pool.frame_mut(output)?.append_pair(left, right)?;

                if pool.frame(output)?.is_full() {
                    let page_id = pool.flush_to_disk(disk, output)?;
                    pool.frame_mut(output)?.reset();
                    output_pages.push(page_id);
                }
            }
        }
    }

    Ok(())
}
