use crate::buffer::BufferPool;
use crate::common::config::MIN_POOL_SIZE;
use crate::common::{FrameId, JoinError, PageIdRange, Result};
use crate::storage::disk::DiskManager;

use super::{Bucket, Side};

/// Partition phase of the grace hash join.
///
/// Splits every record of both relations into `F-1` disjoint buckets by
/// `partition_hash % (F-1)`, where `F` is the pool's frame count, spilling
/// each bucket page to disk as it fills. The last frame is the input-scan
/// buffer; because the hash is taken mod `F-1`, no record can ever be routed
/// to it. Frames `0..F-2` double as the per-bucket output buffers.
///
/// The left relation is scanned first, then every frame is cleared before
/// the right relation's scan so no leftover left-relation records leak into
/// the right-side page lists.
pub fn partition(
    disk: &DiskManager,
    pool: &mut BufferPool,
    left: PageIdRange,
    right: PageIdRange,
) -> Result<Vec<Bucket>> {
    let frames = pool.frame_count();
    if frames < MIN_POOL_SIZE {
        return Err(JoinError::PoolTooSmall { frames });
    }

    let fan_out = frames - 1;
    let input = FrameId::new(fan_out as u32);
    let mut buckets = vec![Bucket::new(); fan_out];

    pool.reset_all();
    scatter_relation(disk, pool, left, input, &mut buckets, Side::Left)?;
    pool.reset_all();
    scatter_relation(disk, pool, right, input, &mut buckets, Side::Right)?;

    Ok(buckets)
}

/// Streams one relation through the input frame, routing each record to its
/// bucket's output frame and spilling frames as they fill. Partial frames
/// are flushed once the relation is exhausted.
fn scatter_relation(
    disk: &DiskManager,
    pool: &mut BufferPool,
    relation: PageIdRange,
    input: FrameId,
    buckets: &mut [Bucket],
    side: Side,
) -> Result<()> {
    let fan_out = buckets.len() as u64;

    for page_id in relation.iter() {
        pool.load_from_disk(disk, page_id, input)?;

        let records: Vec<_> = pool.frame(input)?.records().copied().collect();
        for record in records {
            let hash = (record.partition_hash() % fan_out) as usize;
            let out = FrameId::new(hash as u32);

            pool.frame_mut(out)?.append(record)?;
            if pool.frame(out)?.is_full() {
                let flushed = pool.frame(out)?.len() as u64;
                let spill_page = pool.flush_to_disk(disk, out)?;
                pool.frame_mut(out)?.reset();
                buckets[hash].add_page(side, spill_page, flushed);
            }
        }
    }

    // Leftover partial pages, one per non-empty output frame.
    for (hash, bucket) in buckets.iter_mut().enumerate() {
        let out = FrameId::new(hash as u32);
        let remaining = pool.frame(out)?.len() as u64;
        if remaining > 0 {
            let spill_page = pool.flush_to_disk(disk, out)?;
            pool.frame_mut(out)?.reset();
            bucket.add_page(side, spill_page, remaining);
        }
    }

    Ok(())
}
