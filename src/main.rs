use gracejoin::buffer::BufferPool;
use gracejoin::join::{partition, probe, read_output, JoinTotals};
use gracejoin::record::Record;
use gracejoin::storage::disk::DiskManager;
use gracejoin::storage::relation;

fn main() {
    println!("Gracejoin - an external-memory grace hash join");
    println!("==============================================\n");

    let db_path = "demo.db";
    let disk = DiskManager::new(db_path).expect("Failed to create disk manager");
    println!("Created disk manager for: {}", db_path);

    // Two small relations with overlapping keys.
    let left_records: Vec<Record> = (0..400u64).map(|k| Record::new(k, "left")).collect();
    let right_records: Vec<Record> = (200..300u64).map(|k| Record::new(k, "right")).collect();

    let left = relation::bulk_load(&disk, &left_records).expect("Failed to load left relation");
    let right = relation::bulk_load(&disk, &right_records).expect("Failed to load right relation");
    println!("Loaded left relation into pages {}", left);
    println!("Loaded right relation into pages {}\n", right);

    let mut pool = BufferPool::new(6);
    println!("Created buffer pool with {} frames\n", pool.frame_count());

    let buckets = partition(&disk, &mut pool, left, right).expect("Partition failed");
    println!("Partitioned into {} buckets:", buckets.len());
    for (i, bucket) in buckets.iter().enumerate() {
        println!(
            "  - bucket {}: {} left records in {} pages, {} right records in {} pages",
            i,
            bucket.num_left_records(),
            bucket.left_pages().len(),
            bucket.num_right_records(),
            bucket.right_pages().len()
        );
    }

    let totals = JoinTotals::compute(&buckets);
    println!(
        "\nGlobal totals: {} left / {} right, building from the {:?} side",
        totals.left_records,
        totals.right_records,
        totals.build_side()
    );

    let output = probe(&disk, &mut pool, &buckets).expect("Probe failed");
    let pairs = read_output(&disk, &output).expect("Failed to read join output");
    println!(
        "\nProbe produced {} matched pairs in {} output pages",
        pairs.len(),
        output.len()
    );
    for (l, r) in pairs.iter().take(5) {
        println!("  - {} joins {}", l, r);
    }
    if pairs.len() > 5 {
        println!("  - ... and {} more", pairs.len() - 5);
    }

    println!(
        "\nDisk I/O: {} page reads, {} page writes, {} pages allocated",
        disk.num_reads(),
        disk.num_writes(),
        disk.num_pages()
    );

    drop(disk);
    std::fs::remove_file(db_path).ok();
    println!("\nDemo completed successfully!");
}
