#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use suballoc::{BuddyBlock, BuddySuballocator};

const CAPACITY: usize = 128;

#[derive(Clone, Debug, Arbitrary)]
enum BuddyOp {
    Allocate(u16),
    Free(usize),
}

fuzz_target!(|ops: Vec<BuddyOp>| {
    let mut alloc = BuddySuballocator::<u8>::new(CAPACITY).unwrap();
    let mut outstanding: Vec<BuddyBlock<u8>> = Vec::new();

    for op in ops {
        match op {
            BuddyOp::Allocate(size) => {
                if let Ok(block) = alloc.allocate(size as usize) {
                    let start = block.start() as usize;
                    assert_eq!(start % block.size(), 0, "misaligned block");

                    for other in &outstanding {
                        let other_start = other.start() as usize;
                        assert!(
                            start + block.size() <= other_start
                                || other_start + other.size() <= start,
                            "overlapping allocations"
                        );
                    }

                    outstanding.push(block);
                }
            }

            BuddyOp::Free(index) => {
                if outstanding.is_empty() {
                    continue;
                }

                let block = outstanding.swap_remove(index % outstanding.len());
                alloc.free(block).expect("live block failed to free");
            }
        }

        let used: usize = outstanding.iter().map(|block| block.size()).sum();
        assert_eq!(alloc.total_free() + used, CAPACITY, "indices leaked");
    }

    // Draining the allocator must coalesce everything back into the root.
    for block in outstanding {
        alloc.free(block).expect("live block failed to free");
    }
    assert_eq!(alloc.max_allocation_size(), CAPACITY);
});
