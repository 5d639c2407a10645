#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use suballoc::RingSuballocator;

const INITIAL_CAPACITY: usize = 512;
const MAX_CAPACITY: usize = 1024;

#[derive(Clone, Debug, Arbitrary)]
enum RingOp {
    Allocate(u16),
    Free(u16),
    Reset(u16),
}

fuzz_target!(|ops: Vec<RingOp>| {
    let mut ring = RingSuballocator::<u16>::new(INITIAL_CAPACITY);
    let mut capacity = INITIAL_CAPACITY;
    let mut expected_free = INITIAL_CAPACITY;

    for op in ops {
        match op {
            RingOp::Allocate(size) => {
                let size = size as usize;
                match ring.allocate(size) {
                    Ok(location) => {
                        assert!(size <= expected_free, "over-allocated");
                        assert!(
                            capacity == 0 || (location as usize) < capacity,
                            "location out of range"
                        );
                        expected_free -= size;
                    }
                    Err(_) => assert!(size > expected_free, "spurious failure"),
                }
            }

            RingOp::Free(size) => {
                let allocated = capacity - expected_free;
                ring.free(size as usize);
                expected_free += (size as usize).min(allocated);
            }

            RingOp::Reset(new_capacity) => {
                capacity = new_capacity as usize % MAX_CAPACITY;
                ring.reset(capacity);
                expected_free = capacity;
            }
        }

        assert_eq!(ring.free_size(), expected_free);
        assert_eq!(ring.allocated_size(), capacity - expected_free);
    }
});
