//! FIFO ring suballocation.

use core::cmp;

use crate::{SlotIndex, Unavailable};

/// A FIFO window suballocator over `[0, capacity)`.
///
/// Allocations advance a write cursor and frees advance a read cursor;
/// both wrap modulo the capacity. The allocator hands out only locations.
/// It owns no storage and records no per-allocation identity, so the
/// caller must free in allocation order; freeing `n` indices releases the
/// oldest `n` regardless of how they were grouped into allocations.
///
/// Allocations are not split across the wrap boundary, but neither are
/// they kept linear: a window that reaches the end of the range continues
/// at index 0. Callers that need linear windows must size their requests
/// to avoid the boundary.
///
/// Locations wrap modulo the capacity, so the index type must cover
/// `[0, capacity)`; a `u8` ring of capacity 256 is valid.
#[derive(Clone, Debug)]
pub struct RingSuballocator<I: SlotIndex> {
    start: I,
    end: I,
    capacity: usize,
    free: usize,
}

impl<I: SlotIndex> RingSuballocator<I> {
    /// Creates a ring over `[0, capacity)`, fully free.
    pub fn new(capacity: usize) -> RingSuballocator<I> {
        RingSuballocator {
            start: I::ZERO,
            end: I::ZERO,
            capacity,
            free: capacity,
        }
    }

    /// Returns the size of the managed range.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of free indices.
    pub fn free_size(&self) -> usize {
        self.free
    }

    /// Returns the number of allocated indices.
    pub fn allocated_size(&self) -> usize {
        self.capacity - self.free
    }

    /// Allocates a window of `size` indices and returns its first index.
    ///
    /// # Errors
    ///
    /// Returns [`Unavailable`] when fewer than `size` indices are free.
    pub fn allocate(&mut self, size: usize) -> Result<I, Unavailable> {
        if size > self.free {
            return Err(Unavailable);
        }

        let location = self.end;
        if size > 0 {
            self.free -= size;
            self.end = I::from_usize((self.end.to_usize() + size) % self.capacity);
        }

        Ok(location)
    }

    /// Releases the oldest `size` indices.
    ///
    /// `size` is clamped to the allocated count, so over-freeing empties
    /// the ring rather than corrupting it.
    pub fn free(&mut self, size: usize) {
        let size = cmp::min(size, self.allocated_size());
        if size > 0 {
            self.free += size;
            self.start = I::from_usize((self.start.to_usize() + size) % self.capacity);
        }
    }

    /// Reinitializes the ring over `[0, capacity)`, discarding all
    /// outstanding allocations.
    pub fn reset(&mut self, capacity: usize) {
        *self = RingSuballocator::new(capacity);
    }
}

impl<I: SlotIndex> Default for RingSuballocator<I> {
    /// Returns a ring of capacity 0; [`reset`](Self::reset) gives it a
    /// range.
    fn default() -> Self {
        RingSuballocator::new(0)
    }
}
