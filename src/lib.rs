#![doc = include_str!("../README.md")]
#![no_std]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

pub mod bits;
pub mod buddy;
pub mod index_list;
pub mod ring;

mod bitmap;


use core::fmt;

#[doc(inline)]
pub use crate::{
    buddy::{BuddyBlock, BuddySuballocator},
    index_list::{Cursor, IndexList, IndexNode},
    ring::RingSuballocator,
};

/// An unsigned integer type used to address slots in an index table.
///
/// The all-ones value is reserved as the list terminator [`TERM`], so an
/// index type can address tables of up to `Self::MAX` slots.
///
/// This trait is sealed; it is implemented for `u8`, `u16`, `u32`, `u64`
/// and `usize`.
///
/// [`TERM`]: SlotIndex::TERM
pub trait SlotIndex: Copy + Eq + Ord + core::hash::Hash + fmt::Debug + Sealed {
    /// The zero index.
    const ZERO: Self;

    /// The reserved list-terminator value, the type's maximum.
    const TERM: Self;

    /// Converts from `usize`, truncating like an `as` cast.
    fn from_usize(value: usize) -> Self;

    /// Widens to `usize`.
    fn to_usize(self) -> usize;
}

macro_rules! impl_slot_index {
    ($($t:ty),*) => {$(
        impl Sealed for $t {}

        impl SlotIndex for $t {
            const ZERO: Self = 0;
            const TERM: Self = <$t>::MAX;

            #[inline]
            fn from_usize(value: usize) -> Self {
                value as $t
            }

            #[inline]
            fn to_usize(self) -> usize {
                self as usize
            }
        }
    )*};
}

impl_slot_index!(u8, u16, u32, u64, usize);

/// The error type returned when a suballocator cannot satisfy a request.
///
/// The request may succeed later, after outstanding allocations are freed,
/// or immediately with a smaller size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unavailable;

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("suballocator cannot satisfy the requested size")
    }
}

/// The error type returned when freeing a block that is not currently
/// allocated.
///
/// This is a caller error; the suballocator's state is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotAllocated;

impl fmt::Display for NotAllocated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("block is not currently allocated")
    }
}

/// The error type for suballocator constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitError {
    /// The capacity is zero or not a power of two.
    InvalidCapacity,

    /// The capacity cannot be addressed by the chosen index type.
    CapacityOverflow,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::InvalidCapacity => f.write_str("capacity must be a nonzero power of two"),
            InitError::CapacityOverflow => {
                f.write_str("capacity exceeds the index type's addressable range")
            }
        }
    }
}

use private::Sealed;

mod private {
    pub trait Sealed {}
}
