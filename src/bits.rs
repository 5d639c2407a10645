//! Bit-scan and logarithm helpers shared by the suballocators.

/// Returns the position of the most significant set bit, or `None` when no
/// bits are set.
pub const fn bit_scan_msb(value: u32) -> Option<u32> {
    if value == 0 {
        None
    } else {
        Some(u32::BITS - 1 - value.leading_zeros())
    }
}

/// Returns the position of the most significant set bit of a 64-bit value,
/// or `None` when no bits are set.
pub const fn bit_scan_msb64(value: u64) -> Option<u32> {
    if value == 0 {
        None
    } else {
        Some(u64::BITS - 1 - value.leading_zeros())
    }
}

/// Returns the base-2 logarithm of `value`, rounded up, or `None` when
/// `value` is 0.
pub const fn log2_ceil(value: u32) -> Option<u32> {
    if value == 0 {
        return None;
    }

    match bit_scan_msb(value - 1) {
        Some(pos) => Some(pos + 1),
        None => Some(0),
    }
}

/// Returns the base-2 logarithm of a 64-bit `value`, rounded up, or `None`
/// when `value` is 0.
pub const fn log2_ceil64(value: u64) -> Option<u32> {
    if value == 0 {
        return None;
    }

    match bit_scan_msb64(value - 1) {
        Some(pos) => Some(pos + 1),
        None => Some(0),
    }
}
