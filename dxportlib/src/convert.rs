use std::os::raw::c_int;

use dxportlib_sys::consts::{FALSE, TRUE};

#[must_use]
pub const fn bool_to_flag(value: bool) -> c_int {
    if value { TRUE } else { FALSE }
}

/// Lengths past `c_int::MAX` are clamped, the native side counts in 32-bit.
#[must_use]
pub const fn usize_to_c_int_saturating(value: usize) -> c_int {
    if value > c_int::MAX as usize {
        c_int::MAX
    } else {
        // Checked above
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let value = value as c_int;
        value
    }
}
