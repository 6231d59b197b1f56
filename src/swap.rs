//! Unconditional byte swapping for 16/32/64-bit unsigned integers.
//!
//! Each swap masks out the byte lanes, shifts every lane to its mirrored
//! position, and ORs the lanes back together. The transform is total: every
//! bit pattern is valid input and byte `i` of the output equals byte
//! `n - 1 - i` of the input.

/// Returns `value` with its two bytes exchanged, regardless of the
/// byte order of the target platform.
#[inline]
pub const fn swap_u16(value: u16) -> u16 {
    ((value & 0xff00) >> 8) | ((value & 0x00ff) << 8)
}

/// Returns `value` with its four bytes reversed, regardless of the
/// byte order of the target platform.
#[inline]
pub const fn swap_u32(value: u32) -> u32 {
    ((value & 0xff00_0000) >> 24)
        | ((value & 0x00ff_0000) >> 8)
        | ((value & 0x0000_ff00) << 8)
        | ((value & 0x0000_00ff) << 24)
}

/// Returns `value` with its eight bytes reversed, regardless of the
/// byte order of the target platform.
#[inline]
pub const fn swap_u64(value: u64) -> u64 {
    ((value & 0xff00_0000_0000_0000) >> 56)
        | ((value & 0x00ff_0000_0000_0000) >> 40)
        | ((value & 0x0000_ff00_0000_0000) >> 24)
        | ((value & 0x0000_00ff_0000_0000) >> 8)
        | ((value & 0x0000_0000_ff00_0000) << 8)
        | ((value & 0x0000_0000_00ff_0000) << 24)
        | ((value & 0x0000_0000_0000_ff00) << 40)
        | ((value & 0x0000_0000_0000_00ff) << 56)
}

/// Swaps the bytes of a 16-bit integer in place.
#[inline]
pub fn swap_u16_in_place(value: &mut u16) {
    *value = swap_u16(*value);
}

/// Swaps the bytes of a 32-bit integer in place.
#[inline]
pub fn swap_u32_in_place(value: &mut u32) {
    *value = swap_u32(*value);
}

/// Swaps the bytes of a 64-bit integer in place.
#[inline]
pub fn swap_u64_in_place(value: &mut u64) {
    *value = swap_u64(*value);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reverses_byte_order_exactly() {
        assert_eq!(swap_u16(0x1234), 0x3412);
        assert_eq!(swap_u32(0x1234_5678), 0x7856_3412);
        assert_eq!(swap_u64(0x0123_4567_89ab_cdef), 0xefcd_ab89_6745_2301);
    }

    #[test]
    fn uniform_bit_patterns_are_fixed_points() {
        assert_eq!(swap_u16(0), 0);
        assert_eq!(swap_u32(0), 0);
        assert_eq!(swap_u64(0), 0);
        assert_eq!(swap_u16(u16::MAX), u16::MAX);
        assert_eq!(swap_u32(u32::MAX), u32::MAX);
        assert_eq!(swap_u64(u64::MAX), u64::MAX);
    }

    #[test]
    fn swapping_twice_is_the_identity() {
        for &v in &[0u16, 1, 0x1234, 0x8000, u16::MAX] {
            assert_eq!(swap_u16(swap_u16(v)), v);
        }
        for &v in &[0u32, 1, 0xdead_beef, 0x8000_0000, u32::MAX] {
            assert_eq!(swap_u32(swap_u32(v)), v);
        }
        for &v in &[0u64, 1, 0x0123_4567_89ab_cdef, 1 << 63, u64::MAX] {
            assert_eq!(swap_u64(swap_u64(v)), v);
        }
    }

    #[test]
    fn agrees_with_the_swap_bytes_intrinsics() {
        for &v in &[0x0102u16, 0xfe00, 0x00ff] {
            assert_eq!(swap_u16(v), v.swap_bytes());
        }
        for &v in &[0xdead_beefu32, 0x0102_0304, 0xff00_00ff] {
            assert_eq!(swap_u32(v), v.swap_bytes());
        }
        for &v in &[0x0123_4567_89ab_cdefu64, 0xff00_0000_0000_0001] {
            assert_eq!(swap_u64(v), v.swap_bytes());
        }
    }

    #[test]
    fn in_place_matches_the_copy_form() {
        let mut v16 = 0x1234u16;
        swap_u16_in_place(&mut v16);
        assert_eq!(v16, swap_u16(0x1234));

        let mut v32 = 0xdead_beefu32;
        swap_u32_in_place(&mut v32);
        assert_eq!(v32, swap_u32(0xdead_beef));

        let mut v64 = 0x0123_4567_89ab_cdefu64;
        swap_u64_in_place(&mut v64);
        assert_eq!(v64, swap_u64(0x0123_4567_89ab_cdef));
    }
}
