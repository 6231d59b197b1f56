//! Conversions between a specified byte order and the byte order of the
//! target platform.
//!
//! Which definition of each `*_from_be` / `*_from_le` function gets compiled
//! is selected per build target with `#[cfg(target_endian = ...)]`: when the
//! specified order matches the target's, the function is the identity;
//! otherwise it is the unconditional swap. The host-to-X functions delegate
//! to the matching X-to-host function, since the swap is its own inverse.

use crate::swap::{swap_u16, swap_u32, swap_u64};

macro_rules! conversions {
    ($ty:ty, $bits:literal, $swap:ident,
     $from_be:ident, $to_be:ident, $from_le:ident, $to_le:ident,
     $from_be_in_place:ident, $to_be_in_place:ident,
     $from_le_in_place:ident, $to_le_in_place:ident) => {
        #[doc = concat!("Converts a ", $bits, "-bit big-endian integer to host endianness.")]
        #[cfg(target_endian = "big")]
        #[inline]
        pub const fn $from_be(value: $ty) -> $ty {
            value
        }

        #[doc = concat!("Converts a ", $bits, "-bit big-endian integer to host endianness.")]
        #[cfg(target_endian = "little")]
        #[inline]
        pub const fn $from_be(value: $ty) -> $ty {
            $swap(value)
        }

        #[doc = concat!("Converts a ", $bits, "-bit little-endian integer to host endianness.")]
        #[cfg(target_endian = "little")]
        #[inline]
        pub const fn $from_le(value: $ty) -> $ty {
            value
        }

        #[doc = concat!("Converts a ", $bits, "-bit little-endian integer to host endianness.")]
        #[cfg(target_endian = "big")]
        #[inline]
        pub const fn $from_le(value: $ty) -> $ty {
            $swap(value)
        }

        #[doc = concat!("Converts a ", $bits, "-bit host-endian integer to big endianness.")]
        #[inline]
        pub const fn $to_be(value: $ty) -> $ty {
            $from_be(value)
        }

        #[doc = concat!("Converts a ", $bits, "-bit host-endian integer to little endianness.")]
        #[inline]
        pub const fn $to_le(value: $ty) -> $ty {
            $from_le(value)
        }

        #[doc = concat!("Converts a ", $bits, "-bit big-endian integer to host endianness in place.")]
        #[inline]
        pub fn $from_be_in_place(value: &mut $ty) {
            *value = $from_be(*value);
        }

        #[doc = concat!("Converts a ", $bits, "-bit little-endian integer to host endianness in place.")]
        #[inline]
        pub fn $from_le_in_place(value: &mut $ty) {
            *value = $from_le(*value);
        }

        #[doc = concat!("Converts a ", $bits, "-bit host-endian integer to big endianness in place.")]
        #[inline]
        pub fn $to_be_in_place(value: &mut $ty) {
            *value = $from_be(*value);
        }

        #[doc = concat!("Converts a ", $bits, "-bit host-endian integer to little endianness in place.")]
        #[inline]
        pub fn $to_le_in_place(value: &mut $ty) {
            *value = $from_le(*value);
        }
    };
}

conversions!(
    u16, "16", swap_u16, u16_from_be, u16_to_be, u16_from_le, u16_to_le,
    u16_from_be_in_place, u16_to_be_in_place, u16_from_le_in_place, u16_to_le_in_place
);
conversions!(
    u32, "32", swap_u32, u32_from_be, u32_to_be, u32_from_le, u32_to_le,
    u32_from_be_in_place, u32_to_be_in_place, u32_from_le_in_place, u32_to_le_in_place
);
conversions!(
    u64, "64", swap_u64, u64_from_be, u64_to_be, u64_from_le, u64_to_le,
    u64_from_be_in_place, u64_to_be_in_place, u64_from_le_in_place, u64_to_le_in_place
);
