//! # byte-order
//!
//! This crate detects the endianness of the target platform at compile time
//! and converts 16/32/64-bit unsigned integers between byte orders.
//!
//! The host/other constants and all conversion functions are resolved per
//! build target, so converting to or from the host's own byte order compiles
//! down to nothing.
//!
//! ## Example
//!
//! ```rust
//! use byte_order::{swap_u32, u32_from_be, u32_to_be, Endianness};
//!
//! // An unconditional swap reverses the bytes on every platform.
//! assert_eq!(swap_u32(0xDEADBEEF), 0xEFBEADDE);
//! assert_eq!(swap_u32(swap_u32(0xDEADBEEF)), 0xDEADBEEF);
//!
//! // Directional conversions round-trip on every platform; on exactly one
//! // of the two byte orders they are the identity.
//! let wire = u32_to_be(0xDEADBEEF);
//! assert_eq!(u32_from_be(wire), 0xDEADBEEF);
//!
//! assert_eq!(Endianness::NATIVE.opposite(), Endianness::OTHER);
//! assert_eq!(Endianness::BigEndian.name(), "big");
//! ```
mod convert;
mod endian;
mod swap;

pub use convert::*;
pub use endian::*;
pub use swap::*;
