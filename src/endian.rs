use byteorder::ByteOrder;
use std::fmt;
use std::str::FromStr;

#[cfg(not(any(target_endian = "little", target_endian = "big")))]
compile_error!("cannot determine the byte order of the target platform");

/// An enum for little or big endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    LittleEndian,
    BigEndian,
}

/// The error returned when a string or numeric tag names neither byte order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownEndiannessError {
    #[error("unrecognized endianness name {0:?} (expected \"big\" or \"little\")")]
    Name(String),

    #[error("unrecognized endianness tag {0} (expected 4321 or 1234)")]
    Tag(u16),
}

impl Endianness {
    /// The byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::LittleEndian;

    /// The byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::BigEndian;

    /// The byte order the target platform is *not*.
    pub const OTHER: Self = Self::NATIVE.opposite();

    /// Returns the opposite byte order.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::LittleEndian => Self::BigEndian,
            Self::BigEndian => Self::LittleEndian,
        }
    }

    /// Returns `"little"` or `"big"`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LittleEndian => "little",
            Self::BigEndian => "big",
        }
    }

    /// Returns the numeric tag for this byte order, following the
    /// `<endian.h>` convention: 1234 for little endian, 4321 for big endian.
    #[inline]
    pub const fn tag(self) -> u16 {
        match self {
            Self::LittleEndian => 1234,
            Self::BigEndian => 4321,
        }
    }

    /// Returns the `Endianness` that a [`byteorder::ByteOrder`] type
    /// parameter stands for, by probing which byte it writes first.
    pub fn from_byte_order<T: ByteOrder>() -> Self {
        let mut buf = [0; 2];
        T::write_u16(&mut buf, 0x1234);
        if buf[0] == 0x12 {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    /// Whether values in this byte order need a swap on the target platform.
    #[inline]
    pub fn is_swapped(self) -> bool {
        self != Self::NATIVE
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fmt.write_str(self.name())
    }
}

impl FromStr for Endianness {
    type Err = UnknownEndiannessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "little" => Ok(Self::LittleEndian),
            "big" => Ok(Self::BigEndian),
            _ => Err(UnknownEndiannessError::Name(s.to_owned())),
        }
    }
}

impl TryFrom<u16> for Endianness {
    type Error = UnknownEndiannessError;

    fn try_from(tag: u16) -> Result<Self, Self::Error> {
        match tag {
            1234 => Ok(Self::LittleEndian),
            4321 => Ok(Self::BigEndian),
            _ => Err(UnknownEndiannessError::Tag(tag)),
        }
    }
}
