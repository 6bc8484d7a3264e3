use std::io::{self, Read};

use byteorder::{ByteOrder, NetworkEndian, ReadBytesExt};
use tracing::instrument;

/// A QUIC variable-length integer (RFC 9000 section 16).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct VarInt(u64);

impl VarInt {
    pub const MAX: VarInt = VarInt((1 << 62) - 1);

    pub fn try_new(value: u64) -> Result<Self, NewVarIntError> {
        if value > Self::MAX.0 {
            Err(NewVarIntError::TooLarge(value))
        } else {
            Ok(VarInt(value))
        }
    }

    pub fn u64(&self) -> u64 {
        self.0
    }

    /// Length of the shortest encoding of this value.
    pub fn encoded_len(&self) -> usize {
        if self.0 < (1 << 6) {
            1
        } else if self.0 < (1 << 14) {
            2
        } else if self.0 < (1 << 30) {
            4
        } else {
            8
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        match self.encoded_len() {
            1 => vec![self.0 as u8],
            2 => ((self.0 as u16) | (0b01 << 14)).to_be_bytes().to_vec(),
            4 => ((self.0 as u32) | (0b10 << 30)).to_be_bytes().to_vec(),
            _ => (self.0 | (0b11 << 62)).to_be_bytes().to_vec(),
        }
    }
}

/// Encoded length selected by the two high bits of the first byte.
pub fn len_from_first_byte(first_byte: u8) -> usize {
    1 << (first_byte >> 6)
}

pub trait ReadVarInt: Read {
    fn read_var_int(&mut self) -> Result<VarInt, ReadVarIntError> {
        self.read_var_int_with_len().map(|(var_int, _)| var_int)
    }

    /// Reads one var int and returns it with the number of bytes consumed.
    ///
    /// The consumed length follows the prefix bits, so a non-minimal encoding
    /// such as `[0x40, 0x25]` reports 2 bytes for the value 37.
    #[instrument(skip(self), name = "read var int", level = "trace")]
    fn read_var_int_with_len(&mut self) -> Result<(VarInt, usize), ReadVarIntError> {
        let first_byte = match self.read_u8() {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(ReadVarIntError::TruncatedVarInt {
                    expected: 1,
                    actual: 0,
                })
            }
            Err(e) => return Err(e.into()),
        };
        let length = len_from_first_byte(first_byte);

        let mut buf = Vec::with_capacity(length);
        buf.push(first_byte);
        let rest = Read::take(&mut *self, (length - 1) as u64).read_to_end(&mut buf)?;
        if rest < length - 1 {
            return Err(ReadVarIntError::TruncatedVarInt {
                expected: length,
                actual: buf.len(),
            });
        }

        let mask = u64::MAX >> (64 - (8 * length - 2));
        let value = NetworkEndian::read_uint(&buf, length) & mask;
        Ok((VarInt(value), length))
    }
}

impl<T> ReadVarInt for T where T: Read {}

#[derive(thiserror::Error, Debug)]
pub enum ReadVarIntError {
    #[error("truncated var int: expected {expected} bytes, only {actual} available")]
    TruncatedVarInt { expected: usize, actual: usize },
    #[error("std I/O error")]
    StdIo(#[from] io::Error),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NewVarIntError {
    #[error("{0} does not fit in 62 bits")]
    TooLarge(u64),
}
