//! Variable-length record decoding.
//!
//! Native list blocks carry a small header with a record count followed by
//! fixed-size records packed back to back.  [`decode_list`] reads the count,
//! checks that the block really holds that many records, and decodes each
//! one through its [`NativeRecord`] implementation.  Decoded values own all
//! their data: strings, byte arrays and trailing blobs are copied out, so the
//! block can be released as soon as decoding returns.
//!
//! All reads are bounds-checked; a short or inconsistent block yields a
//! [`DecodeError`], never a panic.

use thiserror::Error;
use uuid::Uuid;
use wlan_sys::layout::{self, ListLayout};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("block truncated: needed {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("record count {count} exceeds capacity {capacity}")]
    CountExceedsCapacity { count: usize, capacity: usize },
}

/// A record with a fixed marshaled size.
pub trait NativeRecord: Sized {
    const SIZE: usize;

    fn decode(reader: &RecordReader<'_>) -> Result<Self, DecodeError>;
}

/// Little-endian reads relative to the start of one record.
///
/// The reader sees the whole block so records that point at trailing data
/// (information element blobs) can reach it; every read is checked against
/// the block length.
#[derive(Debug, Clone, Copy)]
pub struct RecordReader<'a> {
    block: &'a [u8],
    base: usize,
}

impl<'a> RecordReader<'a> {
    pub const fn new(block: &'a [u8], base: usize) -> Self {
        Self { block, base }
    }

    /// Offset of this record within the block.
    pub const fn base(&self) -> usize {
        self.base
    }

    pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        let start = self.base.checked_add(offset).ok_or(DecodeError::Truncated {
            needed: usize::MAX,
            available: self.block.len(),
        })?;
        let end = start.checked_add(len).ok_or(DecodeError::Truncated {
            needed: usize::MAX,
            available: self.block.len(),
        })?;
        self.block.get(start..end).ok_or(DecodeError::Truncated {
            needed: end,
            available: self.block.len(),
        })
    }

    fn array<const N: usize>(&self, offset: usize) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.bytes(offset, N)?);
        Ok(out)
    }

    pub fn u8(&self, offset: usize) -> Result<u8, DecodeError> {
        Ok(self.array::<1>(offset)?[0])
    }

    pub fn u16(&self, offset: usize) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.array(offset)?))
    }

    pub fn u32(&self, offset: usize) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.array(offset)?))
    }

    pub fn i32(&self, offset: usize) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.array(offset)?))
    }

    pub fn u64(&self, offset: usize) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.array(offset)?))
    }

    /// Four-byte BOOL.
    pub fn bool32(&self, offset: usize) -> Result<bool, DecodeError> {
        Ok(self.u32(offset)? != 0)
    }

    /// GUID in native byte order.
    pub fn guid(&self, offset: usize) -> Result<Uuid, DecodeError> {
        Ok(Uuid::from_bytes_le(self.array(offset)?))
    }

    pub fn mac(&self, offset: usize) -> Result<[u8; layout::MAC_SIZE], DecodeError> {
        self.array(offset)
    }

    /// Fixed-capacity UTF-16 string; stops at the first NUL or the capacity.
    pub fn utf16(&self, offset: usize, capacity: usize) -> Result<String, DecodeError> {
        let raw = self.bytes(offset, capacity * 2)?;
        let units: Vec<u16> = raw
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .take_while(|&unit| unit != 0)
            .collect();
        Ok(String::from_utf16_lossy(&units))
    }

    /// Length-prefixed SSID; the length is clamped to the array capacity and
    /// the array itself is never trusted to be terminated.
    pub fn ssid(&self, offset: usize) -> Result<Vec<u8>, DecodeError> {
        let len = (self.u32(offset)? as usize).min(layout::SSID_CAPACITY);
        let raw = self.bytes(offset + 4, layout::SSID_CAPACITY)?;
        Ok(raw[..len].to_vec())
    }

    /// `count` consecutive `u32`s, clamped to `capacity`.
    pub fn u32_array(
        &self,
        offset: usize,
        count: usize,
        capacity: usize,
    ) -> Result<Vec<u32>, DecodeError> {
        (0..count.min(capacity))
            .map(|i| self.u32(offset + i * 4))
            .collect()
    }

    /// `count` consecutive `u16`s, clamped to `capacity`.
    pub fn u16_array(
        &self,
        offset: usize,
        count: usize,
        capacity: usize,
    ) -> Result<Vec<u16>, DecodeError> {
        (0..count.min(capacity))
            .map(|i| self.u16(offset + i * 2))
            .collect()
    }

    /// Up to `len` bytes starting at `offset`, cut at the end of the block.
    pub fn trailing(&self, offset: usize, len: usize) -> Vec<u8> {
        let Some(start) = self.base.checked_add(offset) else {
            return Vec::new();
        };
        if start >= self.block.len() {
            return Vec::new();
        }
        let end = start.saturating_add(len).min(self.block.len());
        self.block[start..end].to_vec()
    }
}

fn read_count(block: &[u8], list: &ListLayout) -> Result<usize, DecodeError> {
    let reader = RecordReader::new(block, 0);
    let count = reader.u32(list.count_offset)? as usize;
    if let Some(capacity) = list.capacity {
        if count > capacity {
            return Err(DecodeError::CountExceedsCapacity { count, capacity });
        }
    }
    Ok(count)
}

/// Decode every record of a counted list block.
pub fn decode_list<R: NativeRecord>(block: &[u8], list: ListLayout) -> Result<Vec<R>, DecodeError> {
    debug_assert_eq!(list.record_size, R::SIZE);
    let count = read_count(block, &list)?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let needed = count
        .checked_mul(list.record_size)
        .and_then(|records| records.checked_add(list.records_offset))
        .unwrap_or(usize::MAX);
    if needed > block.len() {
        return Err(DecodeError::Truncated {
            needed,
            available: block.len(),
        });
    }

    (0..count)
        .map(|i| R::decode(&RecordReader::new(block, list.records_offset + i * list.record_size)))
        .collect()
}

/// Decode a block holding exactly one record at offset zero.
pub fn decode_single<R: NativeRecord>(block: &[u8]) -> Result<R, DecodeError> {
    if block.len() < R::SIZE {
        return Err(DecodeError::Truncated {
            needed: R::SIZE,
            available: block.len(),
        });
    }
    R::decode(&RecordReader::new(block, 0))
}

/// Number of records a block declares, without decoding them.
pub fn declared_count(block: &[u8], list: ListLayout) -> Result<usize, DecodeError> {
    read_count(block, &list)
}
