//! raw emote table bytes

use std::ops::{Range, RangeBounds};

use bytemuck::AnyBitPattern;
use types::{FixedSize, Scalar};

use crate::read::ReadError;

/// A reference to raw binary emote table data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

/// A cursor for validating bytes during parsing.
///
/// Every read advances the cursor, whether or not it succeeds.
pub(crate) struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the data from `pos` to the end, or `None` if `pos` is out of bounds.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(FontData::new)
    }

    /// Returns a subrange of the data, or `None` if the range is out of bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(FontData::new)
    }

    /// Read a scalar value out of the buffer at `offset`.
    pub fn read_at<T: Scalar + FixedSize>(&self, offset: usize) -> Result<T, ReadError> {
        let end = offset
            .checked_add(T::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        self.bytes
            .get(offset..end)
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Interpret the bytes in `range` as a slice of `T`.
    ///
    /// The length of the range must be a multiple of the size of `T`.
    pub fn read_array<T: AnyBitPattern + FixedSize>(
        &self,
        range: Range<usize>,
    ) -> Result<&'a [T], ReadError> {
        let bytes = self.bytes.get(range).ok_or(ReadError::OutOfBounds)?;
        bytemuck::try_cast_slice(bytes).map_err(|_| ReadError::InvalidArrayLen)
    }

    pub(crate) fn cursor(&self) -> Cursor<'a> {
        Cursor { pos: 0, data: *self }
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    pub(crate) fn read<T: Scalar + FixedSize>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.pos = self.pos.saturating_add(T::RAW_BYTE_LEN);
        temp
    }

    /// Read `n_elem` items of `T` as a slice.
    pub(crate) fn read_array<T: AnyBitPattern + FixedSize>(
        &mut self,
        n_elem: usize,
    ) -> Result<&'a [T], ReadError> {
        let len = n_elem
            .checked_mul(T::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        let end = self.pos.checked_add(len).ok_or(ReadError::OutOfBounds)?;
        let temp = self.data.read_array(self.pos..end);
        self.pos = end;
        temp
    }

    /// Read the next `len` bytes.
    pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        let end = self.pos.checked_add(len).ok_or(ReadError::OutOfBounds)?;
        let temp = self
            .data
            .as_bytes()
            .get(self.pos..end)
            .ok_or(ReadError::OutOfBounds);
        self.pos = end;
        temp
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}
