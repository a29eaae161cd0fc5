//! Bounded buffers.
//!
//! A [`BoundedStr`] pairs possibly-absent character data with the maximum
//! number of bytes a caller allows an operation to scan. The data is treated
//! as a NUL-terminated string: scanning stops at the first `0x00` byte or at
//! the declared maximum, whichever comes first. Bytes past the end of the
//! slice read as the terminator, so a declared maximum larger than the slice
//! never causes an out-of-bounds read.

/// The string terminator.
pub const NUL: u8 = 0;

/// Caller-supplied buffer with a declared maximum scan length.
///
/// # Example
///
/// ```
/// use safestr_core::BoundedStr;
///
/// let s = BoundedStr::from_str("hello", 5);
/// assert!(!s.is_null());
/// assert_eq!(s.max(), 5);
///
/// let missing = BoundedStr::null(5);
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedStr<'a> {
    data: Option<&'a [u8]>,
    max: usize,
}

impl<'a> BoundedStr<'a> {
    /// Creates a buffer over `data` with declared maximum `max`.
    pub fn new(data: &'a [u8], max: usize) -> Self {
        Self {
            data: Some(data),
            max,
        }
    }

    /// Creates a buffer over the bytes of `s`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str, max: usize) -> Self {
        Self::new(s.as_bytes(), max)
    }

    /// Creates a buffer that may be absent.
    pub fn from_option(data: Option<&'a [u8]>, max: usize) -> Self {
        Self { data, max }
    }

    /// Creates an absent buffer.
    pub fn null(max: usize) -> Self {
        Self { data: None, max }
    }

    /// Returns true if no data is present.
    pub fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// Returns the declared maximum length.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns the underlying data, if present.
    pub fn data(&self) -> Option<&'a [u8]> {
        self.data
    }
}

/// A buffer that passed the validation preamble.
///
/// Only the preamble creates these, so every scan kernel works on data that
/// is present and whose maximum lies in `1..=ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedStr<'a> {
    bytes: &'a [u8],
    max: usize,
}

impl<'a> CheckedStr<'a> {
    pub(crate) fn new(bytes: &'a [u8], max: usize) -> Self {
        Self { bytes, max }
    }

    /// Returns the byte at `index`, or [`NUL`] past the end of the data.
    #[inline]
    pub fn at(&self, index: usize) -> u8 {
        self.bytes.get(index).copied().unwrap_or(NUL)
    }

    /// Returns the declared maximum length.
    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns true if the first byte is the terminator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.at(0) == NUL
    }

    /// Returns true if both buffers start at the same address.
    pub fn same_start(&self, other: &CheckedStr<'_>) -> bool {
        std::ptr::eq(self.bytes.as_ptr(), other.bytes.as_ptr())
    }

    /// Returns the underlying bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the scanned length: bytes before the terminator, capped at `max`.
    pub fn scan_len(&self) -> usize {
        let limit = self.max.min(self.bytes.len());
        self.bytes[..limit]
            .iter()
            .position(|&b| b == NUL)
            .unwrap_or(limit)
    }
}
