// Path: crates/types/src/codec/word.rs

//! Reading and writing 32-byte ABI words.

use crate::app::{Address, Bytes32};
use crate::error::DecodeError;

/// The size of one ABI word.
pub const WORD: usize = 32;

/// A position in a buffer, expressed as a value relative to a stated base.
///
/// ABI offsets are relative to the start of the tuple that contains them, which
/// is not always the start of the buffer. Carrying the base alongside the value
/// keeps that distinction explicit until the offset is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    base: usize,
    value: usize,
}

impl Offset {
    /// Creates an offset of `value` bytes past `base`.
    pub fn new(base: usize, value: usize) -> Self {
        Self { base, value }
    }

    /// The absolute position the offset is relative to.
    pub fn base(&self) -> usize {
        self.base
    }

    /// The raw offset as written in the word.
    pub fn value(&self) -> usize {
        self.value
    }

    /// The absolute position `base + value`.
    pub fn resolve(&self, field: &'static str) -> Result<usize, DecodeError> {
        self.base
            .checked_add(self.value)
            .ok_or(DecodeError::Overflow {
                field,
                bits: usize::BITS,
            })
    }
}

/// A bounds-checked reader over an ABI-encoded buffer.
#[derive(Debug, Clone, Copy)]
pub struct WordReader<'a> {
    buf: &'a [u8],
}

impl<'a> WordReader<'a> {
    /// Wraps `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// The length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn slice(&self, at: usize, needed: usize, field: &'static str) -> Result<&'a [u8], DecodeError> {
        let truncated = || DecodeError::Truncated {
            field,
            offset: at,
            needed,
            len: self.buf.len(),
        };
        let end = at.checked_add(needed).ok_or_else(truncated)?;
        self.buf.get(at..end).ok_or_else(truncated)
    }

    /// The word starting at absolute position `at`.
    pub fn word(&self, at: usize, field: &'static str) -> Result<&'a [u8; WORD], DecodeError> {
        let slice = self.slice(at, WORD, field)?;
        slice.try_into().map_err(|_| DecodeError::Truncated {
            field,
            offset: at,
            needed: WORD,
            len: self.buf.len(),
        })
    }

    /// A word read as an opaque 32-byte value.
    pub fn bytes32(&self, at: usize, field: &'static str) -> Result<Bytes32, DecodeError> {
        Ok(Bytes32(*self.word(at, field)?))
    }

    /// A word read as a `uint64`; any set bit above the low 8 bytes is an overflow.
    pub fn uint64(&self, at: usize, field: &'static str) -> Result<u64, DecodeError> {
        let word = self.word(at, field)?;
        let (high, low) = word.split_at(WORD - 8);
        if high.iter().any(|b| *b != 0) {
            return Err(DecodeError::Overflow { field, bits: 64 });
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(low);
        Ok(u64::from_be_bytes(bytes))
    }

    /// A word read as a length or offset that must fit the platform's `usize`.
    pub fn length(&self, at: usize, field: &'static str) -> Result<usize, DecodeError> {
        let value = self.uint64(at, field)?;
        usize::try_from(value).map_err(|_| DecodeError::Overflow {
            field,
            bits: usize::BITS,
        })
    }

    /// A word read as a `bool`; any non-zero value is true.
    pub fn boolean(&self, at: usize, field: &'static str) -> Result<bool, DecodeError> {
        Ok(self.word(at, field)?.iter().any(|b| *b != 0))
    }

    /// A word read as a left-padded 20-byte address.
    pub fn address(&self, at: usize, field: &'static str) -> Result<Address, DecodeError> {
        let word = self.word(at, field)?;
        let (high, low) = word.split_at(WORD - 20);
        if high.iter().any(|b| *b != 0) {
            return Err(DecodeError::Overflow { field, bits: 160 });
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(low);
        Ok(Address(bytes))
    }

    /// A word read as an offset relative to `base`.
    pub fn offset(&self, at: usize, base: usize, field: &'static str) -> Result<Offset, DecodeError> {
        Ok(Offset::new(base, self.length(at, field)?))
    }

    /// The dynamic `bytes` value at `offset`: a length word followed by that many bytes.
    pub fn dynamic(&self, offset: Offset, field: &'static str) -> Result<&'a [u8], DecodeError> {
        let at = offset.resolve(field)?;
        let len = self.length(at, field)?;
        let start = at.checked_add(WORD).ok_or(DecodeError::Overflow {
            field,
            bits: usize::BITS,
        })?;
        self.slice(start, len, field)
    }

    /// The dynamic `string` value at `offset`.
    pub fn string(&self, offset: Offset, field: &'static str) -> Result<String, DecodeError> {
        let bytes = self.dynamic(offset, field)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { field })
    }
}

/// A `uint64` as a right-aligned word.
pub fn uint_word(value: u64) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    for (dst, src) in word.iter_mut().skip(WORD - 8).zip(value.to_be_bytes()) {
        *dst = src;
    }
    word
}

/// An address as a left-padded word.
pub fn address_word(address: &Address) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    for (dst, src) in word.iter_mut().skip(WORD - 20).zip(address.0) {
        *dst = src;
    }
    word
}

/// `len` rounded up to a whole number of words.
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD) * WORD
}

/// Builds one tuple as a head of fixed words followed by a tail of dynamic values.
///
/// Offsets written for dynamic fields are relative to the start of the tuple.
#[derive(Debug)]
pub struct TupleEncoder {
    head_size: usize,
    head: Vec<u8>,
    tail: Vec<u8>,
}

impl TupleEncoder {
    /// Starts a tuple whose head holds `fields` words.
    pub fn new(fields: usize) -> Self {
        let head_size = fields * WORD;
        Self {
            head_size,
            head: Vec::with_capacity(head_size),
            tail: Vec::new(),
        }
    }

    /// Appends an inline word.
    pub fn word(&mut self, word: [u8; WORD]) -> &mut Self {
        self.head.extend_from_slice(&word);
        self
    }

    /// Appends an inline `uint64`.
    pub fn uint64(&mut self, value: u64) -> &mut Self {
        self.word(uint_word(value))
    }

    /// Appends an inline `bytes32`.
    pub fn bytes32(&mut self, value: &Bytes32) -> &mut Self {
        self.word(value.0)
    }

    /// Appends an offset in the head and the length-prefixed, padded bytes in the tail.
    pub fn dynamic(&mut self, bytes: &[u8]) -> &mut Self {
        let offset = (self.head_size + self.tail.len()) as u64;
        self.word(uint_word(offset));
        self.tail.extend_from_slice(&uint_word(bytes.len() as u64));
        self.tail.extend_from_slice(bytes);
        let padded = self.tail.len() + padded_len(bytes.len()) - bytes.len();
        self.tail.resize(padded, 0);
        self
    }

    /// Appends a dynamic `string`.
    pub fn string(&mut self, value: &str) -> &mut Self {
        self.dynamic(value.as_bytes())
    }

    /// Concatenates head and tail.
    pub fn finish(self) -> Vec<u8> {
        debug_assert_eq!(self.head.len(), self.head_size, "tuple head is incomplete");
        let mut out = self.head;
        out.extend(self.tail);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint_words_are_right_aligned() {
        let word = uint_word(0x0102);
        assert!(word[..30].iter().all(|b| *b == 0));
        assert_eq!(&word[30..], &[0x01, 0x02]);
    }

    #[test]
    fn padding_rounds_to_whole_words() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), 32);
        assert_eq!(padded_len(32), 32);
        assert_eq!(padded_len(33), 64);
    }

    #[test]
    fn offsets_resolve_against_their_base() {
        assert_eq!(Offset::new(32, 320).resolve("data"), Ok(352));
        assert!(matches!(
            Offset::new(usize::MAX, 1).resolve("data"),
            Err(DecodeError::Overflow { field: "data", .. })
        ));
    }

    #[test]
    fn uint64_rejects_high_bits() {
        let mut word = uint_word(7);
        word[0] = 1;
        let reader = WordReader::new(&word);
        assert_eq!(
            reader.uint64(0, "createdAt"),
            Err(DecodeError::Overflow {
                field: "createdAt",
                bits: 64
            })
        );
    }

    #[test]
    fn dynamic_reads_exact_length() {
        let mut enc = TupleEncoder::new(1);
        enc.string("abc");
        let buf = enc.finish();
        assert_eq!(buf.len(), 96);
        let reader = WordReader::new(&buf);
        let offset = reader.offset(0, 0, "s").unwrap();
        assert_eq!(offset.value(), 32);
        assert_eq!(reader.string(offset, "s").unwrap(), "abc");
    }

    #[test]
    fn dynamic_past_end_is_truncated() {
        let mut buf = uint_word(32).to_vec();
        buf.extend_from_slice(&uint_word(5));
        buf.extend_from_slice(b"ab");
        let reader = WordReader::new(&buf);
        let err = reader.dynamic(Offset::new(0, 32), "name").unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { field: "name", needed: 5, .. }));
    }
}
