//! Bit-granular reader and writer over byte streams.
//!
//! Fields are packed most-significant bit first and may straddle byte
//! boundaries. Structures describe themselves as an ordered list of
//! [`BitField`]s which [`BitReader::read_layout`] and
//! [`BitWriter::write_layout`] walk in order.

use crate::errors::{CodecError, Result};
use std::io::{Read, Write};
use zutil_dns_domain::OverflowPolicy;

pub const MAX_FIELD_WIDTH: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single bit, 0 or 1.
    Flag,
    Unsigned,
}

/// One entry of a structure layout: name, width in bits and meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub name: &'static str,
    pub width: u8,
    pub kind: FieldKind,
}

impl BitField {
    pub const fn flag(name: &'static str) -> Self {
        Self {
            name,
            width: 1,
            kind: FieldKind::Flag,
        }
    }

    pub const fn unsigned(name: &'static str, width: u8) -> Self {
        Self {
            name,
            width,
            kind: FieldKind::Unsigned,
        }
    }

    pub fn max_value(&self) -> u32 {
        match self.kind {
            FieldKind::Flag => 1,
            FieldKind::Unsigned => width_mask(self.width),
        }
    }
}

/// Total width of a layout in bits.
pub fn layout_bits(layout: &[BitField]) -> u32 {
    layout.iter().map(|field| u32::from(field.width)).sum()
}

fn width_mask(width: u8) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

fn check_width(width: u8) -> Result<()> {
    if width == 0 || width > MAX_FIELD_WIDTH {
        return Err(CodecError::InvalidFieldWidth(width));
    }
    Ok(())
}

/// Reads bit fields from an underlying byte stream.
///
/// Every byte pulled from the stream is kept so that later parts of a
/// message can refer back to earlier ones (domain name compression).
pub struct BitReader<R> {
    inner: R,
    current: u8,
    bits_left: u8,
    history: Vec<u8>,
}

impl<R: Read> BitReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            current: 0,
            bits_left: 0,
            history: Vec::with_capacity(512),
        }
    }

    /// Number of bytes consumed from the stream so far.
    pub fn position(&self) -> usize {
        self.history.len()
    }

    /// Every byte consumed so far, starting at the first byte of the message.
    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn is_aligned(&self) -> bool {
        self.bits_left == 0
    }

    fn next_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.inner.read_exact(&mut byte)?;
        self.history.push(byte[0]);
        Ok(byte[0])
    }

    pub fn read_bits(&mut self, width: u8) -> Result<u32> {
        check_width(width)?;

        let mut value: u32 = 0;
        let mut remaining = width;
        while remaining > 0 {
            if self.bits_left == 0 {
                self.current = self.next_byte()?;
                self.bits_left = 8;
            }
            let take = remaining.min(self.bits_left);
            let shift = self.bits_left - take;
            let chunk = (u32::from(self.current) >> shift) & width_mask(take);
            value = (value << take) | chunk;
            self.bits_left -= take;
            remaining -= take;
        }
        Ok(value)
    }

    pub fn read_flag(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bits(8)? as u8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(self.read_bits(16)? as u16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_bits(32)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        if !self.is_aligned() {
            return (0..len).map(|_| self.read_u8()).collect();
        }

        let mut buf = vec![0u8; len];
        self.inner.read_exact(&mut buf)?;
        self.history.extend_from_slice(&buf);
        Ok(buf)
    }

    /// Reads one value per layout entry, in layout order.
    pub fn read_layout(&mut self, layout: &[BitField]) -> Result<Vec<u32>> {
        layout
            .iter()
            .map(|field| self.read_bits(field.width))
            .collect()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Writes bit fields to an underlying byte stream.
///
/// A partially filled byte is held back until it is completed or
/// [`BitWriter::flush`] pads it with zero bits.
pub struct BitWriter<W: Write> {
    inner: W,
    pending: u8,
    pending_bits: u8,
    written: usize,
    overflow: OverflowPolicy,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_policy(inner, OverflowPolicy::default())
    }

    pub fn with_policy(inner: W, overflow: OverflowPolicy) -> Self {
        Self {
            inner,
            pending: 0,
            pending_bits: 0,
            written: 0,
            overflow,
        }
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Number of complete bytes handed to the stream so far.
    pub fn position(&self) -> usize {
        self.written
    }

    pub fn is_aligned(&self) -> bool {
        self.pending_bits == 0
    }

    fn fit(&self, field: &'static str, width: u8, value: u32) -> Result<u32> {
        let mask = width_mask(width);
        if value & !mask == 0 {
            return Ok(value);
        }
        match self.overflow {
            OverflowPolicy::Reject => Err(CodecError::FieldOverflow {
                field,
                width,
                value,
            }),
            OverflowPolicy::Truncate => Ok(value & mask),
        }
    }

    fn emit(&mut self, width: u8, value: u32) -> Result<()> {
        if self.is_aligned() && width % 8 == 0 {
            let bytes = value.to_be_bytes();
            let start = bytes.len() - usize::from(width / 8);
            self.inner.write_all(&bytes[start..])?;
            self.written += bytes.len() - start;
            return Ok(());
        }

        for bit in (0..width).rev() {
            self.pending = (self.pending << 1) | ((value >> bit) & 1) as u8;
            self.pending_bits += 1;
            if self.pending_bits == 8 {
                self.inner.write_all(&[self.pending])?;
                self.written += 1;
                self.pending = 0;
                self.pending_bits = 0;
            }
        }
        Ok(())
    }

    pub fn write_named(&mut self, field: &'static str, width: u8, value: u32) -> Result<()> {
        check_width(width)?;
        let value = self.fit(field, width, value)?;
        self.emit(width, value)
    }

    pub fn write_bits(&mut self, width: u8, value: u32) -> Result<()> {
        self.write_named("value", width, value)
    }

    pub fn write_flag(&mut self, value: bool) -> Result<()> {
        self.emit(1, u32::from(value))
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.emit(8, u32::from(value))
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.emit(16, u32::from(value))
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.emit(32, value)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.is_aligned() {
            return bytes.iter().try_for_each(|b| self.write_u8(*b));
        }
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    /// Writes `values` against `layout`. Under [`OverflowPolicy::Reject`]
    /// every value is checked before the first bit goes out.
    pub fn write_layout(&mut self, layout: &[BitField], values: &[u32]) -> Result<()> {
        if layout.len() != values.len() {
            return Err(CodecError::LayoutMismatch {
                expected: layout.len(),
                actual: values.len(),
            });
        }

        let fitted = layout
            .iter()
            .zip(values)
            .map(|(field, value)| {
                check_width(field.width)?;
                self.fit(field.name, field.width, *value)
            })
            .collect::<Result<Vec<u32>>>()?;

        for (field, value) in layout.iter().zip(fitted) {
            self.emit(field.width, value)?;
        }
        Ok(())
    }

    /// Pads an incomplete byte with zero bits and flushes the stream.
    pub fn flush(&mut self) -> Result<()> {
        if self.pending_bits > 0 {
            let byte = self.pending << (8 - self.pending_bits);
            self.inner.write_all(&[byte])?;
            self.written += 1;
            self.pending = 0;
            self.pending_bits = 0;
        }
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.inner)
    }
}
