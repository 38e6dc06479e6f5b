//! Domain name (FQDN) label codec.
//!
//! Names are written as plain length-prefixed labels; compression is never
//! used on write. On read, compression pointers are handled according to
//! [`PointerMode`].

use crate::bits::{BitReader, BitWriter};
use crate::errors::{CodecError, Result};
use std::collections::HashMap;
use std::io::{Read, Write};
use tracing::trace;
use zutil_dns_domain::PointerMode;

pub const MAX_LABEL_LEN: usize = 63;
/// Maximum encoded length of a name, terminating zero byte included.
pub const MAX_NAME_LEN: usize = 255;

const POINTER_MASK: u8 = 0xC0;
const OFFSET_MASK: u8 = 0x3F;

/// Encodes `name` as length-prefixed labels followed by the root label.
///
/// `None`, `""` and `"."` all encode as the root name (a single zero byte).
/// One trailing dot is accepted.
pub fn encode_name(name: Option<&str>) -> Result<Vec<u8>> {
    let text = match name {
        None | Some("") | Some(".") => return Ok(vec![0]),
        Some(text) => text,
    };
    let trimmed = text.strip_suffix('.').unwrap_or(text);

    let mut out = Vec::with_capacity(trimmed.len() + 2);
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(CodecError::EmptyLabel(text.to_string()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(CodecError::LabelTooLong {
                label: label.to_string(),
                len: label.len(),
            });
        }
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);

    if out.len() > MAX_NAME_LEN {
        return Err(CodecError::NameTooLong {
            name: text.to_string(),
            len: out.len(),
        });
    }
    Ok(out)
}

pub fn write_name<W: Write>(writer: &mut BitWriter<W>, name: Option<&str>) -> Result<()> {
    let encoded = encode_name(name)?;
    writer.write_bytes(&encoded)
}

/// Returns the target offset when the last label of `name` is an
/// unresolved compression pointer rendered as `<offset>`.
pub fn unresolved_pointer(name: &str) -> Option<u16> {
    let last = name.rsplit('.').next()?;
    last.strip_prefix('<')?.strip_suffix('>')?.parse().ok()
}

fn pointer_text(offset: usize) -> String {
    format!("<{}>", offset)
}

/// A label must be valid UTF-8 without dots so the name re-encodes to the
/// same labels.
fn label_text(bytes: &[u8]) -> Result<String> {
    match std::str::from_utf8(bytes) {
        Ok(text) if !text.contains('.') => Ok(text.to_string()),
        _ => Err(CodecError::InvalidLabel(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
    }
}

fn check_name_len(labels: &[(usize, String)], tail: Option<&str>, len: usize) -> Result<()> {
    if len <= MAX_NAME_LEN {
        return Ok(());
    }
    let mut parts: Vec<&str> = labels.iter().map(|(_, label)| label.as_str()).collect();
    parts.extend(tail);
    Err(CodecError::NameTooLong {
        name: parts.join("."),
        len,
    })
}

/// Reads domain names from one message.
///
/// A decoder carries per-message state in [`PointerMode::Cached`] and must
/// not be shared between messages.
#[derive(Debug, Default)]
pub struct NameDecoder {
    mode: PointerMode,
    cache: HashMap<usize, String>,
}

impl NameDecoder {
    pub fn new(mode: PointerMode) -> Self {
        Self {
            mode,
            cache: HashMap::new(),
        }
    }

    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    pub fn read_name<R: Read>(&mut self, reader: &mut BitReader<R>) -> Result<String> {
        let start = reader.position();
        let mut labels: Vec<(usize, String)> = Vec::new();
        let mut tail: Option<String> = None;
        // Encoded length, terminating zero included.
        let mut total = 1;

        loop {
            let offset = reader.position();
            let len = reader.read_u8()?;
            if len == 0 {
                break;
            }

            match len & POINTER_MASK {
                POINTER_MASK => {
                    let low = reader.read_u8()?;
                    let target = (usize::from(len & OFFSET_MASK) << 8) | usize::from(low);
                    let (text, complete) = self.follow(reader.history(), target, start)?;
                    // A placeholder has no known length.
                    if complete && !text.is_empty() {
                        total += text.len() + 1;
                    }
                    tail = Some(text);
                    break;
                }
                0x00 => {
                    let bytes = reader.read_bytes(usize::from(len))?;
                    total += 1 + bytes.len();
                    labels.push((offset, label_text(&bytes)?));
                    check_name_len(&labels, None, total)?;
                }
                _ => return Err(CodecError::UnsupportedLabelType(len)),
            }
        }

        let tail = tail.filter(|text| !text.is_empty());
        check_name_len(&labels, tail.as_deref(), total)?;

        let mut parts: Vec<&str> = labels.iter().map(|(_, label)| label.as_str()).collect();
        parts.extend(tail.as_deref());
        let name = parts.join(".");

        if self.mode == PointerMode::Cached {
            self.remember(&labels, tail.as_deref());
        }
        Ok(name)
    }

    fn remember(&mut self, labels: &[(usize, String)], tail: Option<&str>) {
        for (i, (offset, _)) in labels.iter().enumerate() {
            let mut suffix: Vec<&str> = labels[i..].iter().map(|(_, l)| l.as_str()).collect();
            suffix.extend(tail);
            self.cache.insert(*offset, suffix.join("."));
        }
    }

    /// Turns a pointer into text. The flag is false when the text is or ends
    /// in an `<offset>` placeholder.
    fn follow(&self, history: &[u8], target: usize, position: usize) -> Result<(String, bool)> {
        match self.mode {
            PointerMode::Offset => {
                trace!(offset = target, position, "compression pointer left unresolved");
                Ok((pointer_text(target), false))
            }
            PointerMode::Cached => match self.cache.get(&target) {
                Some(name) => Ok((name.clone(), unresolved_pointer(name).is_none())),
                None => {
                    trace!(offset = target, position, "compression pointer left unresolved");
                    Ok((pointer_text(target), false))
                }
            },
            PointerMode::Resolve => {
                if target >= position {
                    return Err(CodecError::InvalidPointer {
                        offset: target,
                        position,
                    });
                }
                Ok((resolve_pointer(history, target)?, true))
            }
        }
    }
}

/// Decodes the name starting at `offset` inside already-read message bytes.
/// Each further pointer must point before the previous target.
fn resolve_pointer(history: &[u8], offset: usize) -> Result<String> {
    let mut labels: Vec<String> = Vec::new();
    let mut limit = offset;
    let mut pos = offset;
    let mut total = 1;

    loop {
        let len = *history.get(pos).ok_or(CodecError::InvalidPointer {
            offset: pos,
            position: history.len(),
        })?;
        if len == 0 {
            break;
        }

        match len & POINTER_MASK {
            POINTER_MASK => {
                let low = *history.get(pos + 1).ok_or(CodecError::InvalidPointer {
                    offset: pos,
                    position: history.len(),
                })?;
                let next = (usize::from(len & OFFSET_MASK) << 8) | usize::from(low);
                if next >= limit {
                    return Err(CodecError::InvalidPointer {
                        offset: next,
                        position: limit,
                    });
                }
                limit = next;
                pos = next;
            }
            0x00 => {
                let end = pos + 1 + usize::from(len);
                let bytes = history.get(pos + 1..end).ok_or(CodecError::InvalidPointer {
                    offset: pos,
                    position: history.len(),
                })?;
                total += 1 + bytes.len();
                labels.push(label_text(bytes)?);
                pos = end;
            }
            _ => return Err(CodecError::UnsupportedLabelType(len)),
        }
    }

    let name = labels.join(".");
    if total > MAX_NAME_LEN {
        return Err(CodecError::NameTooLong { len: total, name });
    }
    Ok(name)
}
