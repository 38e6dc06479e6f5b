use crate::bits::{BitField, BitReader, BitWriter};
use crate::errors::Result;
use crate::fqdn::{write_name, NameDecoder};
use serde::Serialize;
use std::fmt;
use std::io::{Read, Write};
use zutil_dns_domain::{RecordClass, RecordType};

/// Fixed part following the question name.
pub const QUESTION_LAYOUT: [BitField; 2] = [
    BitField::unsigned("record_type", 16),
    BitField::unsigned("class", 16),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType, class: RecordClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }

    /// mDNS "QU" bit: the asker accepts a unicast reply.
    pub fn unicast_response(&self) -> bool {
        self.class.has_mdns_flag()
    }

    pub fn read<R: Read>(reader: &mut BitReader<R>, names: &mut NameDecoder) -> Result<Self> {
        let name = names.read_name(reader)?;
        let v = reader.read_layout(&QUESTION_LAYOUT)?;
        Ok(Self {
            name,
            record_type: RecordType::from_u16(v[0] as u16),
            class: RecordClass::from_u16(v[1] as u16),
        })
    }

    pub fn write<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        write_name(writer, Some(&self.name))?;
        writer.write_layout(
            &QUESTION_LAYOUT,
            &[
                u32::from(self.record_type.to_u16()),
                u32::from(self.class.to_u16()),
            ],
        )
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.\t{}\t{}", self.name, self.class, self.record_type)
    }
}
