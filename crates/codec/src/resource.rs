use crate::bits::{BitField, BitReader, BitWriter};
use crate::errors::{CodecError, Result};
use crate::fqdn::{write_name, NameDecoder};
use crate::hex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::{Read, Write};
use std::net::{Ipv4Addr, Ipv6Addr};
use zutil_dns_domain::{RecordClass, RecordType};

/// Fixed part following the owner name. RDATA follows `data_length`.
pub const RESOURCE_LAYOUT: [BitField; 4] = [
    BitField::unsigned("record_type", 16),
    BitField::unsigned("class", 16),
    BitField::unsigned("ttl", 32),
    BitField::unsigned("data_length", 16),
];

/// One resource record. `data` is opaque; its length prefix is derived
/// from the payload on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    #[serde(serialize_with = "serialize_hex")]
    pub data: Vec<u8>,
}

fn serialize_hex<S: Serializer>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(data))
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            ttl,
            data,
        }
    }

    /// mDNS cache-flush bit.
    pub fn cache_flush(&self) -> bool {
        self.class.has_mdns_flag()
    }

    pub fn data_as_str(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }

    pub fn ipv4_address(&self) -> Option<Ipv4Addr> {
        if self.record_type != RecordType::A || self.class.without_mdns_flag() != RecordClass::IN {
            return None;
        }
        let octets: [u8; 4] = self.data.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }

    pub fn ipv6_address(&self) -> Option<Ipv6Addr> {
        if self.record_type != RecordType::AAAA
            || self.class.without_mdns_flag() != RecordClass::IN
        {
            return None;
        }
        let octets: [u8; 16] = self.data.as_slice().try_into().ok()?;
        Some(Ipv6Addr::from(octets))
    }

    pub fn read<R: Read>(reader: &mut BitReader<R>, names: &mut NameDecoder) -> Result<Self> {
        let name = names.read_name(reader)?;
        let v = reader.read_layout(&RESOURCE_LAYOUT)?;
        let data = reader.read_bytes(v[3] as usize)?;
        Ok(Self {
            name,
            record_type: RecordType::from_u16(v[0] as u16),
            class: RecordClass::from_u16(v[1] as u16),
            ttl: v[2],
            data,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        let data_length =
            u16::try_from(self.data.len()).map_err(|_| CodecError::DataTooLong(self.data.len()))?;

        write_name(writer, Some(&self.name))?;
        writer.write_layout(
            &RESOURCE_LAYOUT,
            &[
                u32::from(self.record_type.to_u16()),
                u32::from(self.class.to_u16()),
                self.ttl,
                u32::from(data_length),
            ],
        )?;
        writer.write_bytes(&self.data)
    }

    fn data_text(&self) -> String {
        if let Some(addr) = self.ipv4_address() {
            return addr.to_string();
        }
        if let Some(addr) = self.ipv6_address() {
            return addr.to_string();
        }
        format!("\\# {} {}", self.data.len(), hex::encode(&self.data))
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            self.class,
            self.record_type,
            self.data_text()
        )
    }
}
