use crate::bits::{BitField, BitReader, BitWriter};
use crate::errors::Result;
use serde::Serialize;
use std::fmt;
use std::io::{Read, Write};
use zutil_dns_domain::{OpCode, OverflowPolicy, ResponseCode};

/// Encoded size of the header in bytes.
pub const HEADER_LEN: usize = 12;

/// RFC 1035 §4.1.1, in wire order.
pub const HEADER_LAYOUT: [BitField; 13] = [
    BitField::unsigned("id", 16),
    BitField::flag("query_response"),
    BitField::unsigned("op_code", 4),
    BitField::flag("authoritative_answer"),
    BitField::flag("truncation"),
    BitField::flag("recursion_desired"),
    BitField::flag("recursion_available"),
    BitField::unsigned("reserved", 3),
    BitField::unsigned("response_code", 4),
    BitField::unsigned("question_count", 16),
    BitField::unsigned("answer_count", 16),
    BitField::unsigned("name_server_count", 16),
    BitField::unsigned("additional_count", 16),
];

/// The fixed 12-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Header {
    pub id: u16,
    /// Set on responses, clear on queries (QR).
    pub query_response: bool,
    pub op_code: OpCode,
    pub authoritative_answer: bool,
    pub truncation: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: ResponseCode,
    pub question_count: u16,
    pub answer_count: u16,
    pub name_server_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags for a standard query. Id and counts are left alone.
    pub fn set_default_query_data(&mut self) {
        self.query_response = false;
        self.op_code = OpCode::Query;
        self.authoritative_answer = false;
        self.truncation = false;
        self.recursion_desired = false;
        self.recursion_available = false;
        self.response_code = ResponseCode::NoError;
    }

    /// Flags for an authoritative answer. Id and counts are left alone.
    pub fn set_default_response_data(&mut self) {
        self.set_default_query_data();
        self.query_response = true;
        self.authoritative_answer = true;
    }

    pub fn read<R: Read>(reader: &mut BitReader<R>) -> Result<Self> {
        let v = reader.read_layout(&HEADER_LAYOUT)?;
        // v[7] holds the reserved Z bits, ignored on read
        Ok(Self {
            id: v[0] as u16,
            query_response: v[1] != 0,
            op_code: OpCode::from_u8(v[2] as u8),
            authoritative_answer: v[3] != 0,
            truncation: v[4] != 0,
            recursion_desired: v[5] != 0,
            recursion_available: v[6] != 0,
            response_code: ResponseCode::from_u8(v[8] as u8),
            question_count: v[9] as u16,
            answer_count: v[10] as u16,
            name_server_count: v[11] as u16,
            additional_count: v[12] as u16,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        let values = [
            u32::from(self.id),
            u32::from(self.query_response),
            u32::from(self.op_code.to_u8()),
            u32::from(self.authoritative_answer),
            u32::from(self.truncation),
            u32::from(self.recursion_desired),
            u32::from(self.recursion_available),
            0,
            u32::from(self.response_code.to_u8()),
            u32::from(self.question_count),
            u32::from(self.answer_count),
            u32::from(self.name_server_count),
            u32::from(self.additional_count),
        ];
        writer.write_layout(&HEADER_LAYOUT, &values)
    }

    pub fn to_bytes(&self) -> Result<[u8; HEADER_LEN]> {
        self.to_bytes_with(OverflowPolicy::default())
    }

    pub fn to_bytes_with(&self, overflow: OverflowPolicy) -> Result<[u8; HEADER_LEN]> {
        let mut buf = [0u8; HEADER_LEN];
        let mut writer = BitWriter::with_policy(&mut buf[..], overflow);
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(buf)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read(&mut BitReader::new(bytes))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::with_capacity(5);
        if self.query_response {
            flags.push("qr");
        }
        if self.authoritative_answer {
            flags.push("aa");
        }
        if self.truncation {
            flags.push("tc");
        }
        if self.recursion_desired {
            flags.push("rd");
        }
        if self.recursion_available {
            flags.push("ra");
        }

        write!(
            f,
            "opcode: {}, status: {}, id: {}, flags: [{}]; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            self.op_code,
            self.response_code,
            self.id,
            flags.join(" "),
            self.question_count,
            self.answer_count,
            self.name_server_count,
            self.additional_count
        )
    }
}
