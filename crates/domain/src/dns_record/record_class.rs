use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top bit of the class field as used by multicast DNS (RFC 6762): the
/// "unicast response" bit on questions and the "cache flush" bit on
/// resource records.
pub const MDNS_CLASS_FLAG: u16 = 0x8000;

/// DNS CLASS / QCLASS code.
///
/// The class is kept exactly as it appeared on the wire; a class with the
/// mDNS flag set (`0x8001`) is [`RecordClass::Unknown`] and
/// [`RecordClass::without_mdns_flag`] gives the underlying class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecordClass {
    IN,
    CS,
    CH,
    HS,
    ANY,
    Unknown(u16),
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
            RecordClass::CS => "CS",
            RecordClass::CH => "CH",
            RecordClass::HS => "HS",
            RecordClass::ANY => "ANY",
            RecordClass::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CS => 2,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::ANY => 255,
            RecordClass::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordClass::IN,
            2 => RecordClass::CS,
            3 => RecordClass::CH,
            4 => RecordClass::HS,
            255 => RecordClass::ANY,
            other => RecordClass::Unknown(other),
        }
    }

    pub fn has_mdns_flag(&self) -> bool {
        self.to_u16() & MDNS_CLASS_FLAG != 0
    }

    pub fn without_mdns_flag(&self) -> Self {
        RecordClass::from_u16(self.to_u16() & !MDNS_CLASS_FLAG)
    }
}

impl From<u16> for RecordClass {
    fn from(code: u16) -> Self {
        RecordClass::from_u16(code)
    }
}

impl From<RecordClass> for u16 {
    fn from(class: RecordClass) -> Self {
        class.to_u16()
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClass::Unknown(code) => write!(f, "CLASS{}", code),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

impl FromStr for RecordClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let numeric = upper.strip_prefix("CLASS").unwrap_or(&upper);
        if let Ok(code) = numeric.parse::<u16>() {
            return Ok(RecordClass::from_u16(code));
        }

        match upper.as_str() {
            "IN" => Ok(RecordClass::IN),
            "CS" => Ok(RecordClass::CS),
            "CH" => Ok(RecordClass::CH),
            "HS" => Ok(RecordClass::HS),
            "ANY" | "*" => Ok(RecordClass::ANY),
            _ => Err(DomainError::InvalidRecordClass(s.to_string())),
        }
    }
}

impl TryFrom<String> for RecordClass {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordClass> for String {
    fn from(class: RecordClass) -> Self {
        class.to_string()
    }
}
