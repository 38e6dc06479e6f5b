use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest value a 4-bit header field can carry.
pub const MAX_FOUR_BIT_CODE: u8 = 0x0F;

/// Kind of query carried by a message (OPCODE, RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OpCode {
    #[default]
    Query,
    IQuery,
    Status,
    Unknown(u8),
}

impl OpCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpCode::Query => "QUERY",
            OpCode::IQuery => "IQUERY",
            OpCode::Status => "STATUS",
            OpCode::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            OpCode::Query => 0,
            OpCode::IQuery => 1,
            OpCode::Status => 2,
            OpCode::Unknown(code) => *code,
        }
    }

    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => OpCode::Query,
            1 => OpCode::IQuery,
            2 => OpCode::Status,
            other => OpCode::Unknown(other),
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCode::Unknown(code) => write!(f, "OPCODE{}", code),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

impl FromStr for OpCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let numeric = upper.strip_prefix("OPCODE").unwrap_or(&upper);
        if let Ok(code) = numeric.parse::<u8>() {
            if code <= MAX_FOUR_BIT_CODE {
                return Ok(OpCode::from_u8(code));
            }
            return Err(DomainError::InvalidOpCode(s.to_string()));
        }

        match upper.as_str() {
            "QUERY" => Ok(OpCode::Query),
            "IQUERY" => Ok(OpCode::IQuery),
            "STATUS" => Ok(OpCode::Status),
            _ => Err(DomainError::InvalidOpCode(s.to_string())),
        }
    }
}

impl TryFrom<String> for OpCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OpCode> for String {
    fn from(op_code: OpCode) -> Self {
        op_code.to_string()
    }
}

/// Response status (RCODE, RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResponseCode {
    #[default]
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Unknown(u8),
}

impl ResponseCode {
    /// Conventional upper-case name as printed by dig and friends.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormatError => "FORMERR",
            ResponseCode::ServerFailure => "SERVFAIL",
            ResponseCode::NameError => "NXDOMAIN",
            ResponseCode::NotImplemented => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(code) => *code,
        }
    }

    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, ResponseCode::NoError)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Unknown(code) => write!(f, "RCODE{}", code),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

impl FromStr for ResponseCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let numeric = upper.strip_prefix("RCODE").unwrap_or(&upper);
        if let Ok(code) = numeric.parse::<u8>() {
            if code <= MAX_FOUR_BIT_CODE {
                return Ok(ResponseCode::from_u8(code));
            }
            return Err(DomainError::InvalidResponseCode(s.to_string()));
        }

        match upper.as_str() {
            "NOERROR" => Ok(ResponseCode::NoError),
            "FORMERR" => Ok(ResponseCode::FormatError),
            "SERVFAIL" => Ok(ResponseCode::ServerFailure),
            "NXDOMAIN" => Ok(ResponseCode::NameError),
            "NOTIMP" => Ok(ResponseCode::NotImplemented),
            "REFUSED" => Ok(ResponseCode::Refused),
            _ => Err(DomainError::InvalidResponseCode(s.to_string())),
        }
    }
}

impl TryFrom<String> for ResponseCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResponseCode> for String {
    fn from(code: ResponseCode) -> Self {
        code.to_string()
    }
}
