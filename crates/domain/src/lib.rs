//! zutil DNS domain layer: the code tables shared by the wire codec and
//! its callers, plus configuration.
pub mod config;
pub mod dns_header;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, CodecConfig, Config, ConfigError, OverflowPolicy, PointerMode};
pub use dns_header::{OpCode, ResponseCode};
pub use dns_record::{RecordCategory, RecordClass, RecordType, MDNS_CLASS_FLAG};
pub use errors::DomainError;
