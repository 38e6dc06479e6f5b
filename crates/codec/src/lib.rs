//! RFC 1035 DNS message codec: header, domain names, questions and
//! resource records on top of a bit-granular stream.
pub mod bits;
pub mod errors;
pub mod fqdn;
pub mod header;
pub mod hex;
pub mod message;
pub mod question;
pub mod resource;

pub use bits::{BitField, BitReader, BitWriter, FieldKind};
pub use errors::{CodecError, Result};
pub use fqdn::{encode_name, unresolved_pointer, write_name, NameDecoder};
pub use header::{Header, HEADER_LEN};
pub use message::Message;
pub use question::Question;
pub use resource::ResourceRecord;

pub use zutil_dns_domain::{
    CodecConfig, OpCode, OverflowPolicy, PointerMode, RecordClass, RecordType, ResponseCode,
};
