use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid record class: {0}")]
    InvalidRecordClass(String),

    #[error("Invalid opcode: {0}")]
    InvalidOpCode(String),

    #[error("Invalid response code: {0}")]
    InvalidResponseCode(String),
}
