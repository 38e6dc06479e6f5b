use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid bit field width {0}, expected 1 to 32")]
    InvalidFieldWidth(u8),

    #[error("Value {value} does not fit the {width}-bit field '{field}'")]
    FieldOverflow {
        field: &'static str,
        width: u8,
        value: u32,
    },

    #[error("Field layout expects {expected} values, got {actual}")]
    LayoutMismatch { expected: usize, actual: usize },

    #[error("Empty label in domain name '{0}'")]
    EmptyLabel(String),

    #[error("Label '{label}' is {len} bytes long, the maximum is 63")]
    LabelTooLong { label: String, len: usize },

    #[error("Domain name '{name}' encodes to {len} bytes, the maximum is 255")]
    NameTooLong { name: String, len: usize },

    #[error("Label {0:?} is not a single UTF-8 label")]
    InvalidLabel(String),

    #[error("Unsupported label type 0x{0:02x}")]
    UnsupportedLabelType(u8),

    #[error("Compression pointer to offset {offset} does not point before offset {position}")]
    InvalidPointer { offset: usize, position: usize },

    #[error("Record data is {0} bytes long, the maximum is 65535")]
    DataTooLong(usize),

    #[error("Header {section} count is {header} but the section holds {actual} entries")]
    CountMismatch {
        section: &'static str,
        header: u16,
        actual: usize,
    },

    #[error("The {0} section already holds 65535 entries")]
    SectionFull(&'static str),

    #[error("Invalid hex input: {0}")]
    InvalidHex(String),
}

impl CodecError {
    /// True when the input ended in the middle of a field.
    pub fn is_truncated(&self) -> bool {
        matches!(self, CodecError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}
