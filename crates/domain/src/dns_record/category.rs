use std::fmt;

/// Coarse grouping of record types, following the status each code has
/// in RFC 1035 §3.2.2 / §3.2.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordCategory {
    Data,

    Obsolete,

    Experimental,

    /// Pseudo records such as the EDNS OPT record.
    Protocol,

    QueryOnly,

    Unassigned,
}

impl RecordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCategory::Data => "data",
            RecordCategory::Obsolete => "obsolete",
            RecordCategory::Experimental => "experimental",
            RecordCategory::Protocol => "protocol",
            RecordCategory::QueryOnly => "query-only",
            RecordCategory::Unassigned => "unassigned",
        }
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
