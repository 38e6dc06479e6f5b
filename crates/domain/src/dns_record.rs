mod category;
mod record_class;
mod record_type;

pub use category::RecordCategory;
pub use record_class::{RecordClass, MDNS_CLASS_FLAG};
pub use record_type::RecordType;
