mod decode;
mod query;

pub use decode::{decode, DecodeArgs};
pub use query::{query, QueryArgs};
