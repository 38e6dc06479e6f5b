mod codec;
mod errors;
mod logging;
mod root;

pub use codec::{CodecConfig, OverflowPolicy, PointerMode};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
