pub mod config;
pub mod errors;
pub mod logging;
pub mod safety;

pub use config::{CleanupRule, Config, Defaults, LogFormat, RelocateMode, RelocateRule};
pub use errors::{BroomError, FileOpError};
