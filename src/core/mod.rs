// Core module - Named logger registry and logging context
pub mod context;
pub mod global;
pub mod logger;
pub mod name;
pub mod registry;

pub use context::{resolve_output_mode, stdout_is_terminal, LoggingContext};
pub use logger::Logger;
pub use name::normalize_name;
pub use registry::LoggerRegistry;
