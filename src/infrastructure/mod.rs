// Infrastructure module - Filesystem sinks and configuration files
pub mod config;
pub mod logging;
