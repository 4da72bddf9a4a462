pub mod json_file;
pub mod stdout;

pub use json_file::JsonFileSink;
pub use stdout::StdoutSink;

use ferrous_pdns_application::services::FormatRegistryBuilder;
use ferrous_pdns_domain::config::OutputConfig;
use std::sync::Arc;

pub const JSON_FORMAT: &str = "json";
pub const STDOUT_FORMAT: &str = "stdout";

/// Registers the built-in sinks under their format names.
pub fn register_builtin_formats(
    builder: FormatRegistryBuilder,
    config: &OutputConfig,
) -> FormatRegistryBuilder {
    builder
        .register_sink(
            JSON_FORMAT,
            Arc::new(JsonFileSink::new(&config.directory, &config.file_prefix)),
        )
        .register_sink(STDOUT_FORMAT, Arc::new(StdoutSink::new()))
}
