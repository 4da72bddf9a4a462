pub mod capture;
pub mod errors;
pub mod logging;
pub mod output;
pub mod root;

pub use capture::{CaptureConfig, QuestionRows};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use root::{CliOverrides, Config};
