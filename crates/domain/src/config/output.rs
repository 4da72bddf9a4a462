use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Names of the registered output formats every row is sent to
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,

    /// Directory used by file-backed formats
    #[serde(default = "default_directory")]
    pub directory: String,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            formats: default_formats(),
            directory: default_directory(),
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_formats() -> Vec<String> {
    vec!["json".to_string()]
}

fn default_directory() -> String {
    "./logs".to_string()
}

fn default_file_prefix() -> String {
    "dns-".to_string()
}
