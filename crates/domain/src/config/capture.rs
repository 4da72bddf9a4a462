use serde::{Deserialize, Serialize};

/// When the bare question of a message is emitted as its own row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionRows {
    /// Only for messages without any non-OPT record.
    #[default]
    Auto,
    /// For every message, in addition to its record rows.
    Always,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// Provenance tag copied into every row's `source` field
    #[serde(default = "default_source")]
    pub source: String,

    /// Sensor name copied into every row's `sensor` field
    #[serde(default)]
    pub sensor: String,

    #[serde(default)]
    pub question_rows: QuestionRows,

    /// Copy EDNS Client Subnet data into the `ecs_*` fields
    #[serde(default = "default_true")]
    pub ecs_enrichment: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            sensor: String::new(),
            question_rows: QuestionRows::default(),
            ecs_enrichment: true,
        }
    }
}

fn default_source() -> String {
    "pcap".to_string()
}

fn default_true() -> bool {
    true
}
