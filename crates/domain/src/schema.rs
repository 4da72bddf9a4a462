use crate::section::Section;
use serde::{Deserialize, Serialize};

/// One flattened, exportable row. A row either describes the bare question
/// of a message (all `record_*` fields absent, all section flags false) or a
/// single resource record from one section.
///
/// Absent optional fields are left out of the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSchema {
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fingerprint: String,
    pub is_udp: bool,
    pub ip_version: u8,
    pub source_address: String,
    pub source_port: u16,
    pub destination_address: String,
    pub destination_port: u16,
    pub message_id: u16,
    pub response_code: u16,
    pub truncated: bool,
    pub is_response: bool,
    pub recursion_desired: bool,
    pub is_answer: bool,
    pub is_authority: bool,
    pub is_additional: bool,
    pub query_name: String,
    pub query_type: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecs_client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecs_source_prefix: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecs_scope_prefix: Option<u8>,

    pub source: String,
    pub sensor: String,
}

impl DnsSchema {
    pub fn has_record(&self) -> bool {
        self.record_type.is_some()
    }

    /// Section the row's record came from, `None` for a question row.
    pub fn section(&self) -> Option<Section> {
        match (self.is_answer, self.is_authority, self.is_additional) {
            (true, false, false) => Some(Section::Answer),
            (false, true, false) => Some(Section::Authority),
            (false, false, true) => Some(Section::Additional),
            _ => None,
        }
    }

    pub fn set_section(&mut self, section: Section) {
        self.is_answer = section == Section::Answer;
        self.is_authority = section == Section::Authority;
        self.is_additional = section == Section::Additional;
    }
}
