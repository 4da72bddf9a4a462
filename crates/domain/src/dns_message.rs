use crate::section::Section;
use std::net::IpAddr;

/// Record type number of the EDNS OPT pseudo-record.
pub const OPT_RECORD_TYPE: u16 = 41;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub query_type: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub name: String,
    pub record_type: u16,
    pub class: u16,
    pub ttl: u32,
}

/// One resource record together with the codec's textual renderings.
///
/// `header_text` is the rendering of the header alone and is a prefix of
/// `text`, the rendering of the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub header: RecordHeader,
    pub header_text: String,
    pub text: String,
}

impl ResourceRecord {
    pub fn is_opt(&self) -> bool {
        self.header.record_type == OPT_RECORD_TYPE
    }

    /// Record data as text: the full rendering with the header rendering
    /// removed once from the front.
    pub fn data_text(&self) -> &str {
        self.text
            .strip_prefix(self.header_text.as_str())
            .unwrap_or(&self.text)
    }
}

/// EDNS Client Subnet option carried by a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSubnet {
    pub address: IpAddr,
    pub source_prefix: u8,
    pub scope_prefix: u8,
}

/// A DNS message as produced by the wire codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsMessage {
    pub id: u16,
    pub response_code: u16,
    pub truncated: bool,
    pub is_response: bool,
    pub recursion_desired: bool,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
    pub client_subnet: Option<ClientSubnet>,
}

impl DnsMessage {
    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    pub fn section(&self, section: Section) -> &[ResourceRecord] {
        match section {
            Section::Answer => &self.answers,
            Section::Authority => &self.authorities,
            Section::Additional => &self.additionals,
        }
    }

    /// All records in answer, authority, additional order, tagged with their section.
    pub fn records(&self) -> impl Iterator<Item = (Section, &ResourceRecord)> {
        Section::ALL
            .into_iter()
            .flat_map(move |section| self.section(section).iter().map(move |rr| (section, rr)))
    }

    pub fn has_data_records(&self) -> bool {
        self.records().any(|(_, rr)| !rr.is_opt())
    }
}
