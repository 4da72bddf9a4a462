//! DNS wire codec backed by `hickory-proto`.
//!
//! hickory lifts the EDNS OPT pseudo-record out of the additional section
//! while parsing. The codec puts it back as a type 41 record at the end of
//! the additional section, so downstream consumers see the message the way
//! it was on the wire.

use ferrous_pdns_application::ports::DnsCodec;
use ferrous_pdns_domain::dns_message::OPT_RECORD_TYPE;
use ferrous_pdns_domain::{
    ClientSubnet, DnsMessage, DomainError, Question, RecordHeader, ResourceRecord,
};
use hickory_proto::op::{Edns, Message, MessageType};
use hickory_proto::rr::rdata::opt::{EdnsCode, EdnsOption};
use hickory_proto::rr::Record;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryDnsCodec;

impl HickoryDnsCodec {
    pub fn new() -> Self {
        Self
    }

    fn convert_record(record: &Record) -> ResourceRecord {
        let header = RecordHeader {
            name: record.name().to_string(),
            record_type: u16::from(record.record_type()),
            class: u16::from(record.dns_class()),
            ttl: record.ttl(),
        };
        let header_text = format!(
            "{}\t{}\t{}\t{}\t",
            header.name,
            header.ttl,
            record.dns_class(),
            record.record_type()
        );
        let text = format!("{}{}", header_text, record.data());

        ResourceRecord {
            header,
            header_text,
            text,
        }
    }

    /// Rebuilds the OPT pseudo-record: the class carries the UDP payload
    /// size and the TTL packs the extended rcode and version.
    fn opt_record(edns: &Edns) -> ResourceRecord {
        let ttl = (u32::from(edns.rcode_high()) << 24) | (u32::from(edns.version()) << 16);
        let header = RecordHeader {
            name: ".".to_string(),
            record_type: OPT_RECORD_TYPE,
            class: edns.max_payload(),
            ttl,
        };
        let header_text = format!("{}\t{}\tCLASS{}\tOPT\t", header.name, ttl, header.class);

        ResourceRecord {
            header,
            text: header_text.clone(),
            header_text,
        }
    }

    fn client_subnet(edns: &Edns) -> Option<ClientSubnet> {
        match edns.options().get(EdnsCode::Subnet) {
            Some(EdnsOption::Subnet(subnet)) => Some(ClientSubnet {
                address: subnet.addr(),
                source_prefix: subnet.source_prefix(),
                scope_prefix: subnet.scope_prefix(),
            }),
            _ => None,
        }
    }
}

impl DnsCodec for HickoryDnsCodec {
    fn decode(&self, payload: &[u8]) -> Result<DnsMessage, DomainError> {
        let message = Message::from_vec(payload).map_err(|e| DomainError::DnsDecode(e.to_string()))?;

        let questions = message
            .queries()
            .iter()
            .map(|q| Question {
                name: q.name().to_string(),
                query_type: u16::from(q.query_type()),
            })
            .collect();

        let answers = message.answers().iter().map(Self::convert_record).collect();
        let authorities = message
            .name_servers()
            .iter()
            .map(Self::convert_record)
            .collect();
        let mut additionals: Vec<ResourceRecord> = message
            .additionals()
            .iter()
            .map(Self::convert_record)
            .collect();

        let mut client_subnet = None;
        if let Some(edns) = message.extensions().as_ref() {
            additionals.push(Self::opt_record(edns));
            client_subnet = Self::client_subnet(edns);
        }

        let decoded = DnsMessage {
            id: message.id(),
            response_code: u16::from(message.response_code()),
            truncated: message.truncated(),
            is_response: message.message_type() == MessageType::Response,
            recursion_desired: message.recursion_desired(),
            questions,
            answers,
            authorities,
            additionals,
            client_subnet,
        };

        debug!(
            id = decoded.id,
            answers = decoded.answers.len(),
            authorities = decoded.authorities.len(),
            additionals = decoded.additionals.len(),
            ecs = decoded.client_subnet.is_some(),
            "DNS message decoded"
        );

        Ok(decoded)
    }
}
