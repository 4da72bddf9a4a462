use crate::ports::DnsCodec;
use crate::services::{Fingerprint, LayerClassifier};
use ferrous_pdns_domain::{DecodedPacket, DnsMessage, DnsSchema, DomainError, TransportKind};
use std::sync::Arc;
use tracing::warn;

/// Result of parsing one packet. Owned by the caller; nothing is retained.
#[derive(Debug, Clone)]
pub struct ParsedPacket {
    /// Base row: addressing, transport, fingerprint and DNS header fields.
    pub schema: DnsSchema,
    pub message: DnsMessage,
    /// Raw transport payload the message was decoded from.
    pub payload: Vec<u8>,
}

pub struct ParsePacketUseCase {
    codec: Arc<dyn DnsCodec>,
}

impl ParsePacketUseCase {
    pub fn new(codec: Arc<dyn DnsCodec>) -> Self {
        Self { codec }
    }

    pub fn execute(&self, packet: &DecodedPacket) -> Result<ParsedPacket, DomainError> {
        let classified = LayerClassifier::classify(packet)?;
        let message = self.codec.decode(classified.payload)?;

        let fingerprint = match classified.transport {
            TransportKind::Tcp => Fingerprint::of_payload(classified.payload),
            TransportKind::Udp => match Fingerprint::salted(&packet.timestamp, &packet.data) {
                Ok(fingerprint) => fingerprint,
                Err(e) => {
                    warn!(
                        error = %e,
                        timestamp = %packet.timestamp,
                        src = %classified.source_address,
                        dst = %classified.destination_address,
                        "Could not marshal capture timestamp, leaving fingerprint empty"
                    );
                    String::new()
                }
            },
        };

        let (query_name, query_type) = message
            .first_question()
            .map(|q| (q.name.clone(), q.query_type))
            .unwrap_or_default();

        let schema = DnsSchema {
            timestamp: packet.timestamp.epoch_seconds(),
            fingerprint,
            is_udp: classified.transport == TransportKind::Udp,
            ip_version: classified.ip_version,
            source_address: classified.source_address,
            source_port: classified.source_port,
            destination_address: classified.destination_address,
            destination_port: classified.destination_port,
            message_id: message.id,
            response_code: message.response_code,
            truncated: message.truncated,
            is_response: message.is_response,
            recursion_desired: message.recursion_desired,
            query_name,
            query_type,
            ..Default::default()
        };

        Ok(ParsedPacket {
            schema,
            message,
            payload: classified.payload.to_vec(),
        })
    }
}
