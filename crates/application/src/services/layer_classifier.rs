use ferrous_pdns_domain::{DecodedPacket, DomainError, NetworkLayer, TransportKind, TransportLayer};

/// Addressing, porting and payload pulled out of a packet's layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPacket<'a> {
    pub ip_version: u8,
    pub source_address: String,
    pub destination_address: String,
    pub transport: TransportKind,
    pub source_port: u16,
    pub destination_port: u16,
    pub payload: &'a [u8],
}

pub struct LayerClassifier;

impl LayerClassifier {
    /// Accepts IPv4/IPv6 over TCP/UDP and rejects everything else. The
    /// network layer is checked before the transport layer.
    pub fn classify(packet: &DecodedPacket) -> Result<ClassifiedPacket<'_>, DomainError> {
        let (ip_version, source_address, destination_address) = match &packet.network {
            Some(NetworkLayer::Ipv4 {
                source,
                destination,
            }) => (4, source.to_string(), destination.to_string()),
            Some(NetworkLayer::Ipv6 {
                source,
                destination,
            }) => (6, source.to_string(), destination.to_string()),
            Some(NetworkLayer::Other { kind }) => {
                return Err(DomainError::UnsupportedNetworkLayer(kind.clone()))
            }
            None => return Err(DomainError::MissingNetworkLayer),
        };

        let (transport, source_port, destination_port, payload) = match &packet.transport {
            Some(TransportLayer::Tcp {
                source_port,
                destination_port,
                payload,
            }) => (TransportKind::Tcp, *source_port, *destination_port, payload),
            Some(TransportLayer::Udp {
                source_port,
                destination_port,
                payload,
            }) => (TransportKind::Udp, *source_port, *destination_port, payload),
            Some(TransportLayer::Other { kind }) => {
                return Err(DomainError::UnsupportedTransportLayer(kind.clone()))
            }
            None => return Err(DomainError::MissingTransportLayer),
        };

        Ok(ClassifiedPacket {
            ip_version,
            source_address,
            destination_address,
            transport,
            source_port,
            destination_port,
            payload: payload.as_slice(),
        })
    }
}
