use crate::timestamp::CaptureTimestamp;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Network layer of a decoded packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkLayer {
    Ipv4 {
        source: Ipv4Addr,
        destination: Ipv4Addr,
    },
    Ipv6 {
        source: Ipv6Addr,
        destination: Ipv6Addr,
    },
    /// A network layer the reader recognised but this pipeline does not handle.
    Other { kind: String },
}

impl NetworkLayer {
    pub fn kind(&self) -> &str {
        match self {
            NetworkLayer::Ipv4 { .. } => "IPv4",
            NetworkLayer::Ipv6 { .. } => "IPv6",
            NetworkLayer::Other { kind } => kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    Tcp,
    Udp,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Tcp => f.write_str("TCP"),
            TransportKind::Udp => f.write_str("UDP"),
        }
    }
}

/// Transport layer of a decoded packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportLayer {
    Tcp {
        source_port: u16,
        destination_port: u16,
        payload: Vec<u8>,
    },
    Udp {
        source_port: u16,
        destination_port: u16,
        payload: Vec<u8>,
    },
    Other { kind: String },
}

impl TransportLayer {
    pub fn kind(&self) -> &str {
        match self {
            TransportLayer::Tcp { .. } => "TCP",
            TransportLayer::Udp { .. } => "UDP",
            TransportLayer::Other { kind } => kind,
        }
    }
}

/// A packet as handed over by the capture reader: already split into layers,
/// with the full captured bytes and the capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPacket {
    pub timestamp: CaptureTimestamp,
    pub data: Vec<u8>,
    pub network: Option<NetworkLayer>,
    pub transport: Option<TransportLayer>,
}

impl DecodedPacket {
    pub fn new(timestamp: CaptureTimestamp, data: Vec<u8>) -> Self {
        Self {
            timestamp,
            data,
            network: None,
            transport: None,
        }
    }

    pub fn with_network(mut self, network: NetworkLayer) -> Self {
        self.network = Some(network);
        self
    }

    pub fn with_transport(mut self, transport: TransportLayer) -> Self {
        self.transport = Some(transport);
        self
    }
}
