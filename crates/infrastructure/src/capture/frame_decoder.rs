use etherparse::{NetSlice, SlicedPacket, TransportSlice};
use ferrous_pdns_domain::{CaptureTimestamp, DecodedPacket, NetworkLayer, TransportLayer};
use tracing::trace;

/// Splits a raw Ethernet II frame into the layers the packet parser needs.
///
/// Frames etherparse cannot slice still produce a packet, just one without
/// layers, so the parser can reject it with the usual classification error.
pub struct EthernetFrameDecoder;

impl EthernetFrameDecoder {
    pub fn decode(timestamp: CaptureTimestamp, frame: &[u8]) -> DecodedPacket {
        let packet = DecodedPacket::new(timestamp, frame.to_vec());

        let sliced = match SlicedPacket::from_ethernet(frame) {
            Ok(sliced) => sliced,
            Err(e) => {
                trace!(error = %e, len = frame.len(), "Frame could not be sliced");
                return packet;
            }
        };

        let network = match &sliced.net {
            Some(NetSlice::Ipv4(v4)) => Some(NetworkLayer::Ipv4 {
                source: v4.header().source_addr(),
                destination: v4.header().destination_addr(),
            }),
            Some(NetSlice::Ipv6(v6)) => Some(NetworkLayer::Ipv6 {
                source: v6.header().source_addr(),
                destination: v6.header().destination_addr(),
            }),
            Some(_) => Some(NetworkLayer::Other {
                kind: "arp".to_string(),
            }),
            None => None,
        };

        let transport = match &sliced.transport {
            Some(TransportSlice::Udp(udp)) => Some(TransportLayer::Udp {
                source_port: udp.source_port(),
                destination_port: udp.destination_port(),
                payload: udp.payload().to_vec(),
            }),
            Some(TransportSlice::Tcp(tcp)) => Some(TransportLayer::Tcp {
                source_port: tcp.source_port(),
                destination_port: tcp.destination_port(),
                payload: tcp.payload().to_vec(),
            }),
            Some(TransportSlice::Icmpv4(_)) => Some(TransportLayer::Other {
                kind: "icmpv4".to_string(),
            }),
            Some(TransportSlice::Icmpv6(_)) => Some(TransportLayer::Other {
                kind: "icmpv6".to_string(),
            }),
            None => None,
        };

        let packet = match network {
            Some(network) => packet.with_network(network),
            None => packet,
        };
        match transport {
            Some(transport) => packet.with_transport(transport),
            None => packet,
        }
    }
}
