use ferrous_pdns_domain::{
    CaptureTimestamp, ClientSubnet, DecodedPacket, DnsMessage, NetworkLayer, Question,
    RecordHeader, ResourceRecord, TransportLayer,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub const CAPTURE_SECS: i64 = 1_700_000_000;

pub fn capture_time() -> CaptureTimestamp {
    CaptureTimestamp::from_unix(CAPTURE_SECS, 250_000_000).unwrap()
}

/// Stand-in for the full captured frame: headers followed by the payload.
pub fn frame_bytes(payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0xEE; 42];
    data.extend_from_slice(payload);
    data
}

pub fn ipv4() -> NetworkLayer {
    NetworkLayer::Ipv4 {
        source: Ipv4Addr::new(10, 0, 0, 1),
        destination: Ipv4Addr::new(8, 8, 8, 8),
    }
}

pub fn ipv6() -> NetworkLayer {
    NetworkLayer::Ipv6 {
        source: "2001:db8::1".parse::<Ipv6Addr>().unwrap(),
        destination: "2001:4860:4860::8888".parse::<Ipv6Addr>().unwrap(),
    }
}

pub fn udp(payload: &[u8]) -> TransportLayer {
    TransportLayer::Udp {
        source_port: 53213,
        destination_port: 53,
        payload: payload.to_vec(),
    }
}

pub fn tcp(payload: &[u8]) -> TransportLayer {
    TransportLayer::Tcp {
        source_port: 53,
        destination_port: 40000,
        payload: payload.to_vec(),
    }
}

pub fn udp_packet(payload: &[u8]) -> DecodedPacket {
    DecodedPacket::new(capture_time(), frame_bytes(payload))
        .with_network(ipv4())
        .with_transport(udp(payload))
}

pub fn tcp_packet_at(timestamp: CaptureTimestamp, payload: &[u8]) -> DecodedPacket {
    DecodedPacket::new(timestamp, frame_bytes(payload))
        .with_network(ipv4())
        .with_transport(tcp(payload))
}

pub fn record(name: &str, record_type: u16, type_name: &str, ttl: u32, data: &str) -> ResourceRecord {
    let header_text = format!("{}\t{}\tIN\t{}\t", name, ttl, type_name);
    ResourceRecord {
        header: RecordHeader {
            name: name.to_string(),
            record_type,
            class: 1,
            ttl,
        },
        text: format!("{}{}", header_text, data),
        header_text,
    }
}

pub fn a_record(name: &str, ttl: u32, ip: &str) -> ResourceRecord {
    record(name, 1, "A", ttl, ip)
}

pub fn opt_record() -> ResourceRecord {
    ResourceRecord {
        header: RecordHeader {
            name: ".".to_string(),
            record_type: 41,
            class: 1232,
            ttl: 0,
        },
        header_text: ".\t0\tCLASS1232\tOPT\t".to_string(),
        text: ".\t0\tCLASS1232\tOPT\t".to_string(),
    }
}

pub fn query_message(name: &str, query_type: u16) -> DnsMessage {
    DnsMessage {
        id: 0x1234,
        recursion_desired: true,
        questions: vec![Question {
            name: name.to_string(),
            query_type,
        }],
        ..Default::default()
    }
}

pub fn response_message() -> DnsMessage {
    DnsMessage {
        is_response: true,
        answers: vec![a_record("example.com.", 300, "93.184.216.34")],
        authorities: vec![record("example.com.", 2, "NS", 3600, "a.iana-servers.net.")],
        additionals: vec![
            a_record("a.iana-servers.net.", 3600, "199.43.135.53"),
            opt_record(),
        ],
        ..query_message("example.com.", 1)
    }
}

pub fn client_subnet() -> ClientSubnet {
    ClientSubnet {
        address: IpAddr::V4(Ipv4Addr::new(192, 0, 2, 0)),
        source_prefix: 24,
        scope_prefix: 0,
    }
}
