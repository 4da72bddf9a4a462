use etherparse::PacketBuilder;

const SRC_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];
const DST_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x02];

pub fn udp_v4_frame(payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2(SRC_MAC, DST_MAC)
        .ipv4([10, 0, 0, 1], [8, 8, 8, 8], 64)
        .udp(53213, 53);
    let mut frame = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut frame, payload).unwrap();
    frame
}

pub fn tcp_v4_frame(payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2(SRC_MAC, DST_MAC)
        .ipv4([8, 8, 8, 8], [10, 0, 0, 1], 64)
        .tcp(53, 40000, 1, 65535);
    let mut frame = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut frame, payload).unwrap();
    frame
}

pub fn udp_v6_frame(payload: &[u8]) -> Vec<u8> {
    let source = "2001:db8::1".parse::<std::net::Ipv6Addr>().unwrap().octets();
    let destination = "2001:4860:4860::8888"
        .parse::<std::net::Ipv6Addr>()
        .unwrap()
        .octets();
    let builder = PacketBuilder::ethernet2(SRC_MAC, DST_MAC)
        .ipv6(source, destination, 64)
        .udp(53213, 53);
    let mut frame = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut frame, payload).unwrap();
    frame
}

pub fn icmp_v4_frame() -> Vec<u8> {
    let builder = PacketBuilder::ethernet2(SRC_MAC, DST_MAC)
        .ipv4([10, 0, 0, 1], [8, 8, 8, 8], 64)
        .icmpv4_echo_request(7, 1);
    let payload = [0u8; 8];
    let mut frame = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut frame, &payload).unwrap();
    frame
}

/// Ethernet II header carrying an ARP ethertype followed by junk.
pub fn arp_frame() -> Vec<u8> {
    let mut frame = Vec::new();
    frame.extend_from_slice(&DST_MAC);
    frame.extend_from_slice(&SRC_MAC);
    frame.extend_from_slice(&[0x08, 0x06]);
    frame.extend_from_slice(&[0u8; 28]);
    frame
}
