use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const QUERY_ID: u16 = 0x4d2;

fn serialize(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

fn name(value: &str) -> Name {
    Name::from_str(value).unwrap()
}

fn query(domain: &str, record_type: RecordType) -> Query {
    let mut query = Query::new();
    query.set_name(name(domain));
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);
    query
}

pub fn a_query(domain: &str) -> Vec<u8> {
    let mut message = Message::new(QUERY_ID, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query(domain, RecordType::A));
    serialize(&message)
}

pub fn single_answer_response() -> Vec<u8> {
    let mut message = Message::new(QUERY_ID, MessageType::Response, OpCode::Query);
    message.add_query(query("example.com.", RecordType::A));
    message.add_answer(Record::from_rdata(
        name("example.com."),
        300,
        RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
    ));
    serialize(&message)
}

/// Response for example.com with one answer, one authority and one glue
/// record in the additional section.
pub fn example_response() -> Vec<u8> {
    let mut message = Message::new(QUERY_ID, MessageType::Response, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query("example.com.", RecordType::A));
    message.add_answer(Record::from_rdata(
        name("example.com."),
        300,
        RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
    ));
    message.add_name_server(Record::from_rdata(
        name("example.com."),
        3600,
        RData::NS(NS(name("a.iana-servers.net."))),
    ));
    message.add_additional(Record::from_rdata(
        name("a.iana-servers.net."),
        3600,
        RData::A(A(Ipv4Addr::new(199, 43, 135, 53))),
    ));
    serialize(&message)
}

/// Appends an OPT record (payload 1232, version 0) carrying an EDNS Client
/// Subnet option for 192.0.2.0/24 and bumps ARCOUNT.
pub fn with_client_subnet(mut wire: Vec<u8>) -> Vec<u8> {
    let arcount = u16::from_be_bytes([wire[10], wire[11]]) + 1;
    wire[10..12].copy_from_slice(&arcount.to_be_bytes());

    wire.push(0x00); // root name
    wire.extend_from_slice(&41u16.to_be_bytes()); // TYPE = OPT
    wire.extend_from_slice(&1232u16.to_be_bytes()); // CLASS = UDP payload size
    wire.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // ext rcode, version, flags
    wire.extend_from_slice(&11u16.to_be_bytes()); // RDLEN
    wire.extend_from_slice(&8u16.to_be_bytes()); // OPTION-CODE = ECS
    wire.extend_from_slice(&7u16.to_be_bytes()); // OPTION-LENGTH
    wire.extend_from_slice(&1u16.to_be_bytes()); // FAMILY = IPv4
    wire.push(24); // source prefix
    wire.push(0); // scope prefix
    wire.extend_from_slice(&[192, 0, 2]);
    wire
}
