pub mod frame_decoder;
pub mod pcap_reader;

pub use frame_decoder::EthernetFrameDecoder;
pub use pcap_reader::PcapFileReader;
