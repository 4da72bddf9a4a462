pub mod map_record;
pub mod parse_packet;
pub mod process_packet;

pub use map_record::SchemaMapper;
pub use parse_packet::{ParsePacketUseCase, ParsedPacket};
pub use process_packet::ProcessPacketUseCase;
