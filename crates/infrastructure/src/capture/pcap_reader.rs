use super::frame_decoder::EthernetFrameDecoder;
use ferrous_pdns_domain::{CaptureTimestamp, DecodedPacket, DomainError};
use pcap_file::pcap::PcapReader;
use pcap_file::DataLink;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Iterates the frames of a legacy pcap capture as decoded packets.
///
/// Record timestamps are taken as UTC. Only Ethernet captures are accepted.
pub struct PcapFileReader<R: Read> {
    reader: PcapReader<R>,
    frames: u64,
}

impl PcapFileReader<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Opened capture file");
        Self::new(file)
    }
}

impl<R: Read> PcapFileReader<R> {
    pub fn new(source: R) -> Result<Self, DomainError> {
        let reader = PcapReader::new(source)
            .map_err(|e| DomainError::IoError(format!("Invalid pcap header: {}", e)))?;

        let datalink = reader.header().datalink;
        if datalink != DataLink::ETHERNET {
            return Err(DomainError::IoError(format!(
                "Unsupported pcap link type: {:?}",
                datalink
            )));
        }

        Ok(Self { reader, frames: 0 })
    }

    /// Frames read so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<R: Read> Iterator for PcapFileReader<R> {
    type Item = Result<DecodedPacket, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        let packet = match self.reader.next_packet()? {
            Ok(packet) => packet,
            Err(e) => return Some(Err(DomainError::IoError(format!("Failed to read frame: {}", e)))),
        };
        self.frames += 1;

        let secs = packet.timestamp.as_secs() as i64;
        let nanos = packet.timestamp.subsec_nanos();
        let timestamp = match CaptureTimestamp::from_unix(secs, nanos) {
            Some(timestamp) => timestamp,
            None => {
                warn!(frame = self.frames, secs, "Frame timestamp out of range, using current time");
                CaptureTimestamp::now()
            }
        };

        Some(Ok(EthernetFrameDecoder::decode(timestamp, &packet.data)))
    }
}
