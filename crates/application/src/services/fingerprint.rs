use ferrous_pdns_domain::{CaptureTimestamp, TimestampError};
use sha2::{Digest, Sha256};

/// Content-correlation hashes, hex encoded SHA-256.
pub struct Fingerprint;

impl Fingerprint {
    /// Hash of the transport payload alone. Identical payloads always share
    /// a fingerprint, whenever and wherever they were captured.
    pub fn of_payload(payload: &[u8]) -> String {
        format!("{:x}", Sha256::digest(payload))
    }

    /// Hash of the binary capture timestamp followed by the full packet
    /// bytes, so repeated identical datagrams get distinct fingerprints.
    pub fn salted(timestamp: &CaptureTimestamp, packet: &[u8]) -> Result<String, TimestampError> {
        let salt = timestamp.to_binary()?;

        let mut hasher = Sha256::new();
        hasher.update(&salt);
        hasher.update(packet);
        Ok(format!("{:x}", hasher.finalize()))
    }
}
