use ferrous_pdns_domain::{DnsMessage, DomainError};

/// Wire-format DNS decoder. Implementations must be read-only so a single
/// codec can serve concurrent parses.
pub trait DnsCodec: Send + Sync {
    /// Decode a raw DNS payload. Malformed input is `DomainError::DnsDecode`.
    fn decode(&self, payload: &[u8]) -> Result<DnsMessage, DomainError>;
}
