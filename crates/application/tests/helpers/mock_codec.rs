use ferrous_pdns_application::ports::DnsCodec;
use ferrous_pdns_domain::{DnsMessage, DomainError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns a canned message for every payload, or a decode failure when
/// the payload is empty or `fail` is set.
pub struct MockDnsCodec {
    message: DnsMessage,
    fail: bool,
    calls: AtomicUsize,
    last_payload: Mutex<Vec<u8>>,
}

impl MockDnsCodec {
    pub fn returning(message: DnsMessage) -> Self {
        Self {
            message,
            fail: false,
            calls: AtomicUsize::new(0),
            last_payload: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::returning(DnsMessage::default())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Vec<u8> {
        self.last_payload.lock().unwrap().clone()
    }
}

impl DnsCodec for MockDnsCodec {
    fn decode(&self, payload: &[u8]) -> Result<DnsMessage, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = payload.to_vec();

        if self.fail || payload.is_empty() {
            return Err(DomainError::DnsDecode("malformed payload".to_string()));
        }
        Ok(self.message.clone())
    }
}
