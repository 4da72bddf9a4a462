use ferrous_pdns_application::ports::OutputSink;
use ferrous_pdns_domain::{DnsSchema, DomainError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingSink {
    rows: Mutex<Vec<DnsSchema>>,
    setups: AtomicUsize,
    teardowns: AtomicUsize,
    fail_emit: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_emit: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<DnsSchema> {
        self.rows.lock().unwrap().clone()
    }

    pub fn setups(&self) -> usize {
        self.setups.load(Ordering::SeqCst)
    }

    pub fn teardowns(&self) -> usize {
        self.teardowns.load(Ordering::SeqCst)
    }
}

impl OutputSink for RecordingSink {
    fn setup(&self) -> Result<(), DomainError> {
        self.setups.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn emit(&self, row: &DnsSchema) -> Result<(), DomainError> {
        if self.fail_emit {
            return Err(DomainError::sink("recording", "disk full"));
        }
        self.rows.lock().unwrap().push(row.clone());
        Ok(())
    }

    fn teardown(&self) -> Result<(), DomainError> {
        self.teardowns.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
