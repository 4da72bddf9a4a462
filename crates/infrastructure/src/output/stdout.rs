use ferrous_pdns_application::ports::OutputSink;
use ferrous_pdns_domain::{DnsSchema, DomainError};
use std::io::{self, Write};

use super::STDOUT_FORMAT;

/// Writes each row as one JSON line on standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn emit(&self, row: &DnsSchema) -> Result<(), DomainError> {
        let line = serde_json::to_string(row).map_err(|e| DomainError::sink(STDOUT_FORMAT, e))?;
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line).map_err(|e| DomainError::sink(STDOUT_FORMAT, e))
    }

    fn teardown(&self) -> Result<(), DomainError> {
        io::stdout()
            .flush()
            .map_err(|e| DomainError::sink(STDOUT_FORMAT, e))
    }
}
