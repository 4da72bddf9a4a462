use ferrous_pdns_domain::{DnsSchema, DomainError};

/// A destination for flattened rows, registered under a format name.
///
/// `setup` runs once before the first row and `teardown` once after the
/// last; both default to doing nothing.
pub trait OutputSink: Send + Sync {
    fn setup(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn emit(&self, row: &DnsSchema) -> Result<(), DomainError>;

    fn teardown(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
