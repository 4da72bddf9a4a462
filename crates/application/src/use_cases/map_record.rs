use crate::services::FormatRegistry;
use ferrous_pdns_domain::{DnsSchema, DomainError, ResourceRecord, Section};
use std::sync::Arc;

/// Flattens one resource record (or the bare question) into a row and
/// hands it to the registered output formats.
pub struct SchemaMapper {
    registry: Arc<FormatRegistry>,
}

impl SchemaMapper {
    pub fn new(registry: Arc<FormatRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Builds the row for `record` on top of a copy of `base`. With no
    /// record the row describes the question. OPT pseudo-records yield
    /// `None`.
    pub fn flatten(base: &DnsSchema, record: Option<(&ResourceRecord, Section)>) -> Option<DnsSchema> {
        let mut row = base.clone();

        let Some((rr, section)) = record else {
            row.is_answer = false;
            row.is_authority = false;
            row.is_additional = false;
            row.record_ttl = None;
            row.record_name = None;
            row.record_type = None;
            row.record_data = None;
            return Some(row);
        };

        if rr.is_opt() {
            return None;
        }

        row.record_ttl = Some(rr.header.ttl);
        row.record_name = Some(rr.header.name.clone());
        row.record_type = Some(rr.header.record_type);
        row.record_data = Some(rr.data_text().to_string());
        row.set_section(section);
        Some(row)
    }

    /// Flattens and emits to a single format. Returns the emitted row, or
    /// `None` when the record was suppressed.
    pub fn map(
        &self,
        base: &DnsSchema,
        record: Option<(&ResourceRecord, Section)>,
        format: &str,
    ) -> Result<Option<DnsSchema>, DomainError> {
        self.map_all(base, record, std::slice::from_ref(&format))
    }

    /// Flattens once and emits the row to every listed format in order.
    pub fn map_all<S: AsRef<str>>(
        &self,
        base: &DnsSchema,
        record: Option<(&ResourceRecord, Section)>,
        formats: &[S],
    ) -> Result<Option<DnsSchema>, DomainError> {
        let Some(row) = Self::flatten(base, record) else {
            return Ok(None);
        };

        for format in formats {
            self.registry.emit(format.as_ref(), &row)?;
        }
        Ok(Some(row))
    }
}
