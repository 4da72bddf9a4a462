use super::map_record::SchemaMapper;
use super::parse_packet::ParsePacketUseCase;
use crate::ports::DnsCodec;
use crate::services::{EcsEnricher, FormatRegistry, PipelineStats};
use ferrous_pdns_domain::{DecodedPacket, DomainError, QuestionRows};
use std::sync::Arc;
use tracing::debug;

/// Full per-packet pipeline: parse, tag, enrich, flatten every record and
/// dispatch each row to the configured formats.
pub struct ProcessPacketUseCase {
    parser: ParsePacketUseCase,
    mapper: SchemaMapper,
    formats: Vec<String>,
    source: String,
    sensor: String,
    question_rows: QuestionRows,
    ecs_enrichment: bool,
    stats: PipelineStats,
}

impl ProcessPacketUseCase {
    pub fn new(codec: Arc<dyn DnsCodec>, registry: Arc<FormatRegistry>, formats: Vec<String>) -> Self {
        Self {
            parser: ParsePacketUseCase::new(codec),
            mapper: SchemaMapper::new(registry),
            formats,
            source: String::new(),
            sensor: String::new(),
            question_rows: QuestionRows::default(),
            ecs_enrichment: true,
            stats: PipelineStats::new(),
        }
    }

    pub fn with_provenance(mut self, source: impl Into<String>, sensor: impl Into<String>) -> Self {
        self.source = source.into();
        self.sensor = sensor.into();
        self
    }

    pub fn with_question_rows(mut self, policy: QuestionRows) -> Self {
        self.question_rows = policy;
        self
    }

    pub fn with_ecs_enrichment(mut self, enabled: bool) -> Self {
        self.ecs_enrichment = enabled;
        self
    }

    pub fn with_stats(mut self, stats: PipelineStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Fails with `UnregisteredFormat` for the first configured format that
    /// has no emit hook. Call once before feeding packets.
    pub fn verify_formats(&self) -> Result<(), DomainError> {
        match self
            .formats
            .iter()
            .find(|name| !self.mapper.registry().is_usable(name))
        {
            Some(name) => Err(DomainError::UnregisteredFormat(name.clone())),
            None => Ok(()),
        }
    }

    /// Processes one packet and returns the number of rows emitted.
    pub fn execute(&self, packet: &DecodedPacket) -> Result<usize, DomainError> {
        self.stats.record_packet();

        let parsed = match self.parser.execute(packet) {
            Ok(parsed) => parsed,
            Err(e) => {
                if e.is_packet_error() {
                    self.stats.record_rejected();
                    debug!(error = %e, timestamp = %packet.timestamp, "Packet rejected");
                }
                return Err(e);
            }
        };

        if parsed.schema.fingerprint.is_empty() {
            self.stats.record_degraded_fingerprint();
        }

        let mut base = parsed.schema;
        base.source.clone_from(&self.source);
        base.sensor.clone_from(&self.sensor);
        if self.ecs_enrichment {
            EcsEnricher::apply(&mut base, &parsed.message);
        }

        let mut rows = 0usize;

        let emit_question = match self.question_rows {
            QuestionRows::Always => true,
            QuestionRows::Auto => !parsed.message.has_data_records(),
        };
        if emit_question {
            self.mapper.map_all(&base, None, self.formats.as_slice())?;
            rows += 1;
        }

        for (section, rr) in parsed.message.records() {
            match self.mapper.map_all(&base, Some((rr, section)), self.formats.as_slice())? {
                Some(_) => rows += 1,
                None => self.stats.record_suppressed(),
            }
        }

        self.stats.record_rows(rows as u64);
        debug!(
            rows,
            id = base.message_id,
            qname = %base.query_name,
            "Packet processed"
        );
        Ok(rows)
    }
}
