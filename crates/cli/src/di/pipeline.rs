use ferrous_pdns_application::services::FormatRegistry;
use ferrous_pdns_application::use_cases::ProcessPacketUseCase;
use ferrous_pdns_domain::Config;
use ferrous_pdns_infrastructure::dns::HickoryDnsCodec;
use ferrous_pdns_infrastructure::output::register_builtin_formats;
use std::sync::Arc;
use tracing::info;

pub struct Pipeline {
    pub registry: Arc<FormatRegistry>,
    pub process_packet: ProcessPacketUseCase,
}

impl Pipeline {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let registry = Arc::new(
            register_builtin_formats(FormatRegistry::builder(), &config.output).build(),
        );

        let process_packet = ProcessPacketUseCase::new(
            Arc::new(HickoryDnsCodec::new()),
            Arc::clone(&registry),
            config.output.formats.clone(),
        )
        .with_provenance(config.capture.source.clone(), config.capture.sensor.clone())
        .with_question_rows(config.capture.question_rows)
        .with_ecs_enrichment(config.capture.ecs_enrichment);

        process_packet.verify_formats()?;

        info!(
            formats = ?process_packet.formats(),
            available = ?registry.formats(),
            "Output pipeline ready"
        );

        Ok(Self {
            registry,
            process_packet,
        })
    }
}
