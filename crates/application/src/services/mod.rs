pub mod ecs_enricher;
pub mod fingerprint;
pub mod format_registry;
pub mod layer_classifier;
pub mod pipeline_stats;

pub use ecs_enricher::EcsEnricher;
pub use fingerprint::Fingerprint;
pub use format_registry::{FormatRegistry, FormatRegistryBuilder};
pub use layer_classifier::{ClassifiedPacket, LayerClassifier};
pub use pipeline_stats::{PipelineStats, PipelineStatsSnapshot};
