//! Ferrous PDNS Domain Layer
pub mod config;
pub mod dns_message;
pub mod errors;
pub mod packet;
pub mod schema;
pub mod section;
pub mod timestamp;

pub use config::{CliOverrides, Config, ConfigError, QuestionRows};
pub use dns_message::{ClientSubnet, DnsMessage, Question, RecordHeader, ResourceRecord};
pub use errors::DomainError;
pub use packet::{DecodedPacket, NetworkLayer, TransportKind, TransportLayer};
pub use schema::DnsSchema;
pub use section::Section;
pub use timestamp::{CaptureTimestamp, TimestampError};
