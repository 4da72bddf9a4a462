use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown/missing network layer in packet")]
    MissingNetworkLayer,

    #[error("Unsupported network layer: {0}")]
    UnsupportedNetworkLayer(String),

    #[error("Unknown/missing transport layer in packet")]
    MissingTransportLayer,

    #[error("Unsupported transport layer: {0}")]
    UnsupportedTransportLayer(String),

    #[error("Could not decode DNS: {0}")]
    DnsDecode(String),

    #[error("No emit hook registered for output format '{0}'")]
    UnregisteredFormat(String),

    #[error("Output format '{format}' failed: {message}")]
    Sink { format: String, message: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// True for failures caused by the packet contents. Callers skip the
    /// packet and keep going; every other variant is a setup or sink fault.
    pub fn is_packet_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingNetworkLayer
                | DomainError::UnsupportedNetworkLayer(_)
                | DomainError::MissingTransportLayer
                | DomainError::UnsupportedTransportLayer(_)
                | DomainError::DnsDecode(_)
        )
    }

    pub fn sink(format: &str, message: impl ToString) -> Self {
        DomainError::Sink {
            format: format.to_string(),
            message: message.to_string(),
        }
    }
}
