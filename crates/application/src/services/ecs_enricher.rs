use ferrous_pdns_domain::{DnsMessage, DnsSchema};

/// Copies EDNS Client Subnet data from a decoded message into a row.
pub struct EcsEnricher;

impl EcsEnricher {
    /// Returns whether the message carried a client subnet option.
    pub fn apply(schema: &mut DnsSchema, message: &DnsMessage) -> bool {
        let Some(subnet) = message.client_subnet else {
            return false;
        };

        schema.ecs_client = Some(subnet.address.to_string());
        schema.ecs_source_prefix = Some(subnet.source_prefix);
        schema.ecs_scope_prefix = Some(subnet.scope_prefix);
        true
    }
}
