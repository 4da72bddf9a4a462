mod dns_codec;
mod output_sink;

pub use dns_codec::DnsCodec;
pub use output_sink::OutputSink;
