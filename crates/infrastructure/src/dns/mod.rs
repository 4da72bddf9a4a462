pub mod codec;

pub use codec::HickoryDnsCodec;
