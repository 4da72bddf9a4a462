#![allow(dead_code)]

mod fixtures;
mod mock_codec;
mod recording_sink;

pub use fixtures::*;
pub use mock_codec::MockDnsCodec;
pub use recording_sink::RecordingSink;
