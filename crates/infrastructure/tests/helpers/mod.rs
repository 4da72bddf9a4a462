#![allow(dead_code)]

mod frames;
mod messages;

pub use frames::*;
pub use messages::*;
