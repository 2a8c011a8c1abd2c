//! Document representation and its wire codec.

pub mod decode;
pub mod document;
pub mod encode;

pub use decode::Decoder;
pub use document::{Document, Presence};
pub use encode::Encoder;
