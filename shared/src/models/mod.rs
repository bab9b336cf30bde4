//! Domain models for the Noor gateway

mod chat;
mod insight;
mod prayer;

pub use chat::*;
pub use insight::*;
pub use prayer::*;
