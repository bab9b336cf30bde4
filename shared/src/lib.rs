//! Shared types and logic for the Noor prayer & insight gateway
//!
//! This crate contains the pure parts of the system, shared between the
//! backend server and the browser/mobile clients (via WASM): prayer schedule
//! normalization, next-prayer selection, insight decoding and the fixed
//! assistant prompts.

pub mod error;
pub mod models;
pub mod prompts;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use prompts::*;
pub use types::*;
pub use validation::*;
