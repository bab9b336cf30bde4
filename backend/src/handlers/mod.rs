//! HTTP handlers

pub mod chat;
pub mod health;
pub mod insight;
pub mod prayer_times;

pub use chat::ai_chat;
pub use health::health_check;
pub use insight::generate_insight;
pub use prayer_times::get_prayer_times;
