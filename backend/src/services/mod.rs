//! Business logic services for the Noor gateway

pub mod chat;
pub mod insight;
pub mod prayer_times;

pub use chat::ChatService;
pub use insight::InsightService;
pub use prayer_times::{PrayerTimesParams, PrayerTimesService};
