//! Apogee Core
//!
//! Platform-agnostic data layer for the Apogee 4-H rocketry club site.
//! This crate holds the record types, field normalization, CSV parsing,
//! season aggregation, and HTML fragment rendering; the web crate owns
//! fetching and interactivity.

pub mod csv;
pub mod model;
pub mod normalize;
pub mod stats;
pub mod view;
pub mod visibility;

// Re-export commonly used types
pub use model::{
    BuildData, DamageFlags, DayFeedback, DayWeather, LaunchAttempt, LaunchDay, LaunchEvents,
    LaunchWeather, ParachuteRecovery, PlannedLaunchEntry, RecoveryOutcome, RocketCatalog,
    RocketProfile, SeasonLog, Trajectory,
};
pub use normalize::{RawRecord, first_present};
pub use stats::SeasonStats;
pub use visibility::{MASTER_CODE, Visibility, VisibilityController};
