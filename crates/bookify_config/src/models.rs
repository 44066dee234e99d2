// --- File: crates/bookify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Scheduling Config ---
// Working-hour defaults and slot granularity are named configuration values,
// never derived at runtime.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SchedulingConfig {
    /// Default start of the bookable day, "HH:MM" 24-hour.
    #[serde(default = "default_work_start_time")]
    pub work_start_time: String,
    /// Default end of the bookable day, "HH:MM" 24-hour.
    #[serde(default = "default_work_end_time")]
    pub work_end_time: String,
    /// Granularity of generated slots, in minutes.
    #[serde(default = "default_slot_duration_minutes")]
    pub slot_duration_minutes: u32,
}

pub const DEFAULT_WORK_START_TIME: &str = "09:00";
pub const DEFAULT_WORK_END_TIME: &str = "17:00";
pub const DEFAULT_SLOT_DURATION_MINUTES: u32 = 30;

fn default_work_start_time() -> String {
    DEFAULT_WORK_START_TIME.to_string()
}

fn default_work_end_time() -> String {
    DEFAULT_WORK_END_TIME.to_string()
}

fn default_slot_duration_minutes() -> u32 {
    DEFAULT_SLOT_DURATION_MINUTES
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        SchedulingConfig {
            work_start_time: default_work_start_time(),
            work_end_time: default_work_end_time(),
            slot_duration_minutes: default_slot_duration_minutes(),
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // Scheduling settings default to the standard working day when the
    // config file omits them entirely.
    #[serde(default)]
    pub scheduling: SchedulingConfig,
}
