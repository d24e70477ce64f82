//! Task computation settings read from the configuration store.

use serde::{Deserialize, Serialize};

/// Configuration consumed by the task geometry core.
///
/// The persisted-settings collaborator reads these at startup and on
/// change; they are passed in by value on every recompute. The core keeps
/// no global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSettings {
    /// Radius of the start observation sector in meters
    pub start_radius_m: f64,
    /// Whether the task is scored as an assigned-area task
    pub aat_enabled: bool,
    /// Selected built-in glide polar
    pub polar_id: usize,
    /// Water ballast carried, in kg
    pub ballast_kg: f64,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            start_radius_m: 3000.0,
            aat_enabled: false,
            polar_id: 0,
            ballast_kg: 0.0,
        }
    }
}
