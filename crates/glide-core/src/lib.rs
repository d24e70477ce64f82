//! Navigation geometry and task scoring core for a glide computer.
//!
//! Turns an ordered set of waypoints and pilot-chosen task parameters into
//! observation-sector boundaries, assigned-area targets and glide polar
//! coefficients, recomputed as the task is edited. File parsing,
//! persistence and rendering belong to the surrounding application; this
//! crate only computes.

pub mod geo;
pub mod models;
pub mod polar;
pub mod reference;
pub mod refresh;
pub mod sector;
pub mod settings;
pub mod target;

pub use models::{
    ArcBounds, AreaShape, GeoPoint, TargetOffset, Task, TaskLeg, Waypoint, WaypointStore,
};
pub use polar::{GlidePolar, PolarError, PolarSample, PolarWeights};
pub use reference::{
    reference_point, ActiveState, ActiveStateSource, ReferenceKind, SearchMaxSource,
};
pub use refresh::refresh_task;
pub use settings::TaskSettings;
