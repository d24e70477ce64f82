//! Core data model for the task computer.

use serde::{Deserialize, Serialize};

/// A single geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A named turnpoint as stored in the waypoint repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub location: GeoPoint,
}

/// Read-only lookup into the externally owned waypoint table.
pub trait WaypointStore {
    /// Location of the waypoint at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range. Task legs are expected to be
    /// checked against the store before geometry runs; see [`Task::validate`].
    fn location(&self, index: usize) -> GeoPoint;
}

impl WaypointStore for [Waypoint] {
    fn location(&self, index: usize) -> GeoPoint {
        self[index].location
    }
}

impl WaypointStore for Vec<Waypoint> {
    fn location(&self, index: usize) -> GeoPoint {
        self[index].location
    }
}

/// Shape of an assigned-area turnpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AreaShape {
    /// Pie sector bounded by two radials.
    Sector {
        radius_m: f64,
        start_radial_deg: f64,
        finish_radial_deg: f64,
    },
    /// Full circle around the waypoint.
    Circle { radius_m: f64 },
}

/// Pilot-adjustable target placement inside an assigned area.
///
/// `radius` is a signed fraction in [-1, 1] along the area's aim bearing.
/// `radial` is kept in [0, 1] but does not steer the bearing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetOffset {
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub radial: f64,
}

/// Arc endpoints bounding an assigned sector area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcBounds {
    pub start: GeoPoint,
    pub finish: GeoPoint,
}

/// One leg of an ordered task.
///
/// The waypoint index, area shape and target offset are pilot-edited input;
/// every other field is derived geometry, recomputed by
/// [`refresh_task`](crate::refresh::refresh_task) and never hand-edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskLeg {
    /// Index into the waypoint store
    pub waypoint: usize,
    pub area: AreaShape,
    #[serde(default)]
    pub target_offset: TargetOffset,

    #[serde(default)]
    pub leg_distance_m: f64,
    #[serde(default)]
    pub inbound_deg: f64,
    #[serde(default)]
    pub outbound_deg: f64,
    /// Bearing bisecting the reciprocal inbound and the outbound course
    #[serde(default)]
    pub bisector_deg: f64,
    /// This leg's share of the total task distance
    #[serde(default)]
    pub length_percent: f64,
    #[serde(default)]
    pub sector_start: GeoPoint,
    #[serde(default)]
    pub sector_end: GeoPoint,
    /// Assigned-area aim point
    #[serde(default)]
    pub target: GeoPoint,
    /// Arc endpoints of a sector area, once computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_arc: Option<ArcBounds>,
}

impl TaskLeg {
    /// New leg with derived geometry zeroed until the next refresh.
    pub fn new(waypoint: usize, area: AreaShape) -> Self {
        Self {
            waypoint,
            area,
            target_offset: TargetOffset::default(),
            leg_distance_m: 0.0,
            inbound_deg: 0.0,
            outbound_deg: 0.0,
            bisector_deg: 0.0,
            length_percent: 0.0,
            sector_start: GeoPoint::default(),
            sector_end: GeoPoint::default(),
            target: GeoPoint::default(),
            area_arc: None,
        }
    }
}

/// An ordered competition task.
///
/// Legs form a contiguous sequence by construction; there are no unused
/// slots to skip over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    pub legs: Vec<TaskLeg>,
    /// Sum of the leg distances, updated on refresh
    #[serde(default)]
    pub total_distance_m: f64,
}

impl Task {
    pub fn new(legs: Vec<TaskLeg>) -> Self {
        Self {
            legs,
            total_distance_m: 0.0,
        }
    }

    /// Validate leg references against the waypoint store size.
    /// Returns a list of problems (empty = valid).
    pub fn validate(&self, waypoint_count: usize) -> Vec<String> {
        let mut errors = Vec::new();

        for (i, leg) in self.legs.iter().enumerate() {
            if leg.waypoint >= waypoint_count {
                errors.push(format!(
                    "Leg {} references waypoint {} but the store holds {}",
                    i, leg.waypoint, waypoint_count
                ));
            }

            let radius_m = match leg.area {
                AreaShape::Sector { radius_m, .. } => radius_m,
                AreaShape::Circle { radius_m } => radius_m,
            };
            if radius_m < 0.0 {
                errors.push(format!("Leg {} has a negative area radius", i));
            }
        }

        errors
    }

    /// Check if the task is consistent with the waypoint store.
    pub fn is_valid(&self, waypoint_count: usize) -> bool {
        self.validate(waypoint_count).is_empty()
    }
}
