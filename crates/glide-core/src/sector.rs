//! Fixed observation-sector geometry for task legs.

use crate::geo;
use crate::models::{Task, WaypointStore};
use crate::settings::TaskSettings;

/// Radius of the turnpoint observation sector in meters.
// TODO: source this from TaskSettings the way the start radius is.
pub const TURNPOINT_SECTOR_RADIUS_M: f64 = 5000.0;

const START_HALF_ANGLE_DEG: f64 = 90.0;
const TURNPOINT_HALF_ANGLE_DEG: f64 = 45.0;

/// Recompute the two boundary rays of every leg's observation sector.
///
/// Only legs with a successor get a sector. The start leg opens a
/// half-plane around its outbound course; turnpoints open 90 degrees
/// around their bisector.
pub fn compute_sectors<W>(task: &mut Task, waypoints: &W, settings: &TaskSettings)
where
    W: WaypointStore + ?Sized,
{
    for i in 0..task.legs.len().saturating_sub(1) {
        let (half_angle, radius_m, sector_bearing) = if i == 0 {
            (
                START_HALF_ANGLE_DEG,
                settings.start_radius_m,
                task.legs[i].outbound_deg,
            )
        } else {
            (
                TURNPOINT_HALF_ANGLE_DEG,
                TURNPOINT_SECTOR_RADIUS_M,
                task.legs[i].bisector_deg,
            )
        };

        let location = waypoints.location(task.legs[i].waypoint);
        task.legs[i].sector_start =
            geo::destination(location, sector_bearing + half_angle, radius_m);
        task.legs[i].sector_end =
            geo::destination(location, sector_bearing - half_angle, radius_m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaShape, GeoPoint, TaskLeg, Waypoint};
    use crate::refresh::refresh_task;

    fn eastbound_waypoints() -> Vec<Waypoint> {
        ["START", "TP1", "FINISH"]
            .iter()
            .enumerate()
            .map(|(i, name)| Waypoint {
                name: name.to_string(),
                location: GeoPoint::new(0.0, i as f64),
            })
            .collect()
    }

    fn eastbound_task() -> Task {
        Task::new(
            (0..3)
                .map(|i| TaskLeg::new(i, AreaShape::Circle { radius_m: 10_000.0 }))
                .collect(),
        )
    }

    #[test]
    fn start_sector_opens_around_the_outbound_course() {
        let waypoints = eastbound_waypoints();
        let mut task = eastbound_task();
        let settings = TaskSettings::default();
        refresh_task(&mut task, &waypoints, &settings);

        let start = waypoints[0].location;
        let outbound = task.legs[0].outbound_deg;
        assert!((outbound - 90.0).abs() < 1e-9);

        // The boundary rays run a quarter turn either side of the course.
        assert_eq!(
            task.legs[0].sector_start,
            geo::destination(start, outbound + 90.0, settings.start_radius_m)
        );
        assert_eq!(
            task.legs[0].sector_end,
            geo::destination(start, outbound - 90.0, settings.start_radius_m)
        );
        assert!(task.legs[0].sector_start.lat < 0.0);
        assert!(task.legs[0].sector_end.lat > 0.0);

        let reach = geo::distance_m(start, task.legs[0].sector_start);
        assert!((reach - settings.start_radius_m).abs() < 1.0);
    }

    #[test]
    fn turnpoint_sector_opens_around_the_bisector() {
        let waypoints = eastbound_waypoints();
        let mut task = eastbound_task();
        refresh_task(&mut task, &waypoints, &TaskSettings::default());

        // Straight east-bound legs bisect due south at the turnpoint.
        let bisector = task.legs[1].bisector_deg;
        assert!((bisector - 180.0).abs() < 1e-9);

        let tp = waypoints[1].location;
        assert_eq!(
            task.legs[1].sector_start,
            geo::destination(tp, bisector + 45.0, TURNPOINT_SECTOR_RADIUS_M)
        );
        assert_eq!(
            task.legs[1].sector_end,
            geo::destination(tp, bisector - 45.0, TURNPOINT_SECTOR_RADIUS_M)
        );

        // Southwest and southeast of the turnpoint.
        assert!(task.legs[1].sector_start.lat < 0.0 && task.legs[1].sector_start.lon < 1.0);
        assert!(task.legs[1].sector_end.lat < 0.0 && task.legs[1].sector_end.lon > 1.0);

        let reach = geo::distance_m(tp, task.legs[1].sector_end);
        assert!((reach - TURNPOINT_SECTOR_RADIUS_M).abs() < 1.0);
    }

    #[test]
    fn final_leg_gets_no_sector() {
        let waypoints = eastbound_waypoints();
        let mut task = eastbound_task();
        refresh_task(&mut task, &waypoints, &TaskSettings::default());

        assert_eq!(task.legs[2].sector_start, GeoPoint::default());
        assert_eq!(task.legs[2].sector_end, GeoPoint::default());
    }
}
