//! Task refresh orchestration.
//!
//! Recomputes the derived geometry of a task after a structural edit: leg
//! lengths and bearings first, then length-weighted progress shares, then
//! sector and assigned-area geometry.

use crate::geo;
use crate::models::{Task, TargetOffset, WaypointStore};
use crate::sector;
use crate::settings::TaskSettings;
use crate::target;

/// Recompute every derived field of `task`.
///
/// Runs when the task is edited (waypoint inserted, removed or reordered,
/// or target offsets changed), not on every navigation tick; none of the
/// geometry depends on aircraft position.
pub fn refresh_task<W>(task: &mut Task, waypoints: &W, settings: &TaskSettings)
where
    W: WaypointStore + ?Sized,
{
    let mut total_m = 0.0;
    for i in 0..task.legs.len() {
        refresh_leg(task, i, waypoints);
        total_m += task.legs[i].leg_distance_m;
    }
    task.total_distance_m = total_m;

    if total_m > 0.0 {
        for leg in &mut task.legs {
            leg.length_percent = leg.leg_distance_m / total_m;
        }

        // The finish is never an assignable area.
        if let Some(last) = task.legs.last_mut() {
            last.target_offset = TargetOffset::default();
            last.target = waypoints.location(last.waypoint);
        }
    }

    sector::compute_sectors(task, waypoints, settings);
    target::compute_targets(task, waypoints, settings);
}

/// Recompute leg `i`'s length and inbound course, and push the outbound
/// course and bisector back onto its predecessor.
fn refresh_leg<W>(task: &mut Task, i: usize, waypoints: &W)
where
    W: WaypointStore + ?Sized,
{
    if i == 0 {
        task.legs[0].leg_distance_m = 0.0;
        task.legs[0].inbound_deg = 0.0;
        return;
    }

    let prev = waypoints.location(task.legs[i - 1].waypoint);
    let this = waypoints.location(task.legs[i].waypoint);

    task.legs[i].leg_distance_m = geo::distance_m(prev, this);
    task.legs[i].inbound_deg = geo::bearing_deg(prev, this);
    task.legs[i - 1].outbound_deg = task.legs[i].inbound_deg;
    task.legs[i - 1].bisector_deg =
        geo::bisector_deg(task.legs[i - 1].inbound_deg, task.legs[i - 1].outbound_deg);
}
