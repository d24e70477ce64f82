//! Assigned-area target placement.

use crate::geo;
use crate::models::{ArcBounds, AreaShape, Task, TargetOffset, WaypointStore};
use crate::settings::TaskSettings;

/// Recompute the assigned-area aim point and sector arc of every leg.
///
/// Does nothing unless the task is scored as an AAT. The start leg's target
/// is pinned to its waypoint, and the final leg is skipped here; the
/// refresh pass pins it the same way. For the legs in between, the signed
/// radius offset maps onto a distance along the bisector: sectors span
/// [0, radius], circles allow the target on either side of center.
pub fn compute_targets<W>(task: &mut Task, waypoints: &W, settings: &TaskSettings)
where
    W: WaypointStore + ?Sized,
{
    if !settings.aat_enabled {
        return;
    }

    if let Some(first) = task.legs.first_mut() {
        first.target_offset = TargetOffset::default();
        first.target = waypoints.location(first.waypoint);
    }

    let count = task.legs.len();
    for leg in task.legs.iter_mut().take(count.saturating_sub(1)).skip(1) {
        // Offsets are normally kept in range by the editing UI; re-clamp
        // before any geometry sees them.
        leg.target_offset.radius = leg.target_offset.radius.clamp(-1.0, 1.0);
        leg.target_offset.radial = leg.target_offset.radial.clamp(0.0, 1.0);

        let target_range_m = match leg.area {
            AreaShape::Sector { radius_m, .. } => {
                (leg.target_offset.radius + 1.0) / 2.0 * radius_m
            }
            AreaShape::Circle { radius_m } => leg.target_offset.radius * radius_m,
        };

        // The radial offset does not steer the bearing; targets sit on the
        // leg bisector.
        let target_bearing = leg.bisector_deg;

        let location = waypoints.location(leg.waypoint);
        leg.target = geo::destination(location, target_bearing, target_range_m);

        leg.area_arc = match leg.area {
            AreaShape::Sector {
                radius_m,
                start_radial_deg,
                finish_radial_deg,
            } => Some(ArcBounds {
                start: geo::destination(location, start_radial_deg, radius_m),
                finish: geo::destination(location, finish_radial_deg, radius_m),
            }),
            AreaShape::Circle { .. } => None,
        };
    }
}
