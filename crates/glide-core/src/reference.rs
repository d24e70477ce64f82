//! Selection of the geographic reference point for task scoring.
//!
//! Every scored quantity needs a concrete point standing in for a task
//! leg: either the pilot's assigned-area target or the best-scoring point
//! the optimizer has found inside the area so far. Which one applies
//! depends on where the leg sits relative to the leg being flown.

use serde::{Deserialize, Serialize};

use crate::models::{GeoPoint, Task};

/// A task leg's relationship to the leg currently being flown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveState {
    /// Still ahead of the glider's current leg
    Before,
    /// The leg currently being flown
    Current,
    /// Already behind the glider
    After,
}

/// Which scored quantity the reference point feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    ScoredOrigin,
    ScoredDestination,
    TravelledOrigin,
    TravelledDestination,
    RemainingOrigin,
    RemainingDestination,
}

/// Best-scoring reachable point inside a leg's area, owned by the external
/// optimizer.
pub trait SearchMaxSource {
    fn search_max(&self, leg: usize) -> GeoPoint;
}

/// Task-progress tracker supplying each leg's active state.
pub trait ActiveStateSource {
    fn active_state(&self, leg: usize) -> ActiveState;
}

/// Pick the reference point for one query from the two candidates.
///
/// Travelled distances always follow the optimizer's search-maximum point.
/// Scored and remaining distances switch to the pilot's target once the leg
/// is current, giving live feedback on the chosen aim point; the scored
/// destination switches back to the search maximum as soon as the leg is
/// behind.
pub fn reference_point(
    kind: ReferenceKind,
    state: ActiveState,
    target: GeoPoint,
    search_max: GeoPoint,
) -> GeoPoint {
    match kind {
        ReferenceKind::TravelledOrigin | ReferenceKind::TravelledDestination => search_max,
        ReferenceKind::ScoredOrigin
        | ReferenceKind::RemainingOrigin
        | ReferenceKind::RemainingDestination => {
            if state == ActiveState::Before {
                search_max
            } else {
                target
            }
        }
        ReferenceKind::ScoredDestination => {
            if state == ActiveState::Current {
                target
            } else {
                search_max
            }
        }
    }
}

/// Resolve the reference point for `leg` of `task` through the external
/// providers.
///
/// # Panics
/// Panics if `leg` is out of range for the task.
pub fn resolve<A, S>(
    task: &Task,
    leg: usize,
    kind: ReferenceKind,
    states: &A,
    optimizer: &S,
) -> GeoPoint
where
    A: ActiveStateSource + ?Sized,
    S: SearchMaxSource + ?Sized,
{
    reference_point(
        kind,
        states.active_state(leg),
        task.legs[leg].target,
        optimizer.search_max(leg),
    )
}
