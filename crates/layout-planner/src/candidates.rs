//! Composite candidate enumeration.
//!
//! Every group of `k` compatible sources tiles into one grid per
//! factorization of `k`: a group of six offers 1x6, 2x3, 3x2 and 6x1.
//! The planner proposes them all and leaves the choice to the host.

use gridcam_camera_model::{CameraDriver, SourceConfig};

use crate::grouping::{group_compatible, CompatibilityGroup};

/// Enumerate every grid layout a single compatibility group supports.
///
/// For each `rows` that divides the member count, one candidate is emitted
/// with `columns = count / rows`, named `GridCam (rows x columns)`. The
/// candidate inherits the representative's frame rate, wire format and
/// color flag; its width scales by `rows` and its height by `columns`, the
/// convention the capture engine recovers the layout from. Members travel
/// in `children`, in discovery order.
pub fn candidates_for_group(group: &CompatibilityGroup) -> Vec<SourceConfig> {
    let mut candidates = Vec::new();
    if group.is_empty() {
        return candidates;
    }

    let count = group.len() as u32;
    let rep = group.representative();

    for rows in 1..=count {
        if count % rows != 0 {
            continue;
        }
        let cols = count / rows;

        candidates.push(SourceConfig {
            name: format!("GridCam ({rows}x{cols})"),
            driver: CameraDriver::Grid,
            device: String::new(),
            width: rep.width * rows,
            height: rep.height * cols,
            fps: rep.fps,
            format: rep.format,
            color: rep.color,
            children: group.members.clone(),
            ..Default::default()
        });
    }

    candidates
}

/// Plan every grid composite a discovery list supports.
///
/// Fewer than two discovered sources plan nothing. Otherwise the sources
/// are grouped by capture mode and each group contributes its full set of
/// layout candidates, singleton groups included (they yield a 1x1).
pub fn plan_grid_candidates(sources: &[SourceConfig]) -> Vec<SourceConfig> {
    if sources.len() <= 1 {
        return Vec::new();
    }

    let groups = group_compatible(sources);
    let candidates: Vec<SourceConfig> = groups.iter().flat_map(candidates_for_group).collect();

    tracing::debug!(
        sources = sources.len(),
        groups = groups.len(),
        candidates = candidates.len(),
        "planned grid candidates"
    );

    candidates
}
