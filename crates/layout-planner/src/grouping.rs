//! Compatibility grouping.
//!
//! Sources can only tile into one grid when they share a capture mode.
//! Grouping partitions a discovery list into runs of mode-identical
//! configs, preserving discovery order both across groups and within each
//! group's members.

use gridcam_camera_model::SourceConfig;
use serde::{Deserialize, Serialize};

/// A set of sources that share one capture mode.
///
/// The first member is the group's representative: every later member
/// matched it on width, height, frame rate, wire format and driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityGroup {
    /// Member configs, in discovery order.
    pub members: Vec<SourceConfig>,
}

impl CompatibilityGroup {
    /// Start a new group from its first member.
    pub fn new(first: SourceConfig) -> Self {
        CompatibilityGroup {
            members: vec![first],
        }
    }

    /// The config every member was matched against.
    pub fn representative(&self) -> &SourceConfig {
        &self.members[0]
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partition a discovery list into compatibility groups.
///
/// Each config is compared against the representative of every existing
/// group and appended to each one that matches; a config that matches no
/// group starts a new one. Groups appear in the order their representatives
/// were discovered.
pub fn group_compatible(sources: &[SourceConfig]) -> Vec<CompatibilityGroup> {
    let mut groups: Vec<CompatibilityGroup> = Vec::new();

    for source in sources {
        let mut matched = false;
        for group in &mut groups {
            if group.representative().is_compatible_with(source) {
                group.members.push(source.clone());
                matched = true;
            }
        }
        if !matched {
            groups.push(CompatibilityGroup::new(source.clone()));
        }
    }

    groups
}
